/// Profile menu visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after a global mouse-down while the menu may be open.
    pub fn after_pointer_down(self, hit: PointerHit) -> Self {
        if hit.is_outside() {
            MenuState::Closed
        } else {
            self
        }
    }
}

/// Where a document-level mouse-down landed relative to the menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerHit {
    pub inside_panel: bool,
    pub inside_trigger: bool,
}

impl PointerHit {
    pub fn is_outside(&self) -> bool {
        !self.inside_panel && !self.inside_trigger
    }
}
