// Sidebar view state
pub mod menu;
pub mod sidebar_state;

pub use menu::{MenuState, PointerHit};
pub use sidebar_state::{
    CreditLoadOutcome, DeletionStatus, HistoryState, HistoryView, LoadTickets, SidebarState,
};

use dioxus::prelude::*;

/// Somewhere the sidebar state lives between awaits.
///
/// The component keeps it in a `Signal`; tests share an `Rc<RefCell<_>>`.
/// Borrows never outlive the closure, so no borrow is held across an await.
pub trait StateCell {
    fn mutate<R>(&mut self, f: impl FnOnce(&mut SidebarState) -> R) -> R;
    fn read_with<R>(&self, f: impl FnOnce(&SidebarState) -> R) -> R;
}

impl StateCell for Signal<SidebarState> {
    fn mutate<R>(&mut self, f: impl FnOnce(&mut SidebarState) -> R) -> R {
        f(&mut self.write())
    }

    fn read_with<R>(&self, f: impl FnOnce(&SidebarState) -> R) -> R {
        f(&self.read())
    }
}

impl StateCell for std::rc::Rc<std::cell::RefCell<SidebarState>> {
    fn mutate<R>(&mut self, f: impl FnOnce(&mut SidebarState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read_with<R>(&self, f: impl FnOnce(&SidebarState) -> R) -> R {
        f(&self.borrow())
    }
}
