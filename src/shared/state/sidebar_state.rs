//! View-state store for the sidebar
//!
//! All mutation goes through methods on [`SidebarState`] so the component,
//! the async flows and the tests agree on the transitions. Remote results are
//! applied in two steps: `start_*` hands out a generation number and
//! `finish_*` applies the result only if that generation is still current.

use std::collections::HashMap;

use crate::domain::models::{ChatHistoryItem, CreditState, UserIdentity};
use crate::shared::state::menu::{MenuState, PointerHit};

/// Lifecycle of a single history row with respect to deletion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletionStatus {
    #[default]
    Idle,
    PendingDelete,
    Deleting,
}

/// Chat history list with its loading sub-states
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub items: Vec<ChatHistoryItem>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What the history section should render, in precedence order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Items(&'a [ChatHistoryItem]),
}

impl HistoryState {
    pub fn view(&self) -> HistoryView<'_> {
        if self.loading {
            HistoryView::Loading
        } else if let Some(error) = &self.error {
            HistoryView::Error(error)
        } else if self.items.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Items(&self.items)
        }
    }
}

/// Generations handed out when loads start; `None` means no request is needed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTickets {
    pub history: Option<u64>,
    pub credits: Option<u64>,
}

/// Result of the credit summary flow
#[derive(Debug, Clone, PartialEq)]
pub struct CreditLoadOutcome {
    pub user: Option<UserIdentity>,
    pub credits: CreditState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    pub workspace_open: bool,
    pub history_open: bool,
    pub profile_menu: MenuState,
    pub settings_open: bool,
    pub history: HistoryState,
    pub credits: Option<CreditState>,
    pub user: Option<UserIdentity>,
    /// Target of the delete confirmation modal
    pub pending_delete: Option<ChatHistoryItem>,
    /// Last rename/delete failure shown to the user
    pub notice: Option<String>,
    deletions: HashMap<String, DeletionStatus>,
    history_generation: u64,
    credits_generation: u64,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            workspace_open: true,
            history_open: true,
            profile_menu: MenuState::Closed,
            settings_open: false,
            history: HistoryState::default(),
            credits: None,
            user: None,
            pending_delete: None,
            notice: None,
            deletions: HashMap::new(),
            history_generation: 0,
            credits_generation: 0,
        }
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------
    // Section toggles
    // ------------------------------------------------------------

    pub fn toggle_workspace(&mut self) {
        self.workspace_open = !self.workspace_open;
    }

    pub fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
    }

    // ------------------------------------------------------------
    // Profile menu & settings
    // ------------------------------------------------------------

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu = self.profile_menu.toggled();
    }

    pub fn close_profile_menu(&mut self) {
        self.profile_menu = MenuState::Closed;
    }

    pub fn handle_pointer_down(&mut self, hit: PointerHit) {
        self.profile_menu = self.profile_menu.after_pointer_down(hit);
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
        self.profile_menu = MenuState::Closed;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    // ------------------------------------------------------------
    // Loads
    // ------------------------------------------------------------

    /// Begin history and credit loads for the given authentication state.
    ///
    /// When signed out, the list, the loading flag and all credit fields are
    /// cleared right away and any in-flight result becomes stale.
    pub fn start_loads(&mut self, authenticated: bool) -> LoadTickets {
        LoadTickets {
            history: self.start_history_load(authenticated),
            credits: self.start_credit_load(authenticated),
        }
    }

    pub fn start_history_load(&mut self, authenticated: bool) -> Option<u64> {
        self.history_generation += 1;
        if !authenticated {
            self.history.items.clear();
            self.history.loading = false;
            self.history.error = None;
            return None;
        }
        self.history.loading = true;
        self.history.error = None;
        Some(self.history_generation)
    }

    /// Apply a history response. Returns `false` when it was stale.
    pub fn finish_history_load(
        &mut self,
        generation: u64,
        result: Result<Vec<ChatHistoryItem>, String>,
    ) -> bool {
        if generation != self.history_generation {
            return false;
        }
        match result {
            Ok(items) => {
                self.history.items = items;
                self.history.error = None;
            }
            Err(error) => {
                self.history.items.clear();
                self.history.error = Some(error);
            }
        }
        self.history.loading = false;
        true
    }

    pub fn start_credit_load(&mut self, authenticated: bool) -> Option<u64> {
        self.credits_generation += 1;
        if !authenticated {
            self.credits = None;
            self.user = None;
            return None;
        }
        Some(self.credits_generation)
    }

    /// Apply a credit summary. Returns `false` when it was stale.
    pub fn finish_credit_load(&mut self, generation: u64, outcome: CreditLoadOutcome) -> bool {
        if generation != self.credits_generation {
            return false;
        }
        self.credits = Some(outcome.credits);
        self.user = outcome.user;
        true
    }

    // ------------------------------------------------------------
    // Rename
    // ------------------------------------------------------------

    /// Replace the title of the row with `id`. Returns whether a row matched.
    pub fn apply_rename(&mut self, id: &str, title: &str) -> bool {
        match self.history.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.title = title.to_string();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------

    pub fn deletion_status(&self, id: &str) -> DeletionStatus {
        self.deletions.get(id).copied().unwrap_or_default()
    }

    /// True while any delete call is in flight
    pub fn is_deleting(&self) -> bool {
        self.deletions
            .values()
            .any(|status| *status == DeletionStatus::Deleting)
    }

    /// True when the modal's own target already has a delete call running
    pub fn pending_delete_in_flight(&self) -> bool {
        self.pending_delete
            .as_ref()
            .is_some_and(|item| self.deletion_status(&item.id) == DeletionStatus::Deleting)
    }

    pub fn delete_modal_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Open the confirmation modal for `item`. Rows already deleting are ignored.
    pub fn request_delete(&mut self, item: &ChatHistoryItem) {
        if self.deletion_status(&item.id) == DeletionStatus::Deleting {
            return;
        }
        self.clear_pending_delete();
        self.deletions
            .insert(item.id.clone(), DeletionStatus::PendingDelete);
        self.pending_delete = Some(item.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.clear_pending_delete();
    }

    /// Close the modal and mark its target as deleting; returns the target.
    pub fn confirm_delete(&mut self) -> Option<ChatHistoryItem> {
        let item = self.pending_delete.take()?;
        self.deletions
            .insert(item.id.clone(), DeletionStatus::Deleting);
        Some(item)
    }

    /// Apply a delete response. Returns `true` when the row was removed.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), String>) -> bool {
        self.deletions.remove(id);
        if self
            .pending_delete
            .as_ref()
            .is_some_and(|pending| pending.id == id)
        {
            self.pending_delete = None;
        }
        match result {
            Ok(()) => {
                let before = self.history.items.len();
                self.history.items.retain(|item| item.id != id);
                self.history.items.len() != before
            }
            Err(_) => {
                let title = self.title_of(id).unwrap_or("this chat").to_string();
                self.notice = Some(format!("Couldn't delete \"{}\". Please try again.", title));
                false
            }
        }
    }

    // ------------------------------------------------------------
    // Notices
    // ------------------------------------------------------------

    pub fn notify_rename_failed(&mut self, id: &str) {
        let title = self.title_of(id).unwrap_or("this chat").to_string();
        self.notice = Some(format!("Couldn't rename \"{}\". Please try again.", title));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn title_of(&self, id: &str) -> Option<&str> {
        self.history
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.title.as_str())
    }

    fn clear_pending_delete(&mut self) {
        if let Some(previous) = self.pending_delete.take() {
            if self.deletion_status(&previous.id) == DeletionStatus::PendingDelete {
                self.deletions.remove(&previous.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ChatHistoryItem> {
        vec![
            ChatHistoryItem::new("a", "Alpha"),
            ChatHistoryItem::new("b", "Beta"),
            ChatHistoryItem::new("c", "Gamma"),
        ]
    }

    fn loaded() -> SidebarState {
        let mut state = SidebarState::new();
        let ticket = state.start_history_load(true).unwrap();
        assert!(state.finish_history_load(ticket, Ok(items())));
        state
    }

    #[test]
    fn test_defaults() {
        let state = SidebarState::new();
        assert!(state.workspace_open);
        assert!(state.history_open);
        assert!(!state.profile_menu.is_open());
        assert!(!state.settings_open);
        assert!(!state.delete_modal_open());
        assert_eq!(state.credits, None);
    }

    #[test]
    fn test_section_toggles_are_independent() {
        let mut state = SidebarState::new();
        state.toggle_history();
        assert!(state.workspace_open);
        assert!(!state.history_open);
        state.toggle_workspace();
        state.toggle_history();
        assert!(!state.workspace_open);
        assert!(state.history_open);
    }

    #[test]
    fn test_history_view_precedence() {
        let mut state = SidebarState::new();
        state.history.loading = true;
        state.history.error = Some("boom".to_string());
        state.history.items = items();
        assert_eq!(state.history.view(), HistoryView::Loading);

        state.history.loading = false;
        assert_eq!(state.history.view(), HistoryView::Error("boom"));

        state.history.error = None;
        assert!(matches!(state.history.view(), HistoryView::Items(list) if list.len() == 3));

        state.history.items.clear();
        assert_eq!(state.history.view(), HistoryView::Empty);
    }

    #[test]
    fn test_history_load_sets_loading_and_clears_error() {
        let mut state = SidebarState::new();
        state.history.error = Some("old".to_string());
        let ticket = state.start_history_load(true);
        assert!(ticket.is_some());
        assert!(state.history.loading);
        assert_eq!(state.history.error, None);
    }

    #[test]
    fn test_history_load_failure_sets_error() {
        let mut state = loaded();
        let ticket = state.start_history_load(true).unwrap();
        assert!(state.finish_history_load(ticket, Err("offline".to_string())));
        assert!(!state.history.loading);
        assert_eq!(state.history.view(), HistoryView::Error("offline"));
        assert!(state.history.items.is_empty());
    }

    #[test]
    fn test_signing_out_clears_everything_synchronously() {
        let mut state = loaded();
        let credit_ticket = state.start_credit_load(true).unwrap();
        state.finish_credit_load(
            credit_ticket,
            CreditLoadOutcome {
                user: None,
                credits: crate::domain::models::derive_credit_state(100, 20, 30, 5),
            },
        );
        // A reload is in flight when the user signs out
        let in_flight = state.start_loads(true);

        let tickets = state.start_loads(false);
        assert_eq!(tickets, LoadTickets::default());
        assert!(state.history.items.is_empty());
        assert!(!state.history.loading);
        assert_eq!(state.credits, None);

        // Responses for the earlier loads no longer apply
        assert!(!state.finish_history_load(in_flight.history.unwrap(), Ok(items())));
        assert!(!state.finish_credit_load(
            in_flight.credits.unwrap(),
            CreditLoadOutcome { user: None, credits: CreditState::zeroed() },
        ));
        assert!(state.history.items.is_empty());
        assert_eq!(state.credits, None);
    }

    #[test]
    fn test_newer_history_load_wins() {
        let mut state = SidebarState::new();
        let first = state.start_history_load(true).unwrap();
        let second = state.start_history_load(true).unwrap();
        assert!(state.finish_history_load(second, Ok(vec![ChatHistoryItem::new("z", "Zed")])));
        assert!(!state.finish_history_load(first, Ok(items())));
        assert_eq!(state.history.items.len(), 1);
    }

    #[test]
    fn test_rename_updates_only_matching_row() {
        let mut state = loaded();
        assert!(state.apply_rename("b", "Foo"));
        let titles: Vec<_> = state.history.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Foo", "Gamma"]);
        assert!(!state.apply_rename("missing", "Bar"));
    }

    #[test]
    fn test_delete_flow_success() {
        let mut state = loaded();
        let target = state.history.items[1].clone();

        state.request_delete(&target);
        assert!(state.delete_modal_open());
        assert_eq!(state.deletion_status("b"), DeletionStatus::PendingDelete);

        let confirmed = state.confirm_delete().unwrap();
        assert_eq!(confirmed.id, "b");
        assert!(!state.delete_modal_open());
        assert!(state.is_deleting());
        assert_eq!(state.deletion_status("b"), DeletionStatus::Deleting);

        assert!(state.finish_delete("b", Ok(())));
        let ids: Vec<_> = state.history.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!state.is_deleting());
        assert_eq!(state.deletion_status("b"), DeletionStatus::Idle);
    }

    #[test]
    fn test_delete_failure_keeps_list_and_sets_notice() {
        let mut state = loaded();
        let target = state.history.items[0].clone();
        state.request_delete(&target);
        state.confirm_delete();

        assert!(!state.finish_delete("a", Err("server down".to_string())));
        assert_eq!(state.history.items, items());
        assert!(!state.is_deleting());
        assert!(state.notice.as_deref().unwrap().contains("Alpha"));

        state.dismiss_notice();
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_cancel_delete_resets_status() {
        let mut state = loaded();
        let target = state.history.items[2].clone();
        state.request_delete(&target);
        state.cancel_delete();
        assert!(!state.delete_modal_open());
        assert_eq!(state.deletion_status("c"), DeletionStatus::Idle);
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn test_two_deletes_tracked_independently() {
        let mut state = loaded();
        let first = state.history.items[0].clone();
        let second = state.history.items[1].clone();

        state.request_delete(&first);
        state.confirm_delete();
        state.request_delete(&second);
        state.confirm_delete();

        assert_eq!(state.deletion_status("a"), DeletionStatus::Deleting);
        assert_eq!(state.deletion_status("b"), DeletionStatus::Deleting);
        assert_eq!(state.deletion_status("c"), DeletionStatus::Idle);

        state.finish_delete("a", Ok(()));
        assert!(state.is_deleting());
        assert_eq!(state.deletion_status("b"), DeletionStatus::Deleting);

        state.finish_delete("b", Ok(()));
        assert!(!state.is_deleting());
        assert_eq!(state.history.items, vec![ChatHistoryItem::new("c", "Gamma")]);
    }

    #[test]
    fn test_request_delete_ignores_row_already_deleting() {
        let mut state = loaded();
        let target = state.history.items[0].clone();
        state.request_delete(&target);
        state.confirm_delete();
        state.request_delete(&target);
        assert!(!state.delete_modal_open());
        assert_eq!(state.deletion_status("a"), DeletionStatus::Deleting);
    }

    #[test]
    fn test_switching_delete_target_releases_previous() {
        let mut state = loaded();
        let first = state.history.items[0].clone();
        let second = state.history.items[1].clone();
        state.request_delete(&first);
        state.request_delete(&second);
        assert_eq!(state.deletion_status("a"), DeletionStatus::Idle);
        assert_eq!(state.pending_delete.as_ref().map(|i| i.id.as_str()), Some("b"));
    }

    #[test]
    fn test_settings_closes_menu() {
        let mut state = SidebarState::new();
        state.toggle_profile_menu();
        assert!(state.profile_menu.is_open());
        state.open_settings();
        assert!(state.settings_open);
        assert!(!state.profile_menu.is_open());
        state.close_settings();
        assert!(!state.settings_open);
    }

    #[test]
    fn test_pointer_down_outside_closes_menu() {
        let mut state = SidebarState::new();
        state.toggle_profile_menu();
        state.handle_pointer_down(PointerHit { inside_panel: true, inside_trigger: false });
        assert!(state.profile_menu.is_open());
        state.handle_pointer_down(PointerHit::default());
        assert!(!state.profile_menu.is_open());
    }

    #[test]
    fn test_modal_flag_ignores_other_rows_in_flight() {
        let mut state = loaded();
        let first = state.history.items[0].clone();
        let second = state.history.items[1].clone();

        state.request_delete(&first);
        state.confirm_delete();
        state.request_delete(&second);

        assert!(state.delete_modal_open());
        assert!(state.is_deleting());
        assert_eq!(state.deletion_status("b"), DeletionStatus::PendingDelete);
        assert!(!state.pending_delete_in_flight());
    }

    #[test]
    fn test_failed_identity_clears_previous_user() {
        let mut state = SidebarState::new();
        let ticket = state.start_credit_load(true).unwrap();
        state.finish_credit_load(
            ticket,
            CreditLoadOutcome {
                user: Some(UserIdentity {
                    id: "u1".to_string(),
                    email: "ada@example.com".to_string(),
                    display_name: "Ada".to_string(),
                }),
                credits: crate::domain::models::derive_credit_state(100, 20, 30, 5),
            },
        );
        assert!(state.user.is_some());

        let ticket = state.start_credit_load(true).unwrap();
        assert!(state.finish_credit_load(
            ticket,
            CreditLoadOutcome { user: None, credits: CreditState::zeroed() },
        ));
        assert_eq!(state.user, None);
        assert_eq!(state.credits, Some(CreditState::zeroed()));
    }
}
