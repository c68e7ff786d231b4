//! Async flows behind the sidebar's effects and click handlers
//!
//! Each flow reads what it needs from the state cell, awaits the backend,
//! then applies the result in a single mutation.

use chrono::{DateTime, Local};

use crate::app::routes::Route;
use crate::domain::models::{
    CreditState, derive_credit_state, normalize_title_input, renewal_days_remaining,
    usage_window_start,
};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::contracts::{
    AuthService, ChatHistoryService, CreditStore, Navigation, SidebarBackend,
};
use crate::shared::state::{CreditLoadOutcome, DeletionStatus, LoadTickets, StateCell};

/// Message shown in place of the list when the history can't be fetched
pub const HISTORY_ERROR_MESSAGE: &str = "Failed to load chat history";

/// Start both loads for the current authentication state and run them concurrently.
pub async fn refresh_sidebar<S, B>(state: &S, backend: &B, authenticated: bool, now: DateTime<Local>)
where
    S: StateCell + Clone,
    B: SidebarBackend + ?Sized,
{
    let tickets = state.clone().mutate(|s| s.start_loads(authenticated));
    run_loads(state, backend, tickets, now).await;
}

/// Run the loads handed out by [`SidebarState::start_loads`](crate::shared::state::SidebarState::start_loads).
pub async fn run_loads<S, B>(state: &S, backend: &B, tickets: LoadTickets, now: DateTime<Local>)
where
    S: StateCell + Clone,
    B: SidebarBackend + ?Sized,
{
    let mut history_state = state.clone();
    let mut credit_state = state.clone();

    let history = async {
        if let Some(generation) = tickets.history {
            load_history(&mut history_state, backend, generation).await;
        }
    };
    let credits = async {
        if let Some(generation) = tickets.credits {
            load_credits(&mut credit_state, backend, generation, now).await;
        }
    };

    futures::join!(history, credits);
}

pub async fn load_history<S, H>(state: &mut S, service: &H, generation: u64)
where
    S: StateCell,
    H: ChatHistoryService + ?Sized,
{
    let result = match service.list_chats().await {
        Ok(items) => {
            logging::log_history_loaded(items.len());
            Ok(items)
        }
        Err(e) => {
            logging::log_history_error(&e.to_string());
            Err(HISTORY_ERROR_MESSAGE.to_string())
        }
    };

    if !state.mutate(|s| s.finish_history_load(generation, result)) {
        logging::log_stale_result(LogOperation::HistoryLoad, generation);
    }
}

pub async fn load_credits<S, B>(state: &mut S, backend: &B, generation: u64, now: DateTime<Local>)
where
    S: StateCell,
    B: AuthService + CreditStore + ?Sized,
{
    let outcome = fetch_credit_summary(backend, now).await;
    if !state.mutate(|s| s.finish_credit_load(generation, outcome)) {
        logging::log_stale_result(LogOperation::CreditLoad, generation);
    }
}

/// Resolve the user, read balances and this period's usage, derive the summary.
///
/// Any failure yields zeroed balances rather than an error.
pub async fn fetch_credit_summary<B>(backend: &B, now: DateTime<Local>) -> CreditLoadOutcome
where
    B: AuthService + CreditStore + ?Sized,
{
    let user = match backend.current_user().await {
        Ok(user) => user,
        Err(e) => {
            logging::log_credits_error("identity", &e.to_string());
            return CreditLoadOutcome {
                user: None,
                credits: CreditState::zeroed(),
            };
        }
    };

    let profile = match backend.credit_profile(&user.id).await {
        Ok(profile) => profile,
        Err(e) => {
            logging::log_credits_error("profile", &e.to_string());
            return CreditLoadOutcome {
                user: Some(user),
                credits: CreditState::zeroed(),
            };
        }
    };

    let used: i64 = match backend.usage_since(&user.id, usage_window_start(now)).await {
        Ok(records) => records.iter().map(|r| r.spent).sum(),
        Err(e) => {
            logging::log_credits_error("usage", &e.to_string());
            return CreditLoadOutcome {
                user: Some(user),
                credits: CreditState::zeroed(),
            };
        }
    };

    let credits = derive_credit_state(
        profile.monthly_plan_credits,
        profile.extra_credits,
        used,
        renewal_days_remaining(now.naive_local()),
    );
    logging::log_credits_loaded(credits.total_remaining(), credits.used_in_period);

    CreditLoadOutcome {
        user: Some(user),
        credits,
    }
}

/// Rename a chat from raw prompt input. Returns whether the title changed.
pub async fn rename_chat<S, H>(state: &mut S, service: &H, id: &str, input: Option<String>) -> bool
where
    S: StateCell,
    H: ChatHistoryService + ?Sized,
{
    let Some(title) = normalize_title_input(input) else {
        return false;
    };

    match service.rename_chat(id, &title).await {
        Ok(()) => {
            logging::log_rename_success(id);
            state.mutate(|s| s.apply_rename(id, &title))
        }
        Err(e) => {
            logging::log_rename_error(id, &e.to_string());
            state.mutate(|s| s.notify_rename_failed(id));
            false
        }
    }
}

/// Delete the chat targeted by the confirmation modal.
///
/// Returns `None` when nothing was pending, otherwise whether the row was removed.
pub async fn confirm_delete<S, H, N>(state: &mut S, service: &H, nav: &mut N) -> Option<bool>
where
    S: StateCell,
    H: ChatHistoryService + ?Sized,
    N: Navigation + ?Sized,
{
    let item = state.mutate(|s| s.confirm_delete())?;

    let result = service.delete_chat(&item.id).await;
    let succeeded = result.is_ok();
    match &result {
        Ok(()) => logging::log_delete_success(&item.id),
        Err(e) => logging::log_delete_error(&item.id, &e.to_string()),
    }

    let removed = state.mutate(|s| s.finish_delete(&item.id, result.map_err(|e| e.to_string())));

    if succeeded && nav.current_route() == (Route::Chat { id: item.id.clone() }) {
        nav.push(Route::Home {});
    }

    Some(removed)
}

/// Open a chat unless its row is being deleted. Returns whether it navigated.
pub fn open_chat<S, N>(state: &S, nav: &mut N, id: &str) -> bool
where
    S: StateCell,
    N: Navigation + ?Sized,
{
    if state.read_with(|s| s.deletion_status(id)) == DeletionStatus::Deleting {
        return false;
    }
    nav.push(Route::Chat { id: id.to_string() });
    true
}

/// Sign out, then land on the sign-in page with fresh route data.
pub async fn sign_out<S, A, N>(state: &mut S, auth: &A, nav: &mut N) -> bool
where
    S: StateCell,
    A: AuthService + ?Sized,
    N: Navigation + ?Sized,
{
    state.mutate(|s| s.close_profile_menu());
    match auth.sign_out().await {
        Ok(()) => {
            logging::log_sign_out(None);
            nav.push(Route::SignIn {});
            nav.refresh();
            true
        }
        Err(e) => {
            logging::log_sign_out(Some(&e.to_string()));
            state.mutate(|s| s.notice = Some("Couldn't sign out. Please try again.".to_string()));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use chrono::{Datelike, Timelike, Utc};

    use crate::domain::models::{ChatHistoryItem, CreditProfile, UsageRecord, UserIdentity};
    use crate::shared::errors::{Result, SidebarError};
    use crate::shared::state::SidebarState;

    #[derive(Default)]
    struct FakeBackend {
        chats: RefCell<Vec<ChatHistoryItem>>,
        fail_list: bool,
        fail_rename: bool,
        fail_delete: bool,
        fail_identity: bool,
        fail_sign_out: bool,
        profile: CreditProfile,
        usage: Vec<UsageRecord>,
        renames: RefCell<Vec<(String, String)>>,
        deletes: RefCell<Vec<String>>,
        usage_since: RefCell<Option<DateTime<Utc>>>,
        signed_out: RefCell<bool>,
    }

    impl FakeBackend {
        fn with_chats() -> Self {
            Self {
                chats: RefCell::new(vec![
                    ChatHistoryItem::new("a", "Alpha"),
                    ChatHistoryItem::new("b", "Beta"),
                    ChatHistoryItem::new("c", "Gamma"),
                ]),
                profile: CreditProfile {
                    extra_credits: 20,
                    monthly_plan_credits: 100,
                },
                usage: vec![
                    UsageRecord { spent: 10, created_at: Utc::now() },
                    UsageRecord { spent: 20, created_at: Utc::now() },
                ],
                ..Default::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthService for FakeBackend {
        async fn current_user(&self) -> Result<UserIdentity> {
            if self.fail_identity {
                return Err(SidebarError::Unauthenticated);
            }
            Ok(UserIdentity {
                id: "user-1".to_string(),
                email: "ada@example.com".to_string(),
                display_name: "Ada".to_string(),
            })
        }

        async fn sign_out(&self) -> Result<()> {
            if self.fail_sign_out {
                return Err(SidebarError::Remote("offline".to_string()));
            }
            *self.signed_out.borrow_mut() = true;
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl CreditStore for FakeBackend {
        async fn credit_profile(&self, _user_id: &str) -> Result<CreditProfile> {
            Ok(self.profile)
        }

        async fn usage_since(&self, _user_id: &str, since: DateTime<Utc>) -> Result<Vec<UsageRecord>> {
            *self.usage_since.borrow_mut() = Some(since);
            Ok(self.usage.clone())
        }
    }

    #[async_trait(?Send)]
    impl ChatHistoryService for FakeBackend {
        async fn list_chats(&self) -> Result<Vec<ChatHistoryItem>> {
            if self.fail_list {
                return Err(SidebarError::Remote("500".to_string()));
            }
            Ok(self.chats.borrow().clone())
        }

        async fn rename_chat(&self, id: &str, title: &str) -> Result<()> {
            self.renames.borrow_mut().push((id.to_string(), title.to_string()));
            if self.fail_rename {
                return Err(SidebarError::Remote("500".to_string()));
            }
            Ok(())
        }

        async fn delete_chat(&self, id: &str) -> Result<()> {
            self.deletes.borrow_mut().push(id.to_string());
            if self.fail_delete {
                return Err(SidebarError::ChatNotFound(id.to_string()));
            }
            self.chats.borrow_mut().retain(|c| c.id != id);
            Ok(())
        }
    }

    struct FakeNav {
        route: Route,
        refreshes: usize,
    }

    impl FakeNav {
        fn at(route: Route) -> Self {
            Self { route, refreshes: 0 }
        }
    }

    impl Navigation for FakeNav {
        fn current_route(&self) -> Route {
            self.route.clone()
        }

        fn push(&mut self, route: Route) {
            self.route = route;
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    fn shared_state() -> Rc<RefCell<SidebarState>> {
        Rc::new(RefCell::new(SidebarState::new()))
    }

    async fn loaded(backend: &FakeBackend) -> Rc<RefCell<SidebarState>> {
        let state = shared_state();
        refresh_sidebar(&state, backend, true, Local::now()).await;
        state
    }

    fn ids(state: &Rc<RefCell<SidebarState>>) -> Vec<String> {
        state.borrow().history.items.iter().map(|i| i.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_refresh_loads_history_and_credits() {
        let backend = FakeBackend::with_chats();
        let state = loaded(&backend).await;

        let s = state.borrow();
        assert_eq!(s.history.items.len(), 3);
        assert!(!s.history.loading);
        let credits = s.credits.unwrap();
        assert_eq!(credits.plan_credits_remaining, 70);
        assert_eq!(credits.extra_credits_remaining, 20);
        assert_eq!(credits.total_remaining(), 90);
        assert!(credits.renewal_days_remaining.unwrap() >= 1);
        assert_eq!(s.user.as_ref().map(|u| u.display_name.as_str()), Some("Ada"));
    }

    #[tokio::test]
    async fn test_usage_is_read_from_start_of_month() {
        let backend = FakeBackend::with_chats();
        let _state = loaded(&backend).await;

        let since = backend.usage_since.borrow().unwrap().with_timezone(&Local);
        assert_eq!(since.day(), 1);
        assert_eq!(since.hour(), 0);
        assert_eq!(since.minute(), 0);
    }

    #[tokio::test]
    async fn test_refresh_signed_out_makes_no_requests() {
        let backend = FakeBackend::with_chats();
        let state = loaded(&backend).await;

        refresh_sidebar(&state, &backend, false, Local::now()).await;
        let s = state.borrow();
        assert!(s.history.items.is_empty());
        assert!(!s.history.loading);
        assert_eq!(s.credits, None);
        assert_eq!(s.user, None);
    }

    #[tokio::test]
    async fn test_history_failure_shows_error() {
        let backend = FakeBackend {
            fail_list: true,
            ..FakeBackend::with_chats()
        };
        let state = loaded(&backend).await;
        let s = state.borrow();
        assert_eq!(s.history.error.as_deref(), Some(HISTORY_ERROR_MESSAGE));
        assert!(!s.history.loading);
    }

    #[tokio::test]
    async fn test_identity_failure_zeroes_credits() {
        let backend = FakeBackend {
            fail_identity: true,
            ..FakeBackend::with_chats()
        };
        let outcome = fetch_credit_summary(&backend, Local::now()).await;
        assert_eq!(outcome.user, None);
        assert_eq!(outcome.credits, CreditState::zeroed());
        assert!(backend.usage_since.borrow().is_none());
    }

    #[tokio::test]
    async fn test_overspend_draws_from_extra() {
        let backend = FakeBackend {
            usage: vec![UsageRecord { spent: 130, created_at: Utc::now() }],
            profile: CreditProfile {
                extra_credits: 40,
                monthly_plan_credits: 100,
            },
            ..FakeBackend::with_chats()
        };
        let outcome = fetch_credit_summary(&backend, Local::now()).await;
        assert_eq!(outcome.credits.plan_credits_remaining, 0);
        assert_eq!(outcome.credits.extra_credits_remaining, 10);
        assert_eq!(outcome.credits.total_remaining(), 10);
    }

    #[tokio::test]
    async fn test_rename_blank_input_makes_no_call() {
        let backend = FakeBackend::with_chats();
        let mut state = loaded(&backend).await;

        assert!(!rename_chat(&mut state, &backend, "b", Some("   ".to_string())).await);
        assert!(!rename_chat(&mut state, &backend, "b", None).await);
        assert!(backend.renames.borrow().is_empty());
        assert_eq!(state.borrow().history.items[1].title, "Beta");
    }

    #[tokio::test]
    async fn test_rename_updates_matching_row() {
        let backend = FakeBackend::with_chats();
        let mut state = loaded(&backend).await;

        assert!(rename_chat(&mut state, &backend, "b", Some(" Foo ".to_string())).await);
        assert_eq!(
            *backend.renames.borrow(),
            vec![("b".to_string(), "Foo".to_string())]
        );
        let titles: Vec<_> = state
            .borrow()
            .history
            .items
            .iter()
            .map(|i| i.title.clone())
            .collect();
        assert_eq!(titles, vec!["Alpha", "Foo", "Gamma"]);
    }

    #[tokio::test]
    async fn test_rename_failure_leaves_title() {
        let backend = FakeBackend {
            fail_rename: true,
            ..FakeBackend::with_chats()
        };
        let mut state = loaded(&backend).await;

        assert!(!rename_chat(&mut state, &backend, "a", Some("Foo".to_string())).await);
        let s = state.borrow();
        assert_eq!(s.history.items[0].title, "Alpha");
        assert!(s.notice.is_some());
    }

    #[tokio::test]
    async fn test_delete_active_chat_returns_home() {
        let backend = FakeBackend::with_chats();
        let mut state = loaded(&backend).await;
        let mut nav = FakeNav::at(Route::Chat { id: "b".to_string() });

        let target = state.borrow().history.items[1].clone();
        state.mutate(|s| s.request_delete(&target));
        assert_eq!(confirm_delete(&mut state, &backend, &mut nav).await, Some(true));

        assert_eq!(ids(&state), vec!["a", "c"]);
        assert_eq!(nav.route, Route::Home {});
        assert!(!state.borrow().is_deleting());
        assert!(state.borrow().pending_delete.is_none());
    }

    #[tokio::test]
    async fn test_delete_other_chat_keeps_route() {
        let backend = FakeBackend::with_chats();
        let mut state = loaded(&backend).await;
        let mut nav = FakeNav::at(Route::Chat { id: "a".to_string() });

        let target = state.borrow().history.items[2].clone();
        state.mutate(|s| s.request_delete(&target));
        confirm_delete(&mut state, &backend, &mut nav).await;

        assert_eq!(ids(&state), vec!["a", "b"]);
        assert_eq!(nav.route, Route::Chat { id: "a".to_string() });
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list_and_route() {
        let backend = FakeBackend {
            fail_delete: true,
            ..FakeBackend::with_chats()
        };
        let mut state = loaded(&backend).await;
        let mut nav = FakeNav::at(Route::Chat { id: "a".to_string() });

        let target = state.borrow().history.items[0].clone();
        state.mutate(|s| s.request_delete(&target));
        assert_eq!(confirm_delete(&mut state, &backend, &mut nav).await, Some(false));

        assert_eq!(ids(&state), vec!["a", "b", "c"]);
        assert_eq!(nav.route, Route::Chat { id: "a".to_string() });
        assert!(!state.borrow().is_deleting());
    }

    #[tokio::test]
    async fn test_confirm_without_pending_does_nothing() {
        let backend = FakeBackend::with_chats();
        let mut state = loaded(&backend).await;
        let mut nav = FakeNav::at(Route::Home {});
        assert_eq!(confirm_delete(&mut state, &backend, &mut nav).await, None);
        assert!(backend.deletes.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_open_chat_blocked_while_deleting() {
        let backend = FakeBackend::with_chats();
        let mut state = loaded(&backend).await;
        let mut nav = FakeNav::at(Route::Home {});

        let target = state.borrow().history.items[0].clone();
        state.mutate(|s| {
            s.request_delete(&target);
            s.confirm_delete();
        });

        assert!(!open_chat(&state, &mut nav, "a"));
        assert_eq!(nav.route, Route::Home {});
        assert!(open_chat(&state, &mut nav, "b"));
        assert_eq!(nav.route, Route::Chat { id: "b".to_string() });
    }

    #[tokio::test]
    async fn test_sign_out_navigates_and_refreshes() {
        let backend = FakeBackend::with_chats();
        let mut state = loaded(&backend).await;
        let mut nav = FakeNav::at(Route::Home {});
        state.mutate(|s| s.toggle_profile_menu());

        assert!(sign_out(&mut state, &backend, &mut nav).await);
        assert!(*backend.signed_out.borrow());
        assert_eq!(nav.route, Route::SignIn {});
        assert_eq!(nav.refreshes, 1);
        assert!(!state.borrow().profile_menu.is_open());
    }

    #[tokio::test]
    async fn test_sign_out_failure_stays_put() {
        let backend = FakeBackend {
            fail_sign_out: true,
            ..FakeBackend::with_chats()
        };
        let mut state = loaded(&backend).await;
        let mut nav = FakeNav::at(Route::Home {});

        assert!(!sign_out(&mut state, &backend, &mut nav).await);
        assert_eq!(nav.route, Route::Home {});
        assert_eq!(nav.refreshes, 0);
        assert!(state.borrow().notice.is_some());
    }
}
