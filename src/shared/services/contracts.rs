//! Collaborators the sidebar talks to
//!
//! The browser build implements these with server functions
//! (see [`super::backend`]); tests implement them in memory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::app::routes::Route;
use crate::domain::models::{ChatHistoryItem, CreditProfile, UsageRecord, UserIdentity};
use crate::shared::errors::Result;

#[async_trait(?Send)]
pub trait AuthService {
    async fn current_user(&self) -> Result<UserIdentity>;
    async fn sign_out(&self) -> Result<()>;
}

#[async_trait(?Send)]
pub trait CreditStore {
    async fn credit_profile(&self, user_id: &str) -> Result<CreditProfile>;
    async fn usage_since(&self, user_id: &str, since: DateTime<Utc>) -> Result<Vec<UsageRecord>>;
}

#[async_trait(?Send)]
pub trait ChatHistoryService {
    /// Chats for the signed-in user, most recently updated first
    async fn list_chats(&self) -> Result<Vec<ChatHistoryItem>>;
    async fn rename_chat(&self, id: &str, title: &str) -> Result<()>;
    async fn delete_chat(&self, id: &str) -> Result<()>;
}

/// Everything the sidebar flows need from the backend
pub trait SidebarBackend: AuthService + CreditStore + ChatHistoryService {}

impl<T: AuthService + CreditStore + ChatHistoryService> SidebarBackend for T {}

pub trait Navigation {
    fn current_route(&self) -> Route;
    fn push(&mut self, route: Route);
    /// Re-fetch server-derived data for the current route
    fn refresh(&mut self);
}
