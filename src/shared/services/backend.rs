//! Sidebar collaborators implemented over the server functions

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::models::{ChatHistoryItem, CreditProfile, UsageRecord, UserIdentity};
use crate::server_fns;
use crate::shared::errors::Result;
use crate::shared::services::contracts::{AuthService, ChatHistoryService, CreditStore};

/// Backend used by the running app; stateless, so it's cheap to create per call
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerBackend;

#[async_trait(?Send)]
impl AuthService for ServerBackend {
    async fn current_user(&self) -> Result<UserIdentity> {
        Ok(server_fns::get_current_user().await?)
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(server_fns::sign_out().await?)
    }
}

#[async_trait(?Send)]
impl CreditStore for ServerBackend {
    async fn credit_profile(&self, user_id: &str) -> Result<CreditProfile> {
        Ok(server_fns::get_credit_profile(user_id.to_string()).await?)
    }

    async fn usage_since(&self, user_id: &str, since: DateTime<Utc>) -> Result<Vec<UsageRecord>> {
        Ok(server_fns::get_usage_since(user_id.to_string(), since).await?)
    }
}

#[async_trait(?Send)]
impl ChatHistoryService for ServerBackend {
    async fn list_chats(&self) -> Result<Vec<ChatHistoryItem>> {
        Ok(server_fns::list_chats().await?)
    }

    async fn rename_chat(&self, id: &str, title: &str) -> Result<()> {
        Ok(server_fns::rename_chat(id.to_string(), title.to_string()).await?)
    }

    async fn delete_chat(&self, id: &str) -> Result<()> {
        Ok(server_fns::delete_chat(id.to_string()).await?)
    }
}
