//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::domain::models::{ChatHistoryItem, CreditProfile, SessionStatus, UsageRecord, UserIdentity};

/// Convert a store error into the error type server functions return
#[cfg(feature = "server")]
fn to_server_error(err: crate::shared::errors::SidebarError) -> ServerFnError {
    ServerFnError::new(err)
}

/// Signed-in flag and active plan for the layout
#[server]
pub async fn get_session_status() -> Result<SessionStatus, ServerFnError> {
    use crate::infrastructure::store;

    Ok(store().session_status())
}

#[server]
pub async fn get_current_user() -> Result<UserIdentity, ServerFnError> {
    use crate::infrastructure::store;

    store().current_user().map_err(to_server_error)
}

#[server]
pub async fn sign_in() -> Result<UserIdentity, ServerFnError> {
    use crate::infrastructure::store;

    let user = store().sign_in();
    tracing::info!(user_id = %user.id, "Signed in");
    Ok(user)
}

#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    use crate::infrastructure::store;

    store().sign_out();
    tracing::info!("Signed out");
    Ok(())
}

/// Chats of the signed-in user, most recently updated first
#[server]
pub async fn list_chats() -> Result<Vec<ChatHistoryItem>, ServerFnError> {
    use crate::infrastructure::store;

    let store = store();
    let user = store.current_user().map_err(to_server_error)?;
    let chats = store.list_chats(&user.id);

    tracing::debug!("list_chats: {} chats for {}", chats.len(), user.id);
    Ok(chats)
}

#[server]
pub async fn rename_chat(id: String, title: String) -> Result<(), ServerFnError> {
    use crate::infrastructure::store;

    let store = store();
    let user = store.current_user().map_err(to_server_error)?;

    tracing::info!("rename_chat called: id='{}'", id);
    store.rename_chat(&user.id, &id, &title).map_err(to_server_error)
}

#[server]
pub async fn delete_chat(id: String) -> Result<(), ServerFnError> {
    use crate::infrastructure::store;

    let store = store();
    let user = store.current_user().map_err(to_server_error)?;

    tracing::info!("delete_chat called: id='{}'", id);
    match store.delete_chat(&user.id, &id) {
        Ok(()) => {
            tracing::info!("Successfully deleted chat: {}", id);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Chat not deleted: {}", e);
            Err(to_server_error(e))
        }
    }
}

#[server]
pub async fn get_credit_profile(user_id: String) -> Result<CreditProfile, ServerFnError> {
    use crate::infrastructure::store;

    let store = store();
    let user = store.authorize(&user_id).map_err(to_server_error)?;
    store.credit_profile(&user.id).map_err(to_server_error)
}

#[server]
pub async fn get_usage_since(
    user_id: String,
    since: DateTime<Utc>,
) -> Result<Vec<UsageRecord>, ServerFnError> {
    use crate::infrastructure::store;

    let store = store();
    let user = store.authorize(&user_id).map_err(to_server_error)?;
    Ok(store.usage_since(&user.id, since))
}
