//! Structured logging for sidebar operations
//!
//! Every remote call the sidebar makes goes through one of these helpers so
//! log lines carry the same `operation` field on client and server.

/// Operations the sidebar logs
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    HistoryLoad,
    CreditLoad,
    ChatRename,
    ChatDelete,
    Auth,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::HistoryLoad => "history_load",
            LogOperation::CreditLoad => "credit_load",
            LogOperation::ChatRename => "chat_rename",
            LogOperation::ChatDelete => "chat_delete",
            LogOperation::Auth => "auth",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log history list fetch result
pub fn log_history_loaded(count: usize) {
    tracing::info!(
        operation = LogOperation::HistoryLoad.as_str(),
        chat_count = count,
        "Chat history loaded"
    );
}

pub fn log_history_error(error: &str) {
    tracing::error!(
        operation = LogOperation::HistoryLoad.as_str(),
        error = error,
        "Failed to load chat history"
    );
}

/// Log a response that arrived after the state it belonged to was reset
pub fn log_stale_result(operation: LogOperation, generation: u64) {
    tracing::debug!(
        operation = operation.as_str(),
        generation = generation,
        "Discarded stale result"
    );
}

pub fn log_credits_loaded(total_remaining: i64, used: i64) {
    tracing::info!(
        operation = LogOperation::CreditLoad.as_str(),
        total_remaining = total_remaining,
        used_in_period = used,
        "Credit summary loaded"
    );
}

/// Log a credit fetch failure (balances fall back to zero)
pub fn log_credits_error(step: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::CreditLoad.as_str(),
        step = step,
        error = error,
        "Credit summary unavailable, showing zero balances"
    );
}

pub fn log_rename_success(chat_id: &str) {
    tracing::info!(
        operation = LogOperation::ChatRename.as_str(),
        chat_id = chat_id,
        "Chat renamed"
    );
}

pub fn log_rename_error(chat_id: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ChatRename.as_str(),
        chat_id = chat_id,
        error = error,
        "Failed to rename chat"
    );
}

pub fn log_delete_success(chat_id: &str) {
    tracing::info!(
        operation = LogOperation::ChatDelete.as_str(),
        chat_id = chat_id,
        "Chat deleted"
    );
}

pub fn log_delete_error(chat_id: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ChatDelete.as_str(),
        chat_id = chat_id,
        error = error,
        "Failed to delete chat"
    );
}

pub fn log_sign_out(error: Option<&str>) {
    match error {
        None => tracing::info!(operation = LogOperation::Auth.as_str(), "Signed out"),
        Some(error) => tracing::error!(
            operation = LogOperation::Auth.as_str(),
            error = error,
            "Failed to sign out"
        ),
    }
}

pub fn log_navigation(target: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        target = target,
        "Navigating"
    );
}
