use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SidebarError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Remote call failed: {0}")]
    Remote(String),
}

impl From<dioxus::prelude::ServerFnError> for SidebarError {
    fn from(err: dioxus::prelude::ServerFnError) -> Self {
        SidebarError::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SidebarError>;
