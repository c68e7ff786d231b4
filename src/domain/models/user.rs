use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in account, as resolved by the authentication service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl UserIdentity {
    /// First letter of the display name (or email) for the avatar bubble
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .chain(self.email.chars())
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Session data the layout needs before rendering the sidebar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub active_plan: Option<String>,
}

/// Credit balances stored on the user's profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditProfile {
    #[serde(default)]
    pub extra_credits: i64,
    #[serde(default)]
    pub monthly_plan_credits: i64,
}

/// A single metered spend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub spent: i64,
    pub created_at: DateTime<Utc>,
}
