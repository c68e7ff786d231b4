// Sidebar models
pub mod chat;
pub mod credits;
pub mod user;

pub use chat::{ChatHistoryItem, normalize_title_input};
pub use credits::{
    CreditState, FREE_PLAN_LABEL, derive_credit_state, plan_label, renewal_days_remaining,
    usage_window_start,
};
pub use user::{CreditProfile, SessionStatus, UsageRecord, UserIdentity};
