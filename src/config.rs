//! Runtime configuration for the demo backend
//!
//! Values come from environment variables; anything unset falls back to the
//! defaults below. Invalid numbers are rejected at startup.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Active plan of the demo account; `None` shows the free-tier label
    pub demo_plan: Option<String>,
    pub plan_credits: i64,
    pub extra_credits: i64,
    /// Seed a handful of chats so the history list isn't empty
    pub seed_chats: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            demo_plan: Some("pro".to_string()),
            plan_credits: 1000,
            extra_credits: 200,
            seed_chats: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let demo_plan = match lookup("SIDEBAR_DEMO_PLAN") {
            Some(plan) if plan.trim().is_empty() => None,
            Some(plan) => Some(plan.trim().to_string()),
            None => defaults.demo_plan,
        };

        Ok(Self {
            demo_plan,
            plan_credits: parse_number(&lookup, "SIDEBAR_PLAN_CREDITS", defaults.plan_credits)?,
            extra_credits: parse_number(&lookup, "SIDEBAR_EXTRA_CREDITS", defaults.extra_credits)?,
            seed_chats: parse_flag(&lookup, "SIDEBAR_SEED_CHATS", defaults.seed_chats)?,
            log_filter: lookup("SIDEBAR_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("1" | "true" | "yes") => Ok(true),
        Some("0" | "false" | "no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidFlag {
            key,
            value: other.to_string(),
        }),
    }
}
