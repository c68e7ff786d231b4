//! In-memory account, chat and credit store backing the server functions
//!
//! Holds a single demo account. Nothing survives a restart.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::config::AppConfig;
use crate::domain::models::{ChatHistoryItem, CreditProfile, SessionStatus, UsageRecord, UserIdentity};
use crate::shared::errors::{Result, SidebarError};

/// Global store instance (singleton)
static STORE: OnceCell<DemoStore> = OnceCell::new();

const SEED_TITLES: [&str; 6] = [
    "Trip planning for Lisbon",
    "Refactor the billing module",
    "Sourdough starter troubleshooting",
    "Quarterly report outline",
    "Explain lifetimes in Rust",
    "Birthday gift ideas",
];

#[derive(Debug, Clone)]
struct StoredChat {
    owner: String,
    title: String,
    updated_at: DateTime<Utc>,
}

pub struct DemoStore {
    signed_in: AtomicBool,
    user: UserIdentity,
    active_plan: Option<String>,
    profiles: DashMap<String, CreditProfile>,
    chats: DashMap<String, StoredChat>,
    usage: DashMap<String, Vec<UsageRecord>>,
}

impl DemoStore {
    pub fn new(config: &AppConfig) -> Self {
        let user = UserIdentity {
            id: "demo-user".to_string(),
            email: "demo@example.com".to_string(),
            display_name: "Demo User".to_string(),
        };

        let profiles = DashMap::new();
        profiles.insert(
            user.id.clone(),
            CreditProfile {
                extra_credits: config.extra_credits,
                monthly_plan_credits: config.plan_credits,
            },
        );

        Self {
            signed_in: AtomicBool::new(true),
            user,
            active_plan: config.demo_plan.clone(),
            profiles,
            chats: DashMap::new(),
            usage: DashMap::new(),
        }
    }

    /// Store with demo chats and some spending spread over the last weeks
    pub fn seeded(config: &AppConfig, now: DateTime<Utc>) -> Self {
        let store = Self::new(config);
        if config.seed_chats {
            for (i, title) in SEED_TITLES.iter().enumerate() {
                store.insert_chat(title, now - Duration::hours(i as i64 * 20));
            }
        }

        let spends = [(40, 1), (125, 4), (60, 9), (300, 45)];
        let user_id = store.user.id.clone();
        for (spent, days_ago) in spends {
            store.record_usage(
                &user_id,
                UsageRecord {
                    spent,
                    created_at: now - Duration::days(days_ago),
                },
            );
        }
        store
    }

    pub fn insert_chat(&self, title: &str, updated_at: DateTime<Utc>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.chats.insert(
            id.clone(),
            StoredChat {
                owner: self.user.id.clone(),
                title: title.to_string(),
                updated_at,
            },
        );
        id
    }

    pub fn record_usage(&self, user_id: &str, record: UsageRecord) {
        self.usage
            .entry(user_id.to_string())
            .or_default()
            .push(record);
    }

    // ------------------------------------------------------------
    // Session
    // ------------------------------------------------------------

    pub fn session_status(&self) -> SessionStatus {
        let authenticated = self.signed_in.load(Ordering::SeqCst);
        SessionStatus {
            authenticated,
            active_plan: if authenticated {
                self.active_plan.clone()
            } else {
                None
            },
        }
    }

    pub fn sign_in(&self) -> UserIdentity {
        self.signed_in.store(true, Ordering::SeqCst);
        self.user.clone()
    }

    pub fn sign_out(&self) {
        self.signed_in.store(false, Ordering::SeqCst);
    }

    pub fn current_user(&self) -> Result<UserIdentity> {
        if self.signed_in.load(Ordering::SeqCst) {
            Ok(self.user.clone())
        } else {
            Err(SidebarError::Unauthenticated)
        }
    }

    /// Signed-in user, provided `user_id` names them
    pub fn authorize(&self, user_id: &str) -> Result<UserIdentity> {
        let user = self.current_user()?;
        if user.id != user_id {
            tracing::warn!(requested = user_id, "Rejected access to another user's data");
            return Err(SidebarError::UserNotFound(user_id.to_string()));
        }
        Ok(user)
    }

    // ------------------------------------------------------------
    // Chats
    // ------------------------------------------------------------

    /// Chats owned by `user_id`, most recently updated first
    pub fn list_chats(&self, user_id: &str) -> Vec<ChatHistoryItem> {
        let mut owned: Vec<(DateTime<Utc>, ChatHistoryItem)> = self
            .chats
            .iter()
            .filter(|entry| entry.owner == user_id)
            .map(|entry| {
                (
                    entry.updated_at,
                    ChatHistoryItem::new(entry.key().clone(), entry.title.clone()),
                )
            })
            .collect();
        owned.sort_by(|a, b| b.0.cmp(&a.0));
        owned.into_iter().map(|(_, item)| item).collect()
    }

    pub fn rename_chat(&self, user_id: &str, id: &str, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SidebarError::InvalidInput("title must not be empty".to_string()));
        }
        let mut chat = self
            .chats
            .get_mut(id)
            .filter(|chat| chat.owner == user_id)
            .ok_or_else(|| SidebarError::ChatNotFound(id.to_string()))?;
        chat.title = title.to_string();
        chat.updated_at = Utc::now();
        Ok(())
    }

    pub fn delete_chat(&self, user_id: &str, id: &str) -> Result<()> {
        self.chats
            .remove_if(id, |_, chat| chat.owner == user_id)
            .map(|_| ())
            .ok_or_else(|| SidebarError::ChatNotFound(id.to_string()))
    }

    // ------------------------------------------------------------
    // Credits
    // ------------------------------------------------------------

    pub fn credit_profile(&self, user_id: &str) -> Result<CreditProfile> {
        self.profiles
            .get(user_id)
            .map(|profile| *profile)
            .ok_or_else(|| SidebarError::UserNotFound(user_id.to_string()))
    }

    pub fn usage_since(&self, user_id: &str, since: DateTime<Utc>) -> Vec<UsageRecord> {
        self.usage
            .get(user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.created_at >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Initialize the global store. Later calls keep the first instance.
pub fn init_store(config: &AppConfig) -> &'static DemoStore {
    STORE.get_or_init(|| {
        tracing::info!(seed_chats = config.seed_chats, "Initializing demo store");
        DemoStore::seeded(config, Utc::now())
    })
}

/// Global store, seeded from the environment on first use
pub fn store() -> &'static DemoStore {
    STORE.get_or_init(|| {
        let config = AppConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("Invalid configuration ({}), using defaults", e);
            AppConfig::default()
        });
        DemoStore::seeded(&config, Utc::now())
    })
}
