//! Credit balances shown in the sidebar summary
//!
//! Usage in the current billing period is drawn from plan credits first and
//! only then from extra credits. Nothing here is persisted; the state is
//! rebuilt from fetched balances every time the summary loads.

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Label shown on the profile button when no subscription is active
pub const FREE_PLAN_LABEL: &str = "Free";

/// Derived credit balances for the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditState {
    pub plan_credits_original: i64,
    pub extra_credits_original: i64,
    pub plan_credits_remaining: i64,
    pub extra_credits_remaining: i64,
    pub used_in_period: i64,
    /// `None` when balances were zeroed because no account could be resolved
    pub renewal_days_remaining: Option<i64>,
}

impl CreditState {
    /// Balances shown when the account or its balances could not be read
    pub fn zeroed() -> Self {
        Self {
            plan_credits_original: 0,
            extra_credits_original: 0,
            plan_credits_remaining: 0,
            extra_credits_remaining: 0,
            used_in_period: 0,
            renewal_days_remaining: None,
        }
    }

    pub fn total_remaining(&self) -> i64 {
        self.plan_credits_remaining + self.extra_credits_remaining
    }

    /// Share of the plan allotment already spent, 0..=100
    pub fn plan_usage_percent(&self) -> i64 {
        if self.plan_credits_original <= 0 {
            return 0;
        }
        let spent = self.plan_credits_original - self.plan_credits_remaining;
        (spent * 100 / self.plan_credits_original).clamp(0, 100)
    }
}

/// Apply plan-first depletion to fetched balances.
pub fn derive_credit_state(plan: i64, extra: i64, used: i64, renewal_days: i64) -> CreditState {
    let plan_remaining = (plan - used).max(0);
    let extra_remaining = if used > plan {
        (extra - (used - plan)).max(0)
    } else {
        extra
    };

    CreditState {
        plan_credits_original: plan,
        extra_credits_original: extra,
        plan_credits_remaining: plan_remaining,
        extra_credits_remaining: extra_remaining,
        used_in_period: used,
        renewal_days_remaining: Some(renewal_days),
    }
}

/// Midnight on the first day of the calendar month containing `now`.
pub fn period_start(now: NaiveDateTime) -> NaiveDateTime {
    let date = now.date();
    date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN)
}

/// Midnight on the first day of the month after `now`.
pub fn next_period_start(now: NaiveDateTime) -> NaiveDateTime {
    period_start(now)
        .date()
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
        .and_time(NaiveTime::MIN)
}

/// Whole days, rounded up, until the next monthly allotment.
pub fn renewal_days_remaining(now: NaiveDateTime) -> i64 {
    let millis = (next_period_start(now) - now).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Start of the usage window for `now`, expressed in UTC for the usage query.
pub fn usage_window_start(now: DateTime<Local>) -> DateTime<Utc> {
    let start = period_start(now.naive_local());
    Local
        .from_local_datetime(&start)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

/// Capitalized plan name for the profile tag, or the free-tier fallback.
pub fn plan_label(active_plan: Option<&str>) -> String {
    let Some(plan) = active_plan.map(str::trim).filter(|p| !p.is_empty()) else {
        return FREE_PLAN_LABEL.to_string();
    };
    let mut chars = plan.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => FREE_PLAN_LABEL.to_string(),
    }
}
