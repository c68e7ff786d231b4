use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::domain::models::CreditState;

/// Remaining credits for the current billing period
///
/// Shows a skeleton while the subscription or the credits are still loading.
#[component]
pub fn CreditSummary(credits: Option<CreditState>, loading: bool) -> Element {
    let Some(credits) = credits.filter(|_| !loading) else {
        return rsx! {
            div { class: "c-credits c-credits--loading", "aria-busy": "true",
                div { class: "c-skeleton__row" }
                div { class: "c-skeleton__row c-skeleton__row--short" }
            }
        };
    };

    let usage_percent = credits.plan_usage_percent();
    let renewal = credits.renewal_days_remaining.map(|days| {
        if days == 1 {
            "Renews in 1 day".to_string()
        } else {
            format!("Renews in {} days", days)
        }
    });

    rsx! {
        div { class: "c-credits",
            div { class: "c-credits__header",
                span { class: "c-credits__label", "Credits" }
                span { class: "c-credits__total", "{credits.total_remaining()}" }
            }

            div { class: "c-credits__row",
                span { "Plan" }
                span { "{credits.plan_credits_remaining} / {credits.plan_credits_original}" }
            }
            div { class: "c-credits__bar",
                div {
                    class: "c-credits__bar-fill",
                    style: "width: {usage_percent}%",
                }
            }

            div { class: "c-credits__row",
                span { "Extra" }
                span { "{credits.extra_credits_remaining} / {credits.extra_credits_original}" }
            }

            if let Some(text) = renewal {
                div { class: "c-credits__renewal", "{text}" }
            }

            Link {
                to: Route::Pricing {},
                class: "c-credits__upgrade",
                "Get more credits"
            }
        }
    }
}
