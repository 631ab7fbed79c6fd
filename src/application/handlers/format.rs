//! Text formatting shared by the response handlers.

use crate::domain::error::DomainError;
use crate::domain::values::currency::{grouped, Grouping};

pub const RATE_LIMITED_REPLY: &str =
    "⏳ I'm getting rate-limited by the data provider. Please try again in a minute!";

/// Signed percentage with two decimals, `N/A` when missing.
pub fn percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => {
            // -0.0 would otherwise print as "+-0.00%"
            let v = if v == 0.0 { 0.0 } else { v };
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{v:.2}%")
        }
        None => "N/A".to_string(),
    }
}

/// Grouped plain count (supplies), up to three decimals.
pub fn count(value: Option<f64>) -> Option<String> {
    value
        .filter(|v| v.is_finite())
        .map(|v| grouped(v, 3, Grouping::Western))
}

pub fn rank(value: Option<u32>) -> String {
    match value {
        Some(r) => format!("#{r}"),
        None => "#N/A".to_string(),
    }
}

/// One decimal, for dominance shares.
pub fn share(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "N/A".to_string(),
    }
}

/// User-facing sentence for a data-layer failure. Rate limiting gets its
/// own wording; everything else uses the handler's `generic` apology.
pub fn apology(err: &DomainError, generic: &str) -> String {
    if err.is_rate_limited() {
        RATE_LIMITED_REPLY.to_string()
    } else {
        generic.to_string()
    }
}
