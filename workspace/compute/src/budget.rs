//! Spending-limit and low-balance notification rules.
//!
//! The limit rule looks at *monthly* spending against the account's
//! configured ceiling; the low-balance rule looks at the *all-time*
//! balance. The asymmetry is deliberate and both checks are independent:
//! one transaction can raise a limit alert and a low-balance alert at once.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ComputeError, Result};

/// Outcome of evaluating monthly spending against a spending limit.
/// At most one alert is raised per evaluation; tiers are checked from the
/// most severe down and the first match wins.
#[derive(Debug, Clone, PartialEq)]
pub enum LimitAlert {
    /// Monthly spending reached or passed the limit (100% and up).
    Exceeded { spending: Decimal, limit: Decimal },
    /// 90% of the limit used, but not yet exceeded.
    Warning { pct: Decimal },
    /// 75% of the limit used.
    Notice { pct: Decimal },
}

impl LimitAlert {
    /// Human-readable notification text for this alert.
    pub fn message(&self) -> String {
        match self {
            Self::Exceeded { spending, limit } => format!(
                "Spending limit exceeded: monthly spending {spending} over limit {limit}"
            ),
            Self::Warning { pct } => format!(
                "Warning: {}% of spending limit used",
                pct.round_dp(0).normalize()
            ),
            Self::Notice { pct } => format!(
                "Notice: {}% of spending limit used",
                pct.round_dp(0).normalize()
            ),
        }
    }
}

/// Evaluates `month_spending` (including the transaction just recorded)
/// against the account's spending limit. Returns at most one alert; below
/// the 75% tier nothing is raised. Callers with no configured limit must
/// skip the evaluation entirely rather than pass a placeholder.
pub fn evaluate_spending_limit(
    limit: Decimal,
    month_spending: Decimal,
) -> Result<Option<LimitAlert>> {
    if limit <= Decimal::ZERO {
        return Err(ComputeError::InvalidLimit(limit));
    }

    let pct = month_spending * Decimal::ONE_HUNDRED / limit;
    let alert = if pct >= Decimal::ONE_HUNDRED {
        Some(LimitAlert::Exceeded {
            spending: month_spending,
            limit,
        })
    } else if pct >= Decimal::from(90) {
        Some(LimitAlert::Warning { pct })
    } else if pct >= Decimal::from(75) {
        Some(LimitAlert::Notice { pct })
    } else {
        None
    };

    if let Some(alert) = &alert {
        debug!(%pct, ?alert, "spending limit tier reached");
    }

    Ok(alert)
}

/// Raised when an account's all-time balance drops below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LowBalanceAlert {
    pub balance: Decimal,
}

impl LowBalanceAlert {
    /// Human-readable notification text carrying the negative balance.
    pub fn message(&self) -> String {
        format!("Low balance: account balance is {}", self.balance)
    }
}

/// Checks the post-transaction all-time balance. Runs for every created
/// transaction, whether or not a spending limit is configured.
pub fn check_low_balance(balance: Decimal) -> Option<LowBalanceAlert> {
    (balance < Decimal::ZERO).then_some(LowBalanceAlert { balance })
}
