//! Pure domain logic for the finance tracker: balance and month-to-date
//! spending aggregation, the spending-limit and low-balance notification
//! rules, and the category tree read model.
//!
//! Everything here is a function of plain model values plus a reference
//! date. No database access and no side effects; the API layer decides
//! what to persist based on the results.

pub mod balance;
pub mod budget;
pub mod categories;
pub mod error;

pub use balance::{account_balance, month_spending, signed_amount};
pub use budget::{check_low_balance, evaluate_spending_limit, LimitAlert, LowBalanceAlert};
pub use categories::{category_tree, CategoryNode};
pub use error::ComputeError;
