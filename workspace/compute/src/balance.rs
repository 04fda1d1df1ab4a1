//! Balance and month-to-date spending aggregation.

use chrono::{Datelike, NaiveDate};
use model::entities::transaction::{self, TransactionKind};
use rust_decimal::Decimal;

/// The contribution of a single transaction to its account's balance:
/// income counts positive, expense negative. Amounts are stored positive.
pub fn signed_amount(tx: &transaction::Model) -> Decimal {
    match tx.kind {
        TransactionKind::Income => tx.amount,
        TransactionKind::Expense => -tx.amount,
    }
}

/// All-time balance of an account: Σ income − Σ expense over its history.
/// An account with no transactions has balance zero. Order-independent.
pub fn account_balance(transactions: &[transaction::Model]) -> Decimal {
    transactions.iter().map(signed_amount).sum()
}

/// Month-to-date spending: Σ amount of expenses dated on or after the
/// first day of `today`'s calendar month. Income never counts.
pub fn month_spending(transactions: &[transaction::Model], today: NaiveDate) -> Decimal {
    let month_start = first_of_month(today);
    transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
        .filter(|tx| tx.date.date_naive() >= month_start)
        .map(|tx| tx.amount)
        .sum()
}

/// First day of the calendar month containing `today`.
pub fn first_of_month(today: NaiveDate) -> NaiveDate {
    // Day one exists in every month; the fallback is unreachable.
    today.with_day(1).unwrap_or(today)
}
