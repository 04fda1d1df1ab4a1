use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use compute::{account_balance, check_low_balance, evaluate_spending_limit, month_spending, signed_amount};
use model::entities::{
    account, category, notification, notification::NotificationKind, transaction,
    transaction::TransactionKind,
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, Order,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState};

/// Request body for creating a new transaction
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// Owning account ID
    pub account_id: i32,
    /// Category ID
    pub category_id: i32,
    /// Positive amount; the sign is derived from the type
    pub amount: Decimal,
    /// Transaction type: income or expense
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: TransactionKind,
    /// Free-text description
    pub description: String,
}

/// Transaction response model
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionResponse {
    pub id: i32,
    pub account_id: i32,
    pub category_id: i32,
    pub amount: Decimal,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: TransactionKind,
    pub description: String,
    pub date: chrono::DateTime<Utc>,
}

impl From<transaction::Model> for TransactionResponse {
    fn from(model: transaction::Model) -> Self {
        Self {
            id: model.id,
            account_id: model.account_id,
            category_id: model.category_id,
            amount: model.amount,
            kind: model.kind,
            description: model.description,
            date: model.date,
        }
    }
}

/// Transaction list item with joined account and category names
#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct TransactionWithNames {
    pub id: i32,
    pub account_id: i32,
    pub category_id: i32,
    pub amount: Decimal,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: TransactionKind,
    pub description: String,
    pub date: chrono::DateTime<Utc>,
    pub account_name: Option<String>,
    pub category_name: Option<String>,
}

/// Query parameters for filtering the transaction list
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTransactionsQuery {
    /// Restrict to one account
    pub account_id: Option<i32>,
    /// Earliest transaction date, inclusive (YYYY-MM-DD)
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    /// Latest transaction date, inclusive (YYYY-MM-DD)
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}

/// Get transactions, newest first, optionally filtered by account and date range
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "transactions",
    params(ListTransactionsQuery),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = ApiResponse<Vec<TransactionWithNames>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<ApiResponse<Vec<TransactionWithNames>>>, ApiError> {
    let mut select = transaction::Entity::find()
        .select_only()
        .column(transaction::Column::Id)
        .column(transaction::Column::AccountId)
        .column(transaction::Column::CategoryId)
        .column(transaction::Column::Amount)
        .column_as(transaction::Column::Kind, "kind")
        .column(transaction::Column::Description)
        .column(transaction::Column::Date)
        .column_as(account::Column::Name, "account_name")
        .column_as(category::Column::Name, "category_name")
        .join(JoinType::LeftJoin, transaction::Relation::Account.def())
        .join(JoinType::LeftJoin, transaction::Relation::Category.def())
        .order_by(transaction::Column::Date, Order::Desc)
        .order_by(transaction::Column::Id, Order::Desc);

    if let Some(account_id) = query.account_id {
        select = select.filter(transaction::Column::AccountId.eq(account_id));
    }
    if let Some(start) = query.start_date {
        let from = Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN));
        select = select.filter(transaction::Column::Date.gte(from));
    }
    if let Some(end) = query.end_date {
        // Inclusive end date: anything before the following midnight.
        let next_day = end.checked_add_days(Days::new(1)).unwrap_or(end);
        let until = Utc.from_utc_datetime(&next_day.and_time(NaiveTime::MIN));
        select = select.filter(transaction::Column::Date.lt(until));
    }

    let transactions = select
        .into_model::<TransactionWithNames>()
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse {
        data: transactions,
        message: "Transactions retrieved successfully".to_string(),
        success: true,
    }))
}

/// Create a transaction and run the notification rules in one atomic unit.
///
/// The insert, the spending-limit evaluation, and the low-balance check all
/// happen inside a single database transaction: a failure at any point
/// rolls back every write. The read-then-decide-then-write sequence is not
/// serialized per account; concurrent writers on the same account can race
/// the balance read.
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction created successfully", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Account or category not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransactionResponse>>), ApiError> {
    if request.amount <= Decimal::ZERO {
        return Err(ApiError::Validation(
            "transaction amount must be positive".into(),
        ));
    }

    let txn = state.db.begin().await?;

    let account = account::Entity::find_by_id(request.account_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("account {} not found", request.account_id)))?;
    category::Entity::find_by_id(request.category_id)
        .one(&txn)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("category {} not found", request.category_id))
        })?;

    let history = transaction::Entity::find()
        .filter(transaction::Column::AccountId.eq(account.id))
        .all(&txn)
        .await?;
    let today = Utc::now().date_naive();
    let balance_before = account_balance(&history);
    let month_before = month_spending(&history, today);

    let created = transaction::ActiveModel {
        account_id: Set(account.id),
        category_id: Set(request.category_id),
        amount: Set(request.amount),
        kind: Set(request.kind),
        description: Set(request.description),
        date: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // Monthly spend drives the limit tiers; expenses only, and only for
    // accounts with a configured limit.
    if created.kind == TransactionKind::Expense {
        if let Some(limit) = account.spending_limit {
            let new_month_spending = month_before + created.amount;
            let alert = evaluate_spending_limit(limit, new_month_spending)
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            if let Some(alert) = alert {
                debug!("Spending limit alert for account {}: {:?}", account.id, alert);
                insert_notification(&txn, account.id, NotificationKind::LimitExceed, alert.message())
                    .await?;
            }
        }
    }

    // The low-balance check is independent of the limit rule and looks at
    // the all-time balance, limit or no limit.
    let new_balance = balance_before + signed_amount(&created);
    if let Some(alert) = check_low_balance(new_balance) {
        debug!("Low balance alert for account {}: {}", account.id, new_balance);
        insert_notification(&txn, account.id, NotificationKind::LowBalance, alert.message())
            .await?;
    }

    txn.commit().await?;

    info!(
        "Transaction created with ID: {}, account: {}, amount: {}",
        created.id, created.account_id, created.amount
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: TransactionResponse::from(created),
            message: "Transaction created successfully".to_string(),
            success: true,
        }),
    ))
}

async fn insert_notification<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
    kind: NotificationKind,
    message: String,
) -> Result<notification::Model, ApiError> {
    let created = notification::ActiveModel {
        account_id: Set(account_id),
        message: Set(message),
        kind: Set(kind),
        is_read: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(created)
}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/api/transactions/{transaction_id}",
    tag = "transactions",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID"),
    ),
    responses(
        (status = 200, description = "Transaction deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Transaction not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_transaction(
    Path(transaction_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let result = transaction::Entity::delete_by_id(transaction_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!(
            "transaction {transaction_id} not found"
        )));
    }

    info!("Transaction {} deleted", transaction_id);
    Ok(Json(ApiResponse {
        data: format!("Transaction {transaction_id} deleted"),
        message: "Transaction deleted successfully".to_string(),
        success: true,
    }))
}
