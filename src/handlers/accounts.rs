use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use compute::{account_balance, month_spending};
use model::entities::{account, account::AccountType, transaction};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState};

/// Request body for creating a new account
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Account name
    pub name: String,
    /// Account type: bank, mobile_money, or cash
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: AccountType,
    /// Monthly spending limit; omit or null for an unlimited account
    pub spending_limit: Option<Decimal>,
}

/// Request body for updating an account (full replace, like the client form)
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateAccountRequest {
    /// Account name
    pub name: String,
    /// Account type: bank, mobile_money, or cash
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: AccountType,
    /// Monthly spending limit; null clears the limit
    pub spending_limit: Option<Decimal>,
}

/// Account response model with derived balance fields
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: AccountType,
    pub spending_limit: Option<Decimal>,
    /// Σ income − Σ expense over the account's whole history
    pub current_balance: Decimal,
    /// Σ expense since the first day of the current calendar month
    pub current_month_spending: Decimal,
}

impl AccountResponse {
    fn derive(model: account::Model, history: &[transaction::Model]) -> Self {
        let today = Utc::now().date_naive();
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind,
            spending_limit: model.spending_limit,
            current_balance: account_balance(history),
            current_month_spending: month_spending(history, today),
        }
    }
}

fn validate(name: &str, spending_limit: Option<Decimal>) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("account name must not be empty".into()));
    }
    if let Some(limit) = spending_limit {
        if limit <= Decimal::ZERO {
            return Err(ApiError::Validation(
                "spending limit must be positive".into(),
            ));
        }
    }
    Ok(())
}

/// Get all accounts with computed balances
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = "accounts",
    responses(
        (status = 200, description = "Accounts retrieved successfully", body = ApiResponse<Vec<AccountResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AccountResponse>>>, ApiError> {
    let accounts = account::Entity::find()
        .order_by_asc(account::Column::Name)
        .all(&state.db)
        .await?;
    let transactions = transaction::Entity::find().all(&state.db).await?;
    debug!(
        "Deriving balances for {} accounts from {} transactions",
        accounts.len(),
        transactions.len()
    );

    let mut by_account: HashMap<i32, Vec<transaction::Model>> = HashMap::new();
    for tx in transactions {
        by_account.entry(tx.account_id).or_default().push(tx);
    }

    let responses: Vec<AccountResponse> = accounts
        .into_iter()
        .map(|acct| {
            let history = by_account.get(&acct.id).map_or(&[][..], Vec::as_slice);
            AccountResponse::derive(acct, history)
        })
        .collect();

    Ok(Json(ApiResponse {
        data: responses,
        message: "Accounts retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get a specific account by ID
#[utoipa::path(
    get,
    path = "/api/accounts/{account_id}",
    tag = "accounts",
    params(
        ("account_id" = i32, Path, description = "Account ID"),
    ),
    responses(
        (status = 200, description = "Account retrieved successfully", body = ApiResponse<AccountResponse>),
        (status = 404, description = "Account not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_account(
    Path(account_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let account = account::Entity::find_by_id(account_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("account {account_id} not found")))?;

    let history = transaction::Entity::find()
        .filter(transaction::Column::AccountId.eq(account_id))
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse {
        data: AccountResponse::derive(account, &history),
        message: "Account retrieved successfully".to_string(),
        success: true,
    }))
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = "accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created successfully", body = ApiResponse<AccountResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponse>>), ApiError> {
    validate(&request.name, request.spending_limit)?;

    let created = account::ActiveModel {
        name: Set(request.name),
        kind: Set(request.kind),
        spending_limit: Set(request.spending_limit),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!("Account created with ID: {}, name: {}", created.id, created.name);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            // A fresh account has no history; both derived fields are zero.
            data: AccountResponse::derive(created, &[]),
            message: "Account created successfully".to_string(),
            success: true,
        }),
    ))
}

/// Update an account
#[utoipa::path(
    put,
    path = "/api/accounts/{account_id}",
    tag = "accounts",
    params(
        ("account_id" = i32, Path, description = "Account ID"),
    ),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated successfully", body = ApiResponse<AccountResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Account not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_account(
    Path(account_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    validate(&request.name, request.spending_limit)?;

    let existing = account::Entity::find_by_id(account_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("account {account_id} not found")))?;

    let mut active: account::ActiveModel = existing.into();
    active.name = Set(request.name);
    active.kind = Set(request.kind);
    active.spending_limit = Set(request.spending_limit);
    let updated = active.update(&state.db).await?;

    let history = transaction::Entity::find()
        .filter(transaction::Column::AccountId.eq(account_id))
        .all(&state.db)
        .await?;

    info!("Account {} updated", account_id);
    Ok(Json(ApiResponse {
        data: AccountResponse::derive(updated, &history),
        message: "Account updated successfully".to_string(),
        success: true,
    }))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/accounts/{account_id}",
    tag = "accounts",
    params(
        ("account_id" = i32, Path, description = "Account ID"),
    ),
    responses(
        (status = 200, description = "Account deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Account not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_account(
    Path(account_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let result = account::Entity::delete_by_id(account_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("account {account_id} not found")));
    }

    info!("Account {} deleted", account_id);
    Ok(Json(ApiResponse {
        data: format!("Account {account_id} deleted"),
        message: "Account deleted successfully".to_string(),
        success: true,
    }))
}
