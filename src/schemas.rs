use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool; each request borrows one connection for
    /// the duration of its unit of work.
    pub db: DatabaseConnection,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::accounts::list_accounts,
        crate::handlers::accounts::get_account,
        crate::handlers::accounts::create_account,
        crate::handlers::accounts::update_account,
        crate::handlers::accounts::delete_account,
        crate::handlers::categories::list_categories,
        crate::handlers::categories::get_category_tree,
        crate::handlers::categories::create_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,
        crate::handlers::transactions::list_transactions,
        crate::handlers::transactions::create_transaction,
        crate::handlers::transactions::delete_transaction,
        crate::handlers::notifications::list_notifications,
        crate::handlers::notifications::mark_notification_read,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ApiResponse<String>,
            ApiResponse<crate::handlers::accounts::AccountResponse>,
            ApiResponse<Vec<crate::handlers::accounts::AccountResponse>>,
            ApiResponse<crate::handlers::categories::CategoryResponse>,
            ApiResponse<Vec<crate::handlers::categories::CategoryResponse>>,
            ApiResponse<Vec<crate::handlers::categories::CategoryTreeNode>>,
            ApiResponse<crate::handlers::transactions::TransactionResponse>,
            ApiResponse<Vec<crate::handlers::transactions::TransactionWithNames>>,
            ApiResponse<crate::handlers::notifications::NotificationResponse>,
            ApiResponse<Vec<crate::handlers::notifications::NotificationWithAccount>>,
            crate::handlers::accounts::AccountResponse,
            crate::handlers::accounts::CreateAccountRequest,
            crate::handlers::accounts::UpdateAccountRequest,
            crate::handlers::categories::CategoryResponse,
            crate::handlers::categories::CategoryTreeNode,
            crate::handlers::categories::CreateCategoryRequest,
            crate::handlers::categories::UpdateCategoryRequest,
            crate::handlers::transactions::TransactionResponse,
            crate::handlers::transactions::TransactionWithNames,
            crate::handlers::transactions::CreateTransactionRequest,
            crate::handlers::notifications::NotificationResponse,
            crate::handlers::notifications::NotificationWithAccount,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account CRUD with derived balances"),
        (name = "categories", description = "Category CRUD and tree read model"),
        (name = "transactions", description = "Transaction listing and creation"),
        (name = "notifications", description = "Budget and balance notifications"),
    ),
    info(
        title = "PesaTrack API",
        description = "Personal finance tracker API - accounts, categories, transactions, and budget notifications",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
