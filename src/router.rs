use crate::handlers::{
    accounts::{create_account, delete_account, get_account, list_accounts, update_account},
    categories::{
        create_category, delete_category, get_category_tree, list_categories, update_category,
    },
    health::health_check,
    notifications::{list_notifications, mark_notification_read},
    transactions::{create_transaction, delete_transaction, list_transactions},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Account CRUD routes
        .route("/api/accounts", get(list_accounts).post(create_account))
        .route(
            "/api/accounts/:account_id",
            get(get_account).put(update_account).delete(delete_account),
        )
        // Category CRUD routes and the tree read model
        .route("/api/categories", get(list_categories).post(create_category))
        .route("/api/categories/tree", get(get_category_tree))
        .route(
            "/api/categories/:category_id",
            put(update_category).delete(delete_category),
        )
        // Transaction routes; creation runs the notification rules
        .route(
            "/api/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/api/transactions/:transaction_id", delete(delete_transaction))
        // Notification routes
        .route("/api/notifications", get(list_notifications))
        .route(
            "/api/notifications/:notification_id/read",
            put(mark_notification_read),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(cors),
        )
        .with_state(state)
}
