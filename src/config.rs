use anyhow::Result;
use axum::http::HeaderValue;
use sea_orm::Database;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::schemas::AppState;

/// Connect to the database and build the shared application state.
pub async fn initialize_app_state(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState { db })
}

/// Builds the CORS layer from a comma-separated origin list.
/// `"*"` (or an empty value) allows any origin; anything else restricts
/// requests to the listed origins before they reach route logic.
pub fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let trimmed = allowed_origins.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = trimmed
        .split(',')
        .filter_map(|origin| {
            let origin = origin.trim();
            match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring unparseable CORS origin: {}", origin);
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
