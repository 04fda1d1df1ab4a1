use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::{cors_layer, initialize_app_state};
use crate::router::create_router;

pub async fn serve(database_url: &str, bind_address: &str, allowed_origins: &str) -> Result<()> {
    info!("PesaTrack application starting up");
    debug!("Database URL: {}", database_url);
    debug!("Bind address: {}", bind_address);
    debug!("Allowed origins: {}", allowed_origins);

    let state = match initialize_app_state(database_url).await {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    let app = create_router(state, cors_layer(allowed_origins));
    debug!("Router created successfully");

    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("PesaTrack API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
