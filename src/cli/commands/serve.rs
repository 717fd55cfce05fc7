use anyhow::Result;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use super::initdb::run_migrations;
use crate::config::{initialize_app_state_with_url, Settings};
use crate::router::create_router;

pub async fn serve(
    database_url: Option<String>,
    bind_address: Option<String>,
    migrate: bool,
) -> Result<()> {
    trace!("Entering serve function");
    info!("Supply planning service starting up");

    let settings = Settings::load()?.with_overrides(database_url, bind_address);
    debug!("Database URL: {}", settings.database_url);
    debug!("Bind address: {}", settings.bind_address);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state_with_url(&settings.database_url).await {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    if migrate {
        run_migrations(&state.db).await?;
    }

    // Create router
    let app = create_router(state, Duration::from_secs(settings.request_timeout_secs));
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", settings.bind_address);
    let listener = match TcpListener::bind(&settings.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", settings.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", settings.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Supply planning API running on http://{}", settings.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", settings.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
