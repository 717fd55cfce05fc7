use common::{
    CreateScenarioRequest, CreateScenarioResponse, SystemErrorResponse, ValidationErrorResponse,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

/// Health check response
#[derive(Serialize, ToSchema)]
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
        crate::handlers::scenarios::create_scenario,
    ),
    components(
        schemas(
            HealthResponse,
            CreateScenarioRequest,
            CreateScenarioResponse,
            ValidationErrorResponse,
            SystemErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scenarios", description = "Supply planning scenario endpoints"),
    ),
    info(
        title = "Supply Planning API",
        description = "Creates versioned supply planning scenarios per plan type, NAMC, line and cycle",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
