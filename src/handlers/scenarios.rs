use crate::schemas::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::{
    CreateScenarioRequest, CreateScenarioResponse, SystemErrorResponse, ValidationErrorResponse,
};
use planning::{DatabaseStore, PlanningError};
use tracing::{debug, error, info, instrument, trace, warn};

/// Failure of a scenario request, split into the two categories clients see.
#[derive(Debug)]
pub enum ScenarioApiError {
    /// 400 with every validation message
    Validation(Vec<String>),
    /// 500 with a generic message
    Internal,
}

impl From<PlanningError> for ScenarioApiError {
    fn from(err: PlanningError) -> Self {
        match err {
            PlanningError::Validation(messages) => {
                warn!("Validation error messages: {:?}", messages);
                ScenarioApiError::Validation(messages)
            }
            other => {
                error!("Failed to create scenario: {}", other);
                ScenarioApiError::Internal
            }
        }
    }
}

impl IntoResponse for ScenarioApiError {
    fn into_response(self) -> Response {
        match self {
            ScenarioApiError::Validation(messages) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    error_message: messages,
                }),
            )
                .into_response(),
            ScenarioApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SystemErrorResponse::internal()),
            )
                .into_response(),
        }
    }
}

/// Create a new scenario
///
/// Validates every field of the request, rejects it when an active scenario
/// already exists for the same plan type, NAMC, line and cycle, and otherwise
/// stores the scenario under the next free version.
#[utoipa::path(
    post,
    path = "/api/v1/scenarios",
    request_body = CreateScenarioRequest,
    responses(
        (status = 200, description = "Scenario created successfully", body = CreateScenarioResponse),
        (status = 400, description = "Invalid input or duplicate scenario", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = SystemErrorResponse)
    ),
    tag = "scenarios"
)]
#[instrument(skip(state, body))]
pub async fn create_scenario(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateScenarioResponse>, ScenarioApiError> {
    trace!("Entering create_scenario handler");
    debug!("Received request body of {} bytes", body.len());

    let store = DatabaseStore::new(state.db.clone());
    let response = planning::create_scenario(&store, &body).await?;

    info!("response: {:?}", response);
    Ok(Json(response))
}
