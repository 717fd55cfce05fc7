//! Common transport-layer types for the scenario API.
//! Clients serialize these to call the service, and the backend uses them for
//! its response envelopes and OpenAPI document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned by every successful create.
pub const SCENARIO_CREATED_MESSAGE: &str = "Successfully created a scenario.";

/// Message returned for any system failure; internal details are never exposed.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Request body for creating a scenario.
///
/// The backend validates the raw JSON object field by field, so every field
/// is sent as a string exactly as entered.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateScenarioRequest {
    /// Plan type: "Getsudo" or "AP"
    #[serde(rename = "type")]
    #[schema(example = "Getsudo")]
    pub plan_type: String,
    /// NAMC (site) code
    #[schema(example = "TMMI")]
    pub namc: String,
    /// Production line
    #[schema(example = "Line1")]
    pub line: String,
    /// Start month, one of Jan..Dec
    #[schema(example = "Feb")]
    pub start_month: String,
    /// Four digit start year
    #[schema(example = "2026")]
    pub start_year: String,
    /// End month, one of Jan..Dec
    #[schema(example = "Mar")]
    pub end_month: String,
    /// Four digit end year
    #[schema(example = "2026")]
    pub end_year: String,
    /// Name of the requesting user
    pub user_name: String,
    /// Email of the requesting user (.com addresses only)
    pub user_email: String,
}

/// Successful create response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateScenarioResponse {
    pub message: String,
}

impl CreateScenarioResponse {
    pub fn created() -> Self {
        Self {
            message: SCENARIO_CREATED_MESSAGE.to_string(),
        }
    }
}

/// Response for a request that failed validation (HTTP 400).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    /// Every distinct `ValidationError: ...` message found in the request
    pub error_message: Vec<String>,
}

/// Response for a system failure (HTTP 500).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemErrorResponse {
    pub error_message: String,
}

impl SystemErrorResponse {
    pub fn internal() -> Self {
        Self {
            error_message: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}
