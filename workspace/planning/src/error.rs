use thiserror::Error;
use tracing::error;

/// Error types for the planning module
#[derive(Error, Debug)]
pub enum PlanningError {
    /// One or more `ValidationError: ...` messages, already deduplicated
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The request carried no fields at all
    #[error("Request body is empty")]
    EmptyInput,

    /// The request body is not a JSON object
    #[error("Malformed request body: {0}")]
    MalformedInput(String),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Error from date operations
    #[error("Date error: {0}")]
    Date(String),
}

impl PlanningError {
    /// Whether the error is a client-side validation failure rather than a
    /// system failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, PlanningError::Validation(_))
    }

    /// The validation messages carried by the error, if any.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            PlanningError::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PlanningError {
    fn from(error: serde_json::Error) -> Self {
        let err = PlanningError::MalformedInput(error.to_string());
        error!(?err, "Request body is not valid JSON");
        err
    }
}

/// Type alias for Result with PlanningError
pub type Result<T> = std::result::Result<T, PlanningError>;
