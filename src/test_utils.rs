#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use common::CreateScenarioRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};
    use std::time::Duration;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        AppState { db }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG and defaults to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing on top of the given state
    pub fn setup_test_app_with_state(state: AppState) -> Router {
        let _ = init_test_tracing();
        create_router(state, Duration::from_secs(30))
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let state = setup_test_app_state().await;
        setup_test_app_with_state(state)
    }

    /// A valid AP request for TMMI/Line1 starting Feb 2026.
    pub fn scenario_request() -> CreateScenarioRequest {
        CreateScenarioRequest {
            plan_type: "AP".to_string(),
            namc: "TMMI".to_string(),
            line: "Line1".to_string(),
            start_month: "Feb".to_string(),
            start_year: "2026".to_string(),
            end_month: "Mar".to_string(),
            end_year: "2026".to_string(),
            user_name: "Priya Planner".to_string(),
            user_email: "planner@toyota.com".to_string(),
        }
    }
}
