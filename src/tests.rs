#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::{
        scenario_request, setup_test_app, setup_test_app_state, setup_test_app_with_state,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use common::{
        CreateScenarioResponse, SystemErrorResponse, ValidationErrorResponse,
        INTERNAL_SERVER_ERROR_MESSAGE, SCENARIO_CREATED_MESSAGE,
    };
    use model::entities::prelude::*;
    use model::entities::{scenario, user_config};
    use planning::validation::{DUPLICATE_SCENARIO_MESSAGE, INVALID_EMAIL_MESSAGE, TYPE_MESSAGE};
    use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

    async fn seed_inactive(db: &sea_orm::DatabaseConnection, version: u32) {
        scenario::ActiveModel {
            scenario_name: Set(format!("AP/TMMI/Line1_Jan26_V{}", version)),
            namc: Set("TMMI".to_string()),
            line: Set("Line1".to_string()),
            plan_type: Set(scenario::PlanType::Ap),
            start_month_year: Set("202602".to_string()),
            end_month_year: Set("202603".to_string()),
            scenario_cycle: Set("Jan26".to_string()),
            getsudo_month: Set(None),
            scenario_status: Set(scenario::ScenarioStatus::Completed),
            is_active: Set(false),
            user_email: Set("planner@toyota.com".to_string()),
            user_name: Set("Priya Planner".to_string()),
            last_updated: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed scenario");
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_create_scenario() {
        let state = setup_test_app_state().await;
        let db = state.db.clone();
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        let response = server
            .post("/api/v1/scenarios")
            .json(&scenario_request())
            .await;

        if response.status_code() != StatusCode::OK {
            println!("Error response: {}", response.text());
            panic!("Expected 200 OK, got {}", response.status_code());
        }
        let body: CreateScenarioResponse = response.json();
        assert_eq!(body.message, SCENARIO_CREATED_MESSAGE);

        let rows = Scenario::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.scenario_name, "AP/TMMI/Line1_Jan26_V1");
        assert_eq!(row.scenario_cycle, "Jan26");
        assert_eq!(row.start_month_year, "202602");
        assert_eq!(row.end_month_year, "202603");
        assert_eq!(row.getsudo_month, None);
        assert_eq!(row.scenario_status, scenario::ScenarioStatus::NotStarted);
        assert!(row.is_active);

        let config = UserConfig::find_by_id("planner@toyota.com".to_string())
            .one(&db)
            .await
            .unwrap()
            .expect("user config should be stored");
        assert_eq!(config.namc, "TMMI");
        assert_eq!(config.plan_type, scenario::PlanType::Ap);
    }

    #[tokio::test]
    async fn test_create_getsudo_scenario_records_getsudo_month() {
        let state = setup_test_app_state().await;
        let db = state.db.clone();
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        let mut request = scenario_request();
        request.plan_type = "Getsudo".to_string();
        request.start_month = "Jan".to_string();
        request.start_year = "2026".to_string();

        let response = server.post("/api/v1/scenarios").json(&request).await;
        response.assert_status(StatusCode::OK);

        let row = Scenario::find()
            .filter(scenario::Column::PlanType.eq(scenario::PlanType::Getsudo))
            .one(&db)
            .await
            .unwrap()
            .expect("scenario should be stored");
        assert_eq!(row.scenario_name, "Getsudo/TMMI/Line1_Dec25_V1");
        assert_eq!(row.getsudo_month.as_deref(), Some("202512"));
    }

    #[tokio::test]
    async fn test_duplicate_scenario_is_rejected() {
        let state = setup_test_app_state().await;
        let db = state.db.clone();
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        server
            .post("/api/v1/scenarios")
            .json(&scenario_request())
            .await
            .assert_status(StatusCode::OK);

        let response = server
            .post("/api/v1/scenarios")
            .json(&scenario_request())
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(body.error_message, vec![DUPLICATE_SCENARIO_MESSAGE.to_string()]);

        let rows = Scenario::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_version_follows_inactive_scenarios() {
        let state = setup_test_app_state().await;
        let db = state.db.clone();
        for version in 1..=3 {
            seed_inactive(&db, version).await;
        }
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        let response = server
            .post("/api/v1/scenarios")
            .json(&scenario_request())
            .await;
        response.assert_status(StatusCode::OK);

        let active = Scenario::find()
            .filter(scenario::Column::IsActive.eq(true))
            .all(&db)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].scenario_name, "AP/TMMI/Line1_Jan26_V4");
    }

    #[tokio::test]
    async fn test_field_errors_are_reported_together() {
        let state = setup_test_app_state().await;
        let db = state.db.clone();
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        let mut request = scenario_request();
        request.plan_type = "XYZ".to_string();
        request.user_email = "a@b.org".to_string();

        let response = server.post("/api/v1/scenarios").json(&request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(
            body.error_message,
            vec![TYPE_MESSAGE.to_string(), INVALID_EMAIL_MESSAGE.to_string()]
        );

        assert!(Scenario::find().all(&db).await.unwrap().is_empty());
        assert!(user_config::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_key_is_rejected() {
        let state = setup_test_app_state().await;
        let db = state.db.clone();
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        let mut body = serde_json::to_value(scenario_request()).unwrap();
        body["comment"] = serde_json::json!("extra");

        let response = server.post("/api/v1/scenarios").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(
            body.error_message,
            vec![r#"ValidationError: "comment" is not allowed."#.to_string()]
        );
        assert!(Scenario::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_object_is_internal_error() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/scenarios")
            .json(&serde_json::json!({}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: SystemErrorResponse = response.json();
        assert_eq!(body.error_message, INTERNAL_SERVER_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_body_is_internal_error() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/scenarios")
            .text("{\"type\": \"AP\",")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["errorMessage"], INTERNAL_SERVER_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_string_fields_are_validation_errors() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let mut body = serde_json::to_value(scenario_request()).unwrap();
        body["namc"] = serde_json::json!(42);

        let response = server.post("/api/v1/scenarios").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ValidationErrorResponse = response.json();
        assert_eq!(
            body.error_message,
            vec![planning::validation::NAMC_MESSAGE.to_string()]
        );
    }
}
