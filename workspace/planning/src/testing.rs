//! Test fixtures: an in-memory store, a store that always fails, and an
//! in-memory SQLite database with migrations applied.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Month, Utc};
use migration::{Migrator, MigratorTrait};
use model::entities::scenario::{self, PlanType, ScenarioStatus};
use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::cycle::Cycle;
use crate::error::{PlanningError, Result};
use crate::period::MonthYear;
use crate::store::{
    ExistingScenario, NewScenario, ScenarioIdentity, ScenarioStore, UserConfigUpdate,
};
use crate::validation::ScenarioRequest;

/// A valid request for TMMI/Line1 starting Feb 2026 (cycle `Jan26`).
pub fn request(plan_type: PlanType) -> ScenarioRequest {
    ScenarioRequest {
        plan_type,
        namc: "tmmi".to_string(),
        line: "Line1".to_string(),
        start: MonthYear::new(Month::February, 2026),
        end: MonthYear::new(Month::March, 2026),
        user_name: "Priya Planner".to_string(),
        user_email: "planner@toyota.com".to_string(),
    }
}

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<(ScenarioIdentity, ExistingScenario)>>,
    created: Mutex<Vec<(NewScenario, UserConfigUpdate)>>,
}

impl MemoryStore {
    /// Stores a scenario with the same identity as `request`.
    pub fn seed(&self, request: &ScenarioRequest, is_active: bool) {
        let identity = ScenarioIdentity {
            plan_type: request.plan_type,
            namc: request.namc.clone(),
            line: request.line.clone(),
            cycle: Cycle::preceding(request.start).unwrap().token(),
        };
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push((
            identity,
            ExistingScenario {
                id,
                scenario_name: format!("seeded-{}", id),
                is_active,
            },
        ));
    }

    pub fn created(&self) -> Vec<(NewScenario, UserConfigUpdate)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScenarioStore for MemoryStore {
    async fn find_existing(&self, identity: &ScenarioIdentity) -> Result<Vec<ExistingScenario>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(row_identity, _)| row_identity == identity)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn insert_scenario(
        &self,
        scenario: NewScenario,
        user_config: UserConfigUpdate,
    ) -> Result<scenario::Model> {
        let id = self.rows.lock().unwrap().len() as i32 + 1;
        let model = scenario::Model {
            id,
            scenario_name: scenario.scenario_name.clone(),
            namc: scenario.namc.clone(),
            line: scenario.line.clone(),
            plan_type: scenario.plan_type,
            start_month_year: scenario.start_month_year.clone(),
            end_month_year: scenario.end_month_year.clone(),
            scenario_cycle: scenario.scenario_cycle.clone(),
            getsudo_month: scenario.getsudo_month.clone(),
            scenario_status: ScenarioStatus::NotStarted,
            is_active: true,
            user_email: scenario.user_email.clone(),
            user_name: scenario.user_name.clone(),
            last_updated: Utc::now().naive_utc(),
        };
        self.rows.lock().unwrap().push((
            ScenarioIdentity {
                plan_type: scenario.plan_type,
                namc: scenario.namc.clone(),
                line: scenario.line.clone(),
                cycle: scenario.scenario_cycle.clone(),
            },
            ExistingScenario::from(model.clone()),
        ));
        self.created.lock().unwrap().push((scenario, user_config));
        Ok(model)
    }
}

/// A store whose every operation fails with a connection error.
pub struct FailingStore;

#[async_trait]
impl ScenarioStore for FailingStore {
    async fn find_existing(&self, _identity: &ScenarioIdentity) -> Result<Vec<ExistingScenario>> {
        Err(PlanningError::Database(DbErr::Custom(
            "connection refused".to_string(),
        )))
    }

    async fn insert_scenario(
        &self,
        _scenario: NewScenario,
        _user_config: UserConfigUpdate,
    ) -> Result<scenario::Model> {
        Err(PlanningError::Database(DbErr::Custom(
            "connection refused".to_string(),
        )))
    }
}
