use async_trait::async_trait;
use chrono::Utc;
use model::entities::scenario::{self, PlanType};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr,
    TransactionTrait,
};
use tracing::{debug, error, instrument, trace};

use crate::error::{PlanningError, Result};
use crate::validation::DUPLICATE_SCENARIO_MESSAGE;
use crate::writer::{insert_scenario_row, upsert_user_config};

/// The tuple a scenario's identity and version are scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScenarioIdentity {
    pub plan_type: PlanType,
    pub namc: String,
    pub line: String,
    /// Cycle token, `MMMYY`.
    pub cycle: String,
}

/// A previously created scenario sharing an identity with a new request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingScenario {
    pub id: i32,
    pub scenario_name: String,
    pub is_active: bool,
}

impl From<scenario::Model> for ExistingScenario {
    fn from(model: scenario::Model) -> Self {
        Self {
            id: model.id,
            scenario_name: model.scenario_name,
            is_active: model.is_active,
        }
    }
}

/// Column values for a scenario row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScenario {
    pub scenario_name: String,
    pub namc: String,
    pub line: String,
    pub plan_type: PlanType,
    pub start_month_year: String,
    pub end_month_year: String,
    pub scenario_cycle: String,
    pub getsudo_month: Option<String>,
    pub user_email: String,
    pub user_name: String,
}

/// The user's last known configuration, upserted with every new scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfigUpdate {
    pub user_email: String,
    pub user_name: String,
    pub namc: String,
    pub line: String,
    pub plan_type: PlanType,
}

/// Storage gateway for scenario creation.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    /// All scenarios with the given identity, active or not.
    async fn find_existing(&self, identity: &ScenarioIdentity) -> Result<Vec<ExistingScenario>>;

    /// Inserts `scenario` and upserts `user_config` atomically: either both
    /// are persisted or neither is.
    async fn insert_scenario(
        &self,
        scenario: NewScenario,
        user_config: UserConfigUpdate,
    ) -> Result<scenario::Model>;
}

/// [`ScenarioStore`] backed by a SeaORM connection pool.
///
/// Each call borrows a pooled connection for its own duration only; the
/// write path runs in a transaction that rolls back if dropped uncommitted.
#[derive(Debug, Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScenarioStore for DatabaseStore {
    #[instrument(skip(self))]
    async fn find_existing(&self, identity: &ScenarioIdentity) -> Result<Vec<ExistingScenario>> {
        trace!("Querying scenarios by identity");
        let scenarios = scenario::Entity::find()
            .filter(scenario::Column::PlanType.eq(identity.plan_type))
            .filter(scenario::Column::Namc.eq(identity.namc.as_str()))
            .filter(scenario::Column::Line.eq(identity.line.as_str()))
            .filter(scenario::Column::ScenarioCycle.eq(identity.cycle.as_str()))
            .order_by_asc(scenario::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query existing scenarios: {}", e);
                PlanningError::from(e)
            })?;

        debug!("Found {} existing scenarios", scenarios.len());
        Ok(scenarios.into_iter().map(ExistingScenario::from).collect())
    }

    #[instrument(skip(self))]
    async fn insert_scenario(
        &self,
        scenario: NewScenario,
        user_config: UserConfigUpdate,
    ) -> Result<scenario::Model> {
        let now = Utc::now().naive_utc();

        trace!("Beginning scenario transaction");
        let txn = self.db.begin().await?;

        let created = insert_scenario_row(&txn, scenario, now)
            .await
            .map_err(|e| match e.sql_err() {
                // Another request activated the same identity first.
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    PlanningError::Validation(vec![DUPLICATE_SCENARIO_MESSAGE.to_string()])
                }
                _ => {
                    error!("Failed to insert scenario: {}", e);
                    PlanningError::from(e)
                }
            })?;

        upsert_user_config(&txn, user_config, now).await.map_err(|e| {
            error!("Failed to upsert user config, rolling back: {}", e);
            PlanningError::from(e)
        })?;

        txn.commit().await?;
        debug!("Committed scenario {}", created.scenario_name);
        Ok(created)
    }
}
