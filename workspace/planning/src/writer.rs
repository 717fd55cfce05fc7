use chrono::NaiveDateTime;
use model::entities::scenario::{self, PlanType, ScenarioStatus};
use model::entities::user_config;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};
use tracing::{debug, info, instrument, trace};

use crate::error::Result;
use crate::existence::ScenarioSlot;
use crate::store::{NewScenario, ScenarioStore, UserConfigUpdate};
use crate::validation::ScenarioRequest;

/// Persists a validated request under the name and cycle assigned by the
/// existence check.
///
/// Start and end periods come from the submitted months, not from the
/// cycle. `getsudo_month` is only set for Getsudo plans.
#[instrument(skip(store))]
pub async fn write_scenario<S: ScenarioStore + ?Sized>(
    store: &S,
    request: &ScenarioRequest,
    slot: &ScenarioSlot,
) -> Result<scenario::Model> {
    let scenario = new_scenario(request, slot);
    let user_config = UserConfigUpdate {
        user_email: request.user_email.clone(),
        user_name: request.user_name.clone(),
        namc: request.namc.clone(),
        line: request.line.clone(),
        plan_type: request.plan_type,
    };

    let created = store.insert_scenario(scenario, user_config).await?;
    info!(
        "Scenario created: id={}, name={}",
        created.id, created.scenario_name
    );
    Ok(created)
}

/// Column values for the new scenario row.
pub fn new_scenario(request: &ScenarioRequest, slot: &ScenarioSlot) -> NewScenario {
    let getsudo_month = match request.plan_type {
        PlanType::Getsudo => Some(slot.cycle.period_token()),
        PlanType::Ap => None,
    };

    NewScenario {
        scenario_name: slot.scenario_name.clone(),
        namc: request.namc.clone(),
        line: request.line.clone(),
        plan_type: request.plan_type,
        start_month_year: request.start.period_token(),
        end_month_year: request.end.period_token(),
        scenario_cycle: slot.cycle.token(),
        getsudo_month,
        user_email: request.user_email.clone(),
        user_name: request.user_name.clone(),
    }
}

/// Inserts a scenario row as active and not started.
pub async fn insert_scenario_row<C: ConnectionTrait>(
    conn: &C,
    scenario: NewScenario,
    now: NaiveDateTime,
) -> std::result::Result<scenario::Model, DbErr> {
    trace!("Inserting scenario {}", scenario.scenario_name);
    let model = scenario::ActiveModel {
        scenario_name: Set(scenario.scenario_name),
        namc: Set(scenario.namc),
        line: Set(scenario.line),
        plan_type: Set(scenario.plan_type),
        start_month_year: Set(scenario.start_month_year),
        end_month_year: Set(scenario.end_month_year),
        scenario_cycle: Set(scenario.scenario_cycle),
        getsudo_month: Set(scenario.getsudo_month),
        scenario_status: Set(ScenarioStatus::NotStarted),
        is_active: Set(true),
        user_email: Set(scenario.user_email),
        user_name: Set(scenario.user_name),
        last_updated: Set(now),
        ..Default::default()
    };

    model.insert(conn).await
}

/// Inserts the user's config or overwrites the existing row for their email.
pub async fn upsert_user_config<C: ConnectionTrait>(
    conn: &C,
    config: UserConfigUpdate,
    now: NaiveDateTime,
) -> std::result::Result<(), DbErr> {
    trace!("Upserting user config for {}", config.user_email);
    let model = user_config::ActiveModel {
        user_email: Set(config.user_email),
        user_name: Set(config.user_name),
        namc: Set(config.namc),
        line: Set(config.line),
        plan_type: Set(config.plan_type),
        last_updated: Set(now),
    };

    user_config::Entity::insert(model)
        .on_conflict(
            OnConflict::column(user_config::Column::UserEmail)
                .update_columns([
                    user_config::Column::UserName,
                    user_config::Column::Namc,
                    user_config::Column::Line,
                    user_config::Column::PlanType,
                    user_config::Column::LastUpdated,
                ])
                .to_owned(),
        )
        .exec(conn)
        .await?;

    debug!("User config upserted");
    Ok(())
}
