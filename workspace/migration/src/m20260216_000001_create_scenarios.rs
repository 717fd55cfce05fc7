use crate::entity_iden::EntityIden;
use model::entities::prelude::*;
use model::entities::{scenario, user_config};
use sea_orm_migration::{prelude::*, schema::*};

/// At most one active scenario per (plan type, NAMC, line, cycle).
const SINGLE_ACTIVE_SCENARIO_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_scenarios_single_active ON scenarios (plan_type, namc, line, scenario_cycle) \
    WHERE is_active";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create scenarios table
        manager
            .create_table(
                Table::create()
                    .table(Scenario::table())
                    .if_not_exists()
                    .col(pk_auto(Scenario::column(scenario::Column::Id)))
                    .col(string(Scenario::column(scenario::Column::ScenarioName)))
                    .col(string(Scenario::column(scenario::Column::Namc)))
                    .col(string(Scenario::column(scenario::Column::Line)))
                    .col(string_len(Scenario::column(scenario::Column::PlanType), 10))
                    .col(string_len(Scenario::column(scenario::Column::StartMonthYear), 6))
                    .col(string_len(Scenario::column(scenario::Column::EndMonthYear), 6))
                    .col(string_len(Scenario::column(scenario::Column::ScenarioCycle), 5))
                    .col(string_len_null(Scenario::column(scenario::Column::GetsudoMonth), 6))
                    .col(
                        string_len(Scenario::column(scenario::Column::ScenarioStatus), 20)
                            .default("NOT_STARTED"),
                    )
                    .col(boolean(Scenario::column(scenario::Column::IsActive)).default(true))
                    .col(string(Scenario::column(scenario::Column::UserEmail)))
                    .col(string(Scenario::column(scenario::Column::UserName)))
                    .col(
                        date_time(Scenario::column(scenario::Column::LastUpdated))
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup index used by the existence check
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scenarios_identity")
                    .table(Scenario::table())
                    .col(Scenario::column(scenario::Column::PlanType))
                    .col(Scenario::column(scenario::Column::Namc))
                    .col(Scenario::column(scenario::Column::Line))
                    .col(Scenario::column(scenario::Column::ScenarioCycle))
                    .to_owned(),
            )
            .await?;

        // Partial indexes are not expressible through the index builder.
        manager
            .get_connection()
            .execute_unprepared(SINGLE_ACTIVE_SCENARIO_INDEX)
            .await?;

        // Create user_configs table
        manager
            .create_table(
                Table::create()
                    .table(UserConfig::table())
                    .if_not_exists()
                    .col(string(UserConfig::column(user_config::Column::UserEmail)).primary_key())
                    .col(string(UserConfig::column(user_config::Column::UserName)))
                    .col(string(UserConfig::column(user_config::Column::Namc)))
                    .col(string(UserConfig::column(user_config::Column::Line)))
                    .col(string_len(UserConfig::column(user_config::Column::PlanType), 10))
                    .col(
                        date_time(UserConfig::column(user_config::Column::LastUpdated))
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserConfig::table()).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Scenario::table()).to_owned())
            .await
    }
}
