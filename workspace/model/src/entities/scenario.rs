use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// The planning category a scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum PlanType {
    #[sea_orm(string_value = "Getsudo")]
    Getsudo,
    #[sea_orm(string_value = "AP")]
    Ap,
}

impl PlanType {
    /// The wire and storage token of the plan type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Getsudo => "Getsudo",
            PlanType::Ap => "AP",
        }
    }

    /// Parses the exact wire token; matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Getsudo" => Some(PlanType::Getsudo),
            "AP" => Some(PlanType::Ap),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ScenarioStatus {
    #[sea_orm(string_value = "NOT_STARTED")]
    NotStarted,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

/// A supply-planning scenario scoped to plan type, NAMC, line and cycle.
///
/// Rows are never deleted. Superseded scenarios are flagged inactive and keep
/// counting towards the version of the next scenario created for the same
/// (plan type, NAMC, line, cycle).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scenarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `{type}/{NAMC}/{line}_{cycle}_V{version}`
    pub scenario_name: String,
    pub namc: String,
    pub line: String,
    pub plan_type: PlanType,
    /// `YYYYMM`
    pub start_month_year: String,
    /// `YYYYMM`
    pub end_month_year: String,
    /// `MMMYY`, one month before the start.
    pub scenario_cycle: String,
    /// Only populated for Getsudo plans.
    pub getsudo_month: Option<String>,
    pub scenario_status: ScenarioStatus,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    pub user_email: String,
    pub user_name: String,
    pub last_updated: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
