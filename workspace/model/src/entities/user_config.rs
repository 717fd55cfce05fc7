use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

use super::scenario::PlanType;

/// The last scenario configuration a user created, one row per email.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_email: String,
    pub user_name: String,
    pub namc: String,
    pub line: String,
    pub plan_type: PlanType,
    pub last_updated: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
