use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lead-tracking record. `last_updated_by` is re-stamped from the acting
/// admin on every update, independently of `created_by`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "marketing_goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trading_name: String,
    pub legal_name: Option<String>,
    pub business_field: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
    pub status: GoalStatus,
    pub created_by: Option<i32>,
    pub last_updated_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

/// Pipeline state. No transition graph is enforced; any status may follow
/// any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum GoalStatus {
    #[sea_orm(string_value = "P")]
    #[serde(rename = "P")]
    Pending,
    #[sea_orm(string_value = "W")]
    #[serde(rename = "W")]
    Waiting,
    #[sea_orm(string_value = "A")]
    #[serde(rename = "A")]
    Accepted,
    #[sea_orm(string_value = "R")]
    #[serde(rename = "R")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
