use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A physical POS unit. The serial number length must match the
/// `serial_number_length` configured on the model's company; the rule is
/// enforced in the service layer on create and update.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "poses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub serial_number: String,
    pub pos_type: PosType,
    pub model_id: i32,
    /// Whether the unit is reseller-owned rather than rented from the vendor.
    pub is_own: bool,
    pub is_active: bool,
    pub note: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum PosType {
    #[sea_orm(string_value = "D")]
    #[serde(rename = "D")]
    Desktop,
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Mobile,
    #[sea_orm(string_value = "P")]
    #[serde(rename = "P")]
    Portable,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pos_model::Entity",
        from = "Column::ModelId",
        to = "super::pos_model::Column::Id"
    )]
    Model,
    #[sea_orm(has_many = "super::contract_pos::Entity")]
    ContractPoses,
}

impl Related<super::pos_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Model.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
