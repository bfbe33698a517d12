use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service agreement for one merchant. `total_cost` / `total_price` are
/// recomputed from attachment snapshots whenever a POS or service is
/// attached.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub costumer_id: i32,
    /// Share of card turnover taken face to face, 0-100.
    pub face_to_face_sales: i32,
    /// Average transaction value.
    pub atv: Decimal,
    pub annual_card_turnover: Decimal,
    pub annual_total_turnover: Decimal,
    pub interchange: f64,
    pub authorization_fee: f64,
    pub pci_dss: f64,
    pub acquirer: Acquirer,
    pub mid: Option<String>,
    pub amex_mid: Option<String>,
    pub ecommerce_mid: Option<String>,
    pub tid: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub pci_due_date: Option<Date>,
    pub live_date: Option<Date>,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

/// Acquiring bank underwriting the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum Acquirer {
    #[sea_orm(string_value = "EP")]
    #[serde(rename = "EP")]
    Elavon,
    #[sea_orm(string_value = "FD")]
    #[serde(rename = "FD")]
    FirstData,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::costumer::Entity",
        from = "Column::CostumerId",
        to = "super::costumer::Column::Id"
    )]
    Costumer,
    #[sea_orm(has_many = "super::contract_pos::Entity")]
    ContractPoses,
    #[sea_orm(has_many = "super::contract_service::Entity")]
    ContractServices,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
    #[sea_orm(has_many = "super::mid_revenue::Entity")]
    MidRevenues,
}

impl Related<super::costumer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Costumer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
