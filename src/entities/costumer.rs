use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Merchant record ("costumer" is the domain spelling). Partner fields are
/// only meaningful for non-sole-trader legal entities and are cleared by the
/// service layer otherwise.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "costumers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trading_name: String,
    pub legal_name: String,
    pub business_type: BusinessType,
    pub legal_entity: LegalEntity,
    pub registered_address: String,
    pub registered_postal_code: String,
    pub business_address: Option<String>,
    pub business_postal_code: String,
    pub country_id: Option<i32>,
    pub company_number: String,
    pub land_line: String,
    pub business_email: String,
    pub website: Option<String>,
    pub director_name: String,
    pub director_phone: String,
    pub director_email: String,
    pub director_address: String,
    pub director_postal_code: String,
    pub director_nationality: Option<String>,
    pub director_birth_date: Option<Date>,
    pub partner_name: Option<String>,
    pub partner_address: Option<String>,
    pub partner_nationality: Option<String>,
    /// Partner shareholding percentage, 0-100.
    pub shareholder: Option<i32>,
    pub sort_code: String,
    pub issuing_bank: String,
    pub account_number: String,
    /// Must equal `legal_name`; enforced before every save.
    pub business_bank_name: String,
    pub note: Option<String>,
    pub created_by: Option<i32>,
    pub last_updated_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum BusinessType {
    #[sea_orm(string_value = "RT")]
    #[serde(rename = "RT")]
    Retail,
    #[sea_orm(string_value = "ET")]
    #[serde(rename = "ET")]
    Ecommerce,
    #[sea_orm(string_value = "RS")]
    #[serde(rename = "RS")]
    Restaurant,
    #[sea_orm(string_value = "OT")]
    #[serde(rename = "OT")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum LegalEntity {
    #[sea_orm(string_value = "ST")]
    #[serde(rename = "ST")]
    SoleTrader,
    #[sea_orm(string_value = "LTD")]
    #[serde(rename = "LTD")]
    Limited,
    #[sea_orm(string_value = "PT")]
    #[serde(rename = "PT")]
    Partnership,
    #[sea_orm(string_value = "LLP")]
    #[serde(rename = "LLP")]
    Llp,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id"
    )]
    Country,
    #[sea_orm(has_many = "super::contract::Entity")]
    Contracts,
    #[sea_orm(has_many = "super::paper_roll::Entity")]
    PaperRolls,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::contract::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
