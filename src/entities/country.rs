use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Country reference data. The abbreviation is derived from the name at save
/// time when the caller does not supply one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub code: String,
    pub abbreviation: String,
    pub is_covered: bool,
    /// Map coordinates for the coverage dashboard.
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::costumer::Entity")]
    Costumers,
}

impl Related<super::costumer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Costumers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
