use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pos_models")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub company_id: i32,
    pub hardware_cost: Decimal,
    pub software_cost: Decimal,
    pub price: Decimal,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pos_company::Entity",
        from = "Column::CompanyId",
        to = "super::pos_company::Column::Id"
    )]
    Company,
    #[sea_orm(has_many = "super::pos::Entity")]
    Poses,
}

impl Related<super::pos_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::pos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
