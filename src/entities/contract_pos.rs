use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// POS unit attached to a contract. Price and costs are snapshots taken at
/// attachment time and do not follow the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contract_poses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contract_id: i32,
    pub pos_id: i32,
    pub price: Decimal,
    pub hardware_cost: Decimal,
    pub software_cost: Decimal,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contract::Entity",
        from = "Column::ContractId",
        to = "super::contract::Column::Id"
    )]
    Contract,
    #[sea_orm(
        belongs_to = "super::pos::Entity",
        from = "Column::PosId",
        to = "super::pos::Column::Id"
    )]
    Pos,
}

impl Related<super::contract::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl Related<super::pos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
