use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Consumable paper-roll order. Tied to the costumer, not to a single
/// contract; the API resolves the costumer from the contract named in the
/// request path.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "paper_rolls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub costumer_id: i32,
    pub amount: i32,
    pub cost: Decimal,
    pub price: Decimal,
    pub direct_debit_cost: Decimal,
    pub ordered_date: DateTimeUtc,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::costumer::Entity",
        from = "Column::CostumerId",
        to = "super::costumer::Column::Id"
    )]
    Costumer,
}

impl Related<super::costumer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Costumer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
