use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff ("admin") account. Admins are never hard-deleted; access is removed
/// by clearing `is_active`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub birth_date: Option<Date>,
    pub nationality_id: Option<i32>,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    /// Admin who created this account, when created through the API.
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::NationalityId",
        to = "super::country::Column::Id"
    )]
    Nationality,
    #[sea_orm(belongs_to = "Entity", from = "Column::CreatedBy", to = "Column::Id")]
    Creator,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nationality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
