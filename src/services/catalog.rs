use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::{
    admin, contract_pos, contract_service, costumer, country, pos, pos_model, virtual_service,
};
use crate::errors::ServiceError;
use rust_decimal::Decimal;

/// Service for the reference-data catalogs (countries, virtual services) and
/// the advisory is-used checks.
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
}

/// Derive the catalog abbreviation from a country name: first three
/// characters, uppercased.
pub fn derive_abbreviation(name: &str) -> String {
    name.chars().take(3).collect::<String>().to_uppercase()
}

impl CatalogService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// List countries ordered by abbreviation.
    #[instrument(skip(self))]
    pub async fn list_countries(&self) -> Result<Vec<country::Model>, ServiceError> {
        Ok(country::Entity::find()
            .order_by_asc(country::Column::Abbreviation)
            .all(&*self.db)
            .await?)
    }

    /// Create a country, deriving the abbreviation when it is not supplied.
    #[instrument(skip(self, input))]
    pub async fn create_country(
        &self,
        input: CreateCountryInput,
        created_by: i32,
    ) -> Result<country::Model, ServiceError> {
        let existing = country::Entity::find()
            .filter(country::Column::Name.eq(&input.name))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::ValidationError(
                "name: country already exists".to_string(),
            ));
        }

        let abbreviation = match input.abbreviation {
            Some(a) if !a.trim().is_empty() => a,
            _ => derive_abbreviation(&input.name),
        };

        let country = country::ActiveModel {
            name: Set(input.name),
            code: Set(input.code),
            abbreviation: Set(abbreviation),
            is_covered: Set(input.is_covered.unwrap_or(false)),
            x: Set(input.x),
            y: Set(input.y),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let country = country.insert(&*self.db).await?;
        info!("Country created: {} ({})", country.name, country.id);
        Ok(country)
    }

    /// List virtual services ordered by name.
    #[instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<virtual_service::Model>, ServiceError> {
        Ok(virtual_service::Entity::find()
            .order_by_asc(virtual_service::Column::Name)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_service(
        &self,
        input: CreateServiceInput,
        created_by: i32,
    ) -> Result<virtual_service::Model, ServiceError> {
        let existing = virtual_service::Entity::find()
            .filter(virtual_service::Column::Name.eq(&input.name))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::ValidationError(
                "name: service already exists".to_string(),
            ));
        }

        let service = virtual_service::ActiveModel {
            name: Set(input.name),
            price: Set(input.price),
            cost: Set(input.cost),
            is_available: Set(input.is_available.unwrap_or(true)),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(service.insert(&*self.db).await?)
    }

    /// Partial update of a virtual service.
    #[instrument(skip(self, input))]
    pub async fn update_service(
        &self,
        service_id: i32,
        input: UpdateServiceInput,
    ) -> Result<virtual_service::Model, ServiceError> {
        let service = virtual_service::Entity::find_by_id(service_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Virtual service {} not found", service_id))
            })?;

        let mut service: virtual_service::ActiveModel = service.into();
        if let Some(name) = input.name {
            service.name = Set(name);
        }
        if let Some(price) = input.price {
            service.price = Set(Some(price));
        }
        if let Some(cost) = input.cost {
            service.cost = Set(Some(cost));
        }
        if let Some(is_available) = input.is_available {
            service.is_available = Set(is_available);
        }

        Ok(service.update(&*self.db).await?)
    }

    /// Advisory dependent-existence check. Reports whether any record still
    /// references the given catalog entity; deletion guards stay with the
    /// caller.
    #[instrument(skip(self))]
    pub async fn is_used(&self, kind: UsedEntityKind, id: i32) -> Result<bool, ServiceError> {
        let db = &*self.db;

        let used = match kind {
            UsedEntityKind::Country => {
                self.ensure_exists::<country::Entity>(id, "Country").await?;
                let by_costumers = costumer::Entity::find()
                    .filter(costumer::Column::CountryId.eq(id))
                    .count(db)
                    .await?;
                let by_admins = admin::Entity::find()
                    .filter(admin::Column::NationalityId.eq(id))
                    .count(db)
                    .await?;
                by_costumers + by_admins > 0
            }
            UsedEntityKind::Company => {
                self.ensure_exists::<crate::entities::pos_company::Entity>(id, "POS company")
                    .await?;
                pos_model::Entity::find()
                    .filter(pos_model::Column::CompanyId.eq(id))
                    .count(db)
                    .await?
                    > 0
            }
            UsedEntityKind::Model => {
                self.ensure_exists::<pos_model::Entity>(id, "POS model")
                    .await?;
                pos::Entity::find()
                    .filter(pos::Column::ModelId.eq(id))
                    .count(db)
                    .await?
                    > 0
            }
            UsedEntityKind::Pos => {
                self.ensure_exists::<pos::Entity>(id, "POS").await?;
                contract_pos::Entity::find()
                    .filter(contract_pos::Column::PosId.eq(id))
                    .count(db)
                    .await?
                    > 0
            }
            UsedEntityKind::Service => {
                self.ensure_exists::<virtual_service::Entity>(id, "Virtual service")
                    .await?;
                contract_service::Entity::find()
                    .filter(contract_service::Column::ServiceId.eq(id))
                    .count(db)
                    .await?
                    > 0
            }
        };

        Ok(used)
    }

    async fn ensure_exists<E>(&self, id: i32, label: &str) -> Result<(), ServiceError>
    where
        E: EntityTrait,
        E::PrimaryKey: sea_orm::PrimaryKeyTrait<ValueType = i32>,
    {
        E::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("{} {} not found", label, id)))
    }
}

/// Catalog entity kinds accepted by the is-used check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsedEntityKind {
    Country,
    Company,
    Model,
    Pos,
    Service,
}

impl FromStr for UsedEntityKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(Self::Country),
            "company" => Ok(Self::Company),
            "model" => Ok(Self::Model),
            "pos" => Ok(Self::Pos),
            "service" => Ok(Self::Service),
            other => Err(ServiceError::NotFound(format!(
                "Unknown entity kind '{}'",
                other
            ))),
        }
    }
}

/// Input for creating a country.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCountryInput {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 10))]
    pub code: String,
    pub abbreviation: Option<String>,
    pub is_covered: Option<bool>,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceInput {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviation_takes_the_first_three_letters_uppercased() {
        assert_eq!(derive_abbreviation("United Kingdom"), "UNI");
        assert_eq!(derive_abbreviation("iran"), "IRA");
    }

    #[test]
    fn abbreviation_handles_short_names() {
        assert_eq!(derive_abbreviation("us"), "US");
        assert_eq!(derive_abbreviation(""), "");
    }

    #[test]
    fn entity_kinds_parse_from_path_segments() {
        assert_eq!(
            UsedEntityKind::from_str("country").unwrap(),
            UsedEntityKind::Country
        );
        assert_eq!(UsedEntityKind::from_str("pos").unwrap(), UsedEntityKind::Pos);
        assert!(UsedEntityKind::from_str("warehouse").is_err());
    }
}
