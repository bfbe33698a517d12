use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::pos::PosType;
use crate::entities::{pos, pos_company, pos_model};
use crate::errors::ServiceError;
use rust_decimal::Decimal;

/// Service for the POS hardware hierarchy: companies, models and physical
/// units.
#[derive(Clone)]
pub struct PosService {
    db: Arc<DatabaseConnection>,
}

impl PosService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// List companies ordered by name.
    #[instrument(skip(self))]
    pub async fn list_companies(&self) -> Result<Vec<pos_company::Model>, ServiceError> {
        Ok(pos_company::Entity::find()
            .order_by_asc(pos_company::Column::Name)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_company(
        &self,
        input: CreateCompanyInput,
        created_by: i32,
    ) -> Result<pos_company::Model, ServiceError> {
        let company = pos_company::ActiveModel {
            name: Set(input.name),
            serial_number_length: Set(input.serial_number_length),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let company = company.insert(&*self.db).await?;
        info!("POS company created: {} ({})", company.name, company.id);
        Ok(company)
    }

    async fn get_company(&self, company_id: i32) -> Result<pos_company::Model, ServiceError> {
        pos_company::Entity::find_by_id(company_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("POS company {} not found", company_id)))
    }

    /// Create a model under a company. The company id comes from the request
    /// path, never from the body.
    #[instrument(skip(self, input))]
    pub async fn create_model(
        &self,
        company_id: i32,
        input: CreateModelInput,
        created_by: i32,
    ) -> Result<pos_model::Model, ServiceError> {
        self.get_company(company_id).await?;

        let model = pos_model::ActiveModel {
            name: Set(input.name),
            company_id: Set(company_id),
            hardware_cost: Set(input.hardware_cost),
            software_cost: Set(input.software_cost),
            price: Set(input.price),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(model.insert(&*self.db).await?)
    }

    /// List every model, ordered by name.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> Result<Vec<pos_model::Model>, ServiceError> {
        Ok(pos_model::Entity::find()
            .order_by_asc(pos_model::Column::Name)
            .all(&*self.db)
            .await?)
    }

    /// List the models of one company, ordered by name.
    #[instrument(skip(self))]
    pub async fn list_models_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<pos_model::Model>, ServiceError> {
        self.get_company(company_id).await?;

        Ok(pos_model::Entity::find()
            .filter(pos_model::Column::CompanyId.eq(company_id))
            .order_by_asc(pos_model::Column::Name)
            .all(&*self.db)
            .await?)
    }

    /// List POS units ordered by serial number.
    #[instrument(skip(self))]
    pub async fn list_poses(&self) -> Result<Vec<pos::Model>, ServiceError> {
        Ok(pos::Entity::find()
            .order_by_asc(pos::Column::SerialNumber)
            .all(&*self.db)
            .await?)
    }

    /// Create a POS unit. The serial number length must equal the
    /// `serial_number_length` of the model's company.
    #[instrument(skip(self, input))]
    pub async fn create_pos(
        &self,
        input: CreatePosInput,
        created_by: i32,
    ) -> Result<pos::Model, ServiceError> {
        self.check_serial_number(input.model_id, &input.serial_number)
            .await?;

        let unit = pos::ActiveModel {
            serial_number: Set(input.serial_number),
            pos_type: Set(input.pos_type),
            model_id: Set(input.model_id),
            is_own: Set(input.is_own.unwrap_or(true)),
            is_active: Set(true),
            note: Set(input.note),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let unit = unit.insert(&*self.db).await?;
        info!("POS created: {} ({})", unit.serial_number, unit.id);
        Ok(unit)
    }

    /// Partial update of a POS unit. The serial rule is re-checked against
    /// the effective model and serial number, so a partial write can never
    /// leave an invalid combination behind.
    #[instrument(skip(self, input))]
    pub async fn update_pos(
        &self,
        pos_id: i32,
        input: UpdatePosInput,
    ) -> Result<pos::Model, ServiceError> {
        let unit = self.get_pos(pos_id).await?;

        let model_id = input.model_id.unwrap_or(unit.model_id);
        let serial_number = input
            .serial_number
            .clone()
            .unwrap_or_else(|| unit.serial_number.clone());
        self.check_serial_number(model_id, &serial_number).await?;

        let mut unit: pos::ActiveModel = unit.into();
        unit.serial_number = Set(serial_number);
        unit.model_id = Set(model_id);
        if let Some(pos_type) = input.pos_type {
            unit.pos_type = Set(pos_type);
        }
        if let Some(is_own) = input.is_own {
            unit.is_own = Set(is_own);
        }
        if let Some(note) = input.note {
            unit.note = Set(Some(note));
        }

        Ok(unit.update(&*self.db).await?)
    }

    /// Flip the active flag of a POS unit.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, pos_id: i32) -> Result<pos::Model, ServiceError> {
        let unit = self.get_pos(pos_id).await?;
        let is_active = unit.is_active;
        let mut unit: pos::ActiveModel = unit.into();
        unit.is_active = Set(!is_active);
        Ok(unit.update(&*self.db).await?)
    }

    async fn get_pos(&self, pos_id: i32) -> Result<pos::Model, ServiceError> {
        pos::Entity::find_by_id(pos_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("POS {} not found", pos_id)))
    }

    /// Resolve the model's company and compare the configured serial length
    /// with the candidate serial number.
    async fn check_serial_number(
        &self,
        model_id: i32,
        serial_number: &str,
    ) -> Result<(), ServiceError> {
        let model = pos_model::Entity::find_by_id(model_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("POS model {} not found", model_id)))?;
        let company = pos_company::Entity::find_by_id(model.company_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("POS company {} not found", model.company_id))
            })?;

        check_serial_length(serial_number, company.serial_number_length)
    }
}

/// The serial-number rule shared by create and update.
fn check_serial_length(serial_number: &str, expected: i32) -> Result<(), ServiceError> {
    if serial_number.chars().count() as i32 != expected {
        return Err(ServiceError::ValidationError(format!(
            "serial_number: must be exactly {} characters for this company",
            expected
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(min = 1, max = 55))]
    pub serial_number_length: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateModelInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub hardware_cost: Decimal,
    pub software_cost: Decimal,
    pub price: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePosInput {
    #[validate(length(min = 1, max = 55))]
    pub serial_number: String,
    pub pos_type: PosType,
    pub model_id: i32,
    pub is_own: Option<bool>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePosInput {
    #[validate(length(min = 1, max = 55))]
    pub serial_number: Option<String>,
    pub pos_type: Option<PosType>,
    pub model_id: Option<i32>,
    pub is_own: Option<bool>,
    pub note: Option<String>,
}
