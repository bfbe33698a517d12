use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::costumer::{self, BusinessType, LegalEntity};
use crate::errors::ServiceError;

/// Service for merchant ("costumer") records.
#[derive(Clone)]
pub struct CostumerService {
    db: Arc<DatabaseConnection>,
}

impl CostumerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// List all costumers ordered by trading name.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<costumer::Model>, ServiceError> {
        Ok(costumer::Entity::find()
            .order_by_asc(costumer::Column::TradingName)
            .all(&*self.db)
            .await?)
    }

    /// Minimal id + name projection for lookup and autocomplete.
    #[instrument(skip(self))]
    pub async fn mini_list(&self) -> Result<Vec<CostumerMini>, ServiceError> {
        let costumers = costumer::Entity::find()
            .order_by_asc(costumer::Column::TradingName)
            .all(&*self.db)
            .await?;

        Ok(costumers
            .into_iter()
            .map(|c| CostumerMini {
                id: c.id,
                trading_name: c.trading_name,
                legal_name: c.legal_name,
            })
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, costumer_id: i32) -> Result<costumer::Model, ServiceError> {
        costumer::Entity::find_by_id(costumer_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Costumer {} not found", costumer_id)))
    }

    /// Create a costumer. Onboarding rules run before the insert, so an
    /// invalid record never reaches the database.
    #[instrument(skip(self, data))]
    pub async fn create(
        &self,
        mut data: CostumerData,
        created_by: i32,
    ) -> Result<costumer::Model, ServiceError> {
        apply_onboarding_rules(&mut data)?;

        let mut costumer = active_model_from_data(data);
        costumer.created_by = Set(Some(created_by));
        costumer.last_updated_by = Set(Some(created_by));
        costumer.created_at = Set(Utc::now());

        let costumer = costumer.insert(&*self.db).await?;
        info!(
            "Costumer created: {} ({})",
            costumer.trading_name, costumer.id
        );
        Ok(costumer)
    }

    /// Partial update. The patch is merged over the stored record and the
    /// onboarding rules run on the merged result, so a partial write can
    /// never bypass them. The acting admin is stamped as last updater.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        costumer_id: i32,
        patch: CostumerPatch,
        updated_by: i32,
    ) -> Result<costumer::Model, ServiceError> {
        let existing = self.get(costumer_id).await?;

        let mut data = CostumerData::from(existing.clone());
        patch.apply_to(&mut data);
        apply_onboarding_rules(&mut data)?;

        let mut costumer = active_model_from_data(data);
        costumer.id = Set(existing.id);
        costumer.created_by = Set(existing.created_by);
        costumer.created_at = Set(existing.created_at);
        costumer.last_updated_by = Set(Some(updated_by));

        Ok(costumer.update(&*self.db).await?)
    }
}

/// Full costumer field set: the create payload, and the merge target for
/// partial updates.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CostumerData {
    #[validate(length(min = 1, max = 255))]
    pub trading_name: String,
    #[validate(length(min = 1, max = 255))]
    pub legal_name: String,
    pub business_type: BusinessType,
    pub legal_entity: LegalEntity,
    #[validate(length(min = 1, max = 255))]
    pub registered_address: String,
    #[validate(length(min = 1, max = 50))]
    pub registered_postal_code: String,
    pub business_address: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub business_postal_code: String,
    pub country_id: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub company_number: String,
    #[validate(length(min = 1, max = 25))]
    pub land_line: String,
    #[validate(email)]
    pub business_email: String,
    pub website: Option<String>,
    #[validate(length(min = 1, max = 110))]
    pub director_name: String,
    #[validate(length(min = 1, max = 55))]
    pub director_phone: String,
    #[validate(email)]
    pub director_email: String,
    #[validate(length(min = 1, max = 255))]
    pub director_address: String,
    #[validate(length(min = 1, max = 55))]
    pub director_postal_code: String,
    pub director_nationality: Option<String>,
    pub director_birth_date: Option<chrono::NaiveDate>,
    pub partner_name: Option<String>,
    pub partner_address: Option<String>,
    pub partner_nationality: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub shareholder: Option<i32>,
    #[validate(length(min = 1, max = 25))]
    pub sort_code: String,
    #[validate(length(min = 1, max = 255))]
    pub issuing_bank: String,
    #[validate(length(min = 1, max = 50))]
    pub account_number: String,
    #[validate(length(min = 1, max = 255))]
    pub business_bank_name: String,
    pub note: Option<String>,
}

impl From<costumer::Model> for CostumerData {
    fn from(m: costumer::Model) -> Self {
        Self {
            trading_name: m.trading_name,
            legal_name: m.legal_name,
            business_type: m.business_type,
            legal_entity: m.legal_entity,
            registered_address: m.registered_address,
            registered_postal_code: m.registered_postal_code,
            business_address: m.business_address,
            business_postal_code: m.business_postal_code,
            country_id: m.country_id,
            company_number: m.company_number,
            land_line: m.land_line,
            business_email: m.business_email,
            website: m.website,
            director_name: m.director_name,
            director_phone: m.director_phone,
            director_email: m.director_email,
            director_address: m.director_address,
            director_postal_code: m.director_postal_code,
            director_nationality: m.director_nationality,
            director_birth_date: m.director_birth_date,
            partner_name: m.partner_name,
            partner_address: m.partner_address,
            partner_nationality: m.partner_nationality,
            shareholder: m.shareholder,
            sort_code: m.sort_code,
            issuing_bank: m.issuing_bank,
            account_number: m.account_number,
            business_bank_name: m.business_bank_name,
            note: m.note,
        }
    }
}

/// Partial update payload; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CostumerPatch {
    pub trading_name: Option<String>,
    pub legal_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub legal_entity: Option<LegalEntity>,
    pub registered_address: Option<String>,
    pub registered_postal_code: Option<String>,
    pub business_address: Option<String>,
    pub business_postal_code: Option<String>,
    pub country_id: Option<i32>,
    pub company_number: Option<String>,
    pub land_line: Option<String>,
    #[validate(email)]
    pub business_email: Option<String>,
    pub website: Option<String>,
    pub director_name: Option<String>,
    pub director_phone: Option<String>,
    #[validate(email)]
    pub director_email: Option<String>,
    pub director_address: Option<String>,
    pub director_postal_code: Option<String>,
    pub director_nationality: Option<String>,
    pub director_birth_date: Option<chrono::NaiveDate>,
    pub partner_name: Option<String>,
    pub partner_address: Option<String>,
    pub partner_nationality: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub shareholder: Option<i32>,
    pub sort_code: Option<String>,
    pub issuing_bank: Option<String>,
    pub account_number: Option<String>,
    pub business_bank_name: Option<String>,
    pub note: Option<String>,
}

impl CostumerPatch {
    fn apply_to(self, data: &mut CostumerData) {
        // Into covers both cases: identity for required fields, Some-wrapping
        // for nullable ones.
        macro_rules! merge {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = self.$field {
                        data.$field = value.into();
                    }
                )+
            };
        }

        merge!(
            trading_name,
            legal_name,
            business_type,
            legal_entity,
            registered_address,
            registered_postal_code,
            business_address,
            business_postal_code,
            country_id,
            company_number,
            land_line,
            business_email,
            website,
            director_name,
            director_phone,
            director_email,
            director_address,
            director_postal_code,
            director_nationality,
            director_birth_date,
            partner_name,
            partner_address,
            partner_nationality,
            shareholder,
            sort_code,
            issuing_bank,
            account_number,
            business_bank_name,
            note,
        );
    }
}

/// Minimal costumer projection for suggestion lists.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostumerMini {
    pub id: i32,
    pub trading_name: String,
    pub legal_name: String,
}

/// Cross-field onboarding rules, applied to the full merged record before
/// every save:
/// - the business bank account must be held under the legal name;
/// - shareholding is a percentage;
/// - sole traders have no partners, so partner fields are dropped silently.
pub fn apply_onboarding_rules(data: &mut CostumerData) -> Result<(), ServiceError> {
    if data.business_bank_name != data.legal_name {
        return Err(ServiceError::ValidationError(
            "business_bank_name: must equal legal_name".to_string(),
        ));
    }

    if let Some(share) = data.shareholder {
        if !(0..=100).contains(&share) {
            return Err(ServiceError::ValidationError(
                "shareholder: must be between 0 and 100".to_string(),
            ));
        }
    }

    if data.legal_entity == LegalEntity::SoleTrader {
        data.partner_name = None;
        data.partner_address = None;
        data.partner_nationality = None;
        data.shareholder = None;
    }

    Ok(())
}

fn active_model_from_data(data: CostumerData) -> costumer::ActiveModel {
    costumer::ActiveModel {
        trading_name: Set(data.trading_name),
        legal_name: Set(data.legal_name),
        business_type: Set(data.business_type),
        legal_entity: Set(data.legal_entity),
        registered_address: Set(data.registered_address),
        registered_postal_code: Set(data.registered_postal_code),
        business_address: Set(data.business_address),
        business_postal_code: Set(data.business_postal_code),
        country_id: Set(data.country_id),
        company_number: Set(data.company_number),
        land_line: Set(data.land_line),
        business_email: Set(data.business_email),
        website: Set(data.website),
        director_name: Set(data.director_name),
        director_phone: Set(data.director_phone),
        director_email: Set(data.director_email),
        director_address: Set(data.director_address),
        director_postal_code: Set(data.director_postal_code),
        director_nationality: Set(data.director_nationality),
        director_birth_date: Set(data.director_birth_date),
        partner_name: Set(data.partner_name),
        partner_address: Set(data.partner_address),
        partner_nationality: Set(data.partner_nationality),
        shareholder: Set(data.shareholder),
        sort_code: Set(data.sort_code),
        issuing_bank: Set(data.issuing_bank),
        account_number: Set(data.account_number),
        business_bank_name: Set(data.business_bank_name),
        note: Set(data.note),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(legal_entity: LegalEntity) -> CostumerData {
        CostumerData {
            trading_name: "Test".into(),
            legal_name: "Test".into(),
            business_type: BusinessType::Ecommerce,
            legal_entity,
            registered_address: "1 Test Street".into(),
            registered_postal_code: "0123".into(),
            business_address: None,
            business_postal_code: "0123".into(),
            country_id: None,
            company_number: "0123".into(),
            land_line: "0123".into(),
            business_email: "test@test.test".into(),
            website: None,
            director_name: "Test Director".into(),
            director_phone: "0123".into(),
            director_email: "test@test.test".into(),
            director_address: "1 Test Street".into(),
            director_postal_code: "0123".into(),
            director_nationality: None,
            director_birth_date: None,
            partner_name: Some("Partner".into()),
            partner_address: Some("2 Test Street".into()),
            partner_nationality: Some("British".into()),
            shareholder: Some(40),
            sort_code: "0123".into(),
            issuing_bank: "Test Bank".into(),
            account_number: "0123".into(),
            business_bank_name: "Test".into(),
            note: None,
        }
    }

    #[test]
    fn sole_traders_lose_partner_fields_silently() {
        let mut data = sample_data(LegalEntity::SoleTrader);
        apply_onboarding_rules(&mut data).unwrap();
        assert!(data.partner_name.is_none());
        assert!(data.partner_address.is_none());
        assert!(data.partner_nationality.is_none());
        assert!(data.shareholder.is_none());
    }

    #[test]
    fn partnerships_keep_partner_fields() {
        let mut data = sample_data(LegalEntity::Partnership);
        apply_onboarding_rules(&mut data).unwrap();
        assert_eq!(data.partner_name.as_deref(), Some("Partner"));
        assert_eq!(data.shareholder, Some(40));
    }

    #[test]
    fn bank_name_must_match_legal_name() {
        let mut data = sample_data(LegalEntity::Limited);
        data.business_bank_name = "Somebody Else".into();
        let err = apply_onboarding_rules(&mut data).unwrap_err();
        assert!(err.to_string().contains("business_bank_name"));
    }

    #[test]
    fn shareholder_outside_percent_range_is_rejected() {
        let mut data = sample_data(LegalEntity::Limited);
        data.shareholder = Some(120);
        assert!(apply_onboarding_rules(&mut data).is_err());
    }
}
