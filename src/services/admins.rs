use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::auth::{self, AuthService};
use crate::entities::admin;
use crate::errors::ServiceError;

const BAD_CREDENTIALS: &str = "Unable to authenticate admin with the provided credentials";

/// Service for managing admin accounts and credentials.
#[derive(Clone)]
pub struct AdminService {
    db: Arc<DatabaseConnection>,
    auth: Arc<AuthService>,
}

impl AdminService {
    pub fn new(db: Arc<DatabaseConnection>, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }

    /// Register a new admin account. The requester's id is recorded as the
    /// creator; the password is stored as an argon2 hash.
    #[instrument(skip(self, input))]
    pub async fn register(
        &self,
        input: RegisterAdminInput,
        created_by: Option<i32>,
    ) -> Result<admin::Model, ServiceError> {
        let existing = admin::Entity::find()
            .filter(admin::Column::Username.eq(&input.username))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::ValidationError(
                "username: already in use".to_string(),
            ));
        }

        let password_hash = auth::hash_password(&input.password)
            .map_err(|e| ServiceError::InternalError(e.to_string()))?;

        let admin = admin::ActiveModel {
            username: Set(input.username),
            name: Set(input.name),
            email: Set(input.email),
            password_hash: Set(password_hash),
            title: Set(input.title),
            address: Set(input.address),
            phone: Set(input.phone),
            postal_code: Set(input.postal_code),
            birth_date: Set(input.birth_date),
            nationality_id: Set(input.nationality_id),
            is_staff: Set(input.is_staff.unwrap_or(false)),
            is_active: Set(true),
            is_superuser: Set(false),
            created_by: Set(created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let admin = admin.insert(&*self.db).await?;
        info!("Admin registered: {} ({})", admin.username, admin.id);
        Ok(admin)
    }

    /// Exchange username and password for a bearer token. Every failure mode
    /// yields the same message so callers cannot probe which field was wrong.
    #[instrument(skip(self, input))]
    pub async fn authenticate(&self, input: TokenInput) -> Result<TokenResponse, ServiceError> {
        let admin = admin::Entity::find()
            .filter(admin::Column::Username.eq(&input.username))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::AuthError(BAD_CREDENTIALS.to_string()))?;

        let password_matches = auth::verify_password(&input.password, &admin.password_hash)
            .map_err(|e| ServiceError::InternalError(e.to_string()))?;
        if !password_matches || !admin.is_active {
            return Err(ServiceError::AuthError(BAD_CREDENTIALS.to_string()));
        }

        let token = self
            .auth
            .issue_token(&admin)
            .map_err(|e| ServiceError::InternalError(e.to_string()))?;

        Ok(TokenResponse { token })
    }

    /// Fetch one admin by id.
    #[instrument(skip(self))]
    pub async fn get(&self, admin_id: i32) -> Result<admin::Model, ServiceError> {
        admin::Entity::find_by_id(admin_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Admin {} not found", admin_id)))
    }

    /// Partial update of an admin's own profile. A supplied password is
    /// re-hashed before storage.
    #[instrument(skip(self, input))]
    pub async fn update_profile(
        &self,
        admin_id: i32,
        input: UpdateAdminInput,
    ) -> Result<admin::Model, ServiceError> {
        let admin = self.get(admin_id).await?;
        let mut admin: admin::ActiveModel = admin.into();

        if let Some(name) = input.name {
            admin.name = Set(Some(name));
        }
        if let Some(email) = input.email {
            admin.email = Set(email);
        }
        if let Some(title) = input.title {
            admin.title = Set(Some(title));
        }
        if let Some(address) = input.address {
            admin.address = Set(Some(address));
        }
        if let Some(phone) = input.phone {
            admin.phone = Set(Some(phone));
        }
        if let Some(postal_code) = input.postal_code {
            admin.postal_code = Set(Some(postal_code));
        }
        if let Some(birth_date) = input.birth_date {
            admin.birth_date = Set(Some(birth_date));
        }
        if let Some(nationality_id) = input.nationality_id {
            admin.nationality_id = Set(Some(nationality_id));
        }
        if let Some(password) = input.password {
            let hash = auth::hash_password(&password)
                .map_err(|e| ServiceError::InternalError(e.to_string()))?;
            admin.password_hash = Set(hash);
        }

        Ok(admin.update(&*self.db).await?)
    }

    /// List every admin, ordered by name.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<admin::Model>, ServiceError> {
        Ok(admin::Entity::find()
            .order_by_asc(admin::Column::Name)
            .all(&*self.db)
            .await?)
    }

    /// Flip the staff flag of an admin.
    #[instrument(skip(self))]
    pub async fn toggle_staff(&self, admin_id: i32) -> Result<admin::Model, ServiceError> {
        let admin = self.get(admin_id).await?;
        let is_staff = admin.is_staff;
        let mut admin: admin::ActiveModel = admin.into();
        admin.is_staff = Set(!is_staff);
        Ok(admin.update(&*self.db).await?)
    }

    /// Flip the active flag of an admin. Deactivated admins keep their row
    /// but can no longer authenticate.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, admin_id: i32) -> Result<admin::Model, ServiceError> {
        let admin = self.get(admin_id).await?;
        let is_active = admin.is_active;
        let mut admin: admin::ActiveModel = admin.into();
        admin.is_active = Set(!is_active);
        Ok(admin.update(&*self.db).await?)
    }

    /// Create the configured superuser when it does not exist yet. Runs at
    /// startup in place of a CLI bootstrap command.
    #[instrument(skip(self, password))]
    pub async fn bootstrap_superuser(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<admin::Model>, ServiceError> {
        let existing = admin::Entity::find()
            .filter(admin::Column::Username.eq(username))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Ok(None);
        }

        let password_hash = auth::hash_password(password)
            .map_err(|e| ServiceError::InternalError(e.to_string()))?;

        let admin = admin::ActiveModel {
            username: Set(username.to_string()),
            name: Set(None),
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            is_staff: Set(true),
            is_active: Set(true),
            is_superuser: Set(true),
            created_by: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let admin = admin.insert(&*self.db).await?;
        info!("Superuser bootstrapped: {}", admin.username);
        Ok(Some(admin))
    }
}

/// Input for registering an admin.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAdminInput {
    #[validate(length(min = 1, max = 30))]
    pub username: String,
    pub name: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub nationality_id: Option<i32>,
    pub is_staff: Option<bool>,
}

/// Input for the token endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token endpoint response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Partial profile update.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAdminInput {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub nationality_id: Option<i32>,
}

/// Admin representation returned by the API; never includes credentials.
#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub nationality_id: Option<i32>,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_by: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<admin::Model> for AdminResponse {
    fn from(model: admin::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            name: model.name,
            email: model.email,
            title: model.title,
            address: model.address,
            phone: model.phone,
            postal_code: model.postal_code,
            birth_date: model.birth_date,
            nationality_id: model.nationality_id,
            is_staff: model.is_staff,
            is_active: model.is_active,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}
