//! Authentication and authorization.
//!
//! Admins authenticate with username and password and receive a signed
//! bearer token. Every protected route extracts an [`AuthUser`] from the
//! `Authorization` header; the extractor validates the token signature and
//! re-loads the admin row, so deactivated accounts lose access immediately.
//! Staff-only routes additionally call [`AuthUser::require_staff`].

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::entities::admin;

const TOKEN_ISSUER: &str = "paydesk-auth";
const TOKEN_AUDIENCE: &str = "paydesk-api";

/// Claim structure for bearer tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin id)
    pub sub: String,
    pub username: String,
    /// Unique identifier for this token
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// Authenticated admin attached to a request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub token_id: String,
}

impl AuthUser {
    /// Reject the request unless the admin holds the staff flag.
    pub fn require_staff(&self) -> Result<(), AuthError> {
        if self.is_staff {
            Ok(())
        } else {
            Err(AuthError::InsufficientPrivilege)
        }
    }
}

/// Authentication configuration.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_expiration: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: String, token_expiration: Duration) -> Self {
        Self {
            jwt_secret,
            token_expiration,
        }
    }
}

/// Issues and validates bearer tokens.
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    db: Arc<DatabaseConnection>,
}

impl AuthService {
    pub fn new(config: AuthConfig, db: Arc<DatabaseConnection>) -> Self {
        Self { config, db }
    }

    /// Generate a bearer token for an admin.
    pub fn issue_token(&self, admin: &admin::Model) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::seconds(self.config.token_expiration.as_secs() as i64);

        let claims = Claims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: TOKEN_ISSUER.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Validate a token's signature and registered claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[TOKEN_AUDIENCE]);
        validation.set_issuer(&[TOKEN_ISSUER]);

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?
        .claims;

        Ok(claims)
    }

    /// Validate a token and resolve it to a live admin account.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AuthError> {
        let claims = self.validate_token(token)?;

        let admin_id: i32 = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        let admin = admin::Entity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?
            .ok_or(AuthError::InvalidToken)?;

        if !admin.is_active {
            return Err(AuthError::InactiveAccount);
        }

        Ok(AuthUser {
            id: admin.id,
            username: admin.username,
            is_staff: admin.is_staff,
            is_superuser: admin.is_superuser,
            token_id: claims.jti,
        })
    }
}

/// Hash a password with argon2 and a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored argon2 hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Authentication error types.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authentication token")]
    MissingToken,

    #[error("Invalid authentication token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Account is inactive")]
    InactiveAccount,

    #[error("Insufficient privilege")]
    InsufficientPrivilege,

    #[error("Token creation failed: {0}")]
    TokenCreation(String),

    #[error("Hash error: {0}")]
    HashError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired | Self::InactiveAccount => {
                StatusCode::UNAUTHORIZED
            }
            Self::InsufficientPrivilege => StatusCode::FORBIDDEN,
            Self::TokenCreation(_)
            | Self::HashError(_)
            | Self::DatabaseError(_)
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(crate::errors::ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            timestamp: Utc::now().to_rfc3339(),
        });

        (status, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_service = parts
            .extensions
            .get::<Arc<AuthService>>()
            .cloned()
            .ok_or_else(|| {
                AuthError::InternalError("authentication service not configured".to_string())
            })?;

        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        auth_service.authenticate(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("test1234password").unwrap();
        assert_ne!(hash, "test1234password");
        assert!(verify_password("test1234password", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn issued_tokens_validate_and_carry_the_admin_id() {
        let service = AuthService::new(
            AuthConfig::new(
                "a-long-enough-test-secret-with-32-chars!!".into(),
                Duration::from_secs(3600),
            ),
            Arc::new(sea_orm::DatabaseConnection::Disconnected),
        );

        let admin = admin::Model {
            id: 7,
            username: "testuser".into(),
            name: None,
            email: "test@admin.com".into(),
            password_hash: String::new(),
            title: None,
            address: None,
            phone: None,
            postal_code: None,
            birth_date: None,
            nationality_id: None,
            is_staff: true,
            is_active: true,
            is_superuser: false,
            created_by: None,
            created_at: Utc::now(),
        };

        let token = service.issue_token(&admin).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "testuser");
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let service = AuthService::new(
            AuthConfig::new(
                "a-long-enough-test-secret-with-32-chars!!".into(),
                Duration::from_secs(3600),
            ),
            Arc::new(sea_orm::DatabaseConnection::Disconnected),
        );

        assert!(matches!(
            service.validate_token("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn non_staff_cannot_pass_the_staff_gate() {
        let user = AuthUser {
            id: 1,
            username: "plain".into(),
            is_staff: false,
            is_superuser: false,
            token_id: "jti".into(),
        };
        assert!(matches!(
            user.require_staff(),
            Err(AuthError::InsufficientPrivilege)
        ));
    }
}
