//! paydesk-api library
//!
//! Back-office administration and CRM for a payment-services reseller.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub auth: Arc<auth::AuthService>,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Assemble state from an established pool and loaded configuration.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let auth_config = auth::AuthConfig::new(
            config.jwt_secret.clone(),
            Duration::from_secs(config.jwt_expiration),
        );
        let auth = Arc::new(auth::AuthService::new(auth_config, db.clone()));
        let services = handlers::AppServices::new(db.clone(), auth.clone());

        Self {
            db,
            config,
            auth,
            services,
        }
    }
}

/// All API routes: admin account management plus the CRM surface.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(api_status))
        .route("/health", get(health_check))
        .nest("/admins", handlers::admins::admin_routes())
        .nest("/crm", crm_routes())
}

fn crm_routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::catalog::catalog_routes())
        .merge(handlers::pos::pos_routes())
        .merge(handlers::costumers::costumer_routes())
        .merge(handlers::contracts::contract_routes())
        .merge(handlers::goals::goal_routes())
}

async fn api_status() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    Json(json!({
        "status": "ok",
        "service": "paydesk-api",
        "version": version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(json!({
        "status": db_status,
        "checks": { "database": db_status },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
