use super::common::{created_response, success_response, validate_input};
use crate::{
    auth::AuthUser,
    errors::ServiceError,
    handlers::AppState,
    services::catalog::{
        CreateCountryInput, CreateServiceInput, UpdateServiceInput, UsedEntityKind,
    },
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use serde_json::json;

/// Routes for countries, virtual services and the is-used check.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries", post(create_country))
        .route("/services", get(list_services))
        .route("/services", post(create_service))
        .route("/services/:id", patch(update_service))
        .route("/is-used/:entity/:id", get(is_used))
}

/// Countries ordered by abbreviation.
async fn list_countries(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let countries = state.services.catalog.list_countries().await?;
    Ok(success_response(countries))
}

async fn create_country(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCountryInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let country = state.services.catalog.create_country(payload, user.id).await?;
    Ok(created_response(country))
}

async fn list_services(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let services = state.services.catalog.list_services().await?;
    Ok(success_response(services))
}

async fn create_service(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateServiceInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let service = state.services.catalog.create_service(payload, user.id).await?;
    Ok(created_response(service))
}

async fn update_service(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let service = state.services.catalog.update_service(id, payload).await?;
    Ok(success_response(service))
}

/// Advisory check: does any dependent record still reference this entity?
async fn is_used(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((entity, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, ServiceError> {
    let kind: UsedEntityKind = entity.parse()?;
    let used = state.services.catalog.is_used(kind, id).await?;
    Ok(success_response(json!({ "used": used })))
}
