use super::common::{created_response, success_response, validate_input};
use crate::{
    auth::AuthUser,
    errors::ServiceError,
    handlers::AppState,
    services::pos::{CreateCompanyInput, CreateModelInput, CreatePosInput, UpdatePosInput},
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};

/// Routes for the POS hardware hierarchy.
pub fn pos_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies))
        .route("/companies", post(create_company))
        .route("/company/:id/create-model", post(create_model))
        .route("/company/:id/models", get(list_company_models))
        .route("/models", get(list_models))
        .route("/poses", get(list_poses))
        .route("/poses", post(create_pos))
        .route("/poses/:id", patch(update_pos))
        .route("/pos-active/:id", post(toggle_pos_active))
}

/// Companies ordered by name.
async fn list_companies(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let companies = state.services.pos.list_companies().await?;
    Ok(success_response(companies))
}

async fn create_company(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCompanyInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let company = state.services.pos.create_company(payload, user.id).await?;
    Ok(created_response(company))
}

/// Create a model under the company named in the path.
async fn create_model(
    State(state): State<AppState>,
    user: AuthUser,
    Path(company_id): Path<i32>,
    Json(payload): Json<CreateModelInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let model = state
        .services
        .pos
        .create_model(company_id, payload, user.id)
        .await?;
    Ok(created_response(model))
}

async fn list_company_models(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let models = state.services.pos.list_models_for_company(company_id).await?;
    Ok(success_response(models))
}

async fn list_models(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let models = state.services.pos.list_models().await?;
    Ok(success_response(models))
}

/// POS units ordered by serial number.
async fn list_poses(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let poses = state.services.pos.list_poses().await?;
    Ok(success_response(poses))
}

async fn create_pos(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreatePosInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let unit = state.services.pos.create_pos(payload, user.id).await?;
    Ok(created_response(unit))
}

async fn update_pos(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePosInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let unit = state.services.pos.update_pos(id, payload).await?;
    Ok(success_response(unit))
}

/// Toggle the active flag; the request carries no body.
async fn toggle_pos_active(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let unit = state.services.pos.toggle_active(id).await?;
    Ok(success_response(unit))
}
