use super::common::{created_response, success_response, validate_input};
use crate::{
    auth::AuthUser,
    errors::ServiceError,
    handlers::AppState,
    services::costumers::{CostumerData, CostumerPatch},
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use tracing::info;

/// Routes for merchant records.
pub fn costumer_routes() -> Router<AppState> {
    Router::new()
        .route("/costumers", get(list_costumers))
        .route("/costumers", post(create_costumer))
        .route("/costumers/:id", get(get_costumer))
        .route("/costumers/:id", patch(update_costumer))
        .route("/all-costumers", get(mini_list))
}

async fn list_costumers(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let costumers = state.services.costumers.list().await?;
    Ok(success_response(costumers))
}

/// Minimal id + names projection for autocomplete.
async fn mini_list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let costumers = state.services.costumers.mini_list().await?;
    Ok(success_response(costumers))
}

async fn create_costumer(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CostumerData>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let costumer = state.services.costumers.create(payload, user.id).await?;
    info!("Costumer {} created by {}", costumer.id, user.username);
    Ok(created_response(costumer))
}

async fn get_costumer(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let costumer = state.services.costumers.get(id).await?;
    Ok(success_response(costumer))
}

async fn update_costumer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CostumerPatch>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let costumer = state.services.costumers.update(id, payload, user.id).await?;
    Ok(success_response(costumer))
}
