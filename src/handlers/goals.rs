use super::common::{created_response, success_response, validate_input};
use crate::{
    auth::AuthUser, errors::ServiceError, handlers::AppState, services::goals::GoalInput,
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};

/// Routes for the marketing-goal lead queue.
pub fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/goals", get(list_goals))
        .route("/goals", post(create_goal))
        .route("/goals/:id", get(get_goal))
        .route("/goals/:id", put(update_goal))
}

/// Goals ordered by trading name.
async fn list_goals(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let goals = state.services.goals.list().await?;
    Ok(success_response(goals))
}

async fn create_goal(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<GoalInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let goal = state.services.goals.create(payload, user.id).await?;
    Ok(created_response(goal))
}

async fn get_goal(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let goal = state.services.goals.get(id).await?;
    Ok(success_response(goal))
}

/// Full update; stamps the acting admin as last updater.
async fn update_goal(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<GoalInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let goal = state.services.goals.update(id, payload, user.id).await?;
    Ok(success_response(goal))
}
