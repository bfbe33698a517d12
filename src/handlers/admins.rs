use super::common::{created_response, require_staff, success_response, validate_input};
use crate::{
    auth::AuthUser,
    errors::ServiceError,
    handlers::AppState,
    services::admins::{AdminResponse, RegisterAdminInput, TokenInput, UpdateAdminInput},
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use tracing::info;

/// Routes for admin account management and authentication.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(register_admin))
        .route("/token", post(obtain_token))
        .route("/me", get(get_profile))
        .route("/me", patch(update_profile))
        .route("/", get(list_admins))
        .route("/promote/:id", post(toggle_staff))
        .route("/active/:id", post(toggle_active))
}

/// Register a new admin. Only staff admins may create accounts.
async fn register_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<RegisterAdminInput>,
) -> Result<impl IntoResponse, ServiceError> {
    require_staff(&user)?;
    validate_input(&payload)?;

    let admin = state.services.admins.register(payload, Some(user.id)).await?;

    info!("Admin {} registered by {}", admin.username, user.username);
    Ok(created_response(AdminResponse::from(admin)))
}

/// Exchange credentials for a bearer token.
async fn obtain_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let token = state.services.admins.authenticate(payload).await?;
    Ok(success_response(token))
}

/// The authenticated admin's own profile.
async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let admin = state.services.admins.get(user.id).await?;
    Ok(success_response(AdminResponse::from(admin)))
}

/// Partial update of the authenticated admin's own profile.
async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdateAdminInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let admin = state.services.admins.update_profile(user.id, payload).await?;
    Ok(success_response(AdminResponse::from(admin)))
}

/// List all admins, ordered by name. Staff only.
async fn list_admins(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    require_staff(&user)?;

    let admins = state.services.admins.list().await?;
    let admins: Vec<AdminResponse> = admins.into_iter().map(Into::into).collect();
    Ok(success_response(admins))
}

/// Toggle the staff flag of an admin. Staff only.
async fn toggle_staff(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    require_staff(&user)?;

    let admin = state.services.admins.toggle_staff(id).await?;
    info!("Admin {} staff flag set to {}", admin.username, admin.is_staff);
    Ok(success_response(AdminResponse::from(admin)))
}

/// Toggle the active flag of an admin. Staff only.
async fn toggle_active(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    require_staff(&user)?;

    let admin = state.services.admins.toggle_active(id).await?;
    info!(
        "Admin {} active flag set to {}",
        admin.username, admin.is_active
    );
    Ok(success_response(AdminResponse::from(admin)))
}
