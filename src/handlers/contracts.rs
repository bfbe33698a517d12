use super::common::{created_response, success_response, validate_input};
use crate::{
    auth::AuthUser,
    errors::ServiceError,
    handlers::AppState,
    services::contracts::{
        AttachPosInput, AttachServiceInput, ContractData, ContractPatch, MidRevenueInput,
        PaperRollInput, PaymentInput,
    },
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use tracing::info;

/// Routes for contracts and their dependent records.
pub fn contract_routes() -> Router<AppState> {
    Router::new()
        .route("/contracts", get(list_contracts))
        .route("/contracts", post(create_contract))
        .route("/contracts/:id", get(get_contract))
        .route("/contracts/:id", patch(update_contract))
        .route("/contracts/:id/pos", get(list_pos_attachments))
        .route("/contracts/:id/pos", post(attach_pos))
        .route("/contracts/:id/service", get(list_service_attachments))
        .route("/contracts/:id/service", post(attach_service))
        .route("/contracts/:id/paperroll", get(list_paper_rolls))
        .route("/contracts/:id/paperroll", post(create_paper_roll))
        .route("/contracts/:id/payment", get(list_payments))
        .route("/contracts/:id/payment", post(create_payment))
        .route("/contracts/:id/mid", get(list_mid_revenues))
        .route("/contracts/:id/mid", post(create_mid_revenue))
}

/// Contract list rows carry denormalized merchant names.
async fn list_contracts(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let contracts = state.services.contracts.list().await?;
    Ok(success_response(contracts))
}

async fn create_contract(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ContractData>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let contract = state.services.contracts.create(payload, user.id).await?;
    info!("Contract {} created by {}", contract.id, user.username);
    Ok(created_response(contract))
}

/// Contract detail embeds the full merchant record and attachments.
async fn get_contract(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let detail = state.services.contracts.get_detail(id).await?;
    Ok(success_response(detail))
}

async fn update_contract(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<ContractPatch>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let contract = state.services.contracts.update(id, payload).await?;
    Ok(success_response(contract))
}

async fn list_pos_attachments(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let attachments = state.services.contracts.list_pos_attachments(id).await?;
    Ok(success_response(attachments))
}

async fn attach_pos(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<AttachPosInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let attachment = state
        .services
        .contracts
        .attach_pos(id, payload, user.id)
        .await?;
    Ok(created_response(attachment))
}

async fn list_service_attachments(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let attachments = state.services.contracts.list_service_attachments(id).await?;
    Ok(success_response(attachments))
}

async fn attach_service(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<AttachServiceInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let attachment = state
        .services
        .contracts
        .attach_service(id, payload, user.id)
        .await?;
    Ok(created_response(attachment))
}

/// Paper rolls are stored per merchant; the contract id resolves the owner.
async fn list_paper_rolls(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let rolls = state.services.contracts.list_paper_rolls(id).await?;
    Ok(success_response(rolls))
}

async fn create_paper_roll(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<PaperRollInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let roll = state
        .services
        .contracts
        .create_paper_roll(id, payload, user.id)
        .await?;
    Ok(created_response(roll))
}

async fn list_payments(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let payments = state.services.contracts.list_payments(id).await?;
    Ok(success_response(payments))
}

async fn create_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<PaymentInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let payment = state
        .services
        .contracts
        .create_payment(id, payload, user.id)
        .await?;
    Ok(created_response(payment))
}

async fn list_mid_revenues(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let revenues = state.services.contracts.list_mid_revenues(id).await?;
    Ok(success_response(revenues))
}

async fn create_mid_revenue(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<MidRevenueInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let revenue = state
        .services
        .contracts
        .create_mid_revenue(id, payload, user.id)
        .await?;
    Ok(created_response(revenue))
}
