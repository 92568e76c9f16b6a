// src/handlers/kits.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::kit::{CreateKitPayload, Kit},
};

// GET /api/kits
#[utoipa::path(
    get,
    path = "/api/kits",
    tag = "Kits",
    responses(
        (status = 200, description = "Lista de kits", body = Vec<Kit>)
    )
)]
pub async fn list_kits(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let kits = app_state.kit_service.list().await?;
    Ok((StatusCode::OK, Json(kits)))
}

// POST /api/kits
#[utoipa::path(
    post,
    path = "/api/kits",
    tag = "Kits",
    request_body = CreateKitPayload,
    responses(
        (status = 201, description = "Kit criado", body = Kit),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_kit(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateKitPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let kit = app_state.kit_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(kit)))
}
