// src/handlers/installations.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::installation::{CreateInstallationPayload, Installation},
};

// GET /api/installations
#[utoipa::path(
    get,
    path = "/api/installations",
    tag = "Installations",
    responses(
        (status = 200, description = "Lista de instalações", body = Vec<Installation>)
    )
)]
pub async fn list_installations(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let installations = app_state.installation_service.list().await?;
    Ok((StatusCode::OK, Json(installations)))
}

// POST /api/installations
#[utoipa::path(
    post,
    path = "/api/installations",
    tag = "Installations",
    request_body = CreateInstallationPayload,
    responses(
        (status = 201, description = "Instalação registrada", body = Installation),
        (status = 400, description = "Dados inválidos ou loja/fornecedor inexistente")
    )
)]
pub async fn create_installation(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateInstallationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let installation = app_state.installation_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(installation)))
}
