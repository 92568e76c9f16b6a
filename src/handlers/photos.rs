// src/handlers/photos.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::photo::{CreatePhotoPayload, Photo},
};

// GET /api/photos/{store_code}
#[utoipa::path(
    get,
    path = "/api/photos/{store_code}",
    tag = "Photos",
    params(("store_code" = String, Path, description = "Código da loja")),
    responses(
        (status = 200, description = "Fotos da loja", body = Vec<Photo>)
    )
)]
pub async fn list_photos_by_store(
    State(app_state): State<AppState>,
    Path(store_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let photos = app_state.store_service.list_photos(&store_code).await?;
    Ok((StatusCode::OK, Json(photos)))
}

// POST /api/photos
#[utoipa::path(
    post,
    path = "/api/photos",
    tag = "Photos",
    request_body = CreatePhotoPayload,
    responses(
        (status = 201, description = "Foto registrada", body = Photo),
        (status = 400, description = "Dados inválidos ou loja inexistente")
    )
)]
pub async fn create_photo(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePhotoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let photo = app_state.store_service.add_photo(&payload).await?;
    Ok((StatusCode::CREATED, Json(photo)))
}
