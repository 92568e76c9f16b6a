// src/handlers/stores.rs

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
    models::store::{CreateStorePayload, Store, StoreFilterPayload, UpdateStorePayload},
};

// GET /api/stores
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Stores",
    responses(
        (status = 200, description = "Lista de lojas", body = Vec<Store>)
    )
)]
pub async fn list_stores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stores = app_state.store_service.list().await?;
    Ok((StatusCode::OK, Json(stores)))
}

// POST /api/stores
#[utoipa::path(
    post,
    path = "/api/stores",
    tag = "Stores",
    request_body = CreateStorePayload,
    responses(
        (status = 201, description = "Loja criada", body = Store),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Código de loja já cadastrado")
    )
)]
pub async fn create_store(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateStorePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let store = app_state.store_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

// POST /api/stores/search
//
// Critérios em branco são ignorados; corpo vazio devolve todas as lojas.
#[utoipa::path(
    post,
    path = "/api/stores/search",
    tag = "Stores",
    request_body = StoreFilterPayload,
    responses(
        (status = 200, description = "Lojas que atendem a todos os critérios", body = Vec<Store>)
    )
)]
pub async fn search_stores(
    State(app_state): State<AppState>,
    Json(filters): Json<StoreFilterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let stores = app_state.store_service.search(&filters).await?;
    Ok((StatusCode::OK, Json(stores)))
}

// GET /api/stores/{code}
#[utoipa::path(
    get,
    path = "/api/stores/{code}",
    tag = "Stores",
    params(("code" = String, Path, description = "Código da loja")),
    responses(
        (status = 200, description = "Loja encontrada", body = Store),
        (status = 404, description = "Loja não encontrada")
    )
)]
pub async fn get_store(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let store = app_state.store_service.get(&code).await?;
    Ok((StatusCode::OK, Json(store)))
}

// PATCH /api/stores/{code}
#[utoipa::path(
    patch,
    path = "/api/stores/{code}",
    tag = "Stores",
    params(("code" = String, Path, description = "Código da loja")),
    request_body = UpdateStorePayload,
    responses(
        (status = 200, description = "Loja atualizada", body = Store),
        (status = 404, description = "Loja não encontrada")
    )
)]
pub async fn update_store(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateStorePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let store = app_state.store_service.update(&code, &payload).await?;
    Ok((StatusCode::OK, Json(store)))
}

// DELETE /api/stores/{code}
#[utoipa::path(
    delete,
    path = "/api/stores/{code}",
    tag = "Stores",
    params(("code" = String, Path, description = "Código da loja")),
    responses(
        (status = 204, description = "Loja removida"),
        (status = 404, description = "Loja não encontrada"),
        (status = 409, description = "Loja ainda referenciada")
    )
)]
pub async fn delete_store(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.store_service.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
