// src/handlers/admins.rs

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
    middleware::auth::AuthenticatedAdmin,
    models::admin::{Admin, CreateAdminPayload, UpdateAdminPayload},
};

// POST /api/admins
#[utoipa::path(
    post,
    path = "/api/admins",
    tag = "Admins",
    request_body = CreateAdminPayload,
    responses(
        (status = 201, description = "Administrador criado", body = Admin),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Não autorizado"),
        (status = 409, description = "E-mail já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_admin(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Json(payload): Json<CreateAdminPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let admin = app_state.admin_service.register(&payload).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

// GET /api/admins
#[utoipa::path(
    get,
    path = "/api/admins",
    tag = "Admins",
    responses(
        (status = 200, description = "Lista de administradores", body = Vec<Admin>),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_admins(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
) -> Result<impl IntoResponse, AppError> {
    let admins = app_state.admin_service.list().await?;
    Ok((StatusCode::OK, Json(admins)))
}

// PATCH /api/admins/{id}
#[utoipa::path(
    patch,
    path = "/api/admins/{id}",
    tag = "Admins",
    params(("id" = i32, Path, description = "ID do administrador")),
    request_body = UpdateAdminPayload,
    responses(
        (status = 200, description = "Administrador atualizado", body = Admin),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Administrador não encontrado"),
        (status = 409, description = "E-mail já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_admin(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdminPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let admin = app_state.admin_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(admin)))
}

// DELETE /api/admins/{id}
#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    tag = "Admins",
    params(("id" = i32, Path, description = "ID do administrador")),
    responses(
        (status = 204, description = "Administrador removido"),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Administrador não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_admin(
    State(app_state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.admin_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
