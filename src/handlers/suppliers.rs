// src/handlers/suppliers.rs

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
    models::supplier::{
        CnpjSearchPayload, CreateSupplierPayload, Supplier, UpdateSupplierPayload,
    },
};

// GET /api/suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Suppliers",
    responses(
        (status = 200, description = "Lista de fornecedores", body = Vec<Supplier>)
    )
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.supplier_service.list().await?;
    Ok((StatusCode::OK, Json(suppliers)))
}

// POST /api/suppliers
#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "Suppliers",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = Supplier),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "CNPJ já cadastrado")
    )
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state.supplier_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

// GET /api/suppliers/{id}
#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = i32, Path, description = "ID do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor encontrado", body = Supplier),
        (status = 404, description = "Fornecedor não encontrado")
    )
)]
pub async fn get_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = app_state.supplier_service.get(id).await?;
    Ok((StatusCode::OK, Json(supplier)))
}

// GET /api/suppliers/cnpj/{cnpj}
//
// A busca compara só os dígitos, então qualquer variante de pontuação
// encontra o mesmo registro.
#[utoipa::path(
    get,
    path = "/api/suppliers/cnpj/{cnpj}",
    tag = "Suppliers",
    params(("cnpj" = String, Path, description = "CNPJ em qualquer formato")),
    responses(
        (status = 200, description = "Fornecedor encontrado", body = Supplier),
        (status = 404, description = "Fornecedor não encontrado")
    )
)]
pub async fn get_supplier_by_cnpj(
    State(app_state): State<AppState>,
    Path(cnpj): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = app_state.supplier_service.get_by_cnpj(&cnpj).await?;
    Ok((StatusCode::OK, Json(supplier)))
}

// POST /api/suppliers/access
//
// Porta de entrada do fornecedor: ele se identifica pelo CNPJ e recebe
// o próprio cadastro.
#[utoipa::path(
    post,
    path = "/api/suppliers/access",
    tag = "Suppliers",
    request_body = CnpjSearchPayload,
    responses(
        (status = 200, description = "Fornecedor encontrado", body = Supplier),
        (status = 400, description = "CNPJ malformado"),
        (status = 404, description = "Fornecedor não encontrado")
    )
)]
pub async fn supplier_access(
    State(app_state): State<AppState>,
    Json(payload): Json<CnpjSearchPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state.supplier_service.get_by_cnpj(&payload.cnpj).await?;
    Ok((StatusCode::OK, Json(supplier)))
}

// PATCH /api/suppliers/{id}
#[utoipa::path(
    patch,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = i32, Path, description = "ID do fornecedor")),
    request_body = UpdateSupplierPayload,
    responses(
        (status = 200, description = "Fornecedor atualizado", body = Supplier),
        (status = 404, description = "Fornecedor não encontrado"),
        (status = 409, description = "CNPJ já cadastrado")
    )
)]
pub async fn update_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state.supplier_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(supplier)))
}

// DELETE /api/suppliers/{id}
#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = i32, Path, description = "ID do fornecedor")),
    responses(
        (status = 204, description = "Fornecedor removido"),
        (status = 404, description = "Fornecedor não encontrado"),
        (status = 409, description = "Fornecedor ainda referenciado")
    )
)]
pub async fn delete_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.supplier_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
