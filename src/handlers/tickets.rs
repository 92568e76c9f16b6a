// src/handlers/tickets.rs

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
    models::ticket::{CreateTicketPayload, Ticket},
};

// GET /api/tickets
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = "Tickets",
    responses(
        (status = 200, description = "Lista de chamados", body = Vec<Ticket>)
    )
)]
pub async fn list_tickets(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = app_state.ticket_service.list().await?;
    Ok((StatusCode::OK, Json(tickets)))
}

// POST /api/tickets
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = "Tickets",
    request_body = CreateTicketPayload,
    responses(
        (status = 201, description = "Chamado aberto", body = Ticket),
        (status = 400, description = "Dados inválidos ou referência inexistente")
    )
)]
pub async fn create_ticket(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTicketPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ticket = app_state.ticket_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

// PATCH /api/tickets/{id}/resolve
#[utoipa::path(
    patch,
    path = "/api/tickets/{id}/resolve",
    tag = "Tickets",
    params(("id" = i32, Path, description = "ID do chamado")),
    responses(
        (status = 200, description = "Chamado resolvido (ou já estava)", body = Ticket),
        (status = 404, description = "Chamado não encontrado")
    )
)]
pub async fn resolve_ticket(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = app_state.ticket_service.resolve(id).await?;
    Ok((StatusCode::OK, Json(ticket)))
}
