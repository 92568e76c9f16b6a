// src/services/ticket_service.rs

use crate::{
    common::error::AppError,
    db::TicketRepository,
    models::ticket::{CreateTicketPayload, Ticket},
};

#[derive(Clone)]
pub struct TicketService {
    repo: TicketRepository,
}

impl TicketService {
    pub fn new(repo: TicketRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: &CreateTicketPayload) -> Result<Ticket, AppError> {
        self.repo.create(payload).await
    }

    pub async fn list(&self) -> Result<Vec<Ticket>, AppError> {
        self.repo.find_all().await
    }

    /// Resolver é idempotente para o chamador: o segundo resolve devolve
    /// o chamado já resolvido sem mexer no resolved_at.
    pub async fn resolve(&self, id: i32) -> Result<Ticket, AppError> {
        self.repo
            .resolve(id)
            .await?
            .ok_or(AppError::TicketNotFound)
    }
}
