// src/db/ticket_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::ticket::{CreateTicketPayload, Ticket},
};

#[derive(Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Todo chamado nasce aberto; o status não é escolhido pelo cliente.
    pub async fn create(&self, payload: &CreateTicketPayload) -> Result<Ticket, AppError> {
        sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (description, store_code, supplier_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&payload.description)
        .bind(&payload.store_code)
        .bind(payload.supplier_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_db(
                e,
                "Chamado duplicado.",
                "A loja ou o fornecedor do chamado não existe.",
            )
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Ticket>, AppError> {
        let tickets =
            sqlx::query_as::<_, Ticket>("SELECT * FROM tickets ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(tickets)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ticket)
    }

    /// Transição única aberto -> resolvido. O UPDATE condicional só dispara
    /// sobre chamados abertos; resolver de novo devolve o registro como
    /// está, com o resolved_at original.
    pub async fn resolve(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        let resolved = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET status = 'resolved', resolved_at = NOW()
            WHERE id = $1 AND status = 'open'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if resolved.is_some() {
            return Ok(resolved);
        }

        self.find_by_id(id).await
    }
}
