// src/models/ticket.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Mapeia o CREATE TYPE ticket_status do banco.
// Ciclo de vida: aberto -> resolvido, sem volta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "ticket_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i32,
    pub description: String,
    pub status: TicketStatus,
    pub store_code: String,
    pub supplier_id: i32,
    pub created_at: DateTime<Utc>,

    // Preenchido uma única vez, na transição para resolvido.
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketPayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    #[schema(example = "Letreiro chegou danificado")]
    pub description: String,

    #[validate(length(min = 1, message = "O código da loja é obrigatório."))]
    #[schema(example = "51974")]
    pub store_code: String,

    #[validate(range(min = 1, message = "O ID do fornecedor deve ser positivo."))]
    #[schema(example = 1)]
    pub supplier_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::Open).unwrap(),
            "\"open\""
        );
        assert_eq!(
            serde_json::to_string(&TicketStatus::Resolved).unwrap(),
            "\"resolved\""
        );
    }

    #[test]
    fn status_roundtrips_from_wire_format() {
        let status: TicketStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(status, TicketStatus::Resolved);
    }
}
