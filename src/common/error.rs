use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Violação de unicidade: {0}")]
    UniqueConstraintViolation(String),

    #[error("Referência inexistente: {0}")]
    ForeignKeyViolation(String),

    #[error("Registro ainda referenciado: {0}")]
    ReferencedRecord(String),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Fornecedor não encontrado")]
    SupplierNotFound,

    #[error("Loja não encontrada")]
    StoreNotFound,

    #[error("Chamado não encontrado")]
    TicketNotFound,

    #[error("Administrador não encontrado")]
    AdminNotFound,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Traduz um erro do sqlx olhando o código de violação do banco.
    /// Unicidade vira 409; chave estrangeira vira 400 no insert.
    pub fn from_db(e: sqlx::Error, conflict_msg: &str, reference_msg: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return AppError::UniqueConstraintViolation(conflict_msg.to_string());
            }
            if db_err.is_foreign_key_violation() {
                return AppError::ForeignKeyViolation(reference_msg.to_string());
            }
        }
        AppError::DatabaseError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UniqueConstraintViolation(msg) => (StatusCode::CONFLICT, msg),
            AppError::ReferencedRecord(msg) => (StatusCode::CONFLICT, msg),
            AppError::ForeignKeyViolation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::SupplierNotFound => {
                (StatusCode::NOT_FOUND, "Fornecedor não encontrado.".to_string())
            }
            AppError::StoreNotFound => (StatusCode::NOT_FOUND, "Loja não encontrada.".to_string()),
            AppError::TicketNotFound => {
                (StatusCode::NOT_FOUND, "Chamado não encontrado.".to_string())
            }
            AppError::AdminNotFound => {
                (StatusCode::NOT_FOUND, "Administrador não encontrado.".to_string())
            }

            // Todos os outros erros viram 500 sem vazar detalhe ao cliente.
            // O `tracing` guarda a mensagem completa no log do servidor.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        for err in [
            AppError::SupplierNotFound,
            AppError::StoreNotFound,
            AppError::TicketNotFound,
            AppError::AdminNotFound,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = AppError::UniqueConstraintViolation("CNPJ já cadastrado.".into());
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn broken_reference_maps_to_400() {
        let err = AppError::ForeignKeyViolation("Loja inexistente.".into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_errors_map_to_401() {
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn unexpected_errors_map_to_500() {
        let err = AppError::InternalServerError(anyhow::anyhow!("boom"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
