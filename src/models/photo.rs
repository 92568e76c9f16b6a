// src/models/photo.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Foto avulsa vinculada a uma loja (galeria da loja).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i32,
    pub store_code: String,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoPayload {
    #[validate(length(min = 1, message = "O código da loja é obrigatório."))]
    pub store_code: String,

    #[validate(url(message = "A URL da foto deve ser válida."))]
    pub photo_url: String,
}
