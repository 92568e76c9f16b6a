// src/models/kit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kit {
    pub id: i32,
    pub part_name: String,
    pub description: String,
    pub image_url: Option<String>,

    // Loja à qual o kit foi destinado, se já houver.
    pub store_code: Option<String>,
    pub used: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKitPayload {
    #[validate(length(min = 1, message = "O nome da peça é obrigatório."))]
    #[schema(example = "Totem de fachada")]
    pub part_name: String,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    #[validate(url(message = "A URL da imagem deve ser válida."))]
    pub image_url: Option<String>,

    pub store_code: Option<String>,

    #[serde(default)]
    pub used: bool,
}
