// src/models/installation.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Registro de instalação feito pelo fornecedor na loja.
// Imutável depois de criado.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: Uuid,
    pub store_code: String,
    pub supplier_id: i32,
    pub installer_name: String,
    pub installation_date: NaiveDate,

    // Payloads base64 enviados pelo app; persistidos como JSONB.
    #[schema(value_type = Vec<String>)]
    pub photos: Json<Vec<String>>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstallationPayload {
    #[validate(length(min = 1, message = "O código da loja é obrigatório."))]
    #[schema(example = "51974")]
    pub store_code: String,

    #[validate(range(min = 1, message = "O ID do fornecedor deve ser positivo."))]
    pub supplier_id: i32,

    #[validate(length(min = 1, message = "O responsável pela instalação é obrigatório."))]
    pub installer_name: String,

    #[schema(example = "2026-07-15")]
    pub installation_date: NaiveDate,

    // O app limita a 6 fotos; o servidor aceita a lista como vier.
    #[serde(default)]
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_iso_date_and_defaults_photos() {
        let payload: CreateInstallationPayload = serde_json::from_str(
            r#"{
                "storeCode": "001",
                "supplierId": 1,
                "installerName": "Carlos",
                "installationDate": "2026-07-15"
            }"#,
        )
        .unwrap();
        assert_eq!(
            payload.installation_date,
            NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()
        );
        assert!(payload.photos.is_empty());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_date() {
        let result: Result<CreateInstallationPayload, _> = serde_json::from_str(
            r#"{
                "storeCode": "001",
                "supplierId": 1,
                "installerName": "Carlos",
                "installationDate": "15/07/2026"
            }"#,
        );
        assert!(result.is_err());
    }
}
