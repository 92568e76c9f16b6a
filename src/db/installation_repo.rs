// src/db/installation_repo.rs

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::installation::{CreateInstallationPayload, Installation},
};

#[derive(Clone)]
pub struct InstallationRepository {
    pool: PgPool,
}

impl InstallationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Uma linha por evento de instalação; a lista de fotos vai serializada
    /// como JSONB. As FKs garantem que loja e fornecedor existem.
    pub async fn create(
        &self,
        id: Uuid,
        payload: &CreateInstallationPayload,
    ) -> Result<Installation, AppError> {
        sqlx::query_as::<_, Installation>(
            r#"
            INSERT INTO installations (
                id, store_code, supplier_id, installer_name, installation_date, photos
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.store_code)
        .bind(payload.supplier_id)
        .bind(&payload.installer_name)
        .bind(payload.installation_date)
        .bind(Json(&payload.photos))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_db(
                e,
                "Instalação duplicada.",
                "A loja ou o fornecedor da instalação não existe.",
            )
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Installation>, AppError> {
        let installations = sqlx::query_as::<_, Installation>(
            "SELECT * FROM installations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(installations)
    }
}
