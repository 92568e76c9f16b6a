// src/db/kit_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::kit::{CreateKitPayload, Kit},
};

#[derive(Clone)]
pub struct KitRepository {
    pool: PgPool,
}

impl KitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreateKitPayload) -> Result<Kit, AppError> {
        sqlx::query_as::<_, Kit>(
            r#"
            INSERT INTO kits (part_name, description, image_url, store_code, used)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.part_name)
        .bind(&payload.description)
        .bind(&payload.image_url)
        .bind(&payload.store_code)
        .bind(payload.used)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_db(
                e,
                "Kit duplicado.",
                "A loja informada para o kit não existe.",
            )
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Kit>, AppError> {
        let kits = sqlx::query_as::<_, Kit>("SELECT * FROM kits ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(kits)
    }
}
