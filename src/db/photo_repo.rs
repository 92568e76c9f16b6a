// src/db/photo_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::photo::{CreatePhotoPayload, Photo},
};

#[derive(Clone)]
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreatePhotoPayload) -> Result<Photo, AppError> {
        sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO photos (store_code, photo_url)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&payload.store_code)
        .bind(&payload.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_db(
                e,
                "Foto duplicada.",
                "A loja informada para a foto não existe.",
            )
        })
    }

    pub async fn find_by_store(&self, store_code: &str) -> Result<Vec<Photo>, AppError> {
        let photos =
            sqlx::query_as::<_, Photo>("SELECT * FROM photos WHERE store_code = $1 ORDER BY id")
                .bind(store_code)
                .fetch_all(&self.pool)
                .await?;
        Ok(photos)
    }
}
