// src/services/admin_service.rs

use bcrypt::hash;

use crate::{
    common::error::AppError,
    db::AdminRepository,
    models::admin::{Admin, CreateAdminPayload, UpdateAdminPayload},
};

#[derive(Clone)]
pub struct AdminService {
    repo: AdminRepository,
}

impl AdminService {
    pub fn new(repo: AdminRepository) -> Self {
        Self { repo }
    }

    async fn hash_password(password: String) -> Result<String, AppError> {
        // Hashing é caro; roda fora do runtime assíncrono.
        let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    pub async fn register(&self, payload: &CreateAdminPayload) -> Result<Admin, AppError> {
        let password_hash = Self::hash_password(payload.password.clone()).await?;

        self.repo
            .create(&payload.name, &payload.email, &password_hash)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Admin>, AppError> {
        self.repo.find_all().await
    }

    pub async fn update(&self, id: i32, fields: &UpdateAdminPayload) -> Result<Admin, AppError> {
        if fields.is_empty() {
            return self
                .repo
                .find_by_id(id)
                .await?
                .ok_or(AppError::AdminNotFound);
        }

        // A senha nunca desce em texto puro para o repositório.
        let password_hash = match &fields.password {
            Some(password) => Some(Self::hash_password(password.clone()).await?),
            None => None,
        };

        self.repo
            .update(
                id,
                fields.name.as_deref(),
                fields.email.as_deref(),
                password_hash.as_deref(),
            )
            .await?
            .ok_or(AppError::AdminNotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::AdminNotFound)
        }
    }
}
