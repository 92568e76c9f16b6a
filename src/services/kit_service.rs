// src/services/kit_service.rs

use crate::{
    common::error::AppError,
    db::KitRepository,
    models::kit::{CreateKitPayload, Kit},
};

#[derive(Clone)]
pub struct KitService {
    repo: KitRepository,
}

impl KitService {
    pub fn new(repo: KitRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: &CreateKitPayload) -> Result<Kit, AppError> {
        self.repo.create(payload).await
    }

    pub async fn list(&self) -> Result<Vec<Kit>, AppError> {
        self.repo.find_all().await
    }
}
