// src/services/installation_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::InstallationRepository,
    models::installation::{CreateInstallationPayload, Installation},
};

#[derive(Clone)]
pub struct InstallationService {
    repo: InstallationRepository,
}

impl InstallationService {
    pub fn new(repo: InstallationRepository) -> Self {
        Self { repo }
    }

    /// Cada evento de instalação ganha um identificador opaco próprio.
    pub async fn create(
        &self,
        payload: &CreateInstallationPayload,
    ) -> Result<Installation, AppError> {
        let id = Uuid::new_v4();
        self.repo.create(id, payload).await
    }

    pub async fn list(&self) -> Result<Vec<Installation>, AppError> {
        self.repo.find_all().await
    }
}
