// src/services/store_service.rs

use crate::{
    common::error::AppError,
    db::{PhotoRepository, StoreRepository},
    models::{
        photo::{CreatePhotoPayload, Photo},
        store::{CreateStorePayload, Store, StoreFilterPayload, UpdateStorePayload},
    },
};

// Lojas e sua galeria de fotos andam juntas.
#[derive(Clone)]
pub struct StoreService {
    repo: StoreRepository,
    photo_repo: PhotoRepository,
}

impl StoreService {
    pub fn new(repo: StoreRepository, photo_repo: PhotoRepository) -> Self {
        Self { repo, photo_repo }
    }

    pub async fn create(&self, payload: &CreateStorePayload) -> Result<Store, AppError> {
        self.repo.create(payload).await
    }

    pub async fn list(&self) -> Result<Vec<Store>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, code: &str) -> Result<Store, AppError> {
        self.repo
            .find_by_code(code)
            .await?
            .ok_or(AppError::StoreNotFound)
    }

    pub async fn search(&self, filters: &StoreFilterPayload) -> Result<Vec<Store>, AppError> {
        self.repo.find_by_filters(filters).await
    }

    pub async fn update(
        &self,
        code: &str,
        fields: &UpdateStorePayload,
    ) -> Result<Store, AppError> {
        if fields.is_empty() {
            return self.get(code).await;
        }

        self.repo
            .update(code, fields)
            .await?
            .ok_or(AppError::StoreNotFound)
    }

    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if self.repo.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::StoreNotFound)
        }
    }

    pub async fn list_photos(&self, store_code: &str) -> Result<Vec<Photo>, AppError> {
        self.photo_repo.find_by_store(store_code).await
    }

    pub async fn add_photo(&self, payload: &CreatePhotoPayload) -> Result<Photo, AppError> {
        self.photo_repo.create(payload).await
    }
}
