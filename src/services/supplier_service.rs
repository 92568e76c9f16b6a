// src/services/supplier_service.rs

use crate::{
    common::error::AppError,
    db::SupplierRepository,
    models::supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload},
};

#[derive(Clone)]
pub struct SupplierService {
    repo: SupplierRepository,
}

impl SupplierService {
    pub fn new(repo: SupplierRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: &CreateSupplierPayload) -> Result<Supplier, AppError> {
        self.repo.create(payload).await
    }

    pub async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Supplier, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::SupplierNotFound)
    }

    pub async fn get_by_cnpj(&self, cnpj: &str) -> Result<Supplier, AppError> {
        self.repo
            .find_by_cnpj(cnpj)
            .await?
            .ok_or(AppError::SupplierNotFound)
    }

    pub async fn update(
        &self,
        id: i32,
        fields: &UpdateSupplierPayload,
    ) -> Result<Supplier, AppError> {
        // Sem campo nenhum não há UPDATE a montar; devolve o registro atual.
        if fields.is_empty() {
            return self.get(id).await;
        }

        self.repo
            .update(id, fields)
            .await?
            .ok_or(AppError::SupplierNotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::SupplierNotFound)
        }
    }
}
