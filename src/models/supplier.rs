// src/models/supplier.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::cnpj;

// Fornecedor como vem do banco
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i32,
    pub legal_name: String,

    // Guardado como recebido; a busca compara só os dígitos.
    pub cnpj: String,

    pub contact_name: String,
    pub phone: String,
    pub address: String,
    pub budget: Decimal,
    pub created_at: DateTime<Utc>,
}

fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if cnpj::is_complete(value) {
        Ok(())
    } else {
        Err(ValidationError::new("cnpj_incompleto"))
    }
}

fn validate_budget(value: &Decimal) -> Result<(), ValidationError> {
    if value > &Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("orcamento_nao_positivo"))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierPayload {
    #[validate(length(min = 1, message = "O nome do fornecedor é obrigatório."))]
    #[schema(example = "SuperTech Supplies")]
    pub legal_name: String,

    #[validate(custom(function = validate_cnpj, message = "O CNPJ deve ter 14 dígitos."))]
    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: String,

    #[validate(length(min = 1, message = "O nome do responsável é obrigatório."))]
    pub contact_name: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    pub phone: String,

    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub address: String,

    #[validate(custom(function = validate_budget, message = "O valor do orçamento deve ser positivo."))]
    #[schema(example = 15000.00)]
    pub budget: Decimal,
}

// Atualização parcial: só os campos presentes são aplicados.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierPayload {
    #[validate(length(min = 1, message = "O nome do fornecedor não pode ficar vazio."))]
    pub legal_name: Option<String>,

    #[validate(custom(function = validate_cnpj, message = "O CNPJ deve ter 14 dígitos."))]
    pub cnpj: Option<String>,

    #[validate(length(min = 1, message = "O nome do responsável não pode ficar vazio."))]
    pub contact_name: Option<String>,

    pub phone: Option<String>,
    pub address: Option<String>,

    #[validate(custom(function = validate_budget, message = "O valor do orçamento deve ser positivo."))]
    pub budget: Option<Decimal>,
}

impl UpdateSupplierPayload {
    pub fn is_empty(&self) -> bool {
        self.legal_name.is_none()
            && self.cnpj.is_none()
            && self.contact_name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.budget.is_none()
    }
}

// Busca de fornecedor pelo CNPJ (acesso do fornecedor)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CnpjSearchPayload {
    #[validate(custom(function = validate_cnpj, message = "O CNPJ deve ter 14 dígitos."))]
    #[schema(example = "12345678000190")]
    pub cnpj: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn valid_payload() -> CreateSupplierPayload {
        CreateSupplierPayload {
            legal_name: "SuperTech Supplies".into(),
            cnpj: "12.345.678/0001-90".into(),
            contact_name: "João Silva".into(),
            phone: "(11) 99999-9999".into(),
            address: "Rua das Flores, 123".into(),
            budget: Decimal::new(15_000_00, 2),
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn rejects_short_cnpj() {
        let mut payload = valid_payload();
        payload.cnpj = "12.345.678".into();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cnpj"));
    }

    #[test]
    fn rejects_non_positive_budget() {
        let mut payload = valid_payload();
        payload.budget = Decimal::ZERO;
        assert!(payload.validate().is_err());

        payload.budget = Decimal::new(-100, 0);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut payload = valid_payload();
        payload.legal_name = String::new();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("legal_name"));
    }

    #[test]
    fn partial_update_skips_absent_fields() {
        let payload = UpdateSupplierPayload {
            phone: Some("(11) 88888-8888".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
        assert!(!payload.is_empty());
        assert!(UpdateSupplierPayload::default().is_empty());
    }
}
