// src/models/store.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Loja da rede. O código é a chave natural em todos os caminhos
// (rotas, chaves estrangeiras, busca).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub code: String,
    pub name: String,
    pub operator_name: String,

    // Endereço estruturado
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip: String,

    pub region: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorePayload {
    #[validate(length(min = 1, message = "O código da loja é obrigatório."))]
    #[schema(example = "51974")]
    pub code: String,

    #[validate(length(min = 1, message = "O nome da loja é obrigatório."))]
    #[schema(example = "HELP INFORMATICA")]
    pub name: String,

    #[validate(length(min = 1, message = "O nome do operador é obrigatório."))]
    pub operator_name: String,

    #[validate(length(min = 1, message = "O logradouro é obrigatório."))]
    pub street: String,

    #[validate(length(min = 1, message = "O número é obrigatório."))]
    pub number: String,

    pub complement: Option<String>,

    #[validate(length(min = 1, message = "O bairro é obrigatório."))]
    pub neighborhood: String,

    #[validate(length(min = 1, message = "A cidade é obrigatória."))]
    pub city: String,

    #[validate(length(min = 2, max = 2, message = "A UF deve ter 2 caracteres."))]
    #[schema(example = "SP")]
    pub state: String,

    #[validate(length(min = 8, message = "O CEP deve ter 8 dígitos."))]
    #[schema(example = "01010-000")]
    pub zip: String,

    #[validate(length(min = 1, message = "A região é obrigatória."))]
    #[schema(example = "Sudeste")]
    pub region: String,

    #[validate(length(min = 1, message = "O telefone da loja é obrigatório."))]
    pub phone: String,
}

// Atualização parcial, chaveada pelo código. O código em si não muda.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorePayload {
    #[validate(length(min = 1, message = "O nome da loja não pode ficar vazio."))]
    pub name: Option<String>,
    pub operator_name: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    #[validate(length(min = 2, max = 2, message = "A UF deve ter 2 caracteres."))]
    pub state: Option<String>,
    pub zip: Option<String>,
    pub region: Option<String>,
    pub phone: Option<String>,
}

impl UpdateStorePayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.operator_name.is_none()
            && self.street.is_none()
            && self.number.is_none()
            && self.complement.is_none()
            && self.neighborhood.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.region.is_none()
            && self.phone.is_none()
    }
}

// Filtros da busca de lojas. Critério ausente ou em branco é ignorado;
// os presentes entram em conjunção.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreFilterPayload {
    #[schema(example = "519")]
    pub code: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    #[schema(example = "SP")]
    pub state: Option<String>,
    pub region: Option<String>,
}

impl StoreFilterPayload {
    // Trata "" como critério não informado, como o formulário manda.
    fn cleaned(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn code(&self) -> Option<&str> {
        Self::cleaned(&self.code)
    }

    pub fn zip(&self) -> Option<&str> {
        Self::cleaned(&self.zip)
    }

    pub fn city(&self) -> Option<&str> {
        Self::cleaned(&self.city)
    }

    pub fn state(&self) -> Option<&str> {
        Self::cleaned(&self.state)
    }

    pub fn region(&self) -> Option<&str> {
        Self::cleaned(&self.region)
    }

    pub fn is_empty(&self) -> bool {
        self.code().is_none()
            && self.zip().is_none()
            && self.city().is_none()
            && self.state().is_none()
            && self.region().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_criteria_are_ignored() {
        let filters = StoreFilterPayload {
            code: Some("  ".into()),
            zip: Some(String::new()),
            city: None,
            state: Some("SP".into()),
            region: None,
        };
        assert_eq!(filters.code(), None);
        assert_eq!(filters.zip(), None);
        assert_eq!(filters.state(), Some("SP"));
        assert!(!filters.is_empty());
    }

    #[test]
    fn empty_filter_set_is_detected() {
        assert!(StoreFilterPayload::default().is_empty());
    }

    #[test]
    fn uf_must_have_two_characters() {
        let mut payload = CreateStorePayload {
            code: "051".into(),
            name: "Loja Centro".into(),
            operator_name: "Maria Santos".into(),
            street: "Rua Principal".into(),
            number: "100".into(),
            complement: None,
            neighborhood: "Centro".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
            zip: "01010-000".into(),
            region: "Sudeste".into(),
            phone: "(11) 1111-1111".into(),
        };
        assert!(payload.validate().is_ok());

        payload.state = "SPX".into();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("state"));
    }
}
