// src/db/supplier_repo.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    common::{cnpj, error::AppError},
    models::supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload},
};

// Repositório de fornecedores, responsável por todas as interações
// com a tabela 'suppliers'.
#[derive(Clone)]
pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreateSupplierPayload) -> Result<Supplier, AppError> {
        sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (legal_name, cnpj, contact_name, phone, address, budget)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&payload.legal_name)
        .bind(&payload.cnpj)
        .bind(&payload.contact_name)
        .bind(&payload.phone)
        .bind(&payload.address)
        .bind(payload.budget)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_db(
                e,
                "Este CNPJ já está cadastrado.",
                "Referência inválida ao criar fornecedor.",
            )
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Supplier>, AppError> {
        let suppliers = sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(suppliers)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(supplier)
    }

    /// Busca pelo CNPJ comparando só os dígitos, em duas fases:
    /// igualdade exata primeiro e, se nada vier, LIKE por substring.
    /// A segunda fase é propositalmente permissiva para tolerar entrada
    /// parcial ou truncada; pode casar mais de um registro.
    pub async fn find_by_cnpj(&self, raw: &str) -> Result<Option<Supplier>, AppError> {
        let digits = cnpj::normalize(raw);

        let exact = sqlx::query_as::<_, Supplier>(
            "SELECT * FROM suppliers WHERE regexp_replace(cnpj, '[^0-9]', '', 'g') = $1",
        )
        .bind(&digits)
        .fetch_optional(&self.pool)
        .await?;

        if exact.is_some() {
            return Ok(exact);
        }

        let similar = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT * FROM suppliers
            WHERE regexp_replace(cnpj, '[^0-9]', '', 'g') LIKE $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(format!("%{}%", digits))
        .fetch_optional(&self.pool)
        .await?;

        Ok(similar)
    }

    /// Aplica apenas os campos presentes; os demais ficam como estão.
    pub async fn update(
        &self,
        id: i32,
        fields: &UpdateSupplierPayload,
    ) -> Result<Option<Supplier>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE suppliers SET ");
        let mut set = qb.separated(", ");

        if let Some(legal_name) = &fields.legal_name {
            set.push("legal_name = ").push_bind_unseparated(legal_name);
        }
        if let Some(cnpj) = &fields.cnpj {
            set.push("cnpj = ").push_bind_unseparated(cnpj);
        }
        if let Some(contact_name) = &fields.contact_name {
            set.push("contact_name = ").push_bind_unseparated(contact_name);
        }
        if let Some(phone) = &fields.phone {
            set.push("phone = ").push_bind_unseparated(phone);
        }
        if let Some(address) = &fields.address {
            set.push("address = ").push_bind_unseparated(address);
        }
        if let Some(budget) = &fields.budget {
            set.push("budget = ").push_bind_unseparated(budget);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<Supplier>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_db(
                    e,
                    "Este CNPJ já está cadastrado.",
                    "Referência inválida ao atualizar fornecedor.",
                )
            })
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::ReferencedRecord(
                            "O fornecedor ainda possui chamados ou instalações vinculados.".into(),
                        );
                    }
                }
                AppError::DatabaseError(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
