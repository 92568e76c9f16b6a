// src/db/store_repo.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    common::error::AppError,
    models::store::{CreateStorePayload, Store, StoreFilterPayload, UpdateStorePayload},
};

#[derive(Clone)]
pub struct StoreRepository {
    pool: PgPool,
}

impl StoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: &CreateStorePayload) -> Result<Store, AppError> {
        sqlx::query_as::<_, Store>(
            r#"
            INSERT INTO stores (
                code, name, operator_name,
                street, number, complement, neighborhood, city, state, zip,
                region, phone
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.operator_name)
        .bind(&payload.street)
        .bind(&payload.number)
        .bind(&payload.complement)
        .bind(&payload.neighborhood)
        .bind(&payload.city)
        .bind(&payload.state)
        .bind(&payload.zip)
        .bind(&payload.region)
        .bind(&payload.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_db(
                e,
                "Este código de loja já está cadastrado.",
                "Referência inválida ao criar loja.",
            )
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Store>, AppError> {
        let stores = sqlx::query_as::<_, Store>("SELECT * FROM stores ORDER BY code")
            .fetch_all(&self.pool)
            .await?;
        Ok(stores)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(store)
    }

    /// Monta a conjunção dos critérios informados; critério em branco não
    /// entra. Sem critério nenhum, devolve todas as lojas.
    pub async fn find_by_filters(
        &self,
        filters: &StoreFilterPayload,
    ) -> Result<Vec<Store>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM stores WHERE 1=1");

        if let Some(code) = filters.code() {
            qb.push(" AND code ILIKE ")
                .push_bind(format!("%{}%", code));
        }
        if let Some(zip) = filters.zip() {
            qb.push(" AND zip ILIKE ").push_bind(format!("%{}%", zip));
        }
        if let Some(city) = filters.city() {
            qb.push(" AND city ILIKE ").push_bind(format!("%{}%", city));
        }
        if let Some(state) = filters.state() {
            // UF é igualdade sem curinga, insensível a caixa.
            qb.push(" AND state ILIKE ").push_bind(state.to_string());
        }
        if let Some(region) = filters.region() {
            qb.push(" AND region ILIKE ")
                .push_bind(format!("%{}%", region));
        }

        qb.push(" ORDER BY code");

        let stores = qb
            .build_query_as::<Store>()
            .fetch_all(&self.pool)
            .await?;
        Ok(stores)
    }

    pub async fn update(
        &self,
        code: &str,
        fields: &UpdateStorePayload,
    ) -> Result<Option<Store>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE stores SET ");
        let mut set = qb.separated(", ");

        if let Some(name) = &fields.name {
            set.push("name = ").push_bind_unseparated(name);
        }
        if let Some(operator_name) = &fields.operator_name {
            set.push("operator_name = ")
                .push_bind_unseparated(operator_name);
        }
        if let Some(street) = &fields.street {
            set.push("street = ").push_bind_unseparated(street);
        }
        if let Some(number) = &fields.number {
            set.push("number = ").push_bind_unseparated(number);
        }
        if let Some(complement) = &fields.complement {
            set.push("complement = ").push_bind_unseparated(complement);
        }
        if let Some(neighborhood) = &fields.neighborhood {
            set.push("neighborhood = ")
                .push_bind_unseparated(neighborhood);
        }
        if let Some(city) = &fields.city {
            set.push("city = ").push_bind_unseparated(city);
        }
        if let Some(state) = &fields.state {
            set.push("state = ").push_bind_unseparated(state);
        }
        if let Some(zip) = &fields.zip {
            set.push("zip = ").push_bind_unseparated(zip);
        }
        if let Some(region) = &fields.region {
            set.push("region = ").push_bind_unseparated(region);
        }
        if let Some(phone) = &fields.phone {
            set.push("phone = ").push_bind_unseparated(phone);
        }

        qb.push(" WHERE code = ").push_bind(code);
        qb.push(" RETURNING *");

        let store = qb
            .build_query_as::<Store>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(store)
    }

    pub async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM stores WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::ReferencedRecord(
                            "A loja ainda possui kits, chamados, fotos ou instalações vinculados."
                                .into(),
                        );
                    }
                }
                AppError::DatabaseError(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
