// src/db/admin_repo.rs

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{common::error::AppError, models::admin::Admin};

// Repositório de administradores. A senha só circula aqui já em forma
// de hash; o texto puro morre no serviço.
#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(
                        "Este e-mail já está em uso.".into(),
                    );
                }
            }
            AppError::DatabaseError(e)
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Admin>, AppError> {
        let admins = sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(admins)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    /// Campos ausentes ficam como estão. `password_hash`, quando vier,
    /// já chega hasheado pelo serviço.
    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<Admin>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE admins SET ");
        let mut set = qb.separated(", ");

        if let Some(name) = name {
            set.push("name = ").push_bind_unseparated(name);
        }
        if let Some(email) = email {
            set.push("email = ").push_bind_unseparated(email);
        }
        if let Some(password_hash) = password_hash {
            set.push("password_hash = ")
                .push_bind_unseparated(password_hash);
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<Admin>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::UniqueConstraintViolation(
                            "Este e-mail já está em uso.".into(),
                        );
                    }
                }
                AppError::DatabaseError(e)
            })
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
