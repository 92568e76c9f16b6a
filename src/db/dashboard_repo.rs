// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{
        dashboard::{MonthlyInstallationRow, TicketCounts},
        kit::Kit,
        ticket::TicketStatus,
    },
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_suppliers(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn count_stores(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stores")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Um único GROUP BY cobre abertos e resolvidos; o total sai da soma,
    /// então abertos + resolvidos == total por construção.
    pub async fn count_tickets_by_status(&self) -> Result<TicketCounts, AppError> {
        let rows = sqlx::query_as::<_, (TicketStatus, i64)>(
            "SELECT status, COUNT(*) FROM tickets GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut counts = TicketCounts::default();
        for (status, count) in rows {
            match status {
                TicketStatus::Open => counts.open = count,
                TicketStatus::Resolved => counts.resolved = count,
            }
        }
        Ok(counts)
    }

    /// Lojas distintas com instalação registrada e pelo menos uma foto.
    pub async fn count_completed_installations(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT i.store_code)
            FROM installations i
            INNER JOIN stores s ON s.code = i.store_code
            WHERE jsonb_array_length(i.photos) > 0
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn count_unused_kits(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM kits WHERE used = FALSE")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn list_unused_kits(&self, limit: i64) -> Result<Vec<Kit>, AppError> {
        let kits = sqlx::query_as::<_, Kit>(
            "SELECT * FROM kits WHERE used = FALSE ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(kits)
    }

    /// Contagem por mês-calendário dos últimos seis meses (incluindo o
    /// corrente). Meses sem instalação não aparecem aqui; o serviço
    /// preenche os buracos.
    pub async fn monthly_installations(&self) -> Result<Vec<MonthlyInstallationRow>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyInstallationRow>(
            r#"
            SELECT
                to_char(date_trunc('month', installation_date), 'YYYY-MM') AS month,
                COUNT(*) AS total
            FROM installations
            WHERE installation_date >= (date_trunc('month', CURRENT_DATE) - INTERVAL '5 months')
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
