// src/services/dashboard_service.rs

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate, Utc};

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{
        DashboardMetrics, MonthlyInstallationEntry, MonthlyInstallationRow, TicketsByStatus,
    },
};

const UNUSED_KITS_SAMPLE: i64 = 10;
const TREND_MONTHS: u32 = 6;

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn metrics(&self) -> Result<DashboardMetrics, AppError> {
        let total_suppliers = self.repo.count_suppliers().await?;
        let total_stores = self.repo.count_stores().await?;
        let tickets = self.repo.count_tickets_by_status().await?;
        let completed_installations = self.repo.count_completed_installations().await?;
        let unused_kits = self.repo.count_unused_kits().await?;
        let unused_kits_list = self.repo.list_unused_kits(UNUSED_KITS_SAMPLE).await?;
        let monthly_rows = self.repo.monthly_installations().await?;

        let monthly_installations =
            fill_monthly_buckets(Utc::now().date_naive(), &monthly_rows);

        Ok(DashboardMetrics {
            total_suppliers,
            total_stores,
            total_tickets: tickets.total(),
            open_tickets: tickets.open,
            resolved_tickets: tickets.resolved,
            completed_installations,
            unused_kits,
            unused_kits_list,
            monthly_installations,
            tickets_by_status: TicketsByStatus {
                open: tickets.open,
                resolved: tickets.resolved,
            },
        })
    }
}

/// Espalha as linhas do GROUP BY em seis meses-calendário consecutivos
/// terminando no mês de `today`, zerando os meses sem instalação.
fn fill_monthly_buckets(
    today: NaiveDate,
    rows: &[MonthlyInstallationRow],
) -> Vec<MonthlyInstallationEntry> {
    let counts: HashMap<&str, i64> = rows
        .iter()
        .filter_map(|row| {
            row.month
                .as_deref()
                .map(|month| (month, row.total.unwrap_or(0)))
        })
        .collect();

    (0..TREND_MONTHS)
        .rev()
        .map(|offset| {
            let month = today
                .checked_sub_months(Months::new(offset))
                .unwrap_or(today);
            let key = format!("{:04}-{:02}", month.year(), month.month());
            let total = counts.get(key.as_str()).copied().unwrap_or(0);
            MonthlyInstallationEntry { month: key, total }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: &str, total: i64) -> MonthlyInstallationRow {
        MonthlyInstallationRow {
            month: Some(month.to_string()),
            total: Some(total),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn produces_six_buckets_oldest_first() {
        let buckets = fill_monthly_buckets(day(2026, 7, 20), &[]);
        let months: Vec<&str> = buckets.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["2026-02", "2026-03", "2026-04", "2026-05", "2026-06", "2026-07"]
        );
        assert!(buckets.iter().all(|b| b.total == 0));
    }

    #[test]
    fn counts_land_in_their_month() {
        let rows = vec![row("2026-03", 4), row("2026-07", 2)];
        let buckets = fill_monthly_buckets(day(2026, 7, 1), &rows);
        assert_eq!(buckets[1].month, "2026-03");
        assert_eq!(buckets[1].total, 4);
        assert_eq!(buckets[5].month, "2026-07");
        assert_eq!(buckets[5].total, 2);
        assert_eq!(buckets[0].total, 0);
    }

    #[test]
    fn window_crosses_year_boundary() {
        let buckets = fill_monthly_buckets(day(2026, 1, 31), &[row("2025-12", 7)]);
        let months: Vec<&str> = buckets.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["2025-08", "2025-09", "2025-10", "2025-11", "2025-12", "2026-01"]
        );
        assert_eq!(buckets[4].total, 7);
    }

    #[test]
    fn rows_outside_window_are_ignored() {
        let rows = vec![row("2020-01", 99)];
        let buckets = fill_monthly_buckets(day(2026, 7, 15), &rows);
        assert!(buckets.iter().all(|b| b.total == 0));
    }
}
