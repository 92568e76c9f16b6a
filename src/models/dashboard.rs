// src/models/dashboard.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::kit::Kit;

// Fotografia única dos números da rede, montada em uma requisição.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_suppliers: i64,
    pub total_stores: i64,
    pub total_tickets: i64,
    pub open_tickets: i64,
    pub resolved_tickets: i64,

    // Lojas distintas com instalação registrada e fotos anexadas.
    pub completed_installations: i64,

    pub unused_kits: i64,
    pub unused_kits_list: Vec<Kit>,

    // Seis meses-calendário terminando no mês corrente, com buracos zerados.
    pub monthly_installations: Vec<MonthlyInstallationEntry>,

    pub tickets_by_status: TicketsByStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketsByStatus {
    pub open: i64,
    pub resolved: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyInstallationEntry {
    // "YYYY-MM"
    pub month: String,
    pub total: i64,
}

// Linha crua do GROUP BY mensal, antes do preenchimento dos buracos.
#[derive(Debug, FromRow)]
pub struct MonthlyInstallationRow {
    pub month: Option<String>,
    pub total: Option<i64>,
}

// Contagens agregadas de chamados, vindas de um único GROUP BY.
#[derive(Debug, Default, Clone, Copy)]
pub struct TicketCounts {
    pub open: i64,
    pub resolved: i64,
}

impl TicketCounts {
    pub fn total(&self) -> i64 {
        self.open + self.resolved
    }
}
