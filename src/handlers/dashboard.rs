// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::DashboardMetrics,
};

// GET /api/dashboard/metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Fotografia dos números da rede", body = DashboardMetrics)
    )
)]
pub async fn get_metrics(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let metrics = app_state.dashboard_service.metrics().await?;
    Ok((StatusCode::OK, Json(metrics)))
}
