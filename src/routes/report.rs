use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::MoodReport;
use crate::services::report_service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQueryParams {
    /// Trailing window in hours (default: 24).
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
}

fn default_window_hours() -> i64 {
    24
}

/// GET /api/report?window_hours=24
///
/// A missing or unreadable store degrades to the empty no-data report;
/// the endpoint always answers with a well-formed report.
pub async fn get_report(
    Query(params): Query<ReportQueryParams>,
    State(state): State<AppState>,
) -> Result<Json<MoodReport>, AppError> {
    if params.window_hours <= 0 {
        return Err(AppError::Validation(
            "window_hours must be positive".to_string(),
        ));
    }

    let history = match state.store.list_snapshots(None).await {
        Ok(snapshots) => snapshots,
        Err(e) => {
            warn!("Snapshot store unavailable, serving empty report: {}", e);
            Vec::new()
        }
    };

    let report = report_service::build_report(params.window_hours, &history);

    info!(
        "Built mood report: regime={}, fear={:?}, scans {}/{}",
        report.regime.label, report.fear, report.scans_in_window, report.scans_total
    );

    Ok(Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_report))
}
