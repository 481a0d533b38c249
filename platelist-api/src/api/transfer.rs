//! Import/export endpoints

use crate::error::ApiError;
use crate::snapshot::{self, SiteSnapshot};
use crate::transfer::{self, ExportDocument, ImportReport};
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// GET /api/export/reviews - portable export, identity stripped
pub async fn export_reviews(State(state): State<AppState>) -> Result<Json<ExportDocument>, ApiError> {
    let document = transfer::export_reviews(&state.db).await?;
    Ok(Json(document))
}

/// GET /api/export/static - full-site snapshot for static deployment
pub async fn export_static(State(state): State<AppState>) -> Result<Json<SiteSnapshot>, ApiError> {
    let snapshot = snapshot::build_snapshot(&state.db).await?;
    Ok(Json(snapshot))
}

/// POST /api/import/reviews - sanitizing bulk import of untrusted records
pub async fn import_reviews(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ImportReport>, ApiError> {
    let report = transfer::import_reviews(&state.db, &payload).await?;
    Ok(Json(report))
}
