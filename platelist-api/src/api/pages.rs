//! Page header endpoints

use crate::error::ApiError;
use crate::repo::pages;
use crate::validate::{self, PageHeaderInput};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use platelist_common::models::PageHeader;

/// GET /api/page-headers
pub async fn list_page_headers(
    State(state): State<AppState>,
) -> Result<Json<Vec<PageHeader>>, ApiError> {
    Ok(Json(pages::get_all(&state.db).await?))
}

/// GET /api/page-headers/:page
pub async fn get_page_header(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<PageHeader>, ApiError> {
    let header = pages::get(&state.db, &page)
        .await?
        .ok_or_else(|| ApiError::not_found("page header"))?;
    Ok(Json(header))
}

/// PUT /api/page-headers/:page - upsert by page key
pub async fn upsert_page_header(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Json(input): Json<PageHeaderInput>,
) -> Result<Json<PageHeader>, ApiError> {
    let page = page.trim().to_lowercase();
    if page.is_empty() {
        return Err(ApiError::BadRequest("page must not be empty".to_string()));
    }
    let new_header = validate::validate_page_header(&input).map_err(ApiError::Validation)?;
    let header = pages::upsert(&state.db, &page, &new_header).await?;
    Ok(Json(header))
}
