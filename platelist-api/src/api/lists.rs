//! Top-ten list endpoints

use crate::error::ApiError;
use crate::ranking::{self, ItemSpec, RankedItem};
use crate::repo::lists;
use crate::validate::{self, ListInput};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use platelist_common::models::TopTenList;
use serde::{Deserialize, Serialize};
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ListWithItems {
    pub list: TopTenList,
    pub items: Vec<RankedItem>,
}

#[derive(Debug, Deserialize)]
pub struct ItemsBody {
    pub items: Vec<ItemSpec>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/top-ten-lists
pub async fn list_lists(State(state): State<AppState>) -> Result<Json<Vec<TopTenList>>, ApiError> {
    Ok(Json(lists::get_all(&state.db).await?))
}

/// GET /api/top-ten-lists/:id - list record (by slug or id) plus its ordered items
pub async fn get_list(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ListWithItems>, ApiError> {
    let list = lists::get_by_slug_or_id(&state.db, &key)
        .await?
        .ok_or_else(|| ApiError::not_found("top-ten list"))?;
    let items = ranking::get_items(&state.db, list.id).await?;
    Ok(Json(ListWithItems { list, items }))
}

/// POST /api/top-ten-lists
pub async fn create_list(
    State(state): State<AppState>,
    Json(input): Json<ListInput>,
) -> Result<(StatusCode, Json<TopTenList>), ApiError> {
    let new_list = validate::validate_list_create(&input).map_err(ApiError::Validation)?;
    let list = lists::create(&state.db, &new_list).await?;
    info!("Created top-ten list {} ('{}')", list.id, list.slug);
    Ok((StatusCode::CREATED, Json(list)))
}

/// PATCH /api/top-ten-lists/:id
pub async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ListInput>,
) -> Result<Json<TopTenList>, ApiError> {
    validate::validate_list_update(&input).map_err(ApiError::Validation)?;
    let list = lists::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("top-ten list"))?;
    Ok(Json(list))
}

/// DELETE /api/top-ten-lists/:id
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !lists::delete(&state.db, id).await? {
        return Err(ApiError::not_found("top-ten list"));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/top-ten-lists/:id/items - bulk replace of membership and order
pub async fn put_list_items(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ItemsBody>,
) -> Result<Json<Vec<RankedItem>>, ApiError> {
    if lists::get_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::not_found("top-ten list"));
    }

    ranking::replace_items(&state.db, id, &body.items).await?;
    let items = ranking::get_items(&state.db, id).await?;
    Ok(Json(items))
}
