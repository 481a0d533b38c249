//! Taxonomy CRUD endpoints and review tag relations

use crate::error::ApiError;
use crate::repo::{reviews, taxonomies};
use crate::tagging::{self, Taxonomy};
use crate::validate::{self, TaxonomyInput};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use platelist_common::models::{Cuisine, LocationCategory, NycEatsCategory, Region};
use serde::Deserialize;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineIdsBody {
    pub cuisine_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIdsBody {
    pub category_ids: Vec<i64>,
}

async fn require_review(state: &AppState, id: i64) -> Result<(), ApiError> {
    if !reviews::exists(&state.db, id).await? {
        return Err(ApiError::not_found("review"));
    }
    Ok(())
}

// ============================================================================
// Review Tag Relations
// ============================================================================

/// GET /api/reviews/:id/cuisines
pub async fn get_review_cuisines(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Cuisine>>, ApiError> {
    require_review(&state, id).await?;
    let tags = tagging::review_cuisines(&state.db, id).await?;
    Ok(Json(tags))
}

/// PUT /api/reviews/:id/cuisines - replace the cuisine tag set
pub async fn put_review_cuisines(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<CuisineIdsBody>,
) -> Result<Json<Vec<Cuisine>>, ApiError> {
    require_review(&state, id).await?;
    tagging::set_tags(&state.db, id, Taxonomy::Cuisine, &body.cuisine_ids).await?;
    let tags = tagging::review_cuisines(&state.db, id).await?;
    Ok(Json(tags))
}

/// GET /api/reviews/:id/nyc-categories
pub async fn get_review_nyc_categories(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<NycEatsCategory>>, ApiError> {
    require_review(&state, id).await?;
    let tags = tagging::review_nyc_categories(&state.db, id).await?;
    Ok(Json(tags))
}

/// PUT /api/reviews/:id/nyc-categories - replace the NYC category tag set
pub async fn put_review_nyc_categories(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<CategoryIdsBody>,
) -> Result<Json<Vec<NycEatsCategory>>, ApiError> {
    require_review(&state, id).await?;
    tagging::set_tags(&state.db, id, Taxonomy::NycEats, &body.category_ids).await?;
    let tags = tagging::review_nyc_categories(&state.db, id).await?;
    Ok(Json(tags))
}

/// GET /api/reviews/:id/location-categories
pub async fn get_review_location_categories(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<LocationCategory>>, ApiError> {
    require_review(&state, id).await?;
    let tags = tagging::review_location_categories(&state.db, id).await?;
    Ok(Json(tags))
}

/// PUT /api/reviews/:id/location-categories - replace the location tag set
pub async fn put_review_location_categories(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<CategoryIdsBody>,
) -> Result<Json<Vec<LocationCategory>>, ApiError> {
    require_review(&state, id).await?;
    tagging::set_tags(&state.db, id, Taxonomy::Location, &body.category_ids).await?;
    let tags = tagging::review_location_categories(&state.db, id).await?;
    Ok(Json(tags))
}

// ============================================================================
// Cuisines
// ============================================================================

/// GET /api/cuisines
pub async fn list_cuisines(State(state): State<AppState>) -> Result<Json<Vec<Cuisine>>, ApiError> {
    Ok(Json(taxonomies::get_all_cuisines(&state.db).await?))
}

/// GET /api/cuisines/:id - lookup by slug or numeric id
pub async fn get_cuisine(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Cuisine>, ApiError> {
    let cuisine = taxonomies::get_cuisine_by_slug_or_id(&state.db, &key)
        .await?
        .ok_or_else(|| ApiError::not_found("cuisine"))?;
    Ok(Json(cuisine))
}

/// POST /api/cuisines
pub async fn create_cuisine(
    State(state): State<AppState>,
    Json(input): Json<TaxonomyInput>,
) -> Result<(StatusCode, Json<Cuisine>), ApiError> {
    let node = validate::validate_taxonomy_create(&input).map_err(ApiError::Validation)?;
    let cuisine = taxonomies::create_cuisine(&state.db, &node).await?;
    Ok((StatusCode::CREATED, Json(cuisine)))
}

/// PATCH /api/cuisines/:id
pub async fn update_cuisine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TaxonomyInput>,
) -> Result<Json<Cuisine>, ApiError> {
    validate::validate_taxonomy_update(&input).map_err(ApiError::Validation)?;
    let cuisine = taxonomies::update_cuisine(&state.db, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("cuisine"))?;
    Ok(Json(cuisine))
}

/// DELETE /api/cuisines/:id
pub async fn delete_cuisine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !taxonomies::delete_cuisine(&state.db, id).await? {
        return Err(ApiError::not_found("cuisine"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// NYC-eats Categories
// ============================================================================

/// GET /api/nyc-categories
pub async fn list_nyc_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<NycEatsCategory>>, ApiError> {
    Ok(Json(taxonomies::get_all_nyc_categories(&state.db).await?))
}

/// GET /api/nyc-categories/:id - lookup by slug or numeric id
pub async fn get_nyc_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<NycEatsCategory>, ApiError> {
    let category = taxonomies::get_nyc_category_by_slug_or_id(&state.db, &key)
        .await?
        .ok_or_else(|| ApiError::not_found("NYC category"))?;
    Ok(Json(category))
}

/// POST /api/nyc-categories
pub async fn create_nyc_category(
    State(state): State<AppState>,
    Json(input): Json<TaxonomyInput>,
) -> Result<(StatusCode, Json<NycEatsCategory>), ApiError> {
    let node = validate::validate_taxonomy_create(&input).map_err(ApiError::Validation)?;
    let category = taxonomies::create_nyc_category(&state.db, &node).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /api/nyc-categories/:id
pub async fn update_nyc_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TaxonomyInput>,
) -> Result<Json<NycEatsCategory>, ApiError> {
    validate::validate_taxonomy_update(&input).map_err(ApiError::Validation)?;
    let category = taxonomies::update_nyc_category(&state.db, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("NYC category"))?;
    Ok(Json(category))
}

/// DELETE /api/nyc-categories/:id
pub async fn delete_nyc_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !taxonomies::delete_nyc_category(&state.db, id).await? {
        return Err(ApiError::not_found("NYC category"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Regions
// ============================================================================

/// GET /api/regions
pub async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<Region>>, ApiError> {
    Ok(Json(taxonomies::get_all_regions(&state.db).await?))
}

/// GET /api/regions/:id - lookup by slug or numeric id
pub async fn get_region(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Region>, ApiError> {
    let region = taxonomies::get_region_by_slug_or_id(&state.db, &key)
        .await?
        .ok_or_else(|| ApiError::not_found("region"))?;
    Ok(Json(region))
}

/// POST /api/regions
pub async fn create_region(
    State(state): State<AppState>,
    Json(input): Json<TaxonomyInput>,
) -> Result<(StatusCode, Json<Region>), ApiError> {
    let node = validate::validate_taxonomy_create(&input).map_err(ApiError::Validation)?;
    let region = taxonomies::create_region(&state.db, &node).await?;
    Ok((StatusCode::CREATED, Json(region)))
}

/// PATCH /api/regions/:id
pub async fn update_region(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TaxonomyInput>,
) -> Result<Json<Region>, ApiError> {
    validate::validate_taxonomy_update(&input).map_err(ApiError::Validation)?;
    let region = taxonomies::update_region(&state.db, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("region"))?;
    Ok(Json(region))
}

/// DELETE /api/regions/:id - owned location categories cascade
pub async fn delete_region(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !taxonomies::delete_region(&state.db, id).await? {
        return Err(ApiError::not_found("region"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Location Categories
// ============================================================================

/// GET /api/location-categories
pub async fn list_location_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationCategory>>, ApiError> {
    Ok(Json(taxonomies::get_all_location_categories(&state.db).await?))
}

/// GET /api/location-categories/:id - lookup by slug or numeric id
pub async fn get_location_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LocationCategory>, ApiError> {
    let category = taxonomies::get_location_category_by_slug_or_id(&state.db, &key)
        .await?
        .ok_or_else(|| ApiError::not_found("location category"))?;
    Ok(Json(category))
}

/// POST /api/location-categories
pub async fn create_location_category(
    State(state): State<AppState>,
    Json(input): Json<TaxonomyInput>,
) -> Result<(StatusCode, Json<LocationCategory>), ApiError> {
    let node = validate::validate_taxonomy_create(&input).map_err(ApiError::Validation)?;
    let category = taxonomies::create_location_category(&state.db, &node).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /api/location-categories/:id
pub async fn update_location_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<TaxonomyInput>,
) -> Result<Json<LocationCategory>, ApiError> {
    validate::validate_taxonomy_update(&input).map_err(ApiError::Validation)?;
    let category = taxonomies::update_location_category(&state.db, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("location category"))?;
    Ok(Json(category))
}

/// DELETE /api/location-categories/:id
pub async fn delete_location_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !taxonomies::delete_location_category(&state.db, id).await? {
        return Err(ApiError::not_found("location category"));
    }
    Ok(StatusCode::NO_CONTENT)
}
