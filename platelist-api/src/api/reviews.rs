//! Review CRUD endpoints

use crate::error::ApiError;
use crate::repo::reviews;
use crate::validate::{self, ReviewInput};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use platelist_common::models::Review;
use tracing::info;

/// GET /api/reviews - every review, unfiltered
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = reviews::get_all(&state.db).await?;
    Ok(Json(reviews))
}

/// GET /api/reviews/:id - lookup by slug or numeric id
pub async fn get_review(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Review>, ApiError> {
    let review = reviews::get_by_slug_or_id(&state.db, &key)
        .await?
        .ok_or_else(|| ApiError::not_found("review"))?;
    Ok(Json(review))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(input): Json<ReviewInput>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let new_review = validate::validate_review_create(&input).map_err(ApiError::Validation)?;

    if reviews::slug_exists(&state.db, &new_review.slug).await? {
        return Err(ApiError::BadRequest(format!(
            "a review with slug '{}' already exists",
            new_review.slug
        )));
    }

    let review = reviews::create(&state.db, &new_review).await?;
    info!("Created review {} ('{}')", review.id, review.slug);

    Ok((StatusCode::CREATED, Json(review)))
}

/// PATCH /api/reviews/:id - partial update of validated fields
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ReviewInput>,
) -> Result<Json<Review>, ApiError> {
    validate::validate_review_update(&input).map_err(ApiError::Validation)?;

    // A slug change must not collide with another review
    if let Some(slug) = input.slug.as_deref() {
        let normalized = crate::sanitize::sanitize_slug(slug);
        if let Some(holder) = reviews::get_by_slug(&state.db, &normalized).await? {
            if holder.id != id {
                return Err(ApiError::BadRequest(format!(
                    "a review with slug '{}' already exists",
                    normalized
                )));
            }
        }
    }

    let review = reviews::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("review"))?;
    Ok(Json(review))
}

/// DELETE /api/reviews/:id - 204 on removal, 404 when already gone
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !reviews::delete(&state.db, id).await? {
        return Err(ApiError::not_found("review"));
    }
    info!("Deleted review {}", id);
    Ok(StatusCode::NO_CONTENT)
}
