//! Contact form and inbox endpoints

use crate::error::ApiError;
use crate::repo::contact;
use crate::validate::{self, ContactInput};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use platelist_common::models::ContactSubmission;

/// POST /api/contact - public contact form submission
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<(StatusCode, Json<ContactSubmission>), ApiError> {
    let new_contact = validate::validate_contact(&input).map_err(ApiError::Validation)?;
    let submission = contact::create(&state.db, &new_contact).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /api/contact-submissions - inbox, newest first
pub async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, ApiError> {
    Ok(Json(contact::get_all(&state.db).await?))
}

/// PATCH /api/contact-submissions/:id/read
pub async fn mark_submission_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactSubmission>, ApiError> {
    let submission = contact::mark_read(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("contact submission"))?;
    Ok(Json(submission))
}

/// DELETE /api/contact-submissions/:id
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !contact::delete(&state.db, id).await? {
        return Err(ApiError::not_found("contact submission"));
    }
    Ok(StatusCode::NO_CONTENT)
}
