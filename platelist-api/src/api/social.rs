//! Social settings and embed endpoints

use crate::error::ApiError;
use crate::repo::social;
use crate::validate::{self, SocialEmbedInput, SocialSettingsInput};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use platelist_common::models::{SocialEmbed, SocialSettings};

/// GET /api/social-settings
pub async fn list_settings(
    State(state): State<AppState>,
) -> Result<Json<Vec<SocialSettings>>, ApiError> {
    Ok(Json(social::get_all_settings(&state.db).await?))
}

/// PUT /api/social-settings/:platform - upsert by platform key
pub async fn upsert_settings(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(input): Json<SocialSettingsInput>,
) -> Result<Json<SocialSettings>, ApiError> {
    let platform = platform.trim().to_lowercase();
    if platform.is_empty() {
        return Err(ApiError::BadRequest("platform must not be empty".to_string()));
    }
    let settings = social::upsert_settings(&state.db, &platform, &input).await?;
    Ok(Json(settings))
}

/// GET /api/social-embeds - ordered by platform and sort position
pub async fn list_embeds(State(state): State<AppState>) -> Result<Json<Vec<SocialEmbed>>, ApiError> {
    Ok(Json(social::get_all_embeds(&state.db).await?))
}

/// POST /api/social-embeds
pub async fn create_embed(
    State(state): State<AppState>,
    Json(input): Json<SocialEmbedInput>,
) -> Result<(StatusCode, Json<SocialEmbed>), ApiError> {
    let new_embed = validate::validate_social_embed(&input).map_err(ApiError::Validation)?;
    let embed = social::create_embed(&state.db, &new_embed).await?;
    Ok((StatusCode::CREATED, Json(embed)))
}

/// PATCH /api/social-embeds/:id
pub async fn update_embed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<SocialEmbedInput>,
) -> Result<Json<SocialEmbed>, ApiError> {
    let embed = social::update_embed(&state.db, id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("social embed"))?;
    Ok(Json(embed))
}

/// DELETE /api/social-embeds/:id
pub async fn delete_embed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !social::delete_embed(&state.db, id).await? {
        return Err(ApiError::not_found("social embed"));
    }
    Ok(StatusCode::NO_CONTENT)
}
