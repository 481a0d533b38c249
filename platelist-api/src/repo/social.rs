//! Social settings and embed repositories

use crate::validate::{NewSocialEmbed, SocialEmbedInput, SocialSettingsInput};
use platelist_common::models::{SocialEmbed, SocialSettings};
use platelist_common::Result;
use sqlx::SqlitePool;

pub async fn get_all_settings(pool: &SqlitePool) -> Result<Vec<SocialSettings>> {
    let rows = sqlx::query_as("SELECT platform, url, handle, enabled FROM social_settings ORDER BY platform")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Upsert per-platform settings by platform key
pub async fn upsert_settings(
    pool: &SqlitePool,
    platform: &str,
    input: &SocialSettingsInput,
) -> Result<SocialSettings> {
    let enabled = input.enabled.unwrap_or(true) as i64;

    sqlx::query(
        r#"
        INSERT INTO social_settings (platform, url, handle, enabled)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(platform) DO UPDATE SET
            url = excluded.url,
            handle = excluded.handle,
            enabled = excluded.enabled,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(platform)
    .bind(&input.url)
    .bind(&input.handle)
    .bind(enabled)
    .execute(pool)
    .await?;

    let row = sqlx::query_as("SELECT platform, url, handle, enabled FROM social_settings WHERE platform = ?")
        .bind(platform)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Embeds grouped by platform, ordered by their sort position
pub async fn get_all_embeds(pool: &SqlitePool) -> Result<Vec<SocialEmbed>> {
    let rows = sqlx::query_as(
        "SELECT id, platform, title, url, embed_code, sort_order FROM social_embeds \
         ORDER BY platform, sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_embed_by_id(pool: &SqlitePool, id: i64) -> Result<Option<SocialEmbed>> {
    let row = sqlx::query_as(
        "SELECT id, platform, title, url, embed_code, sort_order FROM social_embeds WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create_embed(pool: &SqlitePool, input: &NewSocialEmbed) -> Result<SocialEmbed> {
    let result = sqlx::query(
        "INSERT INTO social_embeds (platform, title, url, embed_code, sort_order) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&input.platform)
    .bind(&input.title)
    .bind(&input.url)
    .bind(&input.embed_code)
    .bind(input.sort_order)
    .execute(pool)
    .await?;

    let created = get_embed_by_id(pool, result.last_insert_rowid()).await?;
    created.ok_or_else(|| {
        platelist_common::Error::Internal("social embed vanished after insert".to_string())
    })
}

pub async fn update_embed(
    pool: &SqlitePool,
    id: i64,
    input: &SocialEmbedInput,
) -> Result<Option<SocialEmbed>> {
    let Some(existing) = get_embed_by_id(pool, id).await? else {
        return Ok(None);
    };

    sqlx::query(
        "UPDATE social_embeds SET platform = ?, title = ?, url = ?, embed_code = ?, sort_order = ? \
         WHERE id = ?",
    )
    .bind(input.platform.as_ref().unwrap_or(&existing.platform))
    .bind(input.title.as_ref().or(existing.title.as_ref()))
    .bind(input.url.as_ref().or(existing.url.as_ref()))
    .bind(input.embed_code.as_ref().unwrap_or(&existing.embed_code))
    .bind(input.sort_order.unwrap_or(existing.sort_order))
    .bind(id)
    .execute(pool)
    .await?;

    get_embed_by_id(pool, id).await
}

pub async fn delete_embed(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM social_embeds WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
