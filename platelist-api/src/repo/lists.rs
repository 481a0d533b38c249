//! Top-ten list repository
//!
//! List items live in the ranked-list engine; this module only manages the
//! list records themselves.

use crate::validate::ListInput;
use platelist_common::models::{NewTopTenList, TopTenList};
use platelist_common::Result;
use sqlx::SqlitePool;

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<TopTenList>> {
    let rows = sqlx::query_as("SELECT id, name, slug, description, image FROM top_ten_lists ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<TopTenList>> {
    let row = sqlx::query_as("SELECT id, name, slug, description, image FROM top_ten_lists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn get_by_slug_or_id(pool: &SqlitePool, key: &str) -> Result<Option<TopTenList>> {
    if let Ok(id) = key.parse::<i64>() {
        return get_by_id(pool, id).await;
    }
    let row = sqlx::query_as("SELECT id, name, slug, description, image FROM top_ten_lists WHERE slug = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, input: &NewTopTenList) -> Result<TopTenList> {
    let result = sqlx::query("INSERT INTO top_ten_lists (name, slug, description, image) VALUES (?, ?, ?, ?)")
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.image)
        .execute(pool)
        .await?;

    let created = get_by_id(pool, result.last_insert_rowid()).await?;
    created.ok_or_else(|| {
        platelist_common::Error::Internal("top-ten list vanished after insert".to_string())
    })
}

pub async fn update(pool: &SqlitePool, id: i64, input: &ListInput) -> Result<Option<TopTenList>> {
    let Some(existing) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let slug = input
        .slug
        .as_deref()
        .map(crate::sanitize::sanitize_slug)
        .unwrap_or(existing.slug);

    sqlx::query(
        "UPDATE top_ten_lists SET name = ?, slug = ?, description = ?, image = ?, \
         updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(input.name.as_ref().unwrap_or(&existing.name))
    .bind(&slug)
    .bind(input.description.as_ref().or(existing.description.as_ref()))
    .bind(input.image.as_ref().or(existing.image.as_ref()))
    .bind(id)
    .execute(pool)
    .await?;

    get_by_id(pool, id).await
}

/// Delete a list; its items cascade at the store level
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM top_ten_lists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
