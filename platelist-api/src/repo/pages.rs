//! Page header repository, keyed by page name

use crate::validate::NewPageHeader;
use platelist_common::models::PageHeader;
use platelist_common::Result;
use sqlx::SqlitePool;

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<PageHeader>> {
    let rows = sqlx::query_as("SELECT page, title, subtitle, image FROM page_headers ORDER BY page")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, page: &str) -> Result<Option<PageHeader>> {
    let row = sqlx::query_as("SELECT page, title, subtitle, image FROM page_headers WHERE page = ?")
        .bind(page)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn upsert(pool: &SqlitePool, page: &str, input: &NewPageHeader) -> Result<PageHeader> {
    sqlx::query(
        r#"
        INSERT INTO page_headers (page, title, subtitle, image)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(page) DO UPDATE SET
            title = excluded.title,
            subtitle = excluded.subtitle,
            image = excluded.image,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(page)
    .bind(&input.title)
    .bind(&input.subtitle)
    .bind(&input.image)
    .execute(pool)
    .await?;

    let row = sqlx::query_as("SELECT page, title, subtitle, image FROM page_headers WHERE page = ?")
        .bind(page)
        .fetch_one(pool)
        .await?;
    Ok(row)
}
