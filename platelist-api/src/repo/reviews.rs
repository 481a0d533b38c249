//! Review repository

use crate::validate::ReviewInput;
use platelist_common::models::{NewReview, Review};
use platelist_common::Result;
use sqlx::SqlitePool;

/// Columns selected for review reads, in `ReviewRow` field order
const REVIEW_COLUMNS: &str = "id, slug, name, cuisine, location, rating, excerpt, image, \
     price_range, full_review, highlights, atmosphere, must_try, visit_date";

/// Raw review row; `highlights`/`must_try` are JSON text columns
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ReviewRow {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: f64,
    pub excerpt: String,
    pub image: Option<String>,
    pub price_range: String,
    pub full_review: Option<String>,
    pub highlights: Option<String>,
    pub atmosphere: Option<String>,
    pub must_try: Option<String>,
    pub visit_date: Option<String>,
}

impl ReviewRow {
    pub(crate) fn into_review(self) -> Review {
        // Unparseable list columns degrade to absent rather than failing the read
        let highlights = self
            .highlights
            .as_deref()
            .and_then(|s| serde_json::from_str::<Vec<String>>(s).ok());
        let must_try = self
            .must_try
            .as_deref()
            .and_then(|s| serde_json::from_str::<Vec<String>>(s).ok());

        Review {
            id: self.id,
            slug: self.slug,
            name: self.name,
            cuisine: self.cuisine,
            location: self.location,
            rating: self.rating,
            excerpt: self.excerpt,
            image: self.image,
            price_range: self.price_range,
            full_review: self.full_review,
            highlights,
            atmosphere: self.atmosphere,
            must_try,
            visit_date: self.visit_date,
        }
    }
}

fn encode_list(list: Option<&Vec<String>>) -> Result<Option<String>> {
    Ok(list.map(serde_json::to_string).transpose()?)
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Review>> {
    let rows: Vec<ReviewRow> =
        sqlx::query_as(&format!("SELECT {} FROM reviews ORDER BY id", REVIEW_COLUMNS))
            .fetch_all(pool)
            .await?;

    Ok(rows.into_iter().map(ReviewRow::into_review).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Review>> {
    let row: Option<ReviewRow> =
        sqlx::query_as(&format!("SELECT {} FROM reviews WHERE id = ?", REVIEW_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(ReviewRow::into_review))
}

pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Review>> {
    let row: Option<ReviewRow> =
        sqlx::query_as(&format!("SELECT {} FROM reviews WHERE slug = ?", REVIEW_COLUMNS))
            .bind(slug)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(ReviewRow::into_review))
}

/// Lookup by slug, falling back to numeric id when the key parses as one
pub async fn get_by_slug_or_id(pool: &SqlitePool, key: &str) -> Result<Option<Review>> {
    if let Ok(id) = key.parse::<i64>() {
        return get_by_id(pool, id).await;
    }
    get_by_slug(pool, key).await
}

pub async fn slug_exists(pool: &SqlitePool, slug: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reviews WHERE slug = ?)")
        .bind(slug)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reviews WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub async fn create(pool: &SqlitePool, input: &NewReview) -> Result<Review> {
    let highlights = encode_list(input.highlights.as_ref())?;
    let must_try = encode_list(input.must_try.as_ref())?;

    let result = sqlx::query(
        r#"
        INSERT INTO reviews (
            slug, name, cuisine, location, rating, excerpt, image,
            price_range, full_review, highlights, atmosphere, must_try, visit_date
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.slug)
    .bind(&input.name)
    .bind(&input.cuisine)
    .bind(&input.location)
    .bind(input.rating)
    .bind(&input.excerpt)
    .bind(&input.image)
    .bind(&input.price_range)
    .bind(&input.full_review)
    .bind(&highlights)
    .bind(&input.atmosphere)
    .bind(&must_try)
    .bind(&input.visit_date)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    let created = get_by_id(pool, id).await?;
    created.ok_or_else(|| {
        platelist_common::Error::Internal(format!("review {} vanished after insert", id))
    })
}

/// Merge a validated partial update into the stored row
///
/// Returns `None` when the review does not exist so the handler can map it
/// to a 404 without special-casing errors.
pub async fn update(pool: &SqlitePool, id: i64, input: &ReviewInput) -> Result<Option<Review>> {
    let Some(existing) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let slug = input
        .slug
        .as_deref()
        .map(crate::sanitize::sanitize_slug)
        .unwrap_or(existing.slug);
    let rating = input.rating.unwrap_or(existing.rating);
    let highlights = encode_list(input.highlights.as_ref().or(existing.highlights.as_ref()))?;
    let must_try = encode_list(input.must_try.as_ref().or(existing.must_try.as_ref()))?;

    sqlx::query(
        r#"
        UPDATE reviews SET
            slug = ?, name = ?, cuisine = ?, location = ?, rating = ?,
            excerpt = ?, image = ?, price_range = ?, full_review = ?,
            highlights = ?, atmosphere = ?, must_try = ?, visit_date = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&slug)
    .bind(input.name.as_ref().unwrap_or(&existing.name))
    .bind(input.cuisine.as_ref().unwrap_or(&existing.cuisine))
    .bind(input.location.as_ref().unwrap_or(&existing.location))
    .bind(rating)
    .bind(input.excerpt.as_ref().unwrap_or(&existing.excerpt))
    .bind(input.image.as_ref().or(existing.image.as_ref()))
    .bind(input.price_range.as_ref().unwrap_or(&existing.price_range))
    .bind(input.full_review.as_ref().or(existing.full_review.as_ref()))
    .bind(&highlights)
    .bind(input.atmosphere.as_ref().or(existing.atmosphere.as_ref()))
    .bind(&must_try)
    .bind(input.visit_date.as_ref().or(existing.visit_date.as_ref()))
    .bind(id)
    .execute(pool)
    .await?;

    get_by_id(pool, id).await
}

/// Delete a review; join rows and list items cascade at the store level
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
