//! Taxonomy repositories: cuisines, NYC-eats categories, regions, and
//! location categories
//!
//! The four node kinds share a shape, but each gets its own typed accessors
//! so handlers never juggle table names.

use crate::validate::TaxonomyInput;
use platelist_common::models::{Cuisine, LocationCategory, NewTaxonomyNode, NycEatsCategory, Region};
use platelist_common::Result;
use sqlx::SqlitePool;

// ============================================================================
// Cuisines
// ============================================================================

pub async fn get_all_cuisines(pool: &SqlitePool) -> Result<Vec<Cuisine>> {
    let rows = sqlx::query_as("SELECT id, name, slug, description, image FROM cuisines ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get_cuisine_by_slug_or_id(pool: &SqlitePool, key: &str) -> Result<Option<Cuisine>> {
    if let Ok(id) = key.parse::<i64>() {
        let row = sqlx::query_as("SELECT id, name, slug, description, image FROM cuisines WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        return Ok(row);
    }
    let row = sqlx::query_as("SELECT id, name, slug, description, image FROM cuisines WHERE slug = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create_cuisine(pool: &SqlitePool, input: &NewTaxonomyNode) -> Result<Cuisine> {
    let result = sqlx::query("INSERT INTO cuisines (name, slug, description, image) VALUES (?, ?, ?, ?)")
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.image)
        .execute(pool)
        .await?;

    let row = sqlx::query_as("SELECT id, name, slug, description, image FROM cuisines WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;
    Ok(row)
}

pub async fn update_cuisine(
    pool: &SqlitePool,
    id: i64,
    input: &TaxonomyInput,
) -> Result<Option<Cuisine>> {
    let Some(existing) = get_cuisine_by_slug_or_id(pool, &id.to_string()).await? else {
        return Ok(None);
    };

    let slug = input
        .slug
        .as_deref()
        .map(crate::sanitize::sanitize_slug)
        .unwrap_or(existing.slug);

    sqlx::query(
        "UPDATE cuisines SET name = ?, slug = ?, description = ?, image = ?, \
         updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(input.name.as_ref().unwrap_or(&existing.name))
    .bind(&slug)
    .bind(input.description.as_ref().or(existing.description.as_ref()))
    .bind(input.image.as_ref().or(existing.image.as_ref()))
    .bind(id)
    .execute(pool)
    .await?;

    get_cuisine_by_slug_or_id(pool, &id.to_string()).await
}

pub async fn delete_cuisine(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM cuisines WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ============================================================================
// NYC-eats categories
// ============================================================================

pub async fn get_all_nyc_categories(pool: &SqlitePool) -> Result<Vec<NycEatsCategory>> {
    let rows = sqlx::query_as(
        "SELECT id, name, slug, description, image FROM nyc_eats_categories ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_nyc_category_by_slug_or_id(
    pool: &SqlitePool,
    key: &str,
) -> Result<Option<NycEatsCategory>> {
    if let Ok(id) = key.parse::<i64>() {
        let row = sqlx::query_as(
            "SELECT id, name, slug, description, image FROM nyc_eats_categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        return Ok(row);
    }
    let row = sqlx::query_as(
        "SELECT id, name, slug, description, image FROM nyc_eats_categories WHERE slug = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create_nyc_category(
    pool: &SqlitePool,
    input: &NewTaxonomyNode,
) -> Result<NycEatsCategory> {
    let result = sqlx::query(
        "INSERT INTO nyc_eats_categories (name, slug, description, image) VALUES (?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.slug)
    .bind(&input.description)
    .bind(&input.image)
    .execute(pool)
    .await?;

    let row = sqlx::query_as(
        "SELECT id, name, slug, description, image FROM nyc_eats_categories WHERE id = ?",
    )
    .bind(result.last_insert_rowid())
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update_nyc_category(
    pool: &SqlitePool,
    id: i64,
    input: &TaxonomyInput,
) -> Result<Option<NycEatsCategory>> {
    let Some(existing) = get_nyc_category_by_slug_or_id(pool, &id.to_string()).await? else {
        return Ok(None);
    };

    let slug = input
        .slug
        .as_deref()
        .map(crate::sanitize::sanitize_slug)
        .unwrap_or(existing.slug);

    sqlx::query(
        "UPDATE nyc_eats_categories SET name = ?, slug = ?, description = ?, image = ?, \
         updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(input.name.as_ref().unwrap_or(&existing.name))
    .bind(&slug)
    .bind(input.description.as_ref().or(existing.description.as_ref()))
    .bind(input.image.as_ref().or(existing.image.as_ref()))
    .bind(id)
    .execute(pool)
    .await?;

    get_nyc_category_by_slug_or_id(pool, &id.to_string()).await
}

pub async fn delete_nyc_category(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM nyc_eats_categories WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ============================================================================
// Regions
// ============================================================================

pub async fn get_all_regions(pool: &SqlitePool) -> Result<Vec<Region>> {
    let rows = sqlx::query_as("SELECT id, name, slug, description, image FROM regions ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get_region_by_slug_or_id(pool: &SqlitePool, key: &str) -> Result<Option<Region>> {
    if let Ok(id) = key.parse::<i64>() {
        let row = sqlx::query_as("SELECT id, name, slug, description, image FROM regions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        return Ok(row);
    }
    let row = sqlx::query_as("SELECT id, name, slug, description, image FROM regions WHERE slug = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create_region(pool: &SqlitePool, input: &NewTaxonomyNode) -> Result<Region> {
    let result = sqlx::query("INSERT INTO regions (name, slug, description, image) VALUES (?, ?, ?, ?)")
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.image)
        .execute(pool)
        .await?;

    let row = sqlx::query_as("SELECT id, name, slug, description, image FROM regions WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;
    Ok(row)
}

pub async fn update_region(
    pool: &SqlitePool,
    id: i64,
    input: &TaxonomyInput,
) -> Result<Option<Region>> {
    let Some(existing) = get_region_by_slug_or_id(pool, &id.to_string()).await? else {
        return Ok(None);
    };

    let slug = input
        .slug
        .as_deref()
        .map(crate::sanitize::sanitize_slug)
        .unwrap_or(existing.slug);

    sqlx::query(
        "UPDATE regions SET name = ?, slug = ?, description = ?, image = ?, \
         updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(input.name.as_ref().unwrap_or(&existing.name))
    .bind(&slug)
    .bind(input.description.as_ref().or(existing.description.as_ref()))
    .bind(input.image.as_ref().or(existing.image.as_ref()))
    .bind(id)
    .execute(pool)
    .await?;

    get_region_by_slug_or_id(pool, &id.to_string()).await
}

/// Delete a region; owned location categories cascade
pub async fn delete_region(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM regions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ============================================================================
// Location categories
// ============================================================================

pub async fn get_all_location_categories(pool: &SqlitePool) -> Result<Vec<LocationCategory>> {
    let rows = sqlx::query_as(
        "SELECT id, name, slug, description, image, region_id FROM location_categories ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_location_category_by_slug_or_id(
    pool: &SqlitePool,
    key: &str,
) -> Result<Option<LocationCategory>> {
    if let Ok(id) = key.parse::<i64>() {
        let row = sqlx::query_as(
            "SELECT id, name, slug, description, image, region_id FROM location_categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        return Ok(row);
    }
    let row = sqlx::query_as(
        "SELECT id, name, slug, description, image, region_id FROM location_categories WHERE slug = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create_location_category(
    pool: &SqlitePool,
    input: &NewTaxonomyNode,
) -> Result<LocationCategory> {
    let result = sqlx::query(
        "INSERT INTO location_categories (name, slug, description, image, region_id) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.slug)
    .bind(&input.description)
    .bind(&input.image)
    .bind(input.region_id)
    .execute(pool)
    .await?;

    let row = sqlx::query_as(
        "SELECT id, name, slug, description, image, region_id FROM location_categories WHERE id = ?",
    )
    .bind(result.last_insert_rowid())
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update_location_category(
    pool: &SqlitePool,
    id: i64,
    input: &TaxonomyInput,
) -> Result<Option<LocationCategory>> {
    let Some(existing) = get_location_category_by_slug_or_id(pool, &id.to_string()).await? else {
        return Ok(None);
    };

    let slug = input
        .slug
        .as_deref()
        .map(crate::sanitize::sanitize_slug)
        .unwrap_or(existing.slug);

    sqlx::query(
        "UPDATE location_categories SET name = ?, slug = ?, description = ?, image = ?, \
         region_id = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(input.name.as_ref().unwrap_or(&existing.name))
    .bind(&slug)
    .bind(input.description.as_ref().or(existing.description.as_ref()))
    .bind(input.image.as_ref().or(existing.image.as_ref()))
    .bind(input.region_id.or(existing.region_id))
    .bind(id)
    .execute(pool)
    .await?;

    get_location_category_by_slug_or_id(pool, &id.to_string()).await
}

pub async fn delete_location_category(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM location_categories WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
