//! Tagging engine: many-to-many classification of reviews
//!
//! A review carries tags in three independent taxonomies at once. Writes
//! use replace semantics: the caller supplies the full desired id set and
//! the engine reconciles the join table to match it, touching only rows in
//! the symmetric difference. Tag sets are unordered.

use platelist_common::models::{Cuisine, LocationCategory, NycEatsCategory};
use platelist_common::Result;
use sqlx::SqlitePool;
use std::collections::BTreeSet;
use tracing::debug;

/// Classification dimension a review can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Cuisine,
    NycEats,
    Location,
}

impl Taxonomy {
    /// Join table holding the tag relation
    fn join_table(&self) -> &'static str {
        match self {
            Taxonomy::Cuisine => "review_cuisines",
            Taxonomy::NycEats => "review_nyc_categories",
            Taxonomy::Location => "review_location_categories",
        }
    }

    /// Column of the join table referencing the taxonomy entity
    fn entity_column(&self) -> &'static str {
        match self {
            Taxonomy::Cuisine => "cuisine_id",
            Taxonomy::NycEats => "category_id",
            Taxonomy::Location => "category_id",
        }
    }
}

/// Current tag ids for a review in one taxonomy, order undefined
pub async fn tag_ids_for(pool: &SqlitePool, review_id: i64, taxonomy: Taxonomy) -> Result<Vec<i64>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE review_id = ?",
        taxonomy.entity_column(),
        taxonomy.join_table()
    );
    let ids = sqlx::query_scalar(&sql).bind(review_id).fetch_all(pool).await?;
    Ok(ids)
}

/// Replace the tag set for a review in one taxonomy
///
/// The final set of join rows equals `desired_ids` (deduplicated). Rows in
/// the intersection of current and desired are never rewritten. Nonexistent
/// review or entity ids are backstopped by the foreign key constraints.
pub async fn set_tags(
    pool: &SqlitePool,
    review_id: i64,
    taxonomy: Taxonomy,
    desired_ids: &[i64],
) -> Result<()> {
    let desired: BTreeSet<i64> = desired_ids.iter().copied().collect();
    let current: BTreeSet<i64> = tag_ids_for(pool, review_id, taxonomy).await?.into_iter().collect();

    let delete_sql = format!(
        "DELETE FROM {} WHERE review_id = ? AND {} = ?",
        taxonomy.join_table(),
        taxonomy.entity_column()
    );
    for id in current.difference(&desired) {
        sqlx::query(&delete_sql).bind(review_id).bind(id).execute(pool).await?;
    }

    let insert_sql = format!(
        "INSERT INTO {} (review_id, {}) VALUES (?, ?)",
        taxonomy.join_table(),
        taxonomy.entity_column()
    );
    for id in desired.difference(&current) {
        sqlx::query(&insert_sql).bind(review_id).bind(id).execute(pool).await?;
    }

    debug!(
        "Replaced {} tags for review {}: {} now set",
        taxonomy.join_table(),
        review_id,
        desired.len()
    );

    Ok(())
}

/// Cuisines a review is tagged with, as full entity objects
pub async fn review_cuisines(pool: &SqlitePool, review_id: i64) -> Result<Vec<Cuisine>> {
    let rows = sqlx::query_as(
        "SELECT c.id, c.name, c.slug, c.description, c.image FROM cuisines c \
         JOIN review_cuisines rc ON rc.cuisine_id = c.id WHERE rc.review_id = ?",
    )
    .bind(review_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// NYC-eats categories a review is tagged with
pub async fn review_nyc_categories(pool: &SqlitePool, review_id: i64) -> Result<Vec<NycEatsCategory>> {
    let rows = sqlx::query_as(
        "SELECT c.id, c.name, c.slug, c.description, c.image FROM nyc_eats_categories c \
         JOIN review_nyc_categories rc ON rc.category_id = c.id WHERE rc.review_id = ?",
    )
    .bind(review_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Location categories a review is tagged with
pub async fn review_location_categories(
    pool: &SqlitePool,
    review_id: i64,
) -> Result<Vec<LocationCategory>> {
    let rows = sqlx::query_as(
        "SELECT c.id, c.name, c.slug, c.description, c.image, c.region_id FROM location_categories c \
         JOIN review_location_categories rc ON rc.category_id = c.id WHERE rc.review_id = ?",
    )
    .bind(review_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
