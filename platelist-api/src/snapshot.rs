//! Static site snapshot
//!
//! Assembles the whole public catalog into one document, built explicitly
//! on each request from the live store. A static deployment freezes this
//! document to disk; nothing in the service caches it.

use crate::ranking::{self, RankedItem};
use crate::repo::{lists, pages, reviews, social, taxonomies};
use crate::tagging::{self, Taxonomy};
use chrono::Utc;
use platelist_common::models::{
    Cuisine, LocationCategory, NycEatsCategory, PageHeader, Region, Review, SocialEmbed,
    SocialSettings, TopTenList,
};
use platelist_common::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// A review with its tag ids across all taxonomies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotReview {
    #[serde(flatten)]
    pub review: Review,
    pub cuisine_ids: Vec<i64>,
    pub nyc_category_ids: Vec<i64>,
    pub location_category_ids: Vec<i64>,
}

/// A curated list with its resolved, ordered items
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotList {
    #[serde(flatten)]
    pub list: TopTenList,
    pub items: Vec<RankedItem>,
}

/// The full-site snapshot document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot {
    pub generated_at: String,
    pub reviews: Vec<SnapshotReview>,
    pub cuisines: Vec<Cuisine>,
    pub nyc_eats_categories: Vec<NycEatsCategory>,
    pub regions: Vec<Region>,
    pub location_categories: Vec<LocationCategory>,
    pub top_ten_lists: Vec<SnapshotList>,
    pub social_settings: Vec<SocialSettings>,
    pub social_embeds: Vec<SocialEmbed>,
    pub page_headers: Vec<PageHeader>,
}

/// Assemble the snapshot from the live store
pub async fn build_snapshot(pool: &SqlitePool) -> Result<SiteSnapshot> {
    let mut snapshot_reviews = Vec::new();
    for review in reviews::get_all(pool).await? {
        let cuisine_ids = tagging::tag_ids_for(pool, review.id, Taxonomy::Cuisine).await?;
        let nyc_category_ids = tagging::tag_ids_for(pool, review.id, Taxonomy::NycEats).await?;
        let location_category_ids = tagging::tag_ids_for(pool, review.id, Taxonomy::Location).await?;
        snapshot_reviews.push(SnapshotReview {
            review,
            cuisine_ids,
            nyc_category_ids,
            location_category_ids,
        });
    }

    let mut snapshot_lists = Vec::new();
    for list in lists::get_all(pool).await? {
        let items = ranking::get_items(pool, list.id).await?;
        snapshot_lists.push(SnapshotList { list, items });
    }

    Ok(SiteSnapshot {
        generated_at: Utc::now().to_rfc3339(),
        reviews: snapshot_reviews,
        cuisines: taxonomies::get_all_cuisines(pool).await?,
        nyc_eats_categories: taxonomies::get_all_nyc_categories(pool).await?,
        regions: taxonomies::get_all_regions(pool).await?,
        location_categories: taxonomies::get_all_location_categories(pool).await?,
        top_ten_lists: snapshot_lists,
        social_settings: social::get_all_settings(pool).await?,
        social_embeds: social::get_all_embeds(pool).await?,
        page_headers: pages::get_all(pool).await?,
    })
}
