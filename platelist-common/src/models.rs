//! Entity models for the review catalog
//!
//! Wire field names follow the site's JSON contract (camelCase). Ordered
//! string lists (`highlights`, `mustTry`) are stored as JSON text columns
//! and parsed at the repository boundary.

use serde::{Deserialize, Serialize};

/// A restaurant review, the central entity of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Free-text primary cuisine label, distinct from the cuisine tag relation
    pub cuisine: String,
    pub location: String,
    pub rating: f64,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub price_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_try: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
}

/// Validated input for creating a review
///
/// Produced by the validation boundary; repositories trust it as-is.
#[derive(Debug, Clone, Default)]
pub struct NewReview {
    pub slug: String,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: f64,
    pub excerpt: String,
    pub image: Option<String>,
    pub price_range: String,
    pub full_review: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub atmosphere: Option<String>,
    pub must_try: Option<Vec<String>>,
    pub visit_date: Option<String>,
}

/// Cuisine taxonomy node (e.g. "Italian", "Korean")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cuisine {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// NYC-eats taxonomy node (e.g. "Late Night", "Old School")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NycEatsCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Geographic region owning zero or more location categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Location taxonomy node, optionally owned by a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LocationCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
}

/// Validated input for creating or replacing a taxonomy node
#[derive(Debug, Clone, Default)]
pub struct NewTaxonomyNode {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Only meaningful for location categories
    pub region_id: Option<i64>,
}

/// A curated, ordered collection of up to ten reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TopTenList {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Validated input for creating a top-ten list
#[derive(Debug, Clone, Default)]
pub struct NewTopTenList {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Contact form submission; `read` uses the 0|1 integer convention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: i64,
    pub created_at: String,
}

/// Per-platform social settings, upserted by platform key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SocialSettings {
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    pub enabled: i64,
}

/// Embedded social post, ordered by `sort_order` within a platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SocialEmbed {
    pub id: i64,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub embed_code: String,
    pub sort_order: i64,
}

/// Header content for a public page, upserted by page key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PageHeader {
    pub page: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
