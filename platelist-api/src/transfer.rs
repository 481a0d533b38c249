//! Bulk review import/export pipeline
//!
//! Export strips identity so the document can be re-imported elsewhere as
//! new records. Import treats its input as hostile: batch size cap,
//! prototype-pollution key guard, allow-list field copy, per-field
//! sanitization, dedup-by-slug, and the normal create-path validation. One
//! bad record never aborts the batch.

use crate::repo::reviews;
use crate::sanitize;
use crate::validate::{self, ReviewInput};
use chrono::Utc;
use platelist_common::models::Review;
use platelist_common::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use tracing::info;

/// Batch-level resource exhaustion guard
pub const MAX_BATCH_SIZE: usize = 100;

/// Own-properties that mark a record as a prototype-pollution attempt
const FORBIDDEN_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// A review as exported: identity stripped for portability
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedReview {
    pub slug: String,
    pub name: String,
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

impl From<Review> for ExportedReview {
    fn from(review: Review) -> Self {
        ExportedReview {
            slug: review.slug,
            name: review.name,
            cuisine: review.cuisine,
            location: review.location,
            rating: review.rating,
            excerpt: review.excerpt,
            image: review.image,
            price_range: review.price_range,
            full_review: review.full_review,
            highlights: review.highlights,
            atmosphere: review.atmosphere,
            must_try: review.must_try,
            visit_date: review.visit_date,
        }
    }
}

/// Export document: every review, identity stripped, plus a timestamp
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub reviews: Vec<ExportedReview>,
    pub exported_at: String,
}

/// A skipped import record and why it was skipped
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    pub slug: String,
    pub reason: String,
}

/// Import outcome returned to the caller for display
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub message: String,
    pub imported: usize,
    pub skipped: usize,
    pub skipped_slugs: Vec<SkippedRecord>,
}

/// Produce the portable export document
pub async fn export_reviews(pool: &SqlitePool) -> Result<ExportDocument> {
    let reviews = reviews::get_all(pool).await?;

    Ok(ExportDocument {
        reviews: reviews.into_iter().map(ExportedReview::from).collect(),
        exported_at: Utc::now().to_rfc3339(),
    })
}

/// Derive the slug for an untrusted record: the provided slug if present,
/// else the slugified name; either way charset-filtered and length-capped.
/// An empty result means the record is unusable.
fn derive_slug(record: &Map<String, Value>) -> String {
    match record.get("slug").and_then(Value::as_str) {
        Some(slug) => sanitize::sanitize_slug(slug),
        None => {
            let name = record.get("name").and_then(Value::as_str).unwrap_or_default();
            sanitize::sanitize_slug(&sanitize::slugify(name))
        }
    }
}

fn clean_text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(sanitize::clean_text)
        .filter(|s| !s.is_empty())
}

fn rating_field(record: &Map<String, Value>) -> Option<f64> {
    let parsed = match record.get("rating") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.and_then(sanitize::sanitize_rating)
}

fn list_field(record: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|values| sanitize::sanitize_string_list(values))
        .filter(|list| !list.is_empty())
}

/// Copy the allow-listed fields out of an untrusted record, sanitizing each
///
/// Any field not named here is dropped silently.
fn assemble_record(record: &Map<String, Value>, slug: &str) -> ReviewInput {
    ReviewInput {
        name: clean_text_field(record, "name"),
        slug: Some(slug.to_string()),
        cuisine: clean_text_field(record, "cuisine"),
        location: clean_text_field(record, "location"),
        rating: rating_field(record),
        excerpt: clean_text_field(record, "excerpt"),
        price_range: clean_text_field(record, "priceRange"),
        image: record
            .get("image")
            .and_then(Value::as_str)
            .and_then(sanitize::sanitize_image_url),
        full_review: clean_text_field(record, "fullReview"),
        highlights: list_field(record, "highlights"),
        atmosphere: clean_text_field(record, "atmosphere"),
        must_try: list_field(record, "mustTry"),
        visit_date: record
            .get("visitDate")
            .and_then(Value::as_str)
            .and_then(|s| sanitize::sanitize_visit_date(s)),
    }
}

/// Import a batch of review-shaped objects from an untrusted source
///
/// Batch-level rejections: a body whose `reviews` key is not an array, or
/// more than 100 records. Everything else is per-record: a skipped record
/// is counted and reported, and processing continues.
pub async fn import_reviews(pool: &SqlitePool, payload: &Value) -> Result<ImportReport> {
    let records = payload
        .get("reviews")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidInput("`reviews` must be an array".to_string()))?;

    if records.len() > MAX_BATCH_SIZE {
        return Err(Error::InvalidInput(format!(
            "import batch exceeds {} records",
            MAX_BATCH_SIZE
        )));
    }

    let mut imported: Vec<i64> = Vec::new();
    let mut skipped: Vec<SkippedRecord> = Vec::new();

    for (index, raw) in records.iter().enumerate() {
        // Label records that never get a usable slug by their position
        let fallback_label = format!("record {}", index + 1);

        let Some(record) = raw.as_object() else {
            skipped.push(SkippedRecord {
                slug: fallback_label,
                reason: "not an object".to_string(),
            });
            continue;
        };

        if FORBIDDEN_KEYS.iter().any(|key| record.contains_key(*key)) {
            skipped.push(SkippedRecord {
                slug: fallback_label,
                reason: "forbidden property name".to_string(),
            });
            continue;
        }

        let slug = derive_slug(record);
        if slug.is_empty() {
            skipped.push(SkippedRecord {
                slug: fallback_label,
                reason: "no usable slug".to_string(),
            });
            continue;
        }

        // Import never overwrites: first record with a slug wins, forever
        if reviews::slug_exists(pool, &slug).await? {
            skipped.push(SkippedRecord {
                slug,
                reason: "slug already exists".to_string(),
            });
            continue;
        }

        let input = assemble_record(record, &slug);
        let new_review = match validate::validate_review_create(&input) {
            Ok(valid) => valid,
            Err(errors) => {
                let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
                skipped.push(SkippedRecord {
                    slug,
                    reason: format!("validation failed: {}", fields.join(", ")),
                });
                continue;
            }
        };

        let created = reviews::create(pool, &new_review).await?;
        imported.push(created.id);
    }

    info!(
        "Imported {} reviews, skipped {}",
        imported.len(),
        skipped.len()
    );

    Ok(ImportReport {
        message: format!(
            "Imported {} reviews, skipped {}",
            imported.len(),
            skipped.len()
        ),
        imported: imported.len(),
        skipped: skipped.len(),
        skipped_slugs: skipped,
    })
}
