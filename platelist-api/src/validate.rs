//! Schema validation at the API boundary
//!
//! Request bodies deserialize into the input structs below, then a
//! validator checks presence, non-emptiness and ranges before anything
//! reaches a repository. Failures accumulate per-field messages that the
//! error type renders as a 400 body.

use crate::sanitize;
use platelist_common::models::{NewReview, NewTaxonomyNode, NewTopTenList};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Per-field validation messages, keyed by wire field name
pub type FieldErrors = BTreeMap<String, String>;

/// Review create/update body; every field optional so PATCH can share it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub excerpt: Option<String>,
    pub price_range: Option<String>,
    pub image: Option<String>,
    pub full_review: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub atmosphere: Option<String>,
    pub must_try: Option<Vec<String>>,
    pub visit_date: Option<String>,
}

/// Taxonomy node create/update body (cuisines, NYC categories, regions,
/// location categories)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub region_id: Option<i64>,
}

/// Top-ten list create/update body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Contact form body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Social settings upsert body (platform comes from the path)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSettingsInput {
    pub url: Option<String>,
    pub handle: Option<String>,
    pub enabled: Option<bool>,
}

/// Social embed create/update body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialEmbedInput {
    pub platform: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub embed_code: Option<String>,
    pub sort_order: Option<i64>,
}

/// Page header upsert body (page key comes from the path)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHeaderInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
}

/// Trimmed, non-empty requirement for a text field
fn require_text(errors: &mut FieldErrors, field: &str, value: Option<&str>) -> Option<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.insert(field.to_string(), "is required".to_string());
            None
        }
    }
}

/// Provided-but-empty check for partial updates
fn reject_empty(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    if let Some(v) = value {
        if v.trim().is_empty() {
            errors.insert(field.to_string(), "must not be empty".to_string());
        }
    }
}

fn check_rating(errors: &mut FieldErrors, rating: f64) {
    if sanitize::sanitize_rating(rating).is_none() {
        errors.insert("rating".to_string(), "must be between 1 and 5".to_string());
    }
}

/// Derive the stored slug: sanitize a provided one, else slugify the name
fn derive_slug(errors: &mut FieldErrors, provided: Option<&str>, name: Option<&str>) -> String {
    let slug = match provided {
        Some(s) => sanitize::sanitize_slug(s),
        None => sanitize::slugify(name.unwrap_or_default()),
    };
    if slug.is_empty() {
        errors.insert("slug".to_string(), "could not derive a valid slug".to_string());
    }
    slug
}

/// Validate a review create request into trusted repository input
pub fn validate_review_create(input: &ReviewInput) -> Result<NewReview, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = require_text(&mut errors, "name", input.name.as_deref());
    let cuisine = require_text(&mut errors, "cuisine", input.cuisine.as_deref());
    let location = require_text(&mut errors, "location", input.location.as_deref());
    let excerpt = require_text(&mut errors, "excerpt", input.excerpt.as_deref());
    let price_range = require_text(&mut errors, "priceRange", input.price_range.as_deref());

    let rating = match input.rating {
        Some(r) => {
            check_rating(&mut errors, r);
            r
        }
        None => {
            errors.insert("rating".to_string(), "is required".to_string());
            0.0
        }
    };

    let slug = derive_slug(&mut errors, input.slug.as_deref(), input.name.as_deref());

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewReview {
        slug,
        name: name.unwrap_or_default(),
        cuisine: cuisine.unwrap_or_default(),
        location: location.unwrap_or_default(),
        rating: sanitize::sanitize_rating(rating).unwrap_or(rating),
        excerpt: excerpt.unwrap_or_default(),
        image: input.image.clone(),
        price_range: price_range.unwrap_or_default(),
        full_review: input.full_review.clone(),
        highlights: input.highlights.clone(),
        atmosphere: input.atmosphere.clone(),
        must_try: input.must_try.clone(),
        visit_date: input.visit_date.clone(),
    })
}

/// Validate a partial review update: provided fields must still be sound
pub fn validate_review_update(input: &ReviewInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    reject_empty(&mut errors, "name", input.name.as_deref());
    reject_empty(&mut errors, "cuisine", input.cuisine.as_deref());
    reject_empty(&mut errors, "location", input.location.as_deref());
    reject_empty(&mut errors, "excerpt", input.excerpt.as_deref());
    reject_empty(&mut errors, "priceRange", input.price_range.as_deref());

    if let Some(slug) = input.slug.as_deref() {
        if sanitize::sanitize_slug(slug).is_empty() {
            errors.insert("slug".to_string(), "is not a valid slug".to_string());
        }
    }
    if let Some(rating) = input.rating {
        check_rating(&mut errors, rating);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a taxonomy node create request
pub fn validate_taxonomy_create(input: &TaxonomyInput) -> Result<NewTaxonomyNode, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = require_text(&mut errors, "name", input.name.as_deref());
    let slug = derive_slug(&mut errors, input.slug.as_deref(), input.name.as_deref());

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewTaxonomyNode {
        name: name.unwrap_or_default(),
        slug,
        description: input.description.clone(),
        image: input.image.clone(),
        region_id: input.region_id,
    })
}

/// Validate a partial taxonomy node update
pub fn validate_taxonomy_update(input: &TaxonomyInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    reject_empty(&mut errors, "name", input.name.as_deref());
    if let Some(slug) = input.slug.as_deref() {
        if sanitize::sanitize_slug(slug).is_empty() {
            errors.insert("slug".to_string(), "is not a valid slug".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a top-ten list create request
pub fn validate_list_create(input: &ListInput) -> Result<NewTopTenList, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = require_text(&mut errors, "name", input.name.as_deref());
    let slug = derive_slug(&mut errors, input.slug.as_deref(), input.name.as_deref());

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewTopTenList {
        name: name.unwrap_or_default(),
        slug,
        description: input.description.clone(),
        image: input.image.clone(),
    })
}

/// Validate a partial list update
pub fn validate_list_update(input: &ListInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    reject_empty(&mut errors, "name", input.name.as_deref());
    if let Some(slug) = input.slug.as_deref() {
        if sanitize::sanitize_slug(slug).is_empty() {
            errors.insert("slug".to_string(), "is not a valid slug".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validated contact submission
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate a contact form submission
pub fn validate_contact(input: &ContactInput) -> Result<NewContact, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = require_text(&mut errors, "name", input.name.as_deref());
    let email = require_text(&mut errors, "email", input.email.as_deref());
    let message = require_text(&mut errors, "message", input.message.as_deref());

    if let Some(e) = email.as_deref() {
        if !e.contains('@') {
            errors.insert("email".to_string(), "is not a valid email address".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewContact {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        message: message.unwrap_or_default(),
    })
}

/// Validated social embed
#[derive(Debug, Clone)]
pub struct NewSocialEmbed {
    pub platform: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub embed_code: String,
    pub sort_order: i64,
}

/// Validate a social embed create request
pub fn validate_social_embed(input: &SocialEmbedInput) -> Result<NewSocialEmbed, FieldErrors> {
    let mut errors = FieldErrors::new();

    let platform = require_text(&mut errors, "platform", input.platform.as_deref());
    let embed_code = require_text(&mut errors, "embedCode", input.embed_code.as_deref());

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewSocialEmbed {
        platform: platform.unwrap_or_default(),
        title: input.title.clone(),
        url: input.url.clone(),
        embed_code: embed_code.unwrap_or_default(),
        sort_order: input.sort_order.unwrap_or(0),
    })
}

/// Validated page header
#[derive(Debug, Clone)]
pub struct NewPageHeader {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
}

/// Validate a page header upsert request
pub fn validate_page_header(input: &PageHeaderInput) -> Result<NewPageHeader, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = require_text(&mut errors, "title", input.title.as_deref());

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewPageHeader {
        title: title.unwrap_or_default(),
        subtitle: input.subtitle.clone(),
        image: input.image.clone(),
    })
}
