//! Platelist API service library
//!
//! JSON HTTP API for the review catalog: CRUD repositories, the tagging and
//! ranked-list engines, and the bulk import/export pipeline.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod ranking;
pub mod repo;
pub mod sanitize;
pub mod snapshot;
pub mod tagging;
pub mod transfer;
pub mod validate;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, patch, post, put};

    Router::new()
        // Health endpoint
        .route("/health", get(api::health))

        // Reviews (the :id segment accepts a slug or a numeric id on GET)
        .route("/api/reviews", get(api::reviews::list_reviews))
        .route("/api/reviews", post(api::reviews::create_review))
        .route("/api/reviews/:id", get(api::reviews::get_review))
        .route("/api/reviews/:id", patch(api::reviews::update_review))
        .route("/api/reviews/:id", delete(api::reviews::delete_review))

        // Review tag relations
        .route("/api/reviews/:id/cuisines", get(api::taxonomies::get_review_cuisines))
        .route("/api/reviews/:id/cuisines", put(api::taxonomies::put_review_cuisines))
        .route("/api/reviews/:id/nyc-categories", get(api::taxonomies::get_review_nyc_categories))
        .route("/api/reviews/:id/nyc-categories", put(api::taxonomies::put_review_nyc_categories))
        .route("/api/reviews/:id/location-categories", get(api::taxonomies::get_review_location_categories))
        .route("/api/reviews/:id/location-categories", put(api::taxonomies::put_review_location_categories))

        // Taxonomies
        .route("/api/cuisines", get(api::taxonomies::list_cuisines))
        .route("/api/cuisines", post(api::taxonomies::create_cuisine))
        .route("/api/cuisines/:id", get(api::taxonomies::get_cuisine))
        .route("/api/cuisines/:id", patch(api::taxonomies::update_cuisine))
        .route("/api/cuisines/:id", delete(api::taxonomies::delete_cuisine))
        .route("/api/nyc-categories", get(api::taxonomies::list_nyc_categories))
        .route("/api/nyc-categories", post(api::taxonomies::create_nyc_category))
        .route("/api/nyc-categories/:id", get(api::taxonomies::get_nyc_category))
        .route("/api/nyc-categories/:id", patch(api::taxonomies::update_nyc_category))
        .route("/api/nyc-categories/:id", delete(api::taxonomies::delete_nyc_category))
        .route("/api/regions", get(api::taxonomies::list_regions))
        .route("/api/regions", post(api::taxonomies::create_region))
        .route("/api/regions/:id", get(api::taxonomies::get_region))
        .route("/api/regions/:id", patch(api::taxonomies::update_region))
        .route("/api/regions/:id", delete(api::taxonomies::delete_region))
        .route("/api/location-categories", get(api::taxonomies::list_location_categories))
        .route("/api/location-categories", post(api::taxonomies::create_location_category))
        .route("/api/location-categories/:id", get(api::taxonomies::get_location_category))
        .route("/api/location-categories/:id", patch(api::taxonomies::update_location_category))
        .route("/api/location-categories/:id", delete(api::taxonomies::delete_location_category))

        // Top-ten lists
        .route("/api/top-ten-lists", get(api::lists::list_lists))
        .route("/api/top-ten-lists", post(api::lists::create_list))
        .route("/api/top-ten-lists/:id", get(api::lists::get_list))
        .route("/api/top-ten-lists/:id", patch(api::lists::update_list))
        .route("/api/top-ten-lists/:id", delete(api::lists::delete_list))
        .route("/api/top-ten-lists/:id/items", put(api::lists::put_list_items))

        // Import / export
        .route("/api/export/reviews", get(api::transfer::export_reviews))
        .route("/api/export/static", get(api::transfer::export_static))
        .route("/api/import/reviews", post(api::transfer::import_reviews))

        // Contact inbox
        .route("/api/contact", post(api::contact::submit_contact))
        .route("/api/contact-submissions", get(api::contact::list_submissions))
        .route("/api/contact-submissions/:id/read", patch(api::contact::mark_submission_read))
        .route("/api/contact-submissions/:id", delete(api::contact::delete_submission))

        // Social settings and embeds
        .route("/api/social-settings", get(api::social::list_settings))
        .route("/api/social-settings/:platform", put(api::social::upsert_settings))
        .route("/api/social-embeds", get(api::social::list_embeds))
        .route("/api/social-embeds", post(api::social::create_embed))
        .route("/api/social-embeds/:id", patch(api::social::update_embed))
        .route("/api/social-embeds/:id", delete(api::social::delete_embed))

        // Page headers
        .route("/api/page-headers", get(api::pages::list_page_headers))
        .route("/api/page-headers/:page", get(api::pages::get_page_header))
        .route("/api/page-headers/:page", put(api::pages::upsert_page_header))

        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Enable CORS for local admin access
        .layer(CorsLayer::permissive())
}
