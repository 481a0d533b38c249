//! Tagging engine tests through the HTTP surface
//!
//! Replace semantics: the final tag set always equals the submitted id set,
//! regardless of prior state, and resubmitting the same set changes nothing.

mod helpers;

use axum::http::StatusCode;
use helpers::{get, post, put, seed_review, test_app};
use serde_json::{json, Value};

async fn seed_cuisine(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = post(app, "/api/cuisines", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED, "seed cuisine failed: {}", body);
    body["id"].as_i64().unwrap()
}

fn id_set(body: &Value) -> Vec<i64> {
    let mut ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|tag| tag["id"].as_i64().unwrap())
        .collect();
    ids.sort();
    ids
}

#[tokio::test]
async fn test_tag_replace_scenario() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;
    let c1 = seed_cuisine(&app, "Italian").await;
    let _c2 = seed_cuisine(&app, "French").await;
    let c3 = seed_cuisine(&app, "Korean").await;
    let c4 = seed_cuisine(&app, "Thai").await;

    let uri = format!("/api/reviews/{}/cuisines", review);

    let (status, body) = put(&app, &uri, json!({ "cuisineIds": [c1, c3] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_set(&body), vec![c1, c3]);

    let (_, body) = get(&app, &uri).await;
    assert_eq!(id_set(&body), vec![c1, c3]);

    // Re-tag: c1 goes away, c4 appears, c3 survives
    let (status, body) = put(&app, &uri, json!({ "cuisineIds": [c3, c4] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_set(&body), vec![c3, c4]);
}

#[tokio::test]
async fn test_tag_set_is_idempotent() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;
    let c1 = seed_cuisine(&app, "Italian").await;
    let c2 = seed_cuisine(&app, "French").await;

    let uri = format!("/api/reviews/{}/cuisines", review);

    put(&app, &uri, json!({ "cuisineIds": [c1, c2] })).await;
    let (status, body) = put(&app, &uri, json!({ "cuisineIds": [c1, c2] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_set(&body), vec![c1, c2]);
}

#[tokio::test]
async fn test_tag_set_deduplicates_input() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;
    let c1 = seed_cuisine(&app, "Italian").await;

    let uri = format!("/api/reviews/{}/cuisines", review);

    let (status, body) = put(&app, &uri, json!({ "cuisineIds": [c1, c1, c1] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_set(&body), vec![c1]);
}

#[tokio::test]
async fn test_tags_return_full_entities() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;
    let c1 = seed_cuisine(&app, "Italian").await;

    let uri = format!("/api/reviews/{}/cuisines", review);
    put(&app, &uri, json!({ "cuisineIds": [c1] })).await;

    let (_, body) = get(&app, &uri).await;
    let tag = &body.as_array().unwrap()[0];
    assert_eq!(tag["name"], "Italian");
    assert_eq!(tag["slug"], "italian");
}

#[tokio::test]
async fn test_empty_set_clears_tags() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;
    let c1 = seed_cuisine(&app, "Italian").await;

    let uri = format!("/api/reviews/{}/cuisines", review);
    put(&app, &uri, json!({ "cuisineIds": [c1] })).await;

    let (status, body) = put(&app, &uri, json!({ "cuisineIds": [] })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_taxonomies_are_independent() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;
    let c1 = seed_cuisine(&app, "Italian").await;

    let (status, body) = post(&app, "/api/nyc-categories", json!({ "name": "Late Night" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let n1 = body["id"].as_i64().unwrap();

    put(
        &app,
        &format!("/api/reviews/{}/cuisines", review),
        json!({ "cuisineIds": [c1] }),
    )
    .await;
    put(
        &app,
        &format!("/api/reviews/{}/nyc-categories", review),
        json!({ "categoryIds": [n1] }),
    )
    .await;

    // Clearing one taxonomy leaves the other untouched
    put(
        &app,
        &format!("/api/reviews/{}/cuisines", review),
        json!({ "cuisineIds": [] }),
    )
    .await;

    let (_, body) = get(&app, &format!("/api/reviews/{}/nyc-categories", review)).await;
    assert_eq!(id_set(&body), vec![n1]);
}

#[tokio::test]
async fn test_tagging_missing_review_is_404() {
    let app = test_app().await;
    let c1 = seed_cuisine(&app, "Italian").await;

    let (status, _) = put(&app, "/api/reviews/999/cuisines", json!({ "cuisineIds": [c1] })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/api/reviews/999/cuisines").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_location_category_tags() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;

    let (_, region) = post(&app, "/api/regions", json!({ "name": "Manhattan" })).await;
    let region_id = region["id"].as_i64().unwrap();
    let (status, body) = post(
        &app,
        "/api/location-categories",
        json!({ "name": "SoHo", "regionId": region_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let l1 = body["id"].as_i64().unwrap();

    let uri = format!("/api/reviews/{}/location-categories", review);
    let (status, body) = put(&app, &uri, json!({ "categoryIds": [l1] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_set(&body), vec![l1]);
    assert_eq!(body.as_array().unwrap()[0]["regionId"], region_id);
}
