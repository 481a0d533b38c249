//! Catalog plumbing tests: taxonomies, contact inbox, social records, page
//! headers, the snapshot document, and the health endpoint

mod helpers;

use axum::http::StatusCode;
use helpers::{delete, get, patch, post, put, seed_review, test_app};
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["module"], "platelist-api");
}

#[tokio::test]
async fn test_cuisine_crud() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/cuisines",
        json!({ "name": "Italian", "description": "Pasta and more" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], "italian");
    let id = body["id"].as_i64().unwrap();

    let (status, by_slug) = get(&app, "/api/cuisines/italian").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["id"], id);

    let (status, updated) = patch(
        &app,
        &format!("/api/cuisines/{}", id),
        json!({ "description": "Regional Italian cooking" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "Regional Italian cooking");
    assert_eq!(updated["name"], "Italian");

    let (status, _) = delete(&app, &format!("/api/cuisines/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get(&app, "/api/cuisines/italian").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_taxonomy_create_requires_name() {
    let app = test_app().await;

    let (status, body) = post(&app, "/api/cuisines", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_failed");
}

#[tokio::test]
async fn test_region_owns_location_categories() {
    let app = test_app().await;

    let (_, region) = post(&app, "/api/regions", json!({ "name": "Manhattan" })).await;
    let region_id = region["id"].as_i64().unwrap();

    let (status, category) = post(
        &app,
        "/api/location-categories",
        json!({ "name": "SoHo", "regionId": region_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["regionId"], region_id);

    // Deleting the region removes its categories
    let (status, _) = delete(&app, &format!("/api/regions/{}", region_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, remaining) = get(&app, "/api/location-categories").await;
    assert!(remaining.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_inbox_flow() {
    let app = test_app().await;

    let (status, submission) = post(
        &app,
        "/api/contact",
        json!({ "name": "Ada", "email": "ada@example.com", "message": "Love the site" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(submission["read"], 0);
    let id = submission["id"].as_i64().unwrap();

    let (_, inbox) = get(&app, "/api/contact-submissions").await;
    assert_eq!(inbox.as_array().unwrap().len(), 1);

    let (status, updated) = patch(
        &app,
        &format!("/api/contact-submissions/{}/read", id),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["read"], 1);

    let (status, _) = delete(&app, &format!("/api/contact-submissions/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, inbox) = get(&app, "/api/contact-submissions").await;
    assert!(inbox.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_rejects_bad_email() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/contact",
        json!({ "name": "Ada", "email": "nope", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_object().unwrap().contains_key("email"));
}

#[tokio::test]
async fn test_social_settings_upsert_by_platform() {
    let app = test_app().await;

    let (status, created) = put(
        &app,
        "/api/social-settings/instagram",
        json!({ "url": "https://instagram.com/platelist", "handle": "@platelist" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["platform"], "instagram");
    assert_eq!(created["enabled"], 1);

    // Second write to the same platform updates in place
    let (status, updated) = put(
        &app,
        "/api/social-settings/instagram",
        json!({ "handle": "@platelist_nyc", "enabled": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["handle"], "@platelist_nyc");
    assert_eq!(updated["enabled"], 0);

    let (_, all) = get(&app, "/api/social-settings").await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_social_embeds_keep_sort_order() {
    let app = test_app().await;

    post(
        &app,
        "/api/social-embeds",
        json!({ "platform": "instagram", "embedCode": "<blockquote>b</blockquote>", "sortOrder": 2 }),
    )
    .await;
    post(
        &app,
        "/api/social-embeds",
        json!({ "platform": "instagram", "embedCode": "<blockquote>a</blockquote>", "sortOrder": 1 }),
    )
    .await;

    let (_, embeds) = get(&app, "/api/social-embeds").await;
    let order: Vec<i64> = embeds
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["sortOrder"].as_i64().unwrap())
        .collect();
    assert_eq!(order, vec![1, 2]);
}

#[tokio::test]
async fn test_page_header_upsert() {
    let app = test_app().await;

    let (status, created) = put(
        &app,
        "/api/page-headers/about",
        json!({ "title": "About Us", "subtitle": "Who we are" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["page"], "about");

    let (status, fetched) = get(&app, "/api/page-headers/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "About Us");

    let (status, _) = get(&app, "/api/page-headers/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_snapshot_document() {
    let app = test_app().await;
    let review = seed_review(&app, "Casa Roma").await;

    let (_, cuisine) = post(&app, "/api/cuisines", json!({ "name": "Italian" })).await;
    let cuisine_id = cuisine["id"].as_i64().unwrap();
    put(
        &app,
        &format!("/api/reviews/{}/cuisines", review),
        json!({ "cuisineIds": [cuisine_id] }),
    )
    .await;

    let (_, list) = post(&app, "/api/top-ten-lists", json!({ "name": "Date Night" })).await;
    let list_id = list["id"].as_i64().unwrap();
    put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [{ "reviewId": review, "rank": 1 }] }),
    )
    .await;

    let (status, snapshot) = get(&app, "/api/export/static").await;
    assert_eq!(status, StatusCode::OK);
    assert!(snapshot["generatedAt"].as_str().is_some());

    let reviews = snapshot["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["cuisineIds"], json!([cuisine_id]));

    let lists = snapshot["topTenLists"].as_array().unwrap();
    assert_eq!(lists[0]["items"][0]["review"]["id"], review);
    assert_eq!(snapshot["cuisines"].as_array().unwrap().len(), 1);
}
