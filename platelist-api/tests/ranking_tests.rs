//! Ranked list engine tests through the HTTP surface
//!
//! Every mutation arrives as a bulk replace; these tests cover the rank
//! contiguity invariant, the capacity bound, and the documented scenarios.

mod helpers;

use axum::http::StatusCode;
use helpers::{delete, get, patch, post, put, seed_list, seed_review, test_app};
use serde_json::{json, Value};

fn ranks_of(items: &Value) -> Vec<(i64, i64)> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["review"]["id"].as_i64().unwrap(),
                item["rank"].as_i64().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_bulk_replace_and_reorder_scenario() {
    let app = test_app().await;
    let r1 = seed_review(&app, "Casa Roma").await;
    let r2 = seed_review(&app, "Golden Lotus").await;
    let list_id = seed_list(&app, "Date Night").await;

    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [
            { "reviewId": r1, "rank": 1 },
            { "reviewId": r2, "rank": 2 }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/top-ten-lists/date-night").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["list"]["slug"], "date-night");
    assert_eq!(ranks_of(&body["items"]), vec![(r1, 1), (r2, 2)]);

    // Swap: same members, ranks exchanged
    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [
            { "reviewId": r1, "rank": 2 },
            { "reviewId": r2, "rank": 1 }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/top-ten-lists/date-night").await;
    assert_eq!(ranks_of(&body["items"]), vec![(r2, 1), (r1, 2)]);
}

#[tokio::test]
async fn test_remove_is_a_renumbered_replace() {
    let app = test_app().await;
    let r1 = seed_review(&app, "First").await;
    let r2 = seed_review(&app, "Second").await;
    let r3 = seed_review(&app, "Third").await;
    let list_id = seed_list(&app, "Favorites").await;

    put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [
            { "reviewId": r1, "rank": 1 },
            { "reviewId": r2, "rank": 2 },
            { "reviewId": r3, "rank": 3 }
        ]}),
    )
    .await;

    // Dropping the middle entry: the client renumbers and sends the rest
    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [
            { "reviewId": r1, "rank": 1 },
            { "reviewId": r3, "rank": 2 }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/top-ten-lists/{}", list_id)).await;
    assert_eq!(ranks_of(&body["items"]), vec![(r1, 1), (r3, 2)]);
}

#[tokio::test]
async fn test_capacity_bound_preserves_prior_state() {
    let app = test_app().await;
    let mut ids = Vec::new();
    for i in 0..11 {
        ids.push(seed_review(&app, &format!("Spot {}", i)).await);
    }
    let list_id = seed_list(&app, "Big List").await;

    put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [{ "reviewId": ids[0], "rank": 1 }] }),
    )
    .await;

    // Eleven items exceeds the capacity bound
    let oversized: Vec<Value> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| json!({ "reviewId": id, "rank": i as i64 + 1 }))
        .collect();
    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": oversized }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Prior state unchanged
    let (_, body) = get(&app, &format!("/api/top-ten-lists/{}", list_id)).await;
    assert_eq!(ranks_of(&body["items"]), vec![(ids[0], 1)]);
}

#[tokio::test]
async fn test_rejects_non_contiguous_ranks() {
    let app = test_app().await;
    let r1 = seed_review(&app, "One").await;
    let r2 = seed_review(&app, "Two").await;
    let list_id = seed_list(&app, "Gappy").await;

    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [
            { "reviewId": r1, "rank": 1 },
            { "reviewId": r2, "rank": 3 }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, &format!("/api/top-ten-lists/{}", list_id)).await;
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejects_duplicate_ranks() {
    let app = test_app().await;
    let r1 = seed_review(&app, "One").await;
    let r2 = seed_review(&app, "Two").await;
    let list_id = seed_list(&app, "Tied").await;

    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [
            { "reviewId": r1, "rank": 1 },
            { "reviewId": r2, "rank": 1 }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejects_duplicate_membership() {
    let app = test_app().await;
    let r1 = seed_review(&app, "One").await;
    let list_id = seed_list(&app, "Doubled").await;

    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [
            { "reviewId": r1, "rank": 1 },
            { "reviewId": r1, "rank": 2 }
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_replace_clears_list() {
    let app = test_app().await;
    let r1 = seed_review(&app, "One").await;
    let list_id = seed_list(&app, "Emptied").await;

    put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [{ "reviewId": r1, "rank": 1 }] }),
    )
    .await;

    let (status, _) = put(
        &app,
        &format!("/api/top-ten-lists/{}/items", list_id),
        json!({ "items": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/top-ten-lists/{}", list_id)).await;
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_replace_on_missing_list_is_404() {
    let app = test_app().await;
    let r1 = seed_review(&app, "One").await;

    let (status, _) = put(
        &app,
        "/api/top-ten-lists/999/items",
        json!({ "items": [{ "reviewId": r1, "rank": 1 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rank_set_stays_contiguous_across_mutations() {
    let app = test_app().await;
    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(seed_review(&app, &format!("Model {}", i)).await);
    }
    let list_id = seed_list(&app, "Churn").await;

    // Model the list alongside the store: add, remove, swap, expressed as
    // bulk replaces, checking the rank set after every step
    let steps: Vec<Vec<i64>> = vec![
        vec![ids[0]],
        vec![ids[0], ids[1]],
        vec![ids[1], ids[0]],
        vec![ids[1], ids[0], ids[2], ids[3]],
        vec![ids[1], ids[3]],
        vec![ids[4], ids[1], ids[3]],
    ];

    for members in steps {
        let items: Vec<Value> = members
            .iter()
            .enumerate()
            .map(|(i, id)| json!({ "reviewId": id, "rank": i as i64 + 1 }))
            .collect();
        let (status, _) = put(
            &app,
            &format!("/api/top-ten-lists/{}/items", list_id),
            json!({ "items": items }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = get(&app, &format!("/api/top-ten-lists/{}", list_id)).await;
        let stored = ranks_of(&body["items"]);
        let expected: Vec<(i64, i64)> = members
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i as i64 + 1))
            .collect();
        assert_eq!(stored, expected);

        let ranks: Vec<i64> = stored.iter().map(|(_, r)| *r).collect();
        assert_eq!(ranks, (1..=members.len() as i64).collect::<Vec<i64>>());
    }
}

#[tokio::test]
async fn test_list_crud() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/top-ten-lists",
        json!({ "name": "Best Brunch", "description": "Weekend picks" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], "best-brunch");
    let id = body["id"].as_i64().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/api/top-ten-lists/{}", id),
        json!({ "name": "Best Brunch in Town" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Best Brunch in Town");

    let (status, _) = delete(&app, &format!("/api/top-ten-lists/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/top-ten-lists/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
