//! Video API integration tests.
//!
//! Run with: `cargo test -p vidkeep-api --test videos_test`

mod helpers;

use helpers::fixtures::{create_video_body, update_video_body};
use helpers::setup_test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_list_videos_starts_empty() {
    let app = setup_test_app();

    let response = app.client().get("/videos").await;

    assert_eq!(response.status_code(), 200);
    let data: Value = response.json();
    assert_eq!(data, json!([]));
}

#[tokio::test]
async fn test_create_video() {
    let app = setup_test_app();
    let client = app.client();

    let response = client.post("/videos").json(&create_video_body("First")).await;

    assert_eq!(response.status_code(), 201);
    let created: Value = response.json();
    assert!(created["id"].is_i64());
    assert_eq!(created["title"], "First");
    assert_eq!(created["author"], "ferris");
    assert_eq!(created["availableResolutions"], json!(["P144", "P720"]));
    assert_eq!(created["canBeDownloaded"], true);
    assert!(created["minAgeRestriction"].is_null());
    assert!(created["createdAt"].is_string());
    assert!(created["publicationDate"].is_string());
    assert_eq!(app.videos().count().await, 1);

    let listed: Value = client.get("/videos").await.json();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_create_video_publication_is_after_creation() {
    let app = setup_test_app();

    let created: Value = app
        .client()
        .post("/videos")
        .json(&create_video_body("Dates"))
        .await
        .json();

    let created_at = chrono::DateTime::parse_from_rfc3339(created["createdAt"].as_str().unwrap())
        .expect("createdAt is RFC 3339");
    let published = chrono::DateTime::parse_from_rfc3339(
        created["publicationDate"].as_str().unwrap(),
    )
    .expect("publicationDate is RFC 3339");
    assert_eq!(published - created_at, chrono::Duration::days(1));
}

#[tokio::test]
async fn test_rapid_creates_get_unique_ids() {
    let app = setup_test_app();
    let client = app.client();

    let mut ids = Vec::new();
    for i in 0..20 {
        let created: Value = client
            .post("/videos")
            .json(&create_video_body(&format!("video {}", i)))
            .await
            .json();
        ids.push(created["id"].as_i64().unwrap());
    }

    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_create_video_missing_title() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/videos")
        .json(&json!({ "author": "ferris", "availableResolutions": ["P144"] }))
        .await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert_eq!(
        data,
        json!({
            "errorsMessages": [
                { "field": "title", "message": "This field is required." }
            ]
        })
    );
    assert_eq!(app.videos().count().await, 0);
}

#[tokio::test]
async fn test_create_video_unknown_resolution() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/videos")
        .json(&json!({
            "title": "Bad resolution",
            "author": "ferris",
            "availableResolutions": ["P999"]
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    let errors = data["errorsMessages"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "availableResolutions");
    assert_eq!(app.videos().count().await, 0);
}

#[tokio::test]
async fn test_create_video_title_length_boundary() {
    let app = setup_test_app();
    let client = app.client();

    let response = client
        .post("/videos")
        .json(&create_video_body(&"a".repeat(40)))
        .await;
    assert_eq!(response.status_code(), 201);

    let response = client
        .post("/videos")
        .json(&create_video_body(&"a".repeat(41)))
        .await;
    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert_eq!(data["errorsMessages"][0]["field"], "title");

    assert_eq!(app.videos().count().await, 1);
}

#[tokio::test]
async fn test_create_video_reports_all_violations() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/videos")
        .json(&json!({
            "title": "t".repeat(41),
            "author": "",
            "availableResolutions": ["P144", "8K"]
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    let fields: Vec<&str> = data["errorsMessages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["author", "availableResolutions", "title"]);
}

#[tokio::test]
async fn test_create_video_malformed_body() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/videos")
        .bytes("{ not json".into())
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert_eq!(data["errorsMessages"][0]["field"], "body");
    let message = data["errorsMessages"][0]["message"].as_str().unwrap();
    assert!(message.contains("Failed to parse the request body as JSON"), "{}", message);
    assert_eq!(app.videos().count().await, 0);
}

#[tokio::test]
async fn test_create_video_missing_content_type() {
    let app = setup_test_app();

    let body = create_video_body("Plain text").to_string();
    let response = app.client().post("/videos").text(body).await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert_eq!(data["errorsMessages"][0]["field"], "body");
    let message = data["errorsMessages"][0]["message"].as_str().unwrap();
    assert!(message.contains("Content-Type"), "{}", message);
    assert_eq!(app.videos().count().await, 0);
}

#[tokio::test]
async fn test_create_video_author_length_boundary() {
    let app = setup_test_app();
    let client = app.client();

    let mut body = create_video_body("Author limit");
    body["author"] = json!("a".repeat(20));
    let response = client.post("/videos").json(&body).await;
    assert_eq!(response.status_code(), 201);

    body["author"] = json!("a".repeat(21));
    let response = client.post("/videos").json(&body).await;
    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert_eq!(
        data,
        json!({
            "errorsMessages": [
                { "field": "author", "message": "Must be at most 20 characters long." }
            ]
        })
    );

    assert_eq!(app.videos().count().await, 1);
}

#[tokio::test]
async fn test_get_video_by_id() {
    let app = setup_test_app();
    let client = app.client();

    for title in ["one", "two", "three"] {
        client.post("/videos").json(&create_video_body(title)).await;
    }

    for video in app.videos().list().await {
        let response = client.get(&format!("/videos/{}", video.id)).await;
        assert_eq!(response.status_code(), 200);
        let data: Value = response.json();
        assert_eq!(data["id"], video.id);
        assert_eq!(data["title"], video.title);
    }
}

#[tokio::test]
async fn test_get_video_not_found() {
    let app = setup_test_app();

    let response = app.client().get("/videos/1").await;

    assert_eq!(response.status_code(), 404);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_get_video_non_numeric_id() {
    let app = setup_test_app();

    let response = app.client().get("/videos/not-a-number").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_update_video() {
    let app = setup_test_app();
    let client = app.client();

    let created: Value = client
        .post("/videos")
        .json(&create_video_body("Before"))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .put(&format!("/videos/{}", id))
        .json(&update_video_body())
        .await;
    assert_eq!(response.status_code(), 204);

    let fetched: Value = client.get(&format!("/videos/{}", id)).await.json();
    let expected = update_video_body();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["title"], expected["title"]);
    assert_eq!(fetched["author"], expected["author"]);
    assert_eq!(fetched["availableResolutions"], expected["availableResolutions"]);
    assert_eq!(fetched["canBeDownloaded"], expected["canBeDownloaded"]);
    assert_eq!(fetched["minAgeRestriction"], expected["minAgeRestriction"]);
    assert_eq!(fetched["publicationDate"], expected["publicationDate"]);
    assert_eq!(fetched["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_video_invalid_body_leaves_video_unchanged() {
    let app = setup_test_app();
    let client = app.client();

    let created: Value = client
        .post("/videos")
        .json(&create_video_body("Keep me"))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let mut body = update_video_body();
    body["minAgeRestriction"] = json!(21);
    body["canBeDownloaded"] = json!("true");

    let response = client.put(&format!("/videos/{}", id)).json(&body).await;
    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    let fields: Vec<&str> = data["errorsMessages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["canBeDownloaded", "minAgeRestriction"]);

    let fetched: Value = client.get(&format!("/videos/{}", id)).await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_video_accepts_negative_age_restriction() {
    let app = setup_test_app();
    let client = app.client();

    let created: Value = client
        .post("/videos")
        .json(&create_video_body("Any age"))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let mut body = update_video_body();
    body["minAgeRestriction"] = json!(-5);
    let response = client.put(&format!("/videos/{}", id)).json(&body).await;
    assert_eq!(response.status_code(), 204);

    let fetched: Value = client.get(&format!("/videos/{}", id)).await.json();
    assert_eq!(fetched["minAgeRestriction"], -5);
}

#[tokio::test]
async fn test_update_video_not_found() {
    let app = setup_test_app();

    let response = app
        .client()
        .put("/videos/1")
        .json(&update_video_body())
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let app = setup_test_app();

    let response = app.client().put("/videos/1").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    let data: Value = response.json();
    assert_eq!(data["errorsMessages"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn test_delete_video() {
    let app = setup_test_app();
    let client = app.client();

    let created: Value = client
        .post("/videos")
        .json(&create_video_body("Short-lived"))
        .await
        .json();
    let path = format!("/videos/{}", created["id"]);

    let response = client.delete(&path).await;
    assert_eq!(response.status_code(), 204);

    let response = client.get(&path).await;
    assert_eq!(response.status_code(), 404);

    let response = client.delete(&path).await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_delete_keeps_other_videos_in_order() {
    let app = setup_test_app();
    let client = app.client();

    let mut ids = Vec::new();
    for title in ["a", "b", "c"] {
        let created: Value = client.post("/videos").json(&create_video_body(title)).await.json();
        ids.push(created["id"].clone());
    }

    client.delete(&format!("/videos/{}", ids[1])).await;

    let listed: Value = client.get("/videos").await.json();
    let remaining: Vec<Value> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].clone())
        .collect();
    assert_eq!(remaining, vec![ids[0].clone(), ids[2].clone()]);
}
