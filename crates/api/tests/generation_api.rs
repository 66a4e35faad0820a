mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{bearer, build_test_app, request};

fn create_body() -> serde_json::Value {
    json!({
        "title": "Bella 2026",
        "artist_style": "Impressionist",
        "photo_urls": ["https://photos.test/bella.jpg"],
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_auth(pool: PgPool) {
    let app = build_test_app(pool);
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        None,
        Some(create_body()),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_fetch_generation(pool: PgPool) {
    let app = build_test_app(pool);
    let auth = bearer(1, "owner@example.com");

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        Some(&auth),
        Some(create_body()),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    let id = body["data"]["id"].as_i64().expect("created id");

    let (status, body) = request(
        &app,
        Method::GET,
        &format!("/api/v1/generations/{id}"),
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "processing_preview");
    assert_eq!(body["data"]["title"], "Bella 2026");
    assert_eq!(body["data"]["months"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_photo_list_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let auth = bearer(1, "owner@example.com");

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        Some(&auth),
        Some(json!({
            "title": "Bella 2026",
            "artist_style": "Impressionist",
            "photo_urls": [],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_generation_is_forbidden(pool: PgPool) {
    let app = build_test_app(pool);
    let owner = bearer(1, "owner@example.com");
    let stranger = bearer(2, "stranger@example.com");

    let (_, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        Some(&owner),
        Some(create_body()),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = request(
        &app,
        Method::GET,
        &format!("/api/v1/generations/{id}"),
        Some(&stranger),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn preview_produces_month_one_and_awaits_purchase(pool: PgPool) {
    let app = build_test_app(pool);
    let auth = bearer(1, "owner@example.com");

    let (_, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        Some(&auth),
        Some(create_body()),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = request(
        &app,
        Method::POST,
        &format!("/api/v1/generations/{id}/preview"),
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "preview failed: {body}");
    assert_eq!(body["data"]["status"], "awaiting_purchase");
    assert!(body["data"]["image_url"].as_str().unwrap().contains("january"));

    let (_, body) = request(
        &app,
        Method::GET,
        &format!("/api/v1/generations/{id}"),
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(body["data"]["status"], "awaiting_purchase");
    let months = body["data"]["months"].as_array().unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0]["month"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn purchase_runs_full_generation_in_background(pool: PgPool) {
    let app = build_test_app(pool);
    let auth = bearer(1, "owner@example.com");

    let (_, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        Some(&auth),
        Some(create_body()),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    request(
        &app,
        Method::POST,
        &format!("/api/v1/generations/{id}/preview"),
        Some(&auth),
        None,
    )
    .await;

    let (status, body) = request(
        &app,
        Method::POST,
        &format!("/api/v1/generations/{id}/purchase"),
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "processing_full");

    // Poll the read path until the detached run finishes. The stubs are
    // instant and pacing is zero, so this converges quickly.
    let mut last_status = String::new();
    for _ in 0..200 {
        let (_, body) = request(
            &app,
            Method::GET,
            &format!("/api/v1/generations/{id}"),
            Some(&auth),
            None,
        )
        .await;
        last_status = body["data"]["status"].as_str().unwrap_or("").to_string();
        if last_status == "completed" {
            let months = body["data"]["months"].as_array().unwrap();
            assert_eq!(months.len(), 12);
            assert!(body["data"]["completed_at"].is_string());
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("full run did not complete; last status: {last_status}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn purchase_conflicts_on_terminal_generation(pool: PgPool) {
    use pawprints_db::models::status::GenerationStatus;
    use pawprints_db::repositories::GenerationRepo;

    let app = build_test_app(pool.clone());
    let auth = bearer(1, "owner@example.com");

    let (_, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        Some(&auth),
        Some(create_body()),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    GenerationRepo::finalize(&pool, id, GenerationStatus::Completed)
        .await
        .unwrap();

    let (status, body) = request(
        &app,
        Method::POST,
        &format!("/api/v1/generations/{id}/purchase"),
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleted_generation_is_gone(pool: PgPool) {
    let app = build_test_app(pool);
    let auth = bearer(1, "owner@example.com");

    let (_, body) = request(
        &app,
        Method::POST,
        "/api/v1/generations",
        Some(&auth),
        Some(create_body()),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/generations/{id}"),
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/api/v1/generations/{id}"),
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
