mod common;

use axum::http::{Method, StatusCode};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn healthz_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (status, body) = common::request(&app, Method::GET, "/healthz", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
