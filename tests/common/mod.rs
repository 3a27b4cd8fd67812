// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`
use vehicle_service_ledger::{
    app,
    db::{self, DbPool},
    models::service_record::NewServiceRecord,
};

/// Helper to create a migrated pool backed by a temporary database file
pub async fn test_pool() -> Result<(DbPool, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let url = format!("sqlite://{}", db_path.display());
    let pool = db::create_pool(&url, 5).await?;
    db::run_migrations(&pool).await?;
    Ok((pool, temp_dir))
}

/// Helper to build the full router over a fresh database
pub async fn test_app() -> Result<(Router, DbPool, TempDir)> {
    let (pool, temp_dir) = test_pool().await?;
    let router = app::router(pool.clone(), temp_dir.path());
    Ok((router, pool, temp_dir))
}

/// The submission used throughout the examples
pub fn civic_oil_change() -> NewServiceRecord {
    NewServiceRecord {
        model: "Civic".to_string(),
        year: 2020,
        vin: "VIN123".to_string(),
        date: "2024-01-01".to_string(),
        description: "Oil change".to_string(),
        cost: 49.99,
    }
}

pub async fn get(router: &Router, uri: &str) -> Result<Response<Body>> {
    let request = Request::builder().uri(uri).body(Body::empty())?;
    Ok(router.clone().oneshot(request).await?)
}

/// POST an urlencoded form to `/add`
pub async fn post_form(router: &Router, fields: &[(&str, &str)]) -> Result<Response<Body>> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?;
    Ok(router.clone().oneshot(request).await?)
}

pub async fn body_text(response: Response<Body>) -> Result<String> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn count(pool: &DbPool, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    Ok(sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await?)
}
