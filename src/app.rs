//! HTTP router construction.

use std::path::Path;

use axum::{Router, routing::get, routing::post};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{db::DbPool, handlers};

/// Build the application router.
///
/// # Routes
///
/// - `GET /` - vehicle listing page
/// - `POST /add` - service record submission
/// - `GET /api/v1/vehicles`, `GET /api/v1/vehicles/{vin}` - JSON read API
/// - `GET /api/v1/summary` - vehicle and record totals
/// - `/static/*` - files from `static_dir`
///
/// The pool is shared with all handlers via State extraction.
pub fn router(pool: DbPool, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::vehicles::view_vehicles))
        .route("/add", post(handlers::vehicles::add_service_record))
        .route("/api/v1/vehicles", get(handlers::api::list_vehicles))
        .route("/api/v1/vehicles/{vin}", get(handlers::api::get_vehicle))
        .route("/api/v1/summary", get(handlers::summary::ledger_summary))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
