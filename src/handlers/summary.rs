//! Ledger summary endpoint.
//!
//! - GET /api/v1/summary - Vehicle and service record totals

use crate::{
    db::DbPool,
    error::AppError,
    services::ledger_service::{self, LedgerTotals},
};
use axum::{Json, extract::State};

/// Report how much the ledger holds.
///
/// # Response (200 OK)
///
/// ```json
/// { "vehicles": 2, "service_records": 5, "total_cost": 412.5 }
/// ```
///
/// A storage failure returns the standard error response with 500.
pub async fn ledger_summary(State(pool): State<DbPool>) -> Result<Json<LedgerTotals>, AppError> {
    Ok(Json(ledger_service::ledger_totals(&pool).await?))
}
