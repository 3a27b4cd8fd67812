//! JSON read API.
//!
//! - GET /api/v1/vehicles - List every vehicle with its service records
//! - GET /api/v1/vehicles/{vin} - Get one vehicle by VIN

use crate::{
    db::DbPool, error::AppError, models::vehicle::VehicleWithRecords,
    services::ledger_service,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all vehicles.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "model": "Civic",
///     "year": 2020,
///     "vin": "VIN123",
///     "records": [
///       { "id": 1, "vehicle_id": 1, "date": "2024-01-01", "description": "Oil change", "cost": 49.99 }
///     ]
///   }
/// ]
/// ```
///
/// An empty ledger returns `[]`.
pub async fn list_vehicles(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<VehicleWithRecords>>, AppError> {
    let vehicles = ledger_service::list_vehicles(&pool).await?;
    Ok(Json(vehicles))
}

/// Get a vehicle by VIN.
///
/// # Response
///
/// - **Success (200 OK)**: the vehicle and its records
/// - **Error (404)**: no vehicle with that VIN
pub async fn get_vehicle(
    State(pool): State<DbPool>,
    Path(vin): Path<String>,
) -> Result<Json<VehicleWithRecords>, AppError> {
    let vehicle = ledger_service::find_vehicle_by_vin(&pool, &vin)
        .await?
        .ok_or(AppError::VehicleNotFound)?;

    Ok(Json(vehicle))
}
