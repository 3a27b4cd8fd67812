//! Vehicle data models.
//!
//! This module defines:
//! - `Vehicle`: Database entity representing a car
//! - `VehicleWithRecords`: A vehicle with its nested service history

use serde::Serialize;

use super::service_record::ServiceRecord;

/// Represents a vehicle row from the `vehicles` table.
///
/// A vehicle is created implicitly the first time a service record is
/// submitted for an unseen VIN. `vin` carries a UNIQUE constraint.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Vehicle {
    /// Surrogate key, assigned in insertion order
    pub id: i64,

    /// Model name, e.g. "Civic"
    pub model: String,

    /// Model year
    pub year: i32,

    /// Vehicle identification number (natural key)
    pub vin: String,
}

/// A vehicle together with its service history.
///
/// This is what the listing page and the JSON API present.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "model": "Civic",
///   "year": 2020,
///   "vin": "VIN123",
///   "records": [
///     { "id": 1, "vehicle_id": 1, "date": "2024-01-01", "description": "Oil change", "cost": 49.99 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleWithRecords {
    pub id: i64,
    pub model: String,
    pub year: i32,
    pub vin: String,

    /// Service records in insertion order
    pub records: Vec<ServiceRecord>,
}

impl VehicleWithRecords {
    pub fn new(vehicle: Vehicle, records: Vec<ServiceRecord>) -> Self {
        Self {
            id: vehicle.id,
            model: vehicle.model,
            year: vehicle.year,
            vin: vehicle.vin,
            records,
        }
    }

    /// Sum of all record costs.
    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|r| r.cost).sum()
    }
}
