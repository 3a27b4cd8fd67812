//! Ledger service - vehicle listing and service record submission.
//!
//! This service handles:
//! - Loading every vehicle with its nested service history
//! - Find-or-create of a vehicle by VIN
//! - Appending service records
//!
//! # Atomicity Guarantees
//!
//! A submission runs inside a single SQLite transaction. The vehicle insert is
//! conditional on the VIN UNIQUE constraint, so concurrent submissions for one
//! VIN produce exactly one vehicle row.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        service_record::{NewServiceRecord, ServiceRecord},
        vehicle::{Vehicle, VehicleWithRecords},
    },
};

/// Result of recording a service event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub vehicle_id: i64,
    pub record_id: i64,

    /// `true` when the VIN was unseen and a vehicle row was inserted
    pub created_vehicle: bool,
}

/// Totals across the whole ledger.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct LedgerTotals {
    pub vehicles: i64,
    pub service_records: i64,

    /// Sum of every record's cost, 0 for an empty ledger
    pub total_cost: f64,
}

/// Count vehicles and records and sum their costs.
pub async fn ledger_totals(pool: &DbPool) -> Result<LedgerTotals, AppError> {
    let totals = sqlx::query_as::<_, LedgerTotals>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM vehicles) AS vehicles,
            (SELECT COUNT(*) FROM service_records) AS service_records,
            (SELECT COALESCE(SUM(cost), 0.0) FROM service_records) AS total_cost
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(totals)
}

/// List every vehicle with its service records.
///
/// # Ordering
///
/// Vehicles and records are both returned in insertion order.
pub async fn list_vehicles(pool: &DbPool) -> Result<Vec<VehicleWithRecords>, AppError> {
    let vehicles =
        sqlx::query_as::<_, Vehicle>("SELECT id, model, year, vin FROM vehicles ORDER BY id")
            .fetch_all(pool)
            .await?;

    let records = sqlx::query_as::<_, ServiceRecord>(
        "SELECT id, vehicle_id, date, description, cost FROM service_records ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    // Group records by owner, preserving order within each group
    let mut by_vehicle: HashMap<i64, Vec<ServiceRecord>> = HashMap::new();
    for record in records {
        by_vehicle.entry(record.vehicle_id).or_default().push(record);
    }

    Ok(vehicles
        .into_iter()
        .map(|vehicle| {
            let records = by_vehicle.remove(&vehicle.id).unwrap_or_default();
            VehicleWithRecords::new(vehicle, records)
        })
        .collect())
}

/// Look up a single vehicle and its records by VIN.
pub async fn find_vehicle_by_vin(
    pool: &DbPool,
    vin: &str,
) -> Result<Option<VehicleWithRecords>, AppError> {
    let Some(vehicle) =
        sqlx::query_as::<_, Vehicle>("SELECT id, model, year, vin FROM vehicles WHERE vin = ?")
            .bind(vin)
            .fetch_optional(pool)
            .await?
    else {
        return Ok(None);
    };

    let records = sqlx::query_as::<_, ServiceRecord>(
        r#"
        SELECT id, vehicle_id, date, description, cost
        FROM service_records
        WHERE vehicle_id = ?
        ORDER BY id
        "#,
    )
    .bind(vehicle.id)
    .fetch_all(pool)
    .await?;

    Ok(Some(VehicleWithRecords::new(vehicle, records)))
}

/// Record a service event, creating the vehicle if its VIN is unseen.
///
/// # Process
///
/// 1. Start database transaction
/// 2. Insert the vehicle, doing nothing if the VIN already exists
/// 3. If nothing was inserted, read the existing vehicle's id
/// 4. Insert the service record for that vehicle
/// 5. Commit (or rollback on error)
///
/// An existing vehicle keeps its stored model and year; only the record is
/// appended.
///
/// # Errors
///
/// - `Database`: any storage failure. Nothing is persisted in that case.
pub async fn record_service(
    pool: &DbPool,
    submission: &NewServiceRecord,
) -> Result<UpsertOutcome, AppError> {
    let mut tx = pool.begin().await?;

    // The first statement is a write, so the transaction holds the write
    // lock from here until commit
    let inserted: Option<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO vehicles (model, year, vin)
        VALUES (?, ?, ?)
        ON CONFLICT (vin) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(&submission.model)
    .bind(submission.year)
    .bind(&submission.vin)
    .fetch_optional(&mut *tx)
    .await?;

    let (vehicle_id, created_vehicle) = match inserted {
        Some(id) => (id, true),
        None => {
            let id: i64 = sqlx::query_scalar("SELECT id FROM vehicles WHERE vin = ?")
                .bind(&submission.vin)
                .fetch_one(&mut *tx)
                .await?;
            (id, false)
        }
    };

    let record_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO service_records (vehicle_id, date, description, cost)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(vehicle_id)
    .bind(&submission.date)
    .bind(&submission.description)
    .bind(submission.cost)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    if created_vehicle {
        tracing::info!(vin = %submission.vin, vehicle_id, record_id, "created vehicle");
    } else {
        tracing::info!(vin = %submission.vin, vehicle_id, record_id, "appended service record");
    }

    Ok(UpsertOutcome {
        vehicle_id,
        record_id,
        created_vehicle,
    })
}
