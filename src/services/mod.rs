//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database transactions and the VIN-keyed upsert.

pub mod ledger_service;
