//! Data models representing database entities.
//!
//! This module contains the structures that map to database tables, plus the
//! form types used to submit new service records.

/// Vehicle model and listing view model
pub mod vehicle;
/// Service record model and submission form
pub mod service_record;
