//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (form body, URL params, etc.)
//! 2. Calls into the ledger service
//! 3. Returns an HTTP response (HTML page, redirect, or JSON)

/// HTML listing page and form submission
pub mod vehicles;
/// JSON read API
pub mod api;
/// Ledger totals
pub mod summary;
