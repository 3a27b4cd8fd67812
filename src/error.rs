//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses. JSON endpoints return `AppError` directly; the HTML
//! pages wrap it in `PageError`, which answers with a plain-text diagnostic.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from storage reads or writes
/// - **Resource Errors**: Requested vehicle not found
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No vehicle is registered under the requested VIN.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Vehicle not found")]
    VehicleNotFound,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::VehicleNotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Convert AppError into a JSON HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `VehicleNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::VehicleNotFound => ("vehicle_not_found", self.to_string()),
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database error");
                ("internal_error", "An internal error occurred".to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Error returned by the HTML page handlers.
///
/// The body is plain text so the failure is readable in a browser. The
/// context string says what the page was doing when storage failed.
#[derive(Debug)]
pub struct PageError {
    context: &'static str,
    source: AppError,
}

impl PageError {
    /// Failure while reading the vehicle listing.
    pub fn retrieving(source: impl Into<AppError>) -> Self {
        Self {
            context: "Error retrieving data",
            source: source.into(),
        }
    }

    /// Failure while persisting a submitted service record.
    pub fn saving(source: impl Into<AppError>) -> Self {
        Self {
            context: "Error saving service record",
            source: source.into(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.context);

        let body = format!("{}: {}", self.context, self.source);
        (self.source.status(), body).into_response()
    }
}
