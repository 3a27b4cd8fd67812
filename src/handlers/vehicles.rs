//! Vehicle listing page and service record submission.
//!
//! - GET / - Render all vehicles with their service history
//! - POST /add - Submit a service record, creating the vehicle if its VIN is new

use crate::{
    db::DbPool,
    error::PageError,
    models::service_record::ServiceRecordForm,
    services::ledger_service,
    views::IndexPage,
};
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Render the vehicle listing.
///
/// # Response
///
/// - **Success (200 OK)**: HTML page, possibly with an empty vehicle list
/// - **Error (500)**: plain-text diagnostic when storage cannot be read
pub async fn view_vehicles(State(pool): State<DbPool>) -> Result<Html<String>, PageError> {
    let vehicles = ledger_service::list_vehicles(&pool)
        .await
        .map_err(PageError::retrieving)?;

    Ok(Html(
        IndexPage {
            vehicles: &vehicles,
            ..Default::default()
        }
        .render(),
    ))
}

/// Accept a service record submission.
///
/// # Form Fields
///
/// `model`, `year`, `vin`, `date`, `description`, `cost` (urlencoded)
///
/// # Response
///
/// - **Success (302 Found)**: redirect to `/`
/// - **Error (400)**: listing page with the field errors and the submitted values
/// - **Error (500)**: plain-text diagnostic when storage fails
///
/// Validation runs before any storage access, so a rejected form persists nothing.
pub async fn add_service_record(
    State(pool): State<DbPool>,
    Form(form): Form<ServiceRecordForm>,
) -> Result<Response, PageError> {
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(errors) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
            tracing::warn!(?fields, vin = %form.vin, "rejected service record submission");

            let vehicles = ledger_service::list_vehicles(&pool)
                .await
                .map_err(PageError::retrieving)?;
            let page = IndexPage {
                vehicles: &vehicles,
                errors: &errors,
                form: Some(&form),
            };

            return Ok((StatusCode::BAD_REQUEST, Html(page.render())).into_response());
        }
    };

    ledger_service::record_service(&pool, &submission)
        .await
        .map_err(PageError::saving)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}
