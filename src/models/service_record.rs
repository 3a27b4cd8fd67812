//! Service record data models and form validation.
//!
//! This module defines:
//! - `ServiceRecord`: Database entity representing one maintenance event
//! - `ServiceRecordForm`: Raw form fields posted to `/add`
//! - `NewServiceRecord`: A fully typed submission, ready to persist
//! - `FieldError`: One failing form field

use serde::{Deserialize, Serialize};

/// Represents a row from the `service_records` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct ServiceRecord {
    pub id: i64,

    /// Foreign key to the owning vehicle
    pub vehicle_id: i64,

    /// Free-form date text as submitted
    pub date: String,

    pub description: String,

    pub cost: f64,
}

/// Form body for `POST /add`.
///
/// Every field is kept as text so that parse failures can be reported per
/// field instead of rejecting the whole request. Missing fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceRecordForm {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub vin: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: String,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceRecord {
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub date: String,
    pub description: String,
    pub cost: f64,
}

/// A form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name, e.g. `year`
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl ServiceRecordForm {
    /// Validate every field and produce a typed submission.
    ///
    /// All fields are checked before returning, so the caller gets the full
    /// list of problems at once. Nothing is persisted here.
    ///
    /// # Rules
    ///
    /// - `year`: must parse as an integer
    /// - `cost`: must parse as a finite decimal number
    /// - `model`, `vin`: must not be blank
    /// - `date`, `description`: taken as submitted
    pub fn validate(&self) -> Result<NewServiceRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let model = self.model.trim();
        if model.is_empty() {
            errors.push(FieldError::new("model", "Model is required"));
        }

        let vin = self.vin.trim();
        if vin.is_empty() {
            errors.push(FieldError::new("vin", "VIN is required"));
        }

        let year = match self.year.trim().parse::<i32>() {
            Ok(year) => Some(year),
            Err(err) => {
                errors.push(FieldError::new(
                    "year",
                    format!("Invalid year {:?}: {}", self.year, err),
                ));
                None
            }
        };

        let cost = match self.cost.trim().parse::<f64>() {
            Ok(cost) if cost.is_finite() => Some(cost),
            Ok(_) => {
                errors.push(FieldError::new(
                    "cost",
                    format!("Invalid cost {:?}: must be a finite number", self.cost),
                ));
                None
            }
            Err(err) => {
                errors.push(FieldError::new(
                    "cost",
                    format!("Invalid cost {:?}: {}", self.cost, err),
                ));
                None
            }
        };

        match (year, cost) {
            (Some(year), Some(cost)) if errors.is_empty() => Ok(NewServiceRecord {
                model: model.to_string(),
                year,
                vin: vin.to_string(),
                date: self.date.trim().to_string(),
                description: self.description.trim().to_string(),
                cost,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civic_form() -> ServiceRecordForm {
        ServiceRecordForm {
            model: "Civic".to_string(),
            year: "2020".to_string(),
            vin: "VIN123".to_string(),
            date: "2024-01-01".to_string(),
            description: "Oil change".to_string(),
            cost: "49.99".to_string(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_form_produces_typed_record() {
        let record = civic_form().validate().unwrap();

        assert_eq!(
            record,
            NewServiceRecord {
                model: "Civic".to_string(),
                year: 2020,
                vin: "VIN123".to_string(),
                date: "2024-01-01".to_string(),
                description: "Oil change".to_string(),
                cost: 49.99,
            }
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let form = ServiceRecordForm {
            year: " 2020 ".to_string(),
            vin: "  VIN123\n".to_string(),
            cost: " 10 ".to_string(),
            ..civic_form()
        };

        let record = form.validate().unwrap();
        assert_eq!(record.year, 2020);
        assert_eq!(record.vin, "VIN123");
        assert_eq!(record.cost, 10.0);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let form = ServiceRecordForm {
            year: "abcd".to_string(),
            ..civic_form()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["year"]);
        assert!(errors[0].message.contains("year"));
    }

    #[test]
    fn year_with_trailing_text_is_rejected() {
        for year in ["2020abc", "2020.5", "3000000000"] {
            let form = ServiceRecordForm {
                year: year.to_string(),
                ..civic_form()
            };
            assert_eq!(fields(&form.validate().unwrap_err()), vec!["year"]);
        }
    }

    #[test]
    fn non_numeric_cost_is_rejected() {
        let form = ServiceRecordForm {
            cost: "free".to_string(),
            ..civic_form()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["cost"]);
        assert!(errors[0].message.contains("cost"));
    }

    #[test]
    fn non_finite_cost_is_rejected() {
        for cost in ["NaN", "inf", "-infinity"] {
            let form = ServiceRecordForm {
                cost: cost.to_string(),
                ..civic_form()
            };
            assert_eq!(fields(&form.validate().unwrap_err()), vec!["cost"]);
        }
    }

    #[test]
    fn every_failing_field_is_reported() {
        let form = ServiceRecordForm {
            model: "   ".to_string(),
            year: "twenty".to_string(),
            vin: String::new(),
            cost: "free".to_string(),
            ..civic_form()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["model", "vin", "year", "cost"]);
    }

    #[test]
    fn blank_date_and_description_are_accepted() {
        let form = ServiceRecordForm {
            date: String::new(),
            description: String::new(),
            ..civic_form()
        };

        let record = form.validate().unwrap();
        assert!(record.date.is_empty());
        assert!(record.description.is_empty());
    }
}
