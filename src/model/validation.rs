//! Field validation shared by the forms and the API.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Field '{0}' is required")]
    Required(&'static str),
    #[error("Unknown value '{value}' for field '{field}'")]
    UnknownValue { field: &'static str, value: String },
    #[error("Field '{0}' must be a positive number")]
    NotPositive(&'static str),
    #[error("Field '{0}' must not be negative")]
    Negative(&'static str),
    #[error("Unit number is required when the location is an apartment")]
    MissingUnitNumber,
    #[error("Location detail is required for this location")]
    MissingLocationDetail,
    #[error("Usage detail is required for per-use periodicity")]
    MissingUsageDetail,
    #[error("End time must be after start time")]
    EndNotAfterStart,
    #[error("Common area is not available for reservations")]
    AreaInactive,
    #[error("Expected guests ({guests}) exceed the area capacity of {capacity}")]
    CapacityExceeded { guests: i32, capacity: i32 },
    #[error("Reservation lasts {hours:.1} hours but the area allows at most {max_hours}")]
    DurationExceeded { hours: f64, max_hours: i32 },
    #[error("The area rules must be accepted")]
    RulesNotAccepted,
}

/// True when the value is missing or only whitespace
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }

    Ok(())
}

pub fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositive(field));
    }

    Ok(())
}

/// Accepts `None`; a present value must be finite and not negative
pub fn optional_non_negative(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ValidationError::Negative(field)),
        _ => Ok(()),
    }
}

/// Trims the value and drops it entirely when blank
pub fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
