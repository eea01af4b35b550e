//! Field validation for camp records.
//!
//! Every validated field has a free function returning the accepted value or a
//! [`ValidationError`]. Constructors and setters in [`crate::models`] call
//! these before a value is stored, so an invalid record never reaches the
//! database.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Allowed camper ages, inclusive.
pub const CAMPER_AGE_RANGE: RangeInclusive<i64> = 8..=18;

/// Allowed signup hours, inclusive.
pub const SIGNUP_TIME_RANGE: RangeInclusive<i64> = 0..=23;

/// A field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The camper name was empty.
    #[error("name required")]
    NameRequired,

    /// The camper age was outside [`CAMPER_AGE_RANGE`].
    #[error("age must be between 8 and 18, got {0}")]
    AgeOutOfRange(i64),

    /// The signup time was outside [`SIGNUP_TIME_RANGE`].
    #[error("time must be between 0 and 23, got {0}")]
    TimeOutOfRange(i64),
}

impl ValidationError {
    /// Name of the field that failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::AgeOutOfRange(_) => "age",
            Self::TimeOutOfRange(_) => "time",
        }
    }
}

/// Validate a camper name.
///
/// # Errors
///
/// Returns [`ValidationError::NameRequired`] if the name is empty or only
/// whitespace.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(name)
}

/// Validate a camper age.
///
/// # Errors
///
/// Returns [`ValidationError::AgeOutOfRange`] unless `8 <= age <= 18`.
pub fn validate_age(age: i64) -> Result<i64, ValidationError> {
    if CAMPER_AGE_RANGE.contains(&age) {
        Ok(age)
    } else {
        Err(ValidationError::AgeOutOfRange(age))
    }
}

/// Validate a signup hour.
///
/// # Errors
///
/// Returns [`ValidationError::TimeOutOfRange`] unless `0 <= time <= 23`.
pub fn validate_time(time: i64) -> Result<i64, ValidationError> {
    if SIGNUP_TIME_RANGE.contains(&time) {
        Ok(time)
    } else {
        Err(ValidationError::TimeOutOfRange(time))
    }
}
