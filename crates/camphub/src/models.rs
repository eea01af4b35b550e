//! Core record types for camphub.
//!
//! `New*` types are validated values ready to be inserted; their persisted
//! counterparts carry the id assigned by the storage layer. Validated fields
//! are private so they can only change through a checking setter.

use crate::validation::{validate_age, validate_name, validate_time, ValidationError};

/// A camp-offered activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Identifier assigned by storage.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Difficulty rating.
    pub difficulty: i64,
}

/// An activity that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    /// Display name.
    pub name: String,
    /// Difficulty rating.
    pub difficulty: i64,
}

impl NewActivity {
    /// Create a new activity. Activities carry no field constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, difficulty: i64) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }
}

/// A camper that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    name: String,
    age: i64,
}

impl NewCamper {
    /// Build a camper after validating both fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing field: the name is checked before the age.
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_age(age)?;
        Ok(Self { name, age })
    }

    /// The camper's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The camper's age.
    #[must_use]
    pub fn age(&self) -> i64 {
        self.age
    }
}

/// A stored camper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    id: i64,
    name: String,
    age: i64,
}

impl Camper {
    /// Rebuild a camper from a stored row. Values are trusted.
    pub(crate) fn from_row(id: i64, name: String, age: i64) -> Self {
        Self { id, name, age }
    }

    /// Attach a storage id to a validated camper.
    pub(crate) fn from_new(id: i64, camper: &NewCamper) -> Self {
        Self {
            id,
            name: camper.name.clone(),
            age: camper.age,
        }
    }

    /// Identifier assigned by storage.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The camper's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The camper's age.
    #[must_use]
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Replace the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`] and leaves the name unchanged
    /// if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the age.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AgeOutOfRange`] and leaves the age unchanged
    /// if `age` is outside 8..=18.
    pub fn set_age(&mut self, age: i64) -> Result<(), ValidationError> {
        self.age = validate_age(age)?;
        Ok(())
    }
}

/// A signup that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSignup {
    camper_id: i64,
    activity_id: i64,
    time: i64,
}

impl NewSignup {
    /// Build a signup after validating the hour.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TimeOutOfRange`] unless `0 <= time <= 23`.
    pub fn new(camper_id: i64, activity_id: i64, time: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            camper_id,
            activity_id,
            time: validate_time(time)?,
        })
    }

    /// Referenced camper.
    #[must_use]
    pub fn camper_id(&self) -> i64 {
        self.camper_id
    }

    /// Referenced activity.
    #[must_use]
    pub fn activity_id(&self) -> i64 {
        self.activity_id
    }

    /// Hour of the day.
    #[must_use]
    pub fn time(&self) -> i64 {
        self.time
    }
}

/// A stored signup linking one camper to one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signup {
    id: i64,
    camper_id: i64,
    activity_id: i64,
    time: i64,
}

impl Signup {
    pub(crate) fn from_row(id: i64, camper_id: i64, activity_id: i64, time: i64) -> Self {
        Self {
            id,
            camper_id,
            activity_id,
            time,
        }
    }

    pub(crate) fn from_new(id: i64, signup: &NewSignup) -> Self {
        Self::from_row(id, signup.camper_id, signup.activity_id, signup.time)
    }

    /// Identifier assigned by storage.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Referenced camper.
    #[must_use]
    pub fn camper_id(&self) -> i64 {
        self.camper_id
    }

    /// Referenced activity.
    #[must_use]
    pub fn activity_id(&self) -> i64 {
        self.activity_id
    }

    /// Hour of the day.
    #[must_use]
    pub fn time(&self) -> i64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_camper_valid() {
        let camper = NewCamper::new("Clark Kent", 9).unwrap();
        assert_eq!(camper.name(), "Clark Kent");
        assert_eq!(camper.age(), 9);
    }

    #[test]
    fn test_new_camper_invalid_age() {
        assert_eq!(
            NewCamper::new("Tony Stark", 19),
            Err(ValidationError::AgeOutOfRange(19))
        );
    }

    #[test]
    fn test_new_camper_empty_name_checked_first() {
        assert_eq!(NewCamper::new("", 3), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_set_name_failure_keeps_value() {
        let mut camper = Camper::from_row(1, "Bruce Wayne".to_string(), 11);
        assert!(camper.set_name("").is_err());
        assert_eq!(camper.name(), "Bruce Wayne");

        camper.set_name("Batman").unwrap();
        assert_eq!(camper.name(), "Batman");
    }

    #[test]
    fn test_set_age_failure_keeps_value() {
        let mut camper = Camper::from_row(1, "Bruce Wayne".to_string(), 11);
        assert_eq!(camper.set_age(7), Err(ValidationError::AgeOutOfRange(7)));
        assert_eq!(camper.age(), 11);

        camper.set_age(18).unwrap();
        assert_eq!(camper.age(), 18);
    }

    #[test]
    fn test_camper_from_new() {
        let new = NewCamper::new("Peter Parker", 18).unwrap();
        let camper = Camper::from_new(42, &new);
        assert_eq!(camper.id(), 42);
        assert_eq!(camper.name(), "Peter Parker");
        assert_eq!(camper.age(), 18);
    }

    #[test]
    fn test_new_signup_time_bounds() {
        assert!(NewSignup::new(1, 1, 0).is_ok());
        assert!(NewSignup::new(1, 1, 23).is_ok());
        assert_eq!(
            NewSignup::new(1, 1, 24),
            Err(ValidationError::TimeOutOfRange(24))
        );
    }

    #[test]
    fn test_signup_from_new() {
        let new = NewSignup::new(3, 4, 12).unwrap();
        let signup = Signup::from_new(7, &new);
        assert_eq!(signup.id(), 7);
        assert_eq!(signup.camper_id(), 3);
        assert_eq!(signup.activity_id(), 4);
        assert_eq!(signup.time(), 12);
    }

    #[test]
    fn test_new_activity() {
        let activity = NewActivity::new("Canoeing", 1);
        assert_eq!(activity.name, "Canoeing");
        assert_eq!(activity.difficulty, 1);
    }
}
