//! Request and response bodies for the REST API.
//!
//! Each endpoint has its own response shape, so related records are embedded
//! one level deep and never loop back to their parent.

#![allow(missing_docs)]

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{Activity, Camper, Signup};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /campers` and `PATCH /campers/{id}`.
///
/// A falsy `name` (`null`, `false`, `0`, `""`, `[]`, `{}`) reads as an empty
/// string, which name validation then rejects. The key itself is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperRequest {
    #[serde(deserialize_with = "falsy_as_empty")]
    pub name: String,
    pub age: i64,
}

fn falsy_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(name) => Ok(name),
        Value::Null | Value::Bool(false) => Ok(String::new()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(String::new()),
        Value::Array(items) if items.is_empty() => Ok(String::new()),
        Value::Object(fields) if fields.is_empty() => Ok(String::new()),
        other => Err(de::Error::invalid_type(unexpected(&other), &"a string")),
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(n) => n
            .as_i64()
            .map_or(de::Unexpected::Other("number"), de::Unexpected::Signed),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
        Value::Null | Value::String(_) => de::Unexpected::Other("value"),
    }
}

/// Body of `POST /signups`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSignupRequest {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

// =============================================================================
// Responses
// =============================================================================

/// A camper without its signups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<&Camper> for CamperSummary {
    fn from(camper: &Camper) -> Self {
        Self {
            id: camper.id(),
            name: camper.name().to_string(),
            age: camper.age(),
        }
    }
}

/// An activity without its signups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            difficulty: activity.difficulty,
        }
    }
}

/// A signup as listed under its camper: the activity is embedded, the camper
/// is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperSignup {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivitySummary,
}

impl From<&(Signup, Activity)> for CamperSignup {
    fn from((signup, activity): &(Signup, Activity)) -> Self {
        Self {
            id: signup.id(),
            time: signup.time(),
            camper_id: signup.camper_id(),
            activity_id: signup.activity_id(),
            activity: activity.into(),
        }
    }
}

/// A camper with its signups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperDetail {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignup>,
}

impl CamperDetail {
    /// Build from a camper and its signups paired with their activities.
    #[must_use]
    pub fn new(camper: &Camper, signups: &[(Signup, Activity)]) -> Self {
        Self {
            id: camper.id(),
            name: camper.name().to_string(),
            age: camper.age(),
            signups: signups.iter().map(CamperSignup::from).collect(),
        }
    }
}

/// A signup with both its camper and its activity embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupDetail {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperSummary,
    pub activity: ActivitySummary,
}

impl SignupDetail {
    #[must_use]
    pub fn new(signup: &Signup, camper: &Camper, activity: &Activity) -> Self {
        Self {
            id: signup.id(),
            time: signup.time(),
            camper_id: signup.camper_id(),
            activity_id: signup.activity_id(),
            camper: camper.into(),
            activity: activity.into(),
        }
    }
}
