//! `camphub` - REST backend for camp campers, activities and signups
//!
//! This library provides the validated record types, the `SQLite` storage
//! layer and the axum HTTP API behind the `camphub` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod seed;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use models::{Activity, Camper, NewActivity, NewCamper, NewSignup, Signup};
pub use storage::{Storage, StorageStats};
pub use validation::ValidationError;
