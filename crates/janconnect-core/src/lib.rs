//! # janconnect-core
//!
//! Core crate for the JanConnect+ grievance portal backend. Contains
//! configuration schemas, typed identifiers, the unified error system,
//! and tracing initialization.
//!
//! This crate has **no** internal dependencies on other JanConnect crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
