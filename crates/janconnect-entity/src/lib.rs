//! # janconnect-entity
//!
//! Domain entity models for the JanConnect+ grievance portal. Every struct
//! in this crate represents a database table row or a domain value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod complaint;
pub mod notification;
pub mod user;
