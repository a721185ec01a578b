//! # janconnect-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the JanConnect+ entities. The repositories also
//! implement the capability traits from `janconnect-notify`, wiring the
//! dispatcher to real persistence.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
