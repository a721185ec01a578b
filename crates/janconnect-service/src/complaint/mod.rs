//! Complaint lifecycle services.

pub mod service;

pub use service::ComplaintService;
