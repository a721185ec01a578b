//! # janconnect-service
//!
//! Application service layer for JanConnect+. Services orchestrate
//! repositories and the notification dispatcher to implement the portal's
//! use cases. All dependencies are provided at construction time via
//! `Arc` references.

pub mod complaint;
pub mod context;
pub mod notification;

pub use complaint::ComplaintService;
pub use context::RequestContext;
pub use notification::NotificationFeedService;
