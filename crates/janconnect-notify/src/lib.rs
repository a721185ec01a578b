//! # janconnect-notify
//!
//! Complaint lifecycle notification subsystem. Reacts to a status change on
//! a complaint by composing role-appropriate messages, resolving the
//! audience (owning citizen plus all administrators), recording one in-app
//! notification row per recipient, and attempting an email to the citizen
//! when the channel is available.
//!
//! The dispatcher consumes its persistence and transport dependencies
//! through the capability traits in [`store`] and [`email`], so it can be
//! exercised without a database.

pub mod audience;
pub mod composer;
pub mod dispatcher;
pub mod email;
pub mod store;

pub use audience::{Audience, AudienceResolver};
pub use composer::{Message, RecipientRole, compose};
pub use dispatcher::{DispatchReport, NotificationDispatcher};
pub use email::{EmailChannel, EmailTransport, SendOutcome};
pub use store::{ComplaintStore, NotificationStore, ProfileStore};
