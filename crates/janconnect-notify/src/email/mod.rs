//! Email delivery channel.

pub mod channel;
pub mod resend;
pub mod template;

pub use channel::{EmailChannel, EmailTransport, SendOutcome};
pub use resend::ResendMailer;
