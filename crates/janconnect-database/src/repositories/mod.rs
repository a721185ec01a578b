//! Repository implementations.

pub mod complaint;
pub mod notification;
pub mod profile;

pub use complaint::ComplaintRepository;
pub use notification::NotificationRepository;
pub use profile::ProfileRepository;
