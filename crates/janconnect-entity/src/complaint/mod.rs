//! Complaint domain entities.

pub mod category;
pub mod model;
pub mod priority;
pub mod reference;
pub mod status;

pub use category::ComplaintCategory;
pub use model::{Complaint, NewComplaint};
pub use priority::ComplaintPriority;
pub use reference::ReferenceCode;
pub use status::ComplaintStatus;
