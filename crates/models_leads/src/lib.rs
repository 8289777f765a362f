//! Shared lead models consumed by the leads service, its stores, and the
//! external service clients.

pub mod draft;
pub mod lead;
pub mod status;

pub use draft::{InquiryDraft, MissingFields};
pub use lead::{LeadRecord, LeadSource};
pub use status::LeadStatus;
