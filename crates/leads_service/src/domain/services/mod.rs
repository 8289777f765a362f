pub mod content_service;
pub mod lead_service;

pub use content_service::ContentServiceImpl;
pub use lead_service::LeadServiceImpl;
