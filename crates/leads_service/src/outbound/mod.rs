//! Outbound adapters - the durable local store, the remote replica, email
//! dispatch and the concierge backend

pub mod concierge;
pub mod json_store;
pub mod notify;
pub mod replica;

pub use concierge::ConciergeClient;
pub use json_store::JsonFileStore;
pub use notify::EmailNotifier;
pub use replica::PostgrestReplica;
