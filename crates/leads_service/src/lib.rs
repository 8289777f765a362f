//! Leads service library following hexagonal architecture pattern
//!
//! Domain logic (funnel state machines, the capture gateway), outbound
//! adapters and the replica sync worker; composed into the service binary
//! by `main.rs`.

pub mod domain;
pub mod outbound;
pub mod sync_worker;
