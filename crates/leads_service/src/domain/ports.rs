//! Ports module - the outbound interfaces the capture gateway depends on

use models_leads::{LeadRecord, LeadStatus};
use uuid::Uuid;

pub use crate::domain::storage_port::{ContentStore, LeadStore, StoredLead};

/// The remote replica of the lead table. Every operation is best-effort from
/// the gateway's point of view; errors are logged by the caller and never
/// surfaced to a guest.
pub trait LeadReplica: Send + Sync + 'static {
    fn create(
        &self,
        lead: &LeadRecord,
    ) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;

    /// Fetches the remote rows, newest first.
    fn list(&self) -> impl std::future::Future<Output = anyhow::Result<Vec<LeadRecord>>> + Send;

    fn update_status(
        &self,
        id: &Uuid,
        status: LeadStatus,
    ) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;

    fn delete(&self, id: &Uuid) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

/// Fire-and-forget notification dispatch after a successful capture.
/// Implementations log their own failures; nothing propagates.
pub trait NotificationSender: Send + Sync + 'static {
    fn notify(&self, lead: &LeadRecord) -> impl std::future::Future<Output = ()> + Send;
}
