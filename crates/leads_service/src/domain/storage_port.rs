//! Storage port - defines the interface for the durable local cache

use models_content::ContentBundle;
use models_leads::{LeadRecord, LeadStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A lead as the local durable cache holds it: the record plus whether the
/// remote replica has acknowledged it. Unsynced records are retried by the
/// replica sync worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLead {
    #[serde(flatten)]
    pub lead: LeadRecord,
    #[serde(default)]
    pub synced: bool,
}

impl StoredLead {
    pub fn unsynced(lead: LeadRecord) -> Self {
        Self {
            lead,
            synced: false,
        }
    }
}

/// Port for the durable local lead cache. Every write here is the floor
/// guarantee of the capture pipeline: it happens before any remote attempt.
pub trait LeadStore: Send + Sync + 'static {
    /// Error type for storage operations
    type Error: Send + Sync + std::error::Error;

    fn append(
        &self,
        lead: StoredLead,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;

    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<StoredLead>, Self::Error>> + Send;

    fn update_status(
        &self,
        id: &Uuid,
        status: LeadStatus,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;

    fn mark_synced(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;

    fn delete(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}

/// Port for the durable local content document.
pub trait ContentStore: Send + Sync + 'static {
    type Error: Send + Sync + std::error::Error;

    /// Loads the current bundle; implementations return the seed bundle when
    /// nothing has been saved yet.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<ContentBundle, Self::Error>> + Send;

    fn store(
        &self,
        bundle: &ContentBundle,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}
