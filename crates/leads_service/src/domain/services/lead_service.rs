//! The capture gateway: durable local write first, best-effort remote
//! replication second, notifications fired and forgotten. A guest-facing
//! capture succeeds or fails on their input alone, never on third-party
//! uptime.

use std::collections::HashMap;
use std::sync::Arc;

use models_leads::{InquiryDraft, LeadRecord, LeadSource, LeadStatus, MissingFields};
use uuid::Uuid;

use crate::domain::error::LeadError;
use crate::domain::ports::{LeadReplica, LeadStore, NotificationSender, StoredLead};

pub struct LeadServiceImpl<S, R, N> {
    store: S,
    replica: R,
    notifier: Arc<N>,
    require_villa_selection: bool,
}

impl<S, R, N> LeadServiceImpl<S, R, N>
where
    S: LeadStore,
    R: LeadReplica,
    N: NotificationSender,
{
    pub fn new(store: S, replica: R, notifier: N, require_villa_selection: bool) -> Self {
        Self {
            store,
            replica,
            notifier: Arc::new(notifier),
            require_villa_selection,
        }
    }

    /// Captures a submitted draft.
    ///
    /// The local append is the floor: it happens before the remote attempt
    /// is issued. A remote failure is logged and left to the sync worker; a
    /// local failure is logged and the record is still returned so the
    /// funnel completes. Notification dispatch is spawned, not awaited.
    #[tracing::instrument(skip(self, draft))]
    pub async fn capture(
        &self,
        draft: InquiryDraft,
        source: LeadSource,
    ) -> Result<LeadRecord, LeadError> {
        if self.require_villa_selection && !draft.has_villa() {
            return Err(LeadError::Validation(MissingFields {
                missing: vec!["selectedVillaId"],
            }));
        }

        let lead = LeadRecord::capture(draft, source)?;

        if let Err(e) = self.store.append(StoredLead::unsynced(lead.clone())).await {
            tracing::error!(error = %e, lead_id = %lead.id, "local lead write failed");
        }

        match self.replica.create(&lead).await {
            Ok(()) => {
                if let Err(e) = self.store.mark_synced(&lead.id).await {
                    tracing::warn!(error = %e, lead_id = %lead.id, "could not mark lead synced");
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    lead_id = %lead.id,
                    "remote lead create failed, sync worker will retry"
                );
            }
        }

        let notifier = Arc::clone(&self.notifier);
        let record = lead.clone();
        tokio::spawn(async move {
            notifier.notify(&record).await;
        });

        tracing::info!(lead_id = %lead.id, source = ?lead.source, "lead captured");
        Ok(lead)
    }

    /// The merged view the lead review table reads: remote rows win over
    /// local ones with the same id, everything sorted newest first.
    /// Recomputed on every call.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Vec<LeadRecord> {
        let local: Vec<LeadRecord> = match self.store.list().await {
            Ok(stored) => stored.into_iter().map(|s| s.lead).collect(),
            Err(e) => {
                tracing::error!(error = %e, "local lead read failed");
                Vec::new()
            }
        };

        let mut merged = match self.replica.list().await {
            Ok(remote) => merge_remote_wins(local, remote),
            Err(e) => {
                tracing::warn!(error = %e, "remote lead fetch failed, serving local cache");
                local
            }
        };

        merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        merged
    }

    /// Writes the status locally no matter what, then patches the remote
    /// copy best-effort.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, id: &Uuid, status: LeadStatus) {
        if let Err(e) = self.store.update_status(id, status).await {
            tracing::error!(error = %e, lead_id = %id, "local status update failed");
        }
        if let Err(e) = self.replica.update_status(id, status).await {
            tracing::warn!(error = %e, lead_id = %id, "remote status update failed");
        }
    }

    /// Deletes locally no matter what, then remotely best-effort.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &Uuid) {
        if let Err(e) = self.store.delete(id).await {
            tracing::error!(error = %e, lead_id = %id, "local lead delete failed");
        }
        if let Err(e) = self.replica.delete(id).await {
            tracing::warn!(error = %e, lead_id = %id, "remote lead delete failed");
        }
    }
}

/// Merge-by-id with remote-wins: the remote copy is authoritative for any id
/// both sides know; local-only records (unsynced, or remote outage survivors)
/// are kept.
fn merge_remote_wins(local: Vec<LeadRecord>, remote: Vec<LeadRecord>) -> Vec<LeadRecord> {
    let mut by_id: HashMap<Uuid, LeadRecord> = HashMap::new();
    for lead in local {
        by_id.insert(lead.id, lead);
    }
    for lead in remote {
        by_id.insert(lead.id, lead);
    }
    by_id.into_values().collect()
}

#[cfg(test)]
mod test;
