//! Outbox sweeper: leads whose remote create never went through stay in the
//! local document with `synced == false`; this worker retries them on an
//! interval until the datastore accepts them.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::domain::ports::{LeadReplica, LeadStore};

pub struct ReplicaSyncWorker<S, R> {
    store: S,
    replica: R,
    interval: Duration,
}

impl<S, R> ReplicaSyncWorker<S, R>
where
    S: LeadStore,
    R: LeadReplica,
{
    pub fn new(store: S, replica: R, interval: Duration) -> Self {
        Self {
            store,
            replica,
            interval,
        }
    }

    pub async fn poll(&self) {
        loop {
            sleep(self.interval).await;
            self.sweep_once().await;
        }
    }

    /// One pass over the outbox. Returns how many records were synced.
    pub async fn sweep_once(&self) -> usize {
        let stored = match self.store.list().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "outbox sweep could not read local leads");
                return 0;
            }
        };

        let unsynced: Vec<_> = stored.into_iter().filter(|s| !s.synced).collect();
        if unsynced.is_empty() {
            return 0;
        }

        info!(count = unsynced.len(), "retrying unsynced leads against remote datastore");

        let mut synced = 0usize;
        for stored in unsynced {
            match self.replica.create(&stored.lead).await {
                Ok(()) => match self.store.mark_synced(&stored.lead.id).await {
                    Ok(()) => synced += 1,
                    Err(e) => {
                        warn!(error = %e, lead_id = %stored.lead.id, "could not mark lead synced");
                    }
                },
                Err(e) => {
                    warn!(error = %e, lead_id = %stored.lead.id, "remote retry failed");
                }
            }
        }

        info!(synced, "outbox sweep finished");
        synced
    }
}
