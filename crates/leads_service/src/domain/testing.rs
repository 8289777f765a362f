//! In-memory port fakes shared by the domain and worker tests.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use models_content::ContentBundle;
use models_leads::{LeadRecord, LeadStatus};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::ports::{
    ContentStore, LeadReplica, LeadStore, NotificationSender, StoredLead,
};

/// Lead store backed by a shared Vec so tests can inspect what was written.
#[derive(Clone, Default)]
pub struct MemLeadStore {
    pub rows: Arc<Mutex<Vec<StoredLead>>>,
}

impl LeadStore for MemLeadStore {
    type Error = Infallible;

    async fn append(&self, lead: StoredLead) -> Result<(), Infallible> {
        self.rows.lock().await.insert(0, lead);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredLead>, Infallible> {
        Ok(self.rows.lock().await.clone())
    }

    async fn update_status(&self, id: &Uuid, status: LeadStatus) -> Result<(), Infallible> {
        for row in self.rows.lock().await.iter_mut() {
            if row.lead.id == *id {
                row.lead.status = status;
            }
        }
        Ok(())
    }

    async fn mark_synced(&self, id: &Uuid) -> Result<(), Infallible> {
        for row in self.rows.lock().await.iter_mut() {
            if row.lead.id == *id {
                row.synced = true;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), Infallible> {
        self.rows.lock().await.retain(|row| row.lead.id != *id);
        Ok(())
    }
}

/// Replica fake; flip `fail` to simulate the datastore being unreachable or
/// answering non-2xx.
#[derive(Clone, Default)]
pub struct MemReplica {
    pub rows: Arc<Mutex<Vec<LeadRecord>>>,
    pub fail: Arc<AtomicBool>,
}

impl MemReplica {
    pub fn failing() -> Self {
        let replica = Self::default();
        replica.fail.store(true, Ordering::SeqCst);
        replica
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("simulated 500 from remote datastore");
        }
        Ok(())
    }
}

impl LeadReplica for MemReplica {
    async fn create(&self, lead: &LeadRecord) -> anyhow::Result<()> {
        self.check()?;
        self.rows.lock().await.push(lead.clone());
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<LeadRecord>> {
        self.check()?;
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(rows)
    }

    async fn update_status(&self, id: &Uuid, status: LeadStatus) -> anyhow::Result<()> {
        self.check()?;
        for row in self.rows.lock().await.iter_mut() {
            if row.id == *id {
                row.status = status;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<()> {
        self.check()?;
        self.rows.lock().await.retain(|row| row.id != *id);
        Ok(())
    }
}

/// Records which leads were dispatched.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub notified: Arc<Mutex<Vec<Uuid>>>,
}

impl NotificationSender for RecordingNotifier {
    async fn notify(&self, lead: &LeadRecord) {
        self.notified.lock().await.push(lead.id);
    }
}

/// Content store holding at most one saved bundle.
#[derive(Clone, Default)]
pub struct MemContentStore {
    pub saved: Arc<Mutex<Option<ContentBundle>>>,
}

impl ContentStore for MemContentStore {
    type Error = Infallible;

    async fn load(&self) -> Result<ContentBundle, Infallible> {
        Ok(self.saved.lock().await.clone().unwrap_or_default())
    }

    async fn store(&self, bundle: &ContentBundle) -> Result<(), Infallible> {
        *self.saved.lock().await = Some(bundle.clone());
        Ok(())
    }
}
