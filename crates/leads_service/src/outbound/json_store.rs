//! The durable local cache: two JSON documents under the data directory,
//! `leads.json` (newest-first array of stored leads) and `content.json`
//! (the content bundle). Whole-document reads and writes; an in-process
//! mutex serializes writers. Cross-process writers are last-writer-wins,
//! an accepted limitation of the blob-store model.

use std::path::PathBuf;
use std::sync::Arc;

use models_content::ContentBundle;
use models_leads::LeadStatus;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::ports::{ContentStore, LeadStore, StoredLead};

const LEADS_DOC: &str = "leads.json";
const CONTENT_DOC: &str = "content.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct JsonFileStore {
    inner: Arc<Inner>,
}

struct Inner {
    data_dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                data_dir: data_dir.into(),
                lock: Mutex::new(()),
            }),
        }
    }

    fn doc_path(&self, doc: &str) -> PathBuf {
        self.inner.data_dir.join(doc)
    }

    async fn read_doc<T: DeserializeOwned>(&self, doc: &str) -> Result<Option<T>, StoreError> {
        let path = self.doc_path(doc);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn write_doc<T: Serialize>(&self, doc: &str, value: &T) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.inner.data_dir).await?;
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(self.doc_path(doc), json).await?;
        Ok(())
    }

    async fn read_leads(&self) -> Result<Vec<StoredLead>, StoreError> {
        Ok(self.read_doc(LEADS_DOC).await?.unwrap_or_default())
    }

    /// Read-modify-write under the store lock.
    async fn mutate_leads<F>(&self, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vec<StoredLead>),
    {
        let _guard = self.inner.lock.lock().await;
        let mut leads = self.read_leads().await?;
        mutate(&mut leads);
        self.write_doc(LEADS_DOC, &leads).await
    }
}

impl LeadStore for JsonFileStore {
    type Error = StoreError;

    async fn append(&self, lead: StoredLead) -> Result<(), StoreError> {
        self.mutate_leads(|leads| leads.insert(0, lead)).await
    }

    async fn list(&self) -> Result<Vec<StoredLead>, StoreError> {
        self.read_leads().await
    }

    async fn update_status(&self, id: &Uuid, status: LeadStatus) -> Result<(), StoreError> {
        let id = *id;
        self.mutate_leads(|leads| {
            for stored in leads.iter_mut() {
                if stored.lead.id == id {
                    stored.lead.status = status;
                }
            }
        })
        .await
    }

    async fn mark_synced(&self, id: &Uuid) -> Result<(), StoreError> {
        let id = *id;
        self.mutate_leads(|leads| {
            for stored in leads.iter_mut() {
                if stored.lead.id == id {
                    stored.synced = true;
                }
            }
        })
        .await
    }

    async fn delete(&self, id: &Uuid) -> Result<(), StoreError> {
        let id = *id;
        self.mutate_leads(|leads| leads.retain(|stored| stored.lead.id != id))
            .await
    }
}

impl ContentStore for JsonFileStore {
    type Error = StoreError;

    async fn load(&self) -> Result<ContentBundle, StoreError> {
        Ok(self.read_doc(CONTENT_DOC).await?.unwrap_or_default())
    }

    async fn store(&self, bundle: &ContentBundle) -> Result<(), StoreError> {
        let _guard = self.inner.lock.lock().await;
        self.write_doc(CONTENT_DOC, bundle).await
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("data_dir", &self.inner.data_dir)
            .finish()
    }
}

#[cfg(test)]
mod test;
