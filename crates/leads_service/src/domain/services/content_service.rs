//! Operator-facing content document operations: read, versioned wholesale
//! save, reset to the shipped defaults.

use anyhow::anyhow;
use models_content::ContentBundle;

use crate::domain::error::ContentError;
use crate::domain::ports::ContentStore;

pub struct ContentServiceImpl<C> {
    store: C,
}

impl<C> ContentServiceImpl<C>
where
    C: ContentStore,
{
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// The current bundle. A corrupt or unreadable document degrades to the
    /// seed content so the marketing pages always have something to render.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self) -> ContentBundle {
        match self.store.load().await {
            Ok(bundle) => bundle,
            Err(e) => {
                tracing::error!(error = %e, "content load failed, serving seed content");
                ContentBundle::default()
            }
        }
    }

    /// Replaces the document wholesale. The incoming bundle must carry the
    /// revision it was edited from; a stale revision is rejected so two
    /// operators cannot silently overwrite each other.
    #[tracing::instrument(skip(self, bundle), fields(revision = bundle.revision))]
    pub async fn save(&self, bundle: ContentBundle) -> Result<ContentBundle, ContentError> {
        let current = self.get().await;
        if bundle.revision != current.revision {
            return Err(ContentError::RevisionMismatch {
                given: bundle.revision,
                current: current.revision,
            });
        }

        let saved = ContentBundle {
            revision: current.revision + 1,
            ..bundle
        };
        self.store
            .store(&saved)
            .await
            .map_err(|e| ContentError::Internal(anyhow!(e.to_string())))?;

        tracing::info!(revision = saved.revision, "content saved");
        Ok(saved)
    }

    /// Restores the shipped defaults, advancing the revision so in-flight
    /// edits against the old document are rejected.
    #[tracing::instrument(skip(self))]
    pub async fn reset(&self) -> Result<ContentBundle, ContentError> {
        let current = self.get().await;
        let bundle = ContentBundle {
            revision: current.revision + 1,
            ..ContentBundle::default()
        };
        self.store
            .store(&bundle)
            .await
            .map_err(|e| ContentError::Internal(anyhow!(e.to_string())))?;

        tracing::info!(revision = bundle.revision, "content reset to defaults");
        Ok(bundle)
    }
}
