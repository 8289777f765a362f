//! Remote replica adapter over the PostgREST datastore client. Deployments
//! without datastore credentials run local-only: every replica call reports
//! failure, which the gateway already treats as routine.

use models_leads::{LeadRecord, LeadStatus};
use postgrest_client::PostgrestClient;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::ports::LeadReplica;

#[derive(Debug, Error)]
#[error("remote datastore is not configured")]
pub struct ReplicaDisabled;

#[derive(Clone)]
pub struct PostgrestReplica {
    client: Option<PostgrestClient>,
}

impl PostgrestReplica {
    pub fn new(client: PostgrestClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    fn client(&self) -> Result<&PostgrestClient, ReplicaDisabled> {
        self.client.as_ref().ok_or(ReplicaDisabled)
    }
}

impl LeadReplica for PostgrestReplica {
    async fn create(&self, lead: &LeadRecord) -> anyhow::Result<()> {
        self.client()?.create_lead(lead).await?;
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<LeadRecord>> {
        Ok(self.client()?.list_leads().await?)
    }

    async fn update_status(&self, id: &Uuid, status: LeadStatus) -> anyhow::Result<()> {
        self.client()?.update_lead_status(id, status).await?;
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<()> {
        self.client()?.delete_lead(id).await?;
        Ok(())
    }
}
