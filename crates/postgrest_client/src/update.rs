use models_leads::LeadStatus;
use uuid::Uuid;

use crate::error::ResponseExt;
use crate::{PostgrestClient, Result};

/// Body of a status patch, the only in-place edit operators can make.
pub(crate) fn status_patch(status: LeadStatus) -> serde_json::Value {
    serde_json::json!({ "status": status })
}

impl PostgrestClient {
    /// Patches a lead row's status.
    #[tracing::instrument(skip(self))]
    pub async fn update_lead_status(&self, id: &Uuid, status: LeadStatus) -> Result<()> {
        self.client
            .patch(self.lead_row_url(id))
            .json(&status_patch(status))
            .send()
            .await?
            .map_client_error()
            .await?;

        Ok(())
    }
}
