use models_leads::LeadRecord;

use crate::error::ResponseExt;
use crate::{PostgrestClient, Result};

impl PostgrestClient {
    /// Inserts a lead row. The datastore treats the record as authoritative
    /// from this point on.
    #[tracing::instrument(skip(self, lead), fields(lead_id = %lead.id))]
    pub async fn create_lead(&self, lead: &LeadRecord) -> Result<()> {
        self.client
            .post(self.leads_url())
            .json(lead)
            .send()
            .await?
            .map_client_error()
            .await?;

        Ok(())
    }
}
