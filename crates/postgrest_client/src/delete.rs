use uuid::Uuid;

use crate::error::ResponseExt;
use crate::{PostgrestClient, Result};

impl PostgrestClient {
    /// Deletes a lead row.
    #[tracing::instrument(skip(self))]
    pub async fn delete_lead(&self, id: &Uuid) -> Result<()> {
        self.client
            .delete(self.lead_row_url(id))
            .send()
            .await?
            .map_client_error()
            .await?;

        Ok(())
    }
}
