use models_leads::LeadRecord;

use crate::error::ResponseExt;
use crate::{PostgrestClient, PostgrestError, Result};

impl PostgrestClient {
    /// Fetches every lead row, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn list_leads(&self) -> Result<Vec<LeadRecord>> {
        let res = self
            .client
            .get(format!("{}?select=*&order=timestamp.desc", self.leads_url()))
            .send()
            .await?
            .map_client_error()
            .await?;

        res.json().await.map_err(|e| PostgrestError::DeserializationFailed {
            details: e.to_string(),
        })
    }
}
