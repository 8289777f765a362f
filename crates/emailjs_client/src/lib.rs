//! Client for the templated transactional-email provider. One POST per
//! message; the template lives provider-side and is filled from a flat
//! parameter map.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;

const DEFAULT_API_BASE: &str = "https://api.emailjs.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Flat `template_params` map sent with each dispatch.
pub type TemplateParams = HashMap<&'static str, String>;

#[derive(Clone, Debug)]
pub struct EmailjsClient {
    api_base: String,
    service_id: String,
    public_key: String,
    client: reqwest::Client,
}

impl EmailjsClient {
    pub fn new(service_id: String, public_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            service_id,
            public_key,
            client,
        }
    }

    /// Overrides the provider endpoint, for self-hosted relays.
    pub fn api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Dispatches one templated email.
    #[tracing::instrument(skip(self, params))]
    pub async fn send(&self, template_id: &str, params: TemplateParams) -> Result<()> {
        let body = send_payload(&self.service_id, template_id, &self.public_key, &params);

        let res = self
            .client
            .post(format!("{}/api/v1.0/email/send", self.api_base))
            .json(&body)
            .send()
            .await?;

        let status_code = res.status();

        if !status_code.is_success() {
            let body: String = res.text().await.unwrap_or_default();
            tracing::error!(
                body=%body,
                status=%status_code,
                "unexpected response from email provider"
            );
            return Err(anyhow::anyhow!(body));
        }

        Ok(())
    }
}

fn send_payload(
    service_id: &str,
    template_id: &str,
    public_key: &str,
    params: &TemplateParams,
) -> serde_json::Value {
    serde_json::json!({
        "service_id": service_id,
        "template_id": template_id,
        "user_id": public_key,
        "template_params": params,
    })
}
