//! Single-turn concierge assistant backed by a generative-text API. The
//! transcript never sees an error: any backend problem degrades to a canned
//! reply pointing the guest at a human.

use std::time::Duration;

use serde::Deserialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_TOKENS: u32 = 512;

/// Shown when the backend call fails outright.
pub const FALLBACK_REPLY: &str = "Something went wrong. Please reach out to our team directly \
                                  via WhatsApp for immediate assistance.";

/// Shown when the backend answers but with no usable text.
const EMPTY_REPLY: &str = "I apologize, but I am having trouble connecting. Please try again \
                           or contact us via WhatsApp.";

const SYSTEM_PROMPT: &str = "You are a luxury travel assistant for Maldives Serenity Travels, \
an official partner of Siyam World Maldives. Siyam World is a 24-hour premium WOW! \
All-Inclusive resort in Noonu Atoll. Key features: 54 hectares, 16 villa categories, \
overwater slides, 18 restaurants and bars, the Maldives' first go-kart track, and a horse \
ranch. Tone: elegant, helpful, exclusive. Promote Maldives Serenity Travels as the best way \
to book.";

struct Backend {
    api_base: String,
    model: String,
    client: reqwest::Client,
}

pub struct ConciergeClient {
    backend: Option<Backend>,
}

impl ConciergeClient {
    pub fn new(api_base: String, api_key: String, model: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("x-api-key", api_key.parse().unwrap());
        headers.insert("anthropic-version", "2023-06-01".parse().unwrap());

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self {
            backend: Some(Backend {
                api_base: api_base.trim_end_matches('/').to_string(),
                model,
                client,
            }),
        }
    }

    /// A concierge with no backend; every question gets the canned reply.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Answers one guest message. Infallible by construction: failures are
    /// logged and replaced with the canned reply.
    #[tracing::instrument(skip(self, message))]
    pub async fn ask(&self, message: &str) -> String {
        match self.try_ask(message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "concierge backend failed, serving canned reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn try_ask(&self, message: &str) -> anyhow::Result<String> {
        let Some(backend) = &self.backend else {
            anyhow::bail!("concierge backend not configured");
        };

        let body = serde_json::json!({
            "model": backend.model,
            "max_tokens": MAX_TOKENS,
            "system": SYSTEM_PROMPT,
            "messages": [{ "role": "user", "content": message }],
        });

        let res = backend
            .client
            .post(format!("{}/v1/messages", backend.api_base))
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            anyhow::bail!("backend returned {status}: {body}");
        }

        let reply: MessageResponse = res.json().await?;
        let text = reply
            .content
            .into_iter()
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| EMPTY_REPLY.to_string());

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_backend_serves_canned_reply() {
        let concierge = ConciergeClient::disabled();
        assert_eq!(concierge.ask("Do you have go-karts?").await, FALLBACK_REPLY);
    }

    #[test]
    fn test_response_parsing_takes_first_text_block() {
        let raw = serde_json::json!({
            "content": [
                { "type": "text", "text": "The go-kart track is beside the ranch." },
            ],
        });
        let parsed: MessageResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(
            parsed.content[0].text.as_deref(),
            Some("The go-kart track is beside the ranch.")
        );
    }
}
