//! Client for the hosted lead datastore, which speaks PostgREST conventions:
//! a `leads` table exposed as `/rest/v1/leads` with `id=eq.<id>` row filters,
//! authenticated by an `apikey` header plus a bearer credential.

use std::time::Duration;

pub mod create;
pub mod delete;
pub mod error;
pub mod list;
pub mod update;

pub use error::PostgrestError;

pub type Result<T> = std::result::Result<T, PostgrestError>;

/// Requests time out after this long; the datastore is best-effort and must
/// never stall the funnel.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct PostgrestClient {
    base_url: String,
    client: reqwest::Client,
}

impl PostgrestClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("apikey", api_key.parse().unwrap());
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {api_key}").parse().unwrap(),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub(crate) fn leads_url(&self) -> String {
        format!("{}/rest/v1/leads", self.base_url)
    }

    pub(crate) fn lead_row_url(&self, id: &uuid::Uuid) -> String {
        format!("{}?id=eq.{}", self.leads_url(), id)
    }
}

#[cfg(test)]
mod test;
