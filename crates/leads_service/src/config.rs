use std::path::PathBuf;

use anyhow::Context;

pub use crate::environment::Environment;

pub struct Config {
    /// port number of service
    pub port: u16,
    /// The environment we are in
    pub environment: Environment,
    /// Directory holding the durable local documents (`leads.json`,
    /// `content.json`)
    pub data_dir: PathBuf,
    /// Shared secret expected in the `x-operator-access-key` header on
    /// operator routes
    pub operator_access_key: String,
    /// Base URL of the remote lead datastore; unset means local-only mode
    pub datastore_url: Option<String>,
    /// API key for the remote lead datastore
    pub datastore_api_key: Option<String>,
    /// Email provider service id; unset disables notification dispatch
    pub emailjs_service_id: Option<String>,
    /// Email provider public key
    pub emailjs_public_key: Option<String>,
    /// Template for the guest acknowledgment email
    pub emailjs_guest_template: String,
    /// Template for the operator alert email
    pub emailjs_operator_template: String,
    /// Where operator alerts are addressed
    pub operator_email: String,
    /// Generative-text backend key; unset means the concierge only serves
    /// canned replies
    pub concierge_api_key: Option<String>,
    /// Generative-text backend base URL
    pub concierge_api_base: String,
    /// Generative-text model id
    pub concierge_model: String,
    /// Seconds between outbox sweeps retrying unsynced leads
    pub sync_interval_secs: u64,
    /// Whether the inquiry wizard's villa step may be skipped
    pub require_villa_selection: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: u16 = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse()
            .context("PORT must be a number")?;

        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or("data".to_string()));

        let operator_access_key = std::env::var("OPERATOR_ACCESS_KEY")
            .context("OPERATOR_ACCESS_KEY must be provided")?;

        let sync_interval_secs: u64 = std::env::var("SYNC_INTERVAL_SECONDS")
            .unwrap_or("60".to_string())
            .parse()
            .context("SYNC_INTERVAL_SECONDS must be a number")?;

        let require_villa_selection: bool = std::env::var("REQUIRE_VILLA_SELECTION")
            .unwrap_or("false".to_string())
            .parse()
            .context("REQUIRE_VILLA_SELECTION must be true or false")?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            port,
            environment,
            data_dir,
            operator_access_key,
            datastore_url: std::env::var("LEADS_DATASTORE_URL").ok(),
            datastore_api_key: std::env::var("LEADS_DATASTORE_API_KEY").ok(),
            emailjs_service_id: std::env::var("EMAILJS_SERVICE_ID").ok(),
            emailjs_public_key: std::env::var("EMAILJS_PUBLIC_KEY").ok(),
            emailjs_guest_template: std::env::var("EMAILJS_GUEST_TEMPLATE")
                .unwrap_or("template_guest_welcome".to_string()),
            emailjs_operator_template: std::env::var("EMAILJS_OPERATOR_TEMPLATE")
                .unwrap_or("template_admin_lead".to_string()),
            operator_email: std::env::var("OPERATOR_EMAIL")
                .unwrap_or("info@maldives-serenitytravels.com".to_string()),
            concierge_api_key: std::env::var("CONCIERGE_API_KEY").ok(),
            concierge_api_base: std::env::var("CONCIERGE_API_BASE")
                .unwrap_or("https://api.anthropic.com".to_string()),
            concierge_model: std::env::var("CONCIERGE_MODEL")
                .unwrap_or("claude-3-5-haiku-latest".to_string()),
            sync_interval_secs,
            require_villa_selection,
        })
    }

}
