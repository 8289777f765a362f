use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use leads_service::domain::services::{ContentServiceImpl, LeadServiceImpl};
use leads_service::outbound::{ConciergeClient, EmailNotifier, JsonFileStore, PostgrestReplica};
use leads_service::sync_worker::ReplicaSyncWorker;
use postgrest_client::PostgrestClient;
use tracing_subscriber::EnvFilter;

use crate::api::context::ApiContext;
use crate::config::Config;
use crate::middleware::OperatorAccessKey;

mod api;
mod config;
mod environment;
mod middleware;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let store = JsonFileStore::new(&config.data_dir);
    tracing::info!(data_dir = %config.data_dir.display(), "initialized local document store");

    let replica = match (&config.datastore_url, &config.datastore_api_key) {
        (Some(url), Some(key)) => {
            tracing::info!(datastore_url = %url, "initialized remote datastore client");
            PostgrestReplica::new(PostgrestClient::new(url.clone(), key.clone()))
        }
        _ => {
            tracing::warn!("remote datastore not configured, running local-only");
            PostgrestReplica::disabled()
        }
    };

    let notifier = match (&config.emailjs_service_id, &config.emailjs_public_key) {
        (Some(service_id), Some(public_key)) => {
            tracing::info!(service_id = %service_id, "initialized email provider client");
            EmailNotifier::new(
                emailjs_client::EmailjsClient::new(service_id.clone(), public_key.clone()),
                config.emailjs_guest_template.clone(),
                config.emailjs_operator_template.clone(),
                config.operator_email.clone(),
            )
        }
        _ => {
            tracing::warn!("email provider not configured, notifications disabled");
            EmailNotifier::disabled(config.operator_email.clone())
        }
    };

    let concierge = match &config.concierge_api_key {
        Some(api_key) => {
            tracing::info!(model = %config.concierge_model, "initialized concierge backend");
            ConciergeClient::new(
                config.concierge_api_base.clone(),
                api_key.clone(),
                config.concierge_model.clone(),
            )
        }
        None => {
            tracing::warn!("concierge backend not configured, serving canned replies");
            ConciergeClient::disabled()
        }
    };

    let worker = ReplicaSyncWorker::new(
        store.clone(),
        replica.clone(),
        Duration::from_secs(config.sync_interval_secs),
    );
    tokio::spawn(async move {
        worker.poll().await;
    });

    let lead_service = Arc::new(LeadServiceImpl::new(
        store.clone(),
        replica,
        notifier,
        config.require_villa_selection,
    ));
    let content_service = Arc::new(ContentServiceImpl::new(store));
    let operator_key = OperatorAccessKey::new(config.operator_access_key.clone());

    api::setup_and_serve(ApiContext {
        config: Arc::new(config),
        lead_service,
        content_service,
        concierge: Arc::new(concierge),
        operator_key,
    })
    .await?;
    Ok(())
}
