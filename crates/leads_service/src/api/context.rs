use std::sync::Arc;

use axum::extract::FromRef;

use leads_service::domain::services::{ContentServiceImpl, LeadServiceImpl};
use leads_service::outbound::{ConciergeClient, EmailNotifier, JsonFileStore, PostgrestReplica};

use crate::config::Config;
use crate::middleware::OperatorAccessKey;

/// The concrete gateway wiring this binary runs with.
pub type LeadService = LeadServiceImpl<JsonFileStore, PostgrestReplica, EmailNotifier>;
pub type ContentService = ContentServiceImpl<JsonFileStore>;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub config: Arc<Config>,
    pub lead_service: Arc<LeadService>,
    pub content_service: Arc<ContentService>,
    pub concierge: Arc<ConciergeClient>,
    pub operator_key: OperatorAccessKey,
}
