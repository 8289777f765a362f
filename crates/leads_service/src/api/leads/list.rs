use axum::{extract::State, Json};
use models_leads::LeadRecord;

use crate::api::context::ApiContext;

/// The merged lead view: remote rows win over local rows with the same id,
/// newest first. When the datastore is unreachable this silently serves the
/// local cache.
#[utoipa::path(
        get,
        operation_id = "list_leads",
        path = "/leads",
        responses(
            (status = 200, body = [LeadRecord]),
            (status = 401, description = "missing or invalid operator key"),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn list_leads(State(ctx): State<ApiContext>) -> Json<Vec<LeadRecord>> {
    Json(ctx.lead_service.list().await)
}
