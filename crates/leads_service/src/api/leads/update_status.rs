use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models_leads::LeadStatus;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::context::ApiContext;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: LeadStatus,
}

/// Moves a lead to any status. Local state is the floor; a remote patch
/// failure is logged, not surfaced.
#[utoipa::path(
        patch,
        operation_id = "update_lead_status",
        path = "/leads/{id}/status",
        params(("id" = Uuid, Path, description = "lead id")),
        request_body = UpdateStatusRequest,
        responses(
            (status = 204),
            (status = 401, description = "missing or invalid operator key"),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn update_lead_status(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> StatusCode {
    ctx.lead_service.update_status(&id, req.status).await;
    StatusCode::NO_CONTENT
}
