use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::context::ApiContext;

/// Removes a lead locally and, best-effort, remotely.
#[utoipa::path(
        delete,
        operation_id = "delete_lead",
        path = "/leads/{id}",
        params(("id" = Uuid, Path, description = "lead id")),
        responses(
            (status = 204),
            (status = 401, description = "missing or invalid operator key"),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn delete_lead(State(ctx): State<ApiContext>, Path(id): Path<Uuid>) -> StatusCode {
    ctx.lead_service.delete(&id).await;
    StatusCode::NO_CONTENT
}
