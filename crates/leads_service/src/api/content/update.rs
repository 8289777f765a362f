use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models_content::ContentBundle;

use leads_service::domain::error::ContentError;

use crate::api::{context::ApiContext, ErrorResponse};
use crate::middleware::operator_access::ValidOperatorKey;

/// Replaces the content document wholesale. The bundle must carry the
/// revision it was edited from; a stale revision gets a 409 instead of
/// silently discarding another operator's save.
#[utoipa::path(
        put,
        operation_id = "update_content",
        path = "/content",
        request_body = ContentBundle,
        responses(
            (status = 200, body = ContentBundle),
            (status = 409, description = "revision conflict", body = ErrorResponse),
            (status = 401, description = "missing or invalid operator key"),
        )
    )]
#[tracing::instrument(skip(ctx, bundle))]
pub async fn update_content(
    State(ctx): State<ApiContext>,
    _valid_operator_key: ValidOperatorKey,
    Json(bundle): Json<ContentBundle>,
) -> Result<Response, Response> {
    let saved = ctx.content_service.save(bundle).await.map_err(|e| {
        let status = match &e {
            ContentError::RevisionMismatch { .. } => StatusCode::CONFLICT,
            ContentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error = %e, "content save failed");
        (
            status,
            Json(ErrorResponse {
                message: e.to_string(),
            }),
        )
            .into_response()
    })?;

    Ok(Json(saved).into_response())
}
