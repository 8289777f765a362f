use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models_content::ContentBundle;

use crate::api::{context::ApiContext, ErrorResponse};
use crate::middleware::operator_access::ValidOperatorKey;

/// Restores the shipped default content.
#[utoipa::path(
        post,
        operation_id = "reset_content",
        path = "/content/reset",
        responses(
            (status = 200, body = ContentBundle),
            (status = 401, description = "missing or invalid operator key"),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn reset_content(
    State(ctx): State<ApiContext>,
    _valid_operator_key: ValidOperatorKey,
) -> Result<Response, Response> {
    let bundle = ctx.content_service.reset().await.map_err(|e| {
        tracing::error!(error = %e, "content reset failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: e.to_string(),
            }),
        )
            .into_response()
    })?;

    Ok(Json(bundle).into_response())
}
