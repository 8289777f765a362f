use axum::{extract::State, Json};
use models_content::ContentBundle;

use crate::api::context::ApiContext;

/// The current content bundle, as the marketing pages render it.
#[utoipa::path(
        get,
        operation_id = "get_content",
        path = "/content",
        responses(
            (status = 200, body = ContentBundle),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_content(State(ctx): State<ApiContext>) -> Json<ContentBundle> {
    Json(ctx.content_service.get().await)
}
