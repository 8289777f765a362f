use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::context::ApiContext;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    pub reply: String,
}

/// One question, one answer. Always 200: a failing backend degrades to the
/// canned apology in the transcript, never to an error the chat has to
/// handle.
#[utoipa::path(
        post,
        operation_id = "ask_concierge",
        path = "/concierge",
        request_body = AskRequest,
        responses(
            (status = 200, body = AskResponse),
        )
    )]
#[tracing::instrument(skip(ctx, req))]
pub async fn ask_concierge(
    State(ctx): State<ApiContext>,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse> {
    let reply = ctx.concierge.ask(&req.message).await;
    Json(AskResponse { reply })
}
