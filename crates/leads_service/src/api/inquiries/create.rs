use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models_leads::{InquiryDraft, LeadRecord, LeadSource};
use serde::Deserialize;
use utoipa::IntoParams;

use leads_service::domain::error::LeadError;

use crate::api::{context::ApiContext, ErrorResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CaptureQuery {
    /// Provenance tag for the lead; defaults to the advertising channel.
    pub source: Option<LeadSource>,
}

/// Captures a submitted inquiry.
///
/// Succeeds once the record exists locally; remote datastore or email
/// provider trouble never turns into an error here. The only 4xx a guest can
/// see is their own incomplete input.
#[utoipa::path(
        post,
        operation_id = "create_inquiry",
        path = "/inquiries",
        params(CaptureQuery),
        request_body = InquiryDraft,
        responses(
            (status = 201, body = LeadRecord),
            (status = 400, description = "incomplete submission", body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(ctx, draft))]
pub async fn create_inquiry(
    State(ctx): State<ApiContext>,
    Query(query): Query<CaptureQuery>,
    Json(draft): Json<InquiryDraft>,
) -> Result<Response, Response> {
    let source = query.source.unwrap_or(LeadSource::GoogleAds);

    let lead = ctx.lead_service.capture(draft, source).await.map_err(|e| {
        let LeadError::Validation(missing) = e;
        tracing::info!(error = %missing, "inquiry rejected");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: missing.to_string(),
            }),
        )
            .into_response()
    })?;

    Ok((StatusCode::CREATED, Json(lead)).into_response())
}
