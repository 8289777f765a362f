use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leads_service::domain::wizard::{InquiryWizard, WizardConfig, WizardStep};
use models_leads::InquiryDraft;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::{context::ApiContext, ErrorResponse};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateStepRequest {
    /// The step the guest is trying to leave.
    pub step: WizardStep,
    pub draft: InquiryDraft,
}

/// Validates one wizard step transition so the funnel can show inline
/// guidance ("select both dates", "all fields required") before the guest
/// moves on. Backward navigation never calls this; it is always allowed.
#[utoipa::path(
        post,
        operation_id = "validate_inquiry_step",
        path = "/inquiries/validate",
        request_body = ValidateStepRequest,
        responses(
            (status = 204, description = "step is complete"),
            (status = 400, description = "step is incomplete", body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(ctx, req), fields(step = ?req.step))]
pub async fn validate_step(
    State(ctx): State<ApiContext>,
    Json(req): Json<ValidateStepRequest>,
) -> Result<StatusCode, Response> {
    let config = WizardConfig {
        require_villa_selection: ctx.config.require_villa_selection,
    };
    let mut wizard = InquiryWizard::with_draft(req.draft, config).at_step(req.step);

    let result = match req.step {
        WizardStep::Contact => wizard.submit().map(|_| ()),
        _ => wizard.next().map(|_| ()),
    };

    result.map(|_| StatusCode::NO_CONTENT).map_err(|e| {
        tracing::debug!(error = %e, "step validation failed");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: e.to_string(),
            }),
        )
            .into_response()
    })
}
