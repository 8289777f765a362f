use axum::{routing::post, Router};

use crate::api::context::ApiContext;

pub(in crate::api) mod create;
pub(in crate::api) mod validate;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/inquiries", post(create::create_inquiry))
        .route("/inquiries/validate", post(validate::validate_step))
}
