use axum::{routing::post, Router};

use crate::api::context::ApiContext;

pub(in crate::api) mod ask;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/concierge", post(ask::ask_concierge))
}
