use axum::{routing::get, Router};

use crate::api::context::ApiContext;

pub(in crate::api) mod month;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/calendar/:year/:month", get(month::month_view))
}
