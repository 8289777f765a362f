use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::context::ApiContext;

pub(in crate::api) mod get_content;
pub(in crate::api) mod reset;
pub(in crate::api) mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/content", get(get_content::get_content))
        .route("/content", put(update::update_content))
        .route("/content/reset", post(reset::reset_content))
}
