use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::api::context::ApiContext;

pub(in crate::api) mod delete_lead;
pub(in crate::api) mod list;
pub(in crate::api) mod update_status;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/leads", get(list::list_leads))
        .route("/leads/:id/status", patch(update_status::update_lead_status))
        .route("/leads/:id", delete(delete_lead::delete_lead))
}
