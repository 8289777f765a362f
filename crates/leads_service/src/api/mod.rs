use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};

use crate::api::context::ApiContext;
use crate::middleware::operator_access;

pub mod calendar;
pub mod concierge;
pub mod content;
pub mod context;
mod health;
pub mod inquiries;
pub mod leads;
pub mod swagger;

/// Error body returned by handlers.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let port = state.config.port;
    let env = state.config.environment;

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .route(
            "/api-doc/openapi.json",
            get(|| async { Json(swagger::ApiDoc::openapi()) }),
        );

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "leads service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

fn api_router(app_state: ApiContext) -> Router {
    // the lead review table is operator-only; the rest of the surface is the
    // public funnel
    let lead_review_routes = leads::router().layer(axum::middleware::from_fn_with_state(
        app_state.operator_key.clone(),
        operator_access::handler,
    ));

    Router::new()
        .merge(inquiries::router())
        .merge(calendar::router())
        .merge(content::router())
        .merge(concierge::router())
        .merge(lead_review_routes)
        .with_state(app_state)
}
