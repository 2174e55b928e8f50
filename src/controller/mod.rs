use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::{CustomerRepo, ReservationRepo};
use crate::views::ViewRenderer;

pub mod customer_controller;
pub mod health_check;
pub mod reservation_controller;

/// Everything a handler needs, injected as an `Extension` so tests can
/// swap in their own collaborators.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerRepo>,
    pub reservations: Arc<dyn ReservationRepo>,
    pub views: Arc<dyn ViewRenderer>,
    pub strict_forms: bool,
}

pub async fn serve(app_state: AppState, config: &Config) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .map(|s| s.parse().context("invalid origin url"))
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST])
                    .allow_origin(origins)
                    .allow_headers([AUTHORIZATION, CONTENT_TYPE]),
            ),
        )
        .fallback(page_not_found_handler);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("server listening on: {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .merge(customer_controller::router(app_state.clone()))
        .merge(reservation_controller::router(app_state))
        .merge(health_check::router())
}
