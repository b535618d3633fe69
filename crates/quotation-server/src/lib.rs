//! quotation-server
//!
//! HTTP front end: serves the quotation form and returns generated PDFs.

use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/",
            get(routes::quotation::index_form).post(routes::quotation::generate_quotation),
        )
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
