use std::sync::Arc;

use axum::{routing::get, Router};
use service::employees::EmployeeStore;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod employees;

/// Shared handler state: the one store instance built at startup.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn EmployeeStore>,
}

/// Build the application router. Anything outside these routes falls through to axum's 404.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency per response
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
