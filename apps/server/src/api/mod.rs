//! HTTP routers for the Quoteshelf API.

mod quotes;
mod root;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(root::router())
        .merge(quotes::router())
        .fallback(unknown_route)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn unknown_route() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
