//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/camel/*` - Sample routes from [`crate::api::routes::route_table`]
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Error normalizer** - 503 `error : <message>` with inbound headers copied
//! - **Panic catcher** - Turns handler panics into normalized failures
//! - **Media types** - Per-route consumed/produced type checks

use crate::api;
use crate::api::middleware::{error_normalizer, tracing};
use crate::error::panic_response;
use crate::state::AppState;
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `context_path` - prefix every route is mounted under (`/camel` by default)
pub fn app_router(state: AppState, context_path: &str) -> Router {
    api::routes::route_table(context_path)
        .into_router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(error_normalizer::layer))
        .layer(tracing::layer())
}
