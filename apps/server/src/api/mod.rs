//! API routers, one module per resource.

mod conversions;
mod exchange_rates;
mod health;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(conversions::router())
        .merge(exchange_rates::router())
        .merge(health::router());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}
