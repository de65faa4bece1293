use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, Config};
use crate::handlers::events::{create_event, delete_event, get_event, list_events};
use crate::handlers::health_check;
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(list_events).post(create_event))
        .route("/events/:id", get(get_event).delete(delete_event))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(&config.cors_allowed_origins))
}
