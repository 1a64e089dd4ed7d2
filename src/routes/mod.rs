// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{Router, routing::post};
use chat::predict_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/predict", post(predict_handler))
        .route_service("/", ServeFile::new("public/index.html"))
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
