pub mod config;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod services;

use crate::services::storage::ObjectStore;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::audios::index_redirect))
        .route("/audios", get(handlers::audios::list_audios))
        .route("/upload", post(handlers::audios::upload_audio))
        .route("/audios/upload", post(handlers::audios::upload_audio))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}
