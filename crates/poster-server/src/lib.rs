pub mod config;
pub mod error;
pub mod form;
pub mod routes;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

pub use config::ServerConfig;
pub use error::AppError;
pub use routes::{AppState, PreviewResponse};

/// Build the poster router
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/preview", post(routes::preview))
        .route("/download", post(routes::download))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
