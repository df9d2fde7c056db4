use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use poster_layout::PosterError;
use thiserror::Error;

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No Image")]
    MissingImage,
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Malformed form data: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Poster(#[from] PosterError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingImage
            | AppError::MissingField(_)
            | AppError::InvalidNumber { .. } => StatusCode::BAD_REQUEST,
            AppError::Multipart(err) => err.status(),
            AppError::Poster(err) => match err {
                PosterError::Image(_) | PosterError::InvalidSize(_) => StatusCode::BAD_REQUEST,
                PosterError::CanvasTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                PosterError::Io(_)
                | PosterError::Config(_)
                | PosterError::Pdf(_)
                | PosterError::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Poster(PosterError::TaskJoin(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Rejected request ({}): {}", status, self);
        }
        (status, self.to_string()).into_response()
    }
}
