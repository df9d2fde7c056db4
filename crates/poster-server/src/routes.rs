use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use image::DynamicImage;
use poster_layout::PosterConfig;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::form::PosterForm;

/// Shared read-only state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<PosterConfig>,
}

impl AppState {
    pub fn new(config: PosterConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Base64 JPEG
    pub image_data: String,
    pub pages: usize,
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub async fn preview(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PreviewResponse>, AppError> {
    let form = PosterForm::from_multipart(multipart).await?;
    let image = decode(form.image).await?;

    let preview =
        poster_layout::generate_preview(image, form.target, form.page_format, &state.config)
            .await?;

    log::info!(
        "Preview: {} pages ({}x{})",
        preview.pages,
        preview.columns,
        preview.rows
    );

    Ok(Json(PreviewResponse {
        image_data: preview.to_base64(),
        pages: preview.pages,
    }))
}

pub async fn download(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = PosterForm::from_multipart(multipart).await?;
    let image = decode(form.image).await?;

    let bytes =
        poster_layout::generate_pdf(image, form.target, form.page_format, &state.config).await?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        poster_layout::download_filename(form.page_format)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

async fn decode(bytes: Bytes) -> Result<DynamicImage, AppError> {
    let image = tokio::task::spawn_blocking(move || poster_layout::decode_image(&bytes)).await??;
    Ok(image)
}
