//! Multipart poster request parsing

use axum::body::Bytes;
use axum::extract::Multipart;
use poster_layout::{PageFormat, PhysicalSize, Unit};

use crate::error::AppError;

/// Fields shared by the preview and download endpoints
#[derive(Debug, Clone)]
pub struct PosterForm {
    pub image: Bytes,
    pub target: PhysicalSize,
    pub page_format: PageFormat,
}

impl PosterForm {
    /// Read `image`, `width`, `height`, `unit` and `page_format` from a
    /// multipart body.
    ///
    /// A missing or empty image is rejected before the numbers are looked at.
    /// Unknown units and page formats fall back to `mm` and `a4`.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut image = None;
        let mut width = None;
        let mut height = None;
        let mut unit = None;
        let mut page_format = None;

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "image" => image = Some(field.bytes().await?),
                "width" => width = Some(field.text().await?),
                "height" => height = Some(field.text().await?),
                "unit" => unit = Some(field.text().await?),
                "page_format" => page_format = Some(field.text().await?),
                other => log::debug!("Ignoring form field {:?}", other),
            }
        }

        let image = image
            .filter(|bytes| !bytes.is_empty())
            .ok_or(AppError::MissingImage)?;
        let width = parse_number("width", width)?;
        let height = parse_number("height", height)?;
        let unit = resolve_unit(unit.as_deref());
        let page_format = resolve_page_format(page_format.as_deref());

        Ok(Self {
            image,
            target: PhysicalSize::new(width, height, unit),
            page_format,
        })
    }
}

fn parse_number(field: &'static str, value: Option<String>) -> Result<f64, AppError> {
    let value = value.ok_or(AppError::MissingField(field))?;
    value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidNumber { field, value })
}

fn resolve_unit(name: Option<&str>) -> Unit {
    let name = name.unwrap_or_default();
    let unit = Unit::resolve(name);
    if Unit::lookup(name).is_none() {
        log::debug!("Unit {:?} not recognized, using {}", name, unit.name());
    }
    unit
}

fn resolve_page_format(name: Option<&str>) -> PageFormat {
    let name = name.unwrap_or_default();
    let format = PageFormat::resolve(name);
    if PageFormat::lookup(name).is_none() {
        log::debug!("Page format {:?} not recognized, using {}", name, format.name());
    }
    format
}
