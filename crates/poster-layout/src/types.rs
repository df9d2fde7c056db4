use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosterError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid size: {0}")]
    InvalidSize(String),
    #[error("Canvas of {width}x{height} px exceeds the limit of {limit} pixels")]
    CanvasTooLarge { width: u64, height: u64, limit: u64 },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PosterError>;

/// Length units accepted for the target poster size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimeter,
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    Inch,
    #[cfg_attr(feature = "serde", serde(rename = "ft"))]
    Foot,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Millimeter, Unit::Centimeter, Unit::Inch, Unit::Foot];

    /// Millimeters per one of this unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Unit::Millimeter => 1.0,
            Unit::Centimeter => 10.0,
            Unit::Inch => 25.4,
            Unit::Foot => 304.8,
        }
    }

    pub fn to_mm(self, value: f64) -> f64 {
        value * self.mm_per_unit()
    }

    /// Form key for this unit
    pub fn name(self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Inch => "inch",
            Unit::Foot => "ft",
        }
    }

    /// Strict lookup by form key.
    pub fn lookup(name: &str) -> Option<Unit> {
        let key = name.trim();
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(key))
    }

    /// Total lookup by form key.
    ///
    /// Anything that is not a recognized key is treated as millimeters.
    pub fn resolve(name: &str) -> Unit {
        Unit::lookup(name).unwrap_or_default()
    }
}

/// Standard page formats a poster can be tiled onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageFormat {
    #[default]
    A4,
    A3,
    A2,
    A1,
    Letter,
    Legal,
}

impl PageFormat {
    pub const ALL: [PageFormat; 6] = [
        PageFormat::A4,
        PageFormat::A3,
        PageFormat::A2,
        PageFormat::A1,
        PageFormat::Letter,
        PageFormat::Legal,
    ];

    /// Format substituted for unrecognized names
    pub const DEFAULT: PageFormat = PageFormat::A4;

    /// Portrait dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::A3 => (297.0, 420.0),
            PageFormat::A2 => (420.0, 594.0),
            PageFormat::A1 => (594.0, 841.0),
            PageFormat::Letter => (215.9, 279.4),
            PageFormat::Legal => (215.9, 355.6),
        }
    }

    /// Form key for this format, also used in download file names
    pub fn name(self) -> &'static str {
        match self {
            PageFormat::A4 => "a4",
            PageFormat::A3 => "a3",
            PageFormat::A2 => "a2",
            PageFormat::A1 => "a1",
            PageFormat::Letter => "letter",
            PageFormat::Legal => "legal",
        }
    }

    /// Strict lookup by form key. Returns `None` for unknown names.
    pub fn lookup(name: &str) -> Option<PageFormat> {
        let key = name.trim();
        PageFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(key))
    }

    /// Total lookup by form key.
    ///
    /// Unknown names silently resolve to [`PageFormat::DEFAULT`]. Callers that
    /// need to tell "a4" apart from a typo should use [`PageFormat::lookup`].
    pub fn resolve(name: &str) -> PageFormat {
        PageFormat::lookup(name).unwrap_or(PageFormat::DEFAULT)
    }
}

/// Physical (width, height) in millimeters of the named page format,
/// falling back to A4 for unknown names.
pub fn resolve_format(name: &str) -> (f64, f64) {
    PageFormat::resolve(name).dimensions_mm()
}

/// A requested poster size in some unit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalSize {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

impl PhysicalSize {
    pub fn new(width: f64, height: f64, unit: Unit) -> Self {
        Self {
            width,
            height,
            unit,
        }
    }

    /// (width, height) in millimeters
    pub fn to_mm(&self) -> (f64, f64) {
        (self.unit.to_mm(self.width), self.unit.to_mm(self.height))
    }

    /// Both sides must be finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PosterError::InvalidSize(format!(
                    "target {} must be a positive number, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}
