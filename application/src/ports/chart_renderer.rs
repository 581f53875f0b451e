//! Chart renderer port
//!
//! Turns a Score Table's labels and values into an image that can be
//! embedded in the report.

use thiserror::Error;

/// Errors from chart or document rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("Report document failed: {0}")]
    Document(String),
}

/// Encoding of a rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Png => "image/png",
        }
    }
}

/// A rendered chart held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub format: ImageFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pub data: Vec<u8>,
}

/// Renders the radial score chart.
///
/// `labels` and `values` are parallel and in category order.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, labels: &[String], values: &[u8]) -> Result<ChartImage, RenderError>;
}
