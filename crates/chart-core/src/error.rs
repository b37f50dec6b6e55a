// File: crates/chart-core/src/error.rs
// Summary: Rendering errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("plot area is empty after insets ({width}x{height} surface)")]
    EmptyPlotArea { width: i32, height: i32 },

    #[error("invalid value range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("bar '{label}': {reason}")]
    InvalidBar { label: String, reason: &'static str },

    #[error("failed to create raster surface")]
    Surface,

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("encode PNG failed")]
    Encode,

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
