// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for bar chart construction and rendering.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use bar::Bar;
pub use chart::{BarChart, RenderOptions};
pub use error::{ChartError, Result};
pub use text::{Anchor, TextShaper};
pub use theme::Theme;
