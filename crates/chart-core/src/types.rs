// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, font sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 512;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 512;

pub const TITLE_SIZE: f32 = 17.0;
pub const AXIS_LABEL_SIZE: f32 = 15.0;
pub const TICK_LABEL_SIZE: f32 = 12.0;
pub const ANNOTATION_SIZE: f32 = 11.0;
/// Gap between a bar's top and its value annotation, in pixels.
pub const ANNOTATION_OFFSET: f32 = 6.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // Room for the title above and rotated category labels plus axis title below.
    fn default() -> Self {
        Self::new(64, 16, 48, 104)
    }
}
