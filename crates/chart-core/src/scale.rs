// File: crates/chart-core/src/scale.rs
// Summary: Category band (X) and linear value (Y) transforms from data space to pixels.

/// Value Y coordinate (e.g., mean satisfaction).
pub type Value = f64;

/// Horizontal band scale: `count` equal slots across `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }
    /// Width of one slot in pixels (the whole span when empty).
    #[inline]
    pub fn band_px(&self) -> f32 {
        (self.right_px - self.left_px) / self.count.max(1) as f32
    }
    /// Pixel x of the centre of slot `i`.
    #[inline]
    pub fn center_px(&self, i: usize) -> f32 {
        self.left_px + (i as f32 + 0.5) * self.band_px()
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { top_px, bottom_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
    /// Pixel y of `y` pinned into the visible range.
    #[inline]
    pub fn to_px_clamped(&self, y: Value) -> f32 {
        self.to_px(y.clamp(self.vmin, self.vmax))
    }
    /// Bars grow from zero when zero is visible, else from the nearest range edge.
    pub fn baseline(&self) -> Value {
        0.0f64.clamp(self.vmin, self.vmax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_scale_maps_range_to_pixels() {
        let s = ValueScale::new_linear(48.0, 408.0, 0.0, 5.2);
        assert_eq!(s.to_px(0.0), 408.0);
        assert!((s.to_px(5.2) - 48.0).abs() < 1e-3);
        assert!((s.to_px(2.6) - 228.0).abs() < 1e-3);
        assert_eq!(s.to_px_clamped(9.0), s.to_px(5.2));
        assert_eq!(s.baseline(), 0.0);
        assert_eq!(ValueScale::new_linear(0.0, 100.0, 1.0, 5.0).baseline(), 1.0);
    }

    #[test]
    fn band_centres() {
        let b = BandScale::new(0.0, 500.0, 5);
        assert_eq!(b.band_px(), 100.0);
        assert_eq!(b.center_px(0), 50.0);
        assert_eq!(b.center_px(4), 450.0);
        assert_eq!(BandScale::new(0.0, 10.0, 0).band_px(), 10.0);
    }
}
