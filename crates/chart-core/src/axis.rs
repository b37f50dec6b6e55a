// File: crates/chart-core/src/axis.rs
// Summary: Value axis model with label and range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 1.0)
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Finite bounds with `max > min`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}
