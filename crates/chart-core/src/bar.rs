// File: crates/chart-core/src/bar.rs
// Summary: Bar model: one labelled value per category with an optional interval drawn as an error bar.

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// (lower, upper) extent of the error bar, if any.
    pub interval: Option<(f64, f64)>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, interval: None }
    }

    /// Construct a bar enforcing interval invariants:
    /// all finite and lower <= value <= upper.
    pub fn try_new(label: impl Into<String>, value: f64, lower: f64, upper: f64) -> Result<Self, &'static str> {
        if !value.is_finite() || !lower.is_finite() || !upper.is_finite() { return Err("non-finite value or interval"); }
        if lower > value { return Err("lower bound above value"); }
        if upper < value { return Err("upper bound below value"); }
        Ok(Self { label: label.into(), value, interval: Some((lower, upper)) })
    }

    /// Symmetric interval `value ± half_width`.
    pub fn with_half_width(mut self, half_width: f64) -> Self {
        let hw = half_width.abs();
        self.interval = Some((self.value - hw, self.value + hw));
        self
    }

    /// Highest point drawn for this bar (value or interval top).
    pub fn top(&self) -> f64 {
        match self.interval {
            Some((_, hi)) => hi.max(self.value),
            None => self.value,
        }
    }

    /// Lowest point drawn for this bar (value or interval bottom).
    pub fn bottom(&self) -> f64 {
        match self.interval {
            Some((lo, _)) => lo.min(self.value),
            None => self.value,
        }
    }

    pub fn check(&self) -> Result<(), &'static str> {
        if !self.value.is_finite() { return Err("non-finite value"); }
        if let Some((lo, hi)) = self.interval {
            if !lo.is_finite() || !hi.is_finite() { return Err("non-finite interval"); }
            if lo > hi { return Err("interval lower above upper"); }
        }
        Ok(())
    }
}
