// File: crates/survey-sim/src/category.rs
// Summary: Category definitions, identities and observations, plus the default category preset.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Lowest valid satisfaction score.
pub const SCORE_MIN: f64 = 1.0;
/// Highest valid satisfaction score.
pub const SCORE_MAX: f64 = 5.0;
/// Observations drawn per category unless configured otherwise.
pub const DEFAULT_SAMPLES_PER_CATEGORY: usize = 60;
/// Seed used by the driver when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// A named group of observations sharing one generating distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub mean: f64,
    pub spread: f64,
}

impl Category {
    pub fn new(name: impl Into<String>, mean: f64, spread: f64) -> Self {
        Self { name: name.into(), mean, spread }
    }

    /// Check the sampling parameters: finite mean, finite and strictly positive spread.
    pub fn validate(&self) -> Result<()> {
        if !self.mean.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "category '{}' has non-finite mean {}",
                self.name, self.mean
            )));
        }
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "category '{}' has non-positive spread {}",
                self.name, self.spread
            )));
        }
        Ok(())
    }
}

/// Position of a category in the sequence that defines it.
/// Grouping uses this, never the name, so two categories sharing a name stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub usize);

impl CategoryId {
    #[inline]
    pub const fn index(self) -> usize { self.0 }

    /// Resolve against the defining sequence.
    pub fn resolve(self, categories: &[Category]) -> Option<&Category> {
        categories.get(self.0)
    }
}

/// A single generated satisfaction value attributed to one category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    category: CategoryId,
    value: f64,
}

impl Observation {
    pub(crate) const fn new(category: CategoryId, value: f64) -> Self {
        Self { category, value }
    }

    pub const fn category(&self) -> CategoryId { self.category }
    pub const fn value(&self) -> f64 { self.value }
}

/// Look up a category id by name. First match wins.
pub fn find_by_name(categories: &[Category], name: &str) -> Option<CategoryId> {
    categories.iter().position(|c| c.name == name).map(CategoryId)
}

/// Five retail product categories with realistic average satisfaction and spread.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Electronics", 4.1, 0.45),
        Category::new("Apparel", 3.6, 0.55),
        Category::new("Home & Kitchen", 4.3, 0.35),
        Category::new("Beauty & Health", 4.0, 0.40),
        Category::new("Sports & Outdoors", 3.8, 0.50),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_spread() {
        assert!(Category::new("a", 3.0, 0.0).validate().is_err());
        assert!(Category::new("a", 3.0, -1.0).validate().is_err());
        assert!(Category::new("a", 3.0, f64::NAN).validate().is_err());
        assert!(Category::new("a", f64::INFINITY, 1.0).validate().is_err());
        assert!(Category::new("a", 3.0, 0.0001).validate().is_ok());
    }

    #[test]
    fn default_preset_order() {
        let names: Vec<_> = default_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Electronics", "Apparel", "Home & Kitchen", "Beauty & Health", "Sports & Outdoors"]);
    }

    #[test]
    fn find_by_name_returns_first_position() {
        let cats = vec![Category::new("x", 1.0, 1.0), Category::new("y", 1.0, 1.0), Category::new("x", 2.0, 1.0)];
        assert_eq!(find_by_name(&cats, "x"), Some(CategoryId(0)));
        assert_eq!(find_by_name(&cats, "y"), Some(CategoryId(1)));
        assert_eq!(find_by_name(&cats, "z"), None);
    }
}
