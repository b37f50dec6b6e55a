// File: crates/survey-sim/src/generator.rs
// Summary: Seeded sample generation: normal draws per category, saturated into the score range.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::category::{Category, CategoryId, Observation, SCORE_MAX, SCORE_MIN};
use crate::error::{Result, SimError};

/// Saturate a raw draw into `[SCORE_MIN, SCORE_MAX]`.
/// Out-of-range draws land exactly on the nearest bound; nothing is redrawn.
#[inline]
pub fn clamp_score(v: f64) -> f64 {
    v.clamp(SCORE_MIN, SCORE_MAX)
}

/// Validated generation parameters: an ordered category list and a per-category count.
#[derive(Clone, Debug)]
pub struct SampleGenerator {
    categories: Vec<Category>,
    dists: Vec<Normal<f64>>,
    per_category: usize,
}

impl SampleGenerator {
    pub fn new(categories: Vec<Category>, per_category: usize) -> Result<Self> {
        if per_category == 0 {
            return Err(SimError::InvalidParameter("sample count must be positive".into()));
        }
        let dists = categories
            .iter()
            .map(|c| {
                c.validate()?;
                Normal::new(c.mean, c.spread)
                    .map_err(|e| SimError::InvalidParameter(format!("category '{}': {e}", c.name)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { categories, dists, per_category })
    }

    pub fn categories(&self) -> &[Category] { &self.categories }
    pub fn per_category(&self) -> usize { self.per_category }

    /// Total number of observations one run produces.
    pub fn expected_len(&self) -> usize { self.categories.len() * self.per_category }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Observation> {
        let mut out = Vec::with_capacity(self.expected_len());
        for (i, dist) in self.dists.iter().enumerate() {
            let id = CategoryId(i);
            for _ in 0..self.per_category {
                out.push(Observation::new(id, clamp_score(dist.sample(rng))));
            }
        }
        tracing::debug!(
            categories = self.categories.len(),
            per_category = self.per_category,
            total = out.len(),
            "generated observations"
        );
        out
    }
}

/// Draw `n` clamped samples for every category, in category order.
///
/// Fails with [`SimError::InvalidParameter`] before drawing anything when `n == 0`
/// or when any category has a non-positive spread.
pub fn generate<R: Rng + ?Sized>(categories: &[Category], n: usize, rng: &mut R) -> Result<Vec<Observation>> {
    let generator = SampleGenerator::new(categories.to_vec(), n)?;
    Ok(generator.generate(rng))
}
