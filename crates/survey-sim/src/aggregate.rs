// File: crates/survey-sim/src/aggregate.rs
// Summary: Group observations by category identity; mean and 95% t-interval per category in display order.

use std::collections::HashMap;

use crate::category::{Category, CategoryId, Observation};
use crate::error::{Result, SimError};
use crate::stats;

/// Mean and 95% confidence interval for one category's observations.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySummary {
    pub category: CategoryId,
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Symmetric half-width of the interval around `mean`.
    pub half_width: f64,
}

impl CategorySummary {
    pub fn lower(&self) -> f64 { self.mean - self.half_width }
    pub fn upper(&self) -> f64 { self.mean + self.half_width }

    fn from_values(category: CategoryId, name: &str, values: &[f64]) -> Result<Self> {
        let mean = stats::mean(values)
            .ok_or_else(|| SimError::InsufficientData { category: name.to_string() })?;
        let std_dev = stats::sample_std_dev(values);
        Ok(Self {
            category,
            name: name.to_string(),
            count: values.len(),
            mean,
            std_dev,
            half_width: stats::confidence_half_width(std_dev, values.len()),
        })
    }
}

/// Partition observations by category id. Ids outside `categories` are rejected.
pub fn group_by_category(
    observations: &[Observation],
    categories: &[Category],
) -> Result<HashMap<CategoryId, Vec<f64>>> {
    let mut groups: HashMap<CategoryId, Vec<f64>> = HashMap::with_capacity(categories.len());
    for obs in observations {
        let id = obs.category();
        if id.resolve(categories).is_none() {
            return Err(SimError::UnknownCategory(format!(
                "id {} (only {} categories defined)",
                id.index(),
                categories.len()
            )));
        }
        groups.entry(id).or_default().push(obs.value());
    }
    Ok(groups)
}

/// One summary per category, in the order of `categories`.
///
/// A category without observations fails with [`SimError::InsufficientData`].
pub fn aggregate(observations: &[Observation], categories: &[Category]) -> Result<Vec<CategorySummary>> {
    let groups = group_by_category(observations, categories)?;
    let summaries = categories
        .iter()
        .enumerate()
        .map(|(i, cat)| {
            let id = CategoryId(i);
            let values = groups.get(&id).map(Vec::as_slice).unwrap_or(&[]);
            CategorySummary::from_values(id, &cat.name, values)
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(categories = summaries.len(), observations = observations.len(), "aggregated");
    Ok(summaries)
}
