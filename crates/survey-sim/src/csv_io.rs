// File: crates/survey-sim/src/csv_io.rs
// Summary: Two-column observation table (Category, Satisfaction) read/write via `csv` + serde.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::category::{find_by_name, Category, Observation, SCORE_MAX, SCORE_MIN};
use crate::error::{Result, SimError};

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Satisfaction")]
    satisfaction: f64,
}

/// Write one row per observation, in sequence order, with a `Category,Satisfaction` header.
pub fn write_observations<W: Write>(writer: W, observations: &[Observation], categories: &[Category]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for obs in observations {
        let cat = obs
            .category()
            .resolve(categories)
            .ok_or_else(|| SimError::UnknownCategory(format!("id {}", obs.category().index())))?;
        wtr.serialize(Row { category: cat.name.clone(), satisfaction: obs.value() })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parse a table written by [`write_observations`], resolving names against `categories`.
///
/// Every value must be finite and within `[SCORE_MIN, SCORE_MAX]`; rows are numbered from 1
/// after the header in the error.
pub fn read_observations<R: Read>(reader: R, categories: &[Category]) -> Result<Vec<Observation>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec?;
        let id = find_by_name(categories, &row.category)
            .ok_or_else(|| SimError::UnknownCategory(row.category.clone()))?;
        if !row.satisfaction.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&row.satisfaction) {
            return Err(SimError::InvalidParameter(format!(
                "row {}: {}: score {} outside [{SCORE_MIN}, {SCORE_MAX}]",
                i + 1,
                row.category,
                row.satisfaction
            )));
        }
        out.push(Observation::new(id, row.satisfaction));
    }
    tracing::debug!(rows = out.len(), "read observations");
    Ok(out)
}
