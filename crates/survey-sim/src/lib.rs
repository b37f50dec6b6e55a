// File: crates/survey-sim/src/lib.rs
// Summary: Synthetic satisfaction survey: seeded generation, per-category aggregation, observation I/O.

pub mod aggregate;
pub mod category;
pub mod csv_io;
pub mod error;
pub mod generator;
pub mod stats;

pub use aggregate::{aggregate, CategorySummary};
pub use category::{
    default_categories, Category, CategoryId, Observation, DEFAULT_SAMPLES_PER_CATEGORY, DEFAULT_SEED,
    SCORE_MAX, SCORE_MIN,
};
pub use csv_io::{read_observations, write_observations};
pub use error::{Result, SimError};
pub use generator::{clamp_score, generate, SampleGenerator};
