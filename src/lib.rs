//! Survey statistics toolkit
//!
//! This crate re-exports the workspace members:
//!
//! - [`survey_core`] — the population/sample data model, CSV loading,
//!   random sampling, and the finite-population correction
//! - [`survey_confidence`] — confidence-interval estimation for the
//!   mean and textual summary reports
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use survey_stats::{Dataset, ReferenceDistribution, mean_confidence_interval};
//!
//! # fn main() -> survey_stats::Result<()> {
//! let population = Dataset::from_csv("population.csv")?;
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let sample = population.draw_sample(550, &mut rng)?;
//!
//! let intervals = mean_confidence_interval(&sample, 0.95, ReferenceDistribution::StudentT)?;
//! println!("95% CI: [{:.2}, {:.2}]", intervals.uncorrected.lower, intervals.uncorrected.upper);
//! # Ok(())
//! # }
//! ```

pub use survey_core::{load_values, Dataset, Error, Result, Role};
pub use survey_confidence::{
    mean_confidence_interval, render_summary, ConfidenceInterval, ConfidenceLevel, MeanIntervals,
    ReferenceDistribution, DEFAULT_CONFIDENCE_LEVEL,
};
