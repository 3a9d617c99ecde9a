//! Confidence interval estimation for survey samples
//!
//! Given a sample drawn from a [`survey_core::Dataset`] population,
//! this crate computes confidence intervals for the mean using either
//! Student's t distribution (margins from the sample's own standard
//! error, with and without the finite-population correction) or the
//! standard normal distribution (population spread treated as known,
//! minimum 30 observations), and renders the textual summary report.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use survey_confidence::{mean_confidence_interval, ReferenceDistribution};
//! use survey_core::Dataset;
//!
//! # fn main() -> survey_core::Result<()> {
//! let population = Dataset::population((1..=200).map(f64::from).collect())?;
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let sample = population.draw_sample(50, &mut rng)?;
//!
//! let intervals = mean_confidence_interval(&sample, 0.95, ReferenceDistribution::StudentT)?;
//! assert!(intervals.uncorrected.contains(sample.mean()));
//! # Ok(())
//! # }
//! ```

mod interval;
mod report;
mod types;

pub use interval::{
    mean_confidence_interval, MeanIntervals, ReferenceDistribution, NORMAL_APPROXIMATION_MIN,
};
pub use report::{render_summary, DEFAULT_CONFIDENCE_LEVEL};
pub use types::{ConfidenceInterval, ConfidenceLevel};
