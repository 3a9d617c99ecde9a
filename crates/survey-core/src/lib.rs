//! Core data model for survey statistics
//!
//! This crate provides the population/sample abstraction used across
//! the survey-stats workspace:
//!
//! - [`Dataset`] — an immutable collection of observations tagged with
//!   a [`Role`], with eager count/sum and lazily memoized variance
//! - [`load_values`] — CSV loading (header row skipped, first field of
//!   each record is the observation)
//! - [`Dataset::draw_sample`] — uniform with-replacement sampling with
//!   a caller-injected randomness source
//! - [`Dataset::fpc`] — the finite-population correction for samples
//!   that are a non-negligible fraction of their parent
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use survey_core::Dataset;
//!
//! # fn main() -> survey_core::Result<()> {
//! let population = Dataset::population((1..=100).map(f64::from).collect())?;
//! assert_eq!(population.mean(), 50.5);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let sample = population.draw_sample(30, &mut rng)?;
//! println!("sample mean: {:.2} +/- {:.2}", sample.mean(), sample.standard_error()?);
//! # Ok(())
//! # }
//! ```

mod dataset;
mod error;
mod sampling;
pub mod source;

pub use dataset::{Dataset, Role, FPC_THRESHOLD};
pub use error::{Error, Result};
pub use source::load_values;
