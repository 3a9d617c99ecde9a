//! The population/sample data model
//!
//! A [`Dataset`] holds an immutable sequence of observations together
//! with its [`Role`] (population or sample) and, for samples, a
//! non-owning reference to the parent population it was drawn from.
//! The borrow checker enforces that a population outlives every sample
//! derived from it.
//!
//! Count and sum are computed eagerly at construction; variance is
//! computed on first access and memoized for the lifetime of the
//! entity. The data is never mutated after construction, so the memo
//! needs no invalidation, and the write-once [`OnceLock`] cell makes a
//! constructed entity safe to read from multiple threads.

use crate::{source, Error, Result};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// Sampling fraction above which the finite-population correction is
/// applied. Below it the correction is treated as negligible (the
/// standard survey-statistics convention).
pub const FPC_THRESHOLD: f64 = 0.05;

/// Whether an entity is a complete population or a sample drawn from one.
///
/// The role determines the variance divisor (`count` for a population,
/// `count - 1` for a sample, Bessel's correction) and which operations
/// are permitted: sampling is population-only, the finite-population
/// correction and confidence intervals are sample-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Population,
    Sample,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Population => write!(f, "POPULATION"),
            Role::Sample => write!(f, "SAMPLE"),
        }
    }
}

/// An immutable collection of observations with descriptive statistics.
#[derive(Debug, Clone)]
pub struct Dataset<'p> {
    data: Vec<f64>,
    role: Role,
    parent: Option<&'p Dataset<'p>>,
    sum: f64,
    variance: OnceLock<f64>,
}

impl Dataset<'static> {
    /// Create a population from an in-memory sequence of observations.
    pub fn population(data: Vec<f64>) -> Result<Self> {
        Self::with_role(data, Role::Population, None)
    }

    /// Load a population from a CSV data source (see [`source::load_values`]).
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::population(source::load_values(path)?)
    }
}

impl<'p> Dataset<'p> {
    /// Construct an entity with an explicit role.
    ///
    /// Fails with [`Error::InvalidState`] if the data is empty, if a
    /// sample is constructed without a parent, or if a population is
    /// given one.
    pub fn with_role(
        data: Vec<f64>,
        role: Role,
        parent: Option<&'p Dataset<'p>>,
    ) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::InvalidState(
                "a dataset must contain at least one observation".to_string(),
            ));
        }
        match (role, parent.is_some()) {
            (Role::Sample, false) => {
                return Err(Error::InvalidState(
                    "a sample requires a parent population".to_string(),
                ))
            }
            (Role::Population, true) => {
                return Err(Error::InvalidState(
                    "a population cannot have a parent".to_string(),
                ))
            }
            _ => {}
        }

        let sum = data.iter().sum();
        Ok(Self {
            data,
            role,
            parent,
            sum,
            variance: OnceLock::new(),
        })
    }

    /// The observations, in load/draw order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Number of observations. Always at least 1.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Sum of all observations, computed at construction.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The population this sample was drawn from; `None` for a population.
    pub fn parent(&self) -> Option<&'p Dataset<'p>> {
        self.parent
    }

    /// Arithmetic mean. O(1).
    pub fn mean(&self) -> f64 {
        self.sum / self.count() as f64
    }

    /// Variance with the role-appropriate divisor.
    ///
    /// Computed on first call and memoized; subsequent calls are O(1).
    /// A sample of a single observation has a zero divisor and fails
    /// with [`Error::DegenerateSample`].
    pub fn variance(&self) -> Result<f64> {
        if let Some(v) = self.variance.get() {
            return Ok(*v);
        }

        let divisor = match self.role {
            Role::Population => self.count(),
            Role::Sample => {
                if self.count() < 2 {
                    return Err(Error::DegenerateSample(
                        "sample variance requires at least 2 observations".to_string(),
                    ));
                }
                self.count() - 1
            }
        };

        let mean = self.mean();
        let squared_deviations: f64 = self.data.iter().map(|&x| (x - mean).powi(2)).sum();
        Ok(*self
            .variance
            .get_or_init(|| squared_deviations / divisor as f64))
    }

    /// Standard deviation: `sqrt(variance)`.
    pub fn std_dev(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }

    /// Standard error of the mean: `std_dev / sqrt(count)`.
    pub fn standard_error(&self) -> Result<f64> {
        Ok(self.std_dev()? / (self.count() as f64).sqrt())
    }

    /// Finite-population correction factor.
    ///
    /// 0 for a population. For a sample with fraction
    /// `f = count / parent.count`: `sqrt((N - n) / (N - 1))` when
    /// `f` exceeds [`FPC_THRESHOLD`], otherwise 0.
    pub fn fpc(&self) -> Result<f64> {
        if self.role == Role::Population {
            return Ok(0.0);
        }
        let parent = self.parent.ok_or_else(|| {
            Error::InvalidState("sample has no parent population".to_string())
        })?;

        if parent.count() == 1 {
            return Err(Error::DegenerateSample(
                "finite-population correction is undefined for a parent population of size 1"
                    .to_string(),
            ));
        }

        let n = self.count() as f64;
        let big_n = parent.count() as f64;
        if self.count() > parent.count() {
            // With-replacement draws can outnumber the parent; the
            // correction's square root argument would be negative.
            return Err(Error::Computation(format!(
                "FPC undefined: sample of {} outnumbers its parent population of {}",
                self.count(),
                parent.count()
            )));
        }

        if n / big_n > FPC_THRESHOLD {
            Ok(((big_n - n) / (big_n - 1.0)).sqrt())
        } else {
            Ok(0.0)
        }
    }

    /// Standard error scaled by the finite-population correction.
    pub fn standard_error_corrected(&self) -> Result<f64> {
        Ok(self.standard_error()? * self.fpc()?)
    }
}
