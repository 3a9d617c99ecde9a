//! Confidence intervals for the mean of a survey sample

use crate::{ConfidenceInterval, ConfidenceLevel};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use survey_core::{Dataset, Error, Result, Role};
use tracing::debug;

/// Minimum sample size for the normal-approximation interval.
pub const NORMAL_APPROXIMATION_MIN: usize = 30;

/// Reference distribution for the interval's critical value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDistribution {
    /// Student's t with `count - 1` degrees of freedom; margins use the
    /// sample's own standard error
    StudentT,
    /// Standard normal; the margin uses the parent population's
    /// standard deviation over `sqrt(count)`, treating the population
    /// spread as known
    Normal,
}

/// Intervals produced by [`mean_confidence_interval`]
///
/// The t branch yields both the plain interval and the one scaled by
/// the finite-population correction; the normal branch yields only the
/// plain interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanIntervals {
    /// Interval from the uncorrected standard error
    pub uncorrected: ConfidenceInterval,
    /// Interval from the FPC-corrected standard error, where the
    /// distribution defines one
    pub corrected: Option<ConfidenceInterval>,
}

/// Compute a confidence interval for the mean of a sample.
///
/// Sample-only: a population argument fails with
/// [`Error::InvalidOperation`]. The confidence level must lie in the
/// open interval (0, 1). [`ReferenceDistribution::Normal`] additionally
/// requires at least [`NORMAL_APPROXIMATION_MIN`] observations.
pub fn mean_confidence_interval(
    sample: &Dataset<'_>,
    confidence_level: f64,
    distribution: ReferenceDistribution,
) -> Result<MeanIntervals> {
    if sample.role() != Role::Sample {
        return Err(Error::sample_only("confidence interval estimation"));
    }
    let level = ConfidenceLevel::new(confidence_level)?;

    match distribution {
        ReferenceDistribution::StudentT => t_interval(sample, level),
        ReferenceDistribution::Normal => z_interval(sample, level),
    }
}

fn t_interval(sample: &Dataset<'_>, level: ConfidenceLevel) -> Result<MeanIntervals> {
    // Both standard errors first, so a degenerate sample surfaces
    // before any distribution work.
    let std_error = sample.standard_error()?;
    let std_error_corrected = sample.standard_error_corrected()?;

    let df = (sample.count() - 1) as f64;
    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {e}")))?;
    let critical_value = t_dist.inverse_cdf(level.quantile_probability());
    debug!(df, critical_value, "t-based interval");

    let mean = sample.mean();
    Ok(MeanIntervals {
        uncorrected: ConfidenceInterval::around(mean, critical_value * std_error, level.value()),
        corrected: Some(ConfidenceInterval::around(
            mean,
            critical_value * std_error_corrected,
            level.value(),
        )),
    })
}

fn z_interval(sample: &Dataset<'_>, level: ConfidenceLevel) -> Result<MeanIntervals> {
    if sample.count() < NORMAL_APPROXIMATION_MIN {
        return Err(Error::InsufficientSampleSize {
            expected: NORMAL_APPROXIMATION_MIN,
            actual: sample.count(),
        });
    }
    let parent = sample.parent().ok_or_else(|| {
        Error::InvalidState("sample has no parent population".to_string())
    })?;

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))?;
    let critical_value = normal.inverse_cdf(level.quantile_probability());

    // The normal branch treats the population spread as known: the
    // margin scales the parent's standard deviation, not the sample's
    // own estimate.
    let margin = critical_value * parent.std_dev()? / (sample.count() as f64).sqrt();
    debug!(critical_value, margin, "z-based interval");

    Ok(MeanIntervals {
        uncorrected: ConfidenceInterval::around(sample.mean(), margin, level.value()),
        corrected: None,
    })
}
