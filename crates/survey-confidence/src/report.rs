//! Textual summary reports
//!
//! Renders the banner-delimited block the analysis session prints for
//! each entity: role, mean, variance, standard deviation, and standard
//! error, plus the sample-only rows (corrected standard error, FPC,
//! and the intervals at the default confidence level).

use crate::{mean_confidence_interval, ReferenceDistribution, NORMAL_APPROXIMATION_MIN};
use survey_core::{Dataset, Result, Role};

/// Confidence level used for the intervals in rendered summaries.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

const BANNER: &str = "-----------------------------------------------------------------";

/// Render a human-readable summary of an entity's statistics.
///
/// All values are rounded to two decimal places. Fails if any
/// underlying statistic fails (e.g. a degenerate single-observation
/// sample); no partial report is produced.
pub fn render_summary(entity: &Dataset<'_>) -> Result<String> {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    push_row(&mut out, "Data Type:", entity.role().to_string());
    push_row(&mut out, "Average:", format!("{:.2}", entity.mean()));
    push_row(&mut out, "Variance:", format!("{:.2}", entity.variance()?));
    push_row(&mut out, "St. Dev:", format!("{:.2}", entity.std_dev()?));
    push_row(
        &mut out,
        "St. Err:",
        format!("{:.2}", entity.standard_error()?),
    );

    if entity.role() == Role::Sample {
        push_row(
            &mut out,
            "St. Err. Corrected:",
            format!("{:.2}", entity.standard_error_corrected()?),
        );
        push_row(&mut out, "FPC:", format!("{:.2}", entity.fpc()?));

        let t = mean_confidence_interval(
            entity,
            DEFAULT_CONFIDENCE_LEVEL,
            ReferenceDistribution::StudentT,
        )?;
        push_row(&mut out, "95% T CI:", format_bounds(&t.uncorrected));
        if let Some(corrected) = t.corrected {
            push_row(&mut out, "95% T CI (FPC):", format_bounds(&corrected));
        }

        if entity.count() >= NORMAL_APPROXIMATION_MIN {
            let z = mean_confidence_interval(
                entity,
                DEFAULT_CONFIDENCE_LEVEL,
                ReferenceDistribution::Normal,
            )?;
            push_row(&mut out, "95% Z CI:", format_bounds(&z.uncorrected));
        }
    }

    out.push_str(BANNER);
    out.push('\n');
    Ok(out)
}

fn push_row(out: &mut String, label: &str, value: String) {
    out.push_str(&format!("{label:<20}{value}\n"));
}

fn format_bounds(interval: &crate::ConfidenceInterval) -> String {
    format!("[{:.2}, {:.2}]", interval.lower, interval.upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use survey_core::Error;

    #[test]
    fn test_population_summary_fields() {
        let population = Dataset::population(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let summary = render_summary(&population).unwrap();

        assert!(summary.contains("Data Type:          POPULATION"));
        assert!(summary.contains("Average:            3.00"));
        assert!(summary.contains("Variance:           2.00"));
        assert!(summary.contains("St. Dev:            1.41"));
        assert!(summary.contains("St. Err:            0.63"));
        // Sample-only rows must be absent.
        assert!(!summary.contains("FPC:"));
        assert!(!summary.contains("T CI"));
    }

    #[test]
    fn test_sample_summary_fields() {
        let population = Dataset::population((1..=100).map(f64::from).collect()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sample = population.draw_sample(40, &mut rng).unwrap();
        let summary = render_summary(&sample).unwrap();

        assert!(summary.contains("Data Type:          SAMPLE"));
        assert!(summary.contains("St. Err. Corrected:"));
        assert!(summary.contains("FPC:"));
        assert!(summary.contains("95% T CI:"));
        assert!(summary.contains("95% T CI (FPC):"));
        assert!(summary.contains("95% Z CI:"));
    }

    #[test]
    fn test_small_sample_has_no_z_interval() {
        let population = Dataset::population((1..=100).map(f64::from).collect()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sample = population.draw_sample(10, &mut rng).unwrap();
        let summary = render_summary(&sample).unwrap();

        assert!(summary.contains("95% T CI:"));
        assert!(!summary.contains("95% Z CI:"));
    }

    #[test]
    fn test_degenerate_sample_yields_no_partial_report() {
        let population = Dataset::population(vec![1.0, 2.0, 3.0]).unwrap();
        let sample =
            Dataset::with_role(vec![2.0], Role::Sample, Some(&population)).unwrap();
        assert!(matches!(
            render_summary(&sample).unwrap_err(),
            Error::DegenerateSample(_)
        ));
    }
}
