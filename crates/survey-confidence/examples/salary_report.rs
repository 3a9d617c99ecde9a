//! Analysis session over a salary population.
//!
//! Loads a population from a CSV path given as the first argument, or
//! synthesizes a log-normal salary population when no path is given,
//! then reports the population and a 550-observation random sample.
//!
//! ```text
//! cargo run --example salary_report [population.csv]
//! ```

use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal};
use survey_confidence::render_summary;
use survey_core::{Dataset, Result};

const SAMPLE_SIZE: usize = 550;
const SYNTHETIC_ROWS: usize = 10_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);

    let population = match std::env::args().nth(1) {
        Some(path) => Dataset::from_csv(path)?,
        None => {
            // Log-normal body with a median around 1400, roughly the
            // shape of the synthetic salary generator.
            let salaries = LogNormal::new(1400.0f64.ln(), 0.40)
                .expect("valid log-normal parameters")
                .sample_iter(&mut rng)
                .take(SYNTHETIC_ROWS)
                .map(f64::round)
                .collect();
            Dataset::population(salaries)?
        }
    };

    print!("{}", render_summary(&population)?);

    let sample = population.draw_sample(SAMPLE_SIZE, &mut rng)?;
    print!("{}", render_summary(&sample)?);

    Ok(())
}
