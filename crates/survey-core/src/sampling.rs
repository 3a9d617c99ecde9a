//! Random sampling from a population
//!
//! Draws are uniform over the population's indices and *with
//! replacement*: duplicates are possible and the requested size may
//! exceed the population size. The randomness source is injected by
//! the caller so tests can use a seeded generator and assert exact
//! draw sequences.

use crate::{Dataset, Error, Result, Role};
use rand::Rng;
use tracing::{debug, instrument};

impl<'p> Dataset<'p> {
    /// Draw `n` observations uniformly at random, with replacement.
    ///
    /// Population-only: invoking this on a sample fails with
    /// [`Error::InvalidOperation`]. Requires `n >= 1`. The returned
    /// sample borrows `self` as its parent, so the population must
    /// outlive it.
    #[instrument(skip(self, rng), fields(population_size = self.count()))]
    pub fn draw_sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Dataset<'_>> {
        if self.role() != Role::Population {
            return Err(Error::population_only("sampling"));
        }
        if n == 0 {
            return Err(Error::InvalidParameter(
                "sample size must be at least 1".to_string(),
            ));
        }

        let values = self.values();
        let data: Vec<f64> = (0..n)
            .map(|_| values[rng.gen_range(0..values.len())])
            .collect();
        debug!(drawn = data.len(), "drew sample with replacement");

        Dataset::with_role(data, Role::Sample, Some(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn population() -> Dataset<'static> {
        Dataset::population((1..=50).map(f64::from).collect()).unwrap()
    }

    #[test]
    fn test_sample_has_requested_size_and_parent() {
        let population = population();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sample = population.draw_sample(10, &mut rng).unwrap();

        assert_eq!(sample.count(), 10);
        assert_eq!(sample.role(), Role::Sample);
        assert!(sample.parent().is_some());
        assert_eq!(sample.parent().unwrap().count(), population.count());
    }

    #[test]
    fn test_every_drawn_value_comes_from_parent() {
        let population = population();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let sample = population.draw_sample(200, &mut rng).unwrap();

        for value in sample.values() {
            assert!(population.values().contains(value));
        }
    }

    #[test]
    fn test_draw_may_exceed_population_size() {
        let population = Dataset::population(vec![1.0, 2.0, 3.0]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let sample = population.draw_sample(10, &mut rng).unwrap();
        assert_eq!(sample.count(), 10);
    }

    #[test]
    fn test_seeded_draws_are_deterministic() {
        let population = population();

        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        let sample_a = population.draw_sample(25, &mut rng_a).unwrap();
        let sample_b = population.draw_sample(25, &mut rng_b).unwrap();

        assert_eq!(sample_a.values(), sample_b.values());
    }

    #[test]
    fn test_sampling_a_sample_is_rejected() {
        let population = population();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sample = population.draw_sample(10, &mut rng).unwrap();

        let err = sample.draw_sample(5, &mut rng).unwrap_err();
        match err {
            Error::InvalidOperation(message) => {
                assert!(message.contains("population"));
            }
            other => panic!("expected InvalidOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_draws_rejected() {
        let population = population();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            population.draw_sample(0, &mut rng).unwrap_err(),
            Error::InvalidParameter(_)
        ));
    }
}
