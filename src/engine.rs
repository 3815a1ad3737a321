//! The engine binds an upper bound to the primes below it and answers every query on that range

use crate::buffer::{PrimeSet, SieveBuffer};
use crate::error::{Error, Result};
use crate::factor::factor_counts;
use crate::nt_funcs::{adjacent_pairs, select_exact, Pair};
use crate::traits::{PrimeSource, SearchConfig};
use crate::transform::{shortest_path, TransformPath, FAILURE_SENTINEL};
use num_traits::ToPrimitive;
use tracing::debug;

/// Prime factor counting and prime transformation over the range `[0, upper_bound]`.
///
/// The engine only keeps the bound and its primes. Factor tables and selections are
/// rebuilt by each query and dropped afterwards.
#[derive(Debug, Clone)]
pub struct Engine {
    upper_bound: u64,
    size: usize, // upper_bound as an index
    primes: PrimeSet,
    config: SearchConfig,
}

impl Engine {
    /// Create an engine with primes generated by a [SieveBuffer]
    pub fn new(upper_bound: u64) -> Result<Self> {
        Self::with_source(upper_bound, &mut SieveBuffer::new())
    }

    /// Create an engine with primes from the given source. The source is trusted to return
    /// all primes below or equal to the bound, ascending and without duplicates.
    pub fn with_source<S: PrimeSource + ?Sized>(upper_bound: u64, source: &mut S) -> Result<Self> {
        if upper_bound == 0 {
            return Err(Error::InvalidBound(upper_bound));
        }
        // the table needs upper_bound + 1 slots
        let size = upper_bound
            .to_usize()
            .filter(|&s| s < usize::MAX)
            .ok_or(Error::BoundTooLarge(upper_bound))?;

        let primes = PrimeSet::new(source.primes_upto(upper_bound), size);
        debug!(upper_bound, primes = primes.len(), "engine ready");
        Ok(Engine {
            upper_bound,
            size,
            primes,
            config: SearchConfig::default(),
        })
    }

    /// Replace the configuration used by [Engine::transform_to_prime()]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }

    #[inline]
    pub fn primes(&self) -> &PrimeSet {
        &self.primes
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Return the sequence L[0..=upper_bound] where L[i] is the number of prime factors of i,
    /// counted with multiplicity
    pub fn factor_count_sequence(&self) -> Vec<usize> {
        factor_counts(&self.primes, self.size)
    }

    /// Return the ascending list of integers up to the bound having exactly m prime factors
    /// (counted with multiplicity)
    pub fn numbers_with_exact_factors(&self, m: usize) -> Vec<u64> {
        select_exact(&self.factor_count_sequence(), m)
    }

    /// Return the pairs of adjacent entries in [Engine::numbers_with_exact_factors()] that are
    /// at most gap apart
    pub fn pairs_with_gap(&self, m: usize, gap: u64) -> Vec<Pair> {
        adjacent_pairs(&self.numbers_with_exact_factors(m), gap)
    }

    /// Find the shortest sequence of moves (0-step: 2x+1, 1-step: x+1) that turns n into a
    /// prime without exceeding the bound, see [crate::transform]
    pub fn shortest_transform(&self, n: u64) -> Option<TransformPath> {
        shortest_path(n, &self.primes, self.config)
    }

    /// The move string of [Engine::shortest_transform()], empty if n is already a prime,
    /// and [FAILURE_SENTINEL] if no prime is reachable
    pub fn transform_to_prime(&self, n: u64) -> String {
        match self.shortest_transform(n) {
            Some(path) => path.to_string(),
            None => FAILURE_SENTINEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIME20: [u64; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

    #[test]
    fn construction_test() {
        assert_eq!(Engine::new(0).unwrap_err(), Error::InvalidBound(0));
        assert_eq!(
            Engine::new(u64::MAX).unwrap_err(),
            Error::BoundTooLarge(u64::MAX)
        );

        let engine = Engine::new(20).unwrap();
        assert_eq!(engine.upper_bound(), 20);
        assert_eq!(engine.primes().as_slice(), PRIME20);
        assert_eq!(engine.config(), SearchConfig::default());

        let engine = Engine::new(1).unwrap();
        assert!(engine.primes().is_empty());
        assert_eq!(engine.factor_count_sequence(), [0, 0]);
    }

    #[test]
    fn custom_source_test() {
        let mut calls = 0;
        let mut source = |limit: u64| -> Vec<u64> {
            calls += 1;
            PRIME20.iter().copied().filter(|&p| p <= limit).collect()
        };
        let engine = Engine::with_source(20, &mut source).unwrap();
        assert_eq!(calls, 1);
        assert_eq!(engine.primes().as_slice(), PRIME20);
        assert_eq!(engine.transform_to_prime(8), "0");
    }

    #[test]
    fn factor_count_sequence_test() {
        let engine = Engine::new(20).unwrap();
        let seq = engine.factor_count_sequence();
        assert_eq!(seq.len(), 21);
        assert_eq!(seq[0], 0);
        assert_eq!(seq[1], 0);
        assert_eq!(seq[12], 3);
        assert_eq!(seq[16], 4);
        for &p in PRIME20.iter() {
            assert_eq!(seq[p as usize], 1);
        }
    }

    #[test]
    fn selection_and_pairs_test() {
        let engine = Engine::new(20).unwrap();
        assert_eq!(engine.numbers_with_exact_factors(0), [0, 1]);
        assert_eq!(engine.numbers_with_exact_factors(2), [4, 6, 9, 10, 14, 15]);
        assert!(engine.numbers_with_exact_factors(7).is_empty());

        assert_eq!(
            engine.pairs_with_gap(2, 2),
            [Pair::new(4, 6), Pair::new(9, 10), Pair::new(14, 15)]
        );
        // {0, 1} is close enough but too short to pair
        assert!(engine.pairs_with_gap(0, 1).is_empty());
        assert!(engine.pairs_with_gap(7, 100).is_empty());
        assert!(engine.pairs_with_gap(2, 0).is_empty());
    }

    #[test]
    fn transform_to_prime_test() {
        let engine = Engine::new(20).unwrap();
        assert_eq!(engine.transform_to_prime(8), "0");
        assert_eq!(engine.transform_to_prime(9), "0");
        for n in 0..=20 {
            let result = engine.transform_to_prime(n);
            assert_eq!(result.is_empty(), PRIME20.contains(&n), "transforming {}", n);
        }
        assert_eq!(engine.transform_to_prime(20), FAILURE_SENTINEL);
        assert_eq!(engine.transform_to_prime(23), "-");

        let exhaustive = engine.clone().with_config(SearchConfig::exhaustive());
        for n in 0..=25 {
            assert_eq!(
                engine.transform_to_prime(n),
                exhaustive.transform_to_prime(n)
            );
        }
    }

    #[test]
    fn transform_path_replay_test() {
        let engine = Engine::new(1000).unwrap();
        for n in 0..=1000 {
            match engine.shortest_transform(n) {
                Some(path) => {
                    let end = path.apply(n, 1000).unwrap();
                    assert!(engine.primes().contains(end), "{} -> {}", n, end);
                }
                None => assert_eq!(engine.transform_to_prime(n), FAILURE_SENTINEL),
            }
        }
        // no prime in (997, 1000]
        assert_eq!(engine.transform_to_prime(998), FAILURE_SENTINEL);
    }
}
