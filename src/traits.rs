/// Configuration for the breadth-first search in [Engine::transform_to_prime()][crate::Engine::transform_to_prime]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Skip values that have already been queued. This only saves work, the
    /// returned path is the same with or without it.
    pub track_visited: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            track_visited: true,
        }
    }
}

impl SearchConfig {
    /// Create a configuration for the plain search that may queue the same value several times
    pub fn exhaustive() -> Self {
        Self {
            track_visited: false,
        }
    }
}

/// A source of prime numbers
///
/// Implementors must return every prime below or equal to the limit, sorted
/// ascending without duplicates. The engine trusts this contract and doesn't
/// verify the list.
pub trait PrimeSource {
    /// Return all primes **below or equal to** limit
    fn primes_upto(&mut self, limit: u64) -> Vec<u64>;
}

impl<F: FnMut(u64) -> Vec<u64>> PrimeSource for F {
    #[inline]
    fn primes_upto(&mut self, limit: u64) -> Vec<u64> {
        self(limit)
    }
}
