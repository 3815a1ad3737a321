//! Prime list generation and the immutable prime set shared by the engine

use crate::traits::PrimeSource;
use bitvec::{bitvec, vec::BitVec};
use num_traits::ToPrimitive;

/// SieveBuffer keeps a growing list of primes produced by a segmented sieve of Eratosthenes
#[derive(Debug, Clone)]
pub struct SieveBuffer {
    list: Vec<u64>, // list of found prime numbers
    current: u64, // all primes smaller than this value are in the list, always odd
}

impl SieveBuffer {
    #[inline]
    pub fn new() -> Self {
        let list = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
        SieveBuffer { list, current: 41 }
    }

    /// Make sure all primes below limit are in the list
    pub fn reserve(&mut self, limit: u64) {
        let odd_limit = limit | 1;
        let current = self.current;
        debug_assert!(current % 2 == 1);
        if odd_limit <= current {
            return;
        }

        // each bit represents an odd number starting from current
        let mut sieve = bitvec![0; ((odd_limit - current) / 2) as usize];

        // cross out with known primes, skipping 2 since only odd numbers are stored
        for &p in self.list.iter().skip(1) {
            let start = if p * p < current {
                p * ((current / p) | 1) // an odd multiple near current
            } else {
                p * p
            };
            for multi in (start..odd_limit).step_by(2 * p as usize) {
                if multi >= current {
                    sieve.set(((multi - current) / 2) as usize, true);
                }
            }
        }

        // cross out with odd numbers found in the new segment
        for p in (current..num_integer::sqrt(odd_limit) + 1).step_by(2) {
            for multi in (p * p..odd_limit).step_by(2 * p as usize) {
                sieve.set(((multi - current) / 2) as usize, true);
            }
        }

        self.list
            .extend(sieve.iter_zeros().map(|x| (x as u64) * 2 + current));
        self.current = odd_limit;
    }

    /// Returns all primes **below or equal to** limit. The primes are sorted.
    pub fn primes(&mut self, limit: u64) -> &[u64] {
        self.reserve(limit.saturating_add(1));
        let position = match self.list.binary_search(&limit) {
            Ok(p) => p + 1,
            Err(p) => p,
        };
        &self.list[..position]
    }

    /// Drop the primes generated so far, keeping the initial small primes
    pub fn clear(&mut self) {
        self.list.truncate(12);
        self.list.shrink_to_fit();
        self.current = 41;
    }
}

impl Default for SieveBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeSource for SieveBuffer {
    fn primes_upto(&mut self, limit: u64) -> Vec<u64> {
        self.primes(limit).to_vec()
    }
}

/// The primes below or equal to a fixed bound, with constant time membership test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSet {
    list: Vec<u64>,
    table: BitVec, // table[i] is set iff i is in the list
}

impl PrimeSet {
    /// Build the set from an ascending prime list. Entries above the bound are dropped.
    pub(crate) fn new(mut list: Vec<u64>, bound: usize) -> Self {
        let position = match list.binary_search(&(bound as u64)) {
            Ok(p) => p + 1,
            Err(p) => p,
        };
        list.truncate(position);

        let mut table = bitvec![0; bound + 1];
        for &p in &list {
            table.set(p as usize, true);
        }
        PrimeSet { list, table }
    }

    /// Test whether n is one of the primes in this set. Values above the
    /// bound are never contained, even if they are prime.
    #[inline]
    pub fn contains(&self, n: u64) -> bool {
        n.to_usize()
            .and_then(|i| self.table.get(i).map(|bit| *bit))
            .unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The largest value that could be contained in the set
    #[inline]
    pub fn bound(&self) -> u64 {
        (self.table.len() - 1) as u64
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.list
    }
}

impl<'a> IntoIterator for &'a PrimeSet {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
