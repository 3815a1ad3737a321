//! Standalone functions over a factor count table, usable without an engine

use crate::buffer::SieveBuffer;
use crate::factor::factor_counts;
use std::fmt;
use tracing::debug;

/// Two adjacent members of an exact-factor selection, `first < second`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    pub first: u64,
    pub second: u64,
}

impl Pair {
    #[inline]
    pub fn new(first: u64, second: u64) -> Self {
        Pair { first, second }
    }

    /// The distance between the two members
    #[inline]
    pub fn gap(&self) -> u64 {
        self.second - self.first
    }
}

impl From<(u64, u64)> for Pair {
    fn from((first, second): (u64, u64)) -> Self {
        Pair { first, second }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Build the Ω table up to bound with a fresh [SieveBuffer]
pub fn omega_table(bound: usize) -> Vec<usize> {
    let mut pb = SieveBuffer::new();
    factor_counts(pb.primes(bound as u64), bound)
}

/// Return the integers i (ascending) whose factor count `table[i]` equals m.
///
/// Note that with m = 0 this returns `[0, 1]`, since both have no prime factor by convention.
pub fn select_exact(table: &[usize], m: usize) -> Vec<u64> {
    table
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == m)
        .map(|(i, _)| i as u64)
        .collect()
}

/// Return the adjacent entries of an ascending selection that are at most `gap` apart.
///
/// Selections with two or fewer members never produce a pair, even if the two members
/// are close enough.
pub fn adjacent_pairs(selection: &[u64], gap: u64) -> Vec<Pair> {
    if selection.len() <= 2 {
        return Vec::new();
    }
    debug!(?selection, gap, "selection before pair filtering");

    selection
        .windows(2)
        .filter(|w| w[1] - w[0] <= gap)
        .map(|w| Pair::new(w[0], w[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;

    #[test]
    fn select_exact_test() {
        let table = omega_table(20);
        assert_eq!(select_exact(&table, 0), [0, 1]);
        assert_eq!(select_exact(&table, 1), [2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(select_exact(&table, 2), [4, 6, 9, 10, 14, 15]);
        assert_eq!(select_exact(&table, 3), [8, 12, 18, 20]);
        assert_eq!(select_exact(&table, 4), [16]);
        assert!(select_exact(&table, 5).is_empty());
        assert!(select_exact(&table, usize::MAX).is_empty());

        // zero factors always gives the two conventional entries
        for bound in 1..10 {
            assert_eq!(select_exact(&omega_table(bound), 0), [0, 1]);
        }
    }

    #[test]
    fn select_exact_complete_test() {
        const BOUND: usize = 5000;
        let table = omega_table(BOUND);
        let mut seen = 0;
        for m in 0..16 {
            let selection = select_exact(&table, m);
            assert!(selection.windows(2).all(|w| w[0] < w[1]));
            assert!(selection.iter().all(|&i| table[i as usize] == m));
            seen += selection.len();
        }
        // every index falls in exactly one selection
        assert_eq!(seen, BOUND + 1);
    }

    #[test]
    fn adjacent_pairs_test() {
        let table = omega_table(20);
        let semiprimes = select_exact(&table, 2);
        assert_eq!(
            adjacent_pairs(&semiprimes, 2),
            [Pair::new(4, 6), Pair::new(9, 10), Pair::new(14, 15)]
        );
        assert_eq!(
            adjacent_pairs(&semiprimes, 1),
            [Pair::new(9, 10), Pair::new(14, 15)]
        );
        assert_eq!(adjacent_pairs(&semiprimes, 4).len(), 5);
        assert!(adjacent_pairs(&semiprimes, 0).is_empty());
    }

    #[test]
    fn adjacent_pairs_short_selection_test() {
        // two members within the gap still yield nothing
        assert!(adjacent_pairs(&[0, 1], 100).is_empty());
        assert!(adjacent_pairs(&[16], 100).is_empty());
        assert!(adjacent_pairs(&[], 100).is_empty());
        let table = omega_table(20);
        assert!(adjacent_pairs(&select_exact(&table, 0), 1).is_empty());

        // three members do produce pairs
        assert_eq!(adjacent_pairs(&[0, 1, 5], 1), [Pair::new(0, 1)]);
    }

    #[test]
    fn adjacent_pairs_random_test() {
        for _ in 0..100 {
            let mut selection: Vec<u64> = (0..50).map(|_| random::<u64>() % 1000).collect();
            selection.sort_unstable();
            selection.dedup();
            let gap = random::<u64>() % 40;
            let pairs = adjacent_pairs(&selection, gap);
            for pair in &pairs {
                assert!(pair.first < pair.second);
                assert!(pair.gap() <= gap);
                let i = selection.binary_search(&pair.first).unwrap();
                assert_eq!(selection[i + 1], pair.second);
            }
            let expected = selection.windows(2).filter(|w| w[1] - w[0] <= gap).count();
            assert_eq!(pairs.len(), expected);
        }
    }

    #[test]
    fn pair_format_test() {
        assert_eq!(Pair::new(4, 6).to_string(), "(4, 6)");
        assert_eq!(Pair::from((9, 10)), Pair::new(9, 10));
        assert_eq!(Pair::new(9, 10).gap(), 1);
    }
}
