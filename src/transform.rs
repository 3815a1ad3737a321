//! Shortest move sequences turning an integer into a prime.
//!
//! Two moves are allowed on a value x: a 0-step giving `2x + 1` and a 1-step giving `x + 1`.
//! No intermediate value may exceed the bound. A breadth-first search tries the 0-step before
//! the 1-step at every value, so the first prime found is reached by a shortest sequence, and
//! among the shortest ones by the smallest when read as a binary string.

use crate::buffer::PrimeSet;
use crate::error::Error;
use crate::traits::SearchConfig;
use bitvec::bitvec;
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Returned in place of a move string when no prime can be reached
pub const FAILURE_SENTINEL: &str = "-";

/// A single move in the transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// x -> 2x + 1, written as '0'
    Zero,
    /// x -> x + 1, written as '1'
    One,
}

impl Step {
    /// Apply the move on x, return None if the result would exceed the bound
    #[inline]
    pub fn apply(self, x: u64, bound: u64) -> Option<u64> {
        let next = match self {
            Step::Zero => x.checked_mul(2).and_then(|v| v.checked_add(1)),
            Step::One => x.checked_add(1),
        };
        next.filter(|&v| v <= bound)
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Step::Zero => '0',
            Step::One => '1',
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Step {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Step::Zero),
            '1' => Ok(Step::One),
            _ => Err(Error::InvalidStep(c)),
        }
    }
}

/// A sequence of moves, displayed as a string of '0' and '1'
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransformPath(Vec<Step>);

impl TransformPath {
    #[inline]
    pub fn new() -> Self {
        TransformPath(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// Return a copy of this path extended by one more step
    fn then(&self, step: Step) -> Self {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend_from_slice(&self.0);
        steps.push(step);
        TransformPath(steps)
    }

    /// Replay the moves from start. Return the final value, or None if
    /// any intermediate value exceeds the bound.
    pub fn apply(&self, start: u64, bound: u64) -> Option<u64> {
        self.0
            .iter()
            .try_fold(start, |x, step| step.apply(x, bound))
    }
}

impl From<Vec<Step>> for TransformPath {
    fn from(steps: Vec<Step>) -> Self {
        TransformPath(steps)
    }
}

impl fmt::Display for TransformPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for TransformPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(Step::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(TransformPath)
    }
}

/// A queued search state
#[derive(Debug, Clone)]
struct Node {
    value: u64,
    path: TransformPath,
}

/// Find the shortest sequence of moves turning n into one of the primes in the set,
/// without any value exceeding the bound of the set.
///
/// Return an empty path if n is already in the set, and None if no prime is reachable.
pub fn shortest_path(n: u64, primes: &PrimeSet, config: SearchConfig) -> Option<TransformPath> {
    if primes.contains(n) {
        return Some(TransformPath::new());
    }

    let bound = primes.bound();
    let mut visited = if config.track_visited {
        let mut table = bitvec![0; bound as usize + 1];
        if n <= bound {
            table.set(n as usize, true);
        }
        Some(table)
    } else {
        None
    };

    let mut queue = VecDeque::new();
    queue.push_back(Node {
        value: n,
        path: TransformPath::new(),
    });

    let mut expanded = 0usize;
    while let Some(Node { value, path }) = queue.pop_front() {
        expanded += 1;
        for &step in &[Step::Zero, Step::One] {
            let next = match step.apply(value, bound) {
                Some(v) => v,
                None => continue,
            };
            if primes.contains(next) {
                let path = path.then(step);
                debug!(n, prime = next, %path, expanded, "found transformation");
                return Some(path);
            }
            if let Some(table) = visited.as_mut() {
                if table[next as usize] {
                    continue;
                }
                table.set(next as usize, true);
            }
            queue.push_back(Node {
                value: next,
                path: path.then(step),
            });
        }
    }

    debug!(n, bound, expanded, "no prime reachable");
    None
}
