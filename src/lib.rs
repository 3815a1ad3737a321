//! This crate counts prime factors with multiplicity (Ω) for every integer in a bounded range,
//! finds the integers with an exact factor count that sit close to each other, and searches for
//! the shortest way to turn an integer into a prime using the moves `x -> 2x + 1` and `x -> x + 1`.
//!
//! ```
//! use prime_omega::{Engine, Pair};
//!
//! let engine = Engine::new(20).unwrap();
//! assert_eq!(engine.factor_count_sequence()[12], 3);
//! assert_eq!(engine.numbers_with_exact_factors(2), [4, 6, 9, 10, 14, 15]);
//! assert_eq!(engine.pairs_with_gap(2, 2)[0], Pair::new(4, 6));
//! assert_eq!(engine.transform_to_prime(8), "0");
//! ```

mod buffer;
mod engine;
mod error;
pub mod factor;
pub mod nt_funcs;
mod traits;
pub mod transform;

pub use buffer::{PrimeSet, SieveBuffer};
pub use engine::Engine;
pub use error::{Error, Result};
pub use nt_funcs::Pair;
pub use traits::{PrimeSource, SearchConfig};
pub use transform::{Step, TransformPath, FAILURE_SENTINEL};
