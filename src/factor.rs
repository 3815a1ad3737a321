//! Counting prime factors with multiplicity (the big omega function Ω) over a whole range.
//!
//! Instead of factoring every integer independently, the table is filled by walking
//! the multiples of each prime, in the manner of a sieve. The total work is a harmonic
//! style sum over the primes, about O(n log log n).
//!
//! See <https://en.wikipedia.org/wiki/Prime_omega_function>

use num_integer::Integer;

/// Return the exponent of the prime `p` in `k`, i.e. the largest e such that p^e divides k.
///
/// Zero has no meaningful exponent and returns 0.
pub fn prime_exponent(k: u64, p: u64) -> usize {
    debug_assert!(p > 1);
    if k == 0 {
        return 0;
    }

    let mut residual = k;
    let mut exp = 0;
    while Integer::is_multiple_of(&residual, &p) {
        residual /= p;
        exp += 1;
    }
    exp
}

/// Build the table `Ω[0..=bound]`, where `Ω[i]` is the number of prime factors of `i`
/// counted with multiplicity. By convention `Ω[0] = Ω[1] = 0`.
///
/// The primes must contain every prime not exceeding the bound. Their order doesn't matter
/// since each prime contributes to the table independently.
pub fn factor_counts<'a, I: IntoIterator<Item = &'a u64>>(primes: I, bound: usize) -> Vec<usize> {
    let mut table = vec![0usize; bound + 1];
    for &p in primes {
        // p is at least 2 so the walk below always advances
        if p < 2 || p > bound as u64 {
            continue;
        }
        for k in (p..=bound as u64).step_by(p as usize) {
            table[k as usize] += prime_exponent(k, p);
        }
    }
    table
}
