use std::fmt::{self, Debug};

use tracing::debug;

use crate::error::AlgebraError;

/// The largest number tested for primality when building the default table.
pub const MAX_PRIME: u32 = u16::MAX as u32;

/// An ascending table of all primes up to a bound.
///
/// The table is built once and only read afterwards, so it can be shared by
/// reference between any number of fraction reductions.
#[derive(Clone, PartialEq, Eq)]
pub struct PrimeTable {
    bound: u32,
    primes: Vec<u32>,
}

impl PrimeTable {
    /// Sieve all primes `p <= bound`.
    pub fn new(bound: u32) -> Result<PrimeTable, AlgebraError> {
        let size = bound as usize + 1;

        let mut sieve: Vec<bool> = Vec::new();
        sieve
            .try_reserve_exact(size)
            .map_err(|_| AlgebraError::AllocationFailure { elements: size })?;
        sieve.resize(size, true);

        let mut count = 0;
        for i in 2..size {
            if sieve[i] {
                for j in (2 * i..size).step_by(i) {
                    sieve[j] = false;
                }
                count += 1;
            }
        }

        let mut primes = Vec::new();
        primes
            .try_reserve_exact(count)
            .map_err(|_| AlgebraError::AllocationFailure { elements: count })?;
        primes.extend(
            sieve
                .iter()
                .enumerate()
                .skip(2)
                .filter(|(_, is_prime)| **is_prime)
                .map(|(i, _)| i as u32),
        );

        debug!("Built prime table with {} primes up to {}", count, bound);

        Ok(PrimeTable { bound, primes })
    }

    /// The table used for fraction reduction, with all primes up to [MAX_PRIME].
    pub fn with_default_bound() -> Result<PrimeTable, AlgebraError> {
        Self::new(MAX_PRIME)
    }

    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn primes(&self) -> &[u32] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.primes.iter()
    }
}

impl Debug for PrimeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimeTable")
            .field("bound", &self.bound)
            .field("len", &self.primes.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a PrimeTable {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_table() {
        let t = PrimeTable::new(30).unwrap();
        assert_eq!(t.primes(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(t.bound(), 30);
    }

    #[test]
    fn bound_is_inclusive() {
        assert_eq!(PrimeTable::new(13).unwrap().primes().last(), Some(&13));
        assert_eq!(PrimeTable::new(2).unwrap().primes(), &[2]);
    }

    #[test]
    fn degenerate_bounds() {
        assert!(PrimeTable::new(0).unwrap().is_empty());
        assert!(PrimeTable::new(1).unwrap().is_empty());
    }

    #[test]
    fn default_table() {
        let t = PrimeTable::with_default_bound().unwrap();
        assert_eq!(t.len(), 6542);
        assert_eq!(t.primes()[..5], [2, 3, 5, 7, 11]);
        assert_eq!(t.primes().last(), Some(&65521));
        assert!(t.primes().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn debug_is_short() {
        let t = PrimeTable::new(10).unwrap();
        assert_eq!(format!("{:?}", t), "PrimeTable { bound: 10, len: 4 }");
    }
}
