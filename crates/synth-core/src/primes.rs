//! Seeded mapping from octave index to a pseudo-random prime.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use rand_mt::Mt;

use crate::error::{Result, SynthError};

/// Every prime in the table is strictly below this bound.
pub const PRIME_LIMIT: usize = 10_000;

/// All primes below [`PRIME_LIMIT`], ascending. Built once per process.
pub fn prime_table() -> &'static [u32] {
    static TABLE: OnceLock<Vec<u32>> = OnceLock::new();
    TABLE.get_or_init(|| sieve(PRIME_LIMIT))
}

fn sieve(limit: usize) -> Vec<u32> {
    if limit < 3 {
        return Vec::new();
    }
    let mut composite = vec![false; limit];
    let mut primes = Vec::new();
    for n in 2..limit {
        if composite[n] {
            continue;
        }
        primes.push(n as u32);
        let mut multiple = n * n;
        while multiple < limit {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
}

/// `init_by_array` key for an integer seed: the magnitude split into 32-bit
/// words, least significant first, with trailing zero words dropped. Zero
/// keys as `[0]`; a seed and its negation share a key.
fn seed_key(seed: i128) -> Vec<u32> {
    let mut magnitude = seed.unsigned_abs();
    let mut key = Vec::with_capacity(4);
    loop {
        key.push(magnitude as u32);
        magnitude >>= 32;
        if magnitude == 0 {
            return key;
        }
    }
}

fn seeded_stream(seed: i128) -> Mt {
    Mt::new_with_key(seed_key(seed))
}

/// Uniform float in `[0, 1)` with 53 bits of precision from two consecutive
/// words (`genrand_res53`).
fn res53(stream: &mut Mt) -> f64 {
    let a = stream.next_u32() >> 5;
    let b = stream.next_u32() >> 6;
    (f64::from(a) * 67_108_864.0 + f64::from(b)) * (1.0 / 9_007_199_254_740_992.0)
}

/// Deterministic index → prime mapping.
///
/// Each index is assigned a prime the first time it is requested, consuming
/// one draw from the seeded stream; later requests return the cached prime.
/// The value assigned to an index therefore depends on the order in which
/// distinct indices are first touched.
#[derive(Clone)]
pub struct PrimeGenerator {
    stream: Mt,
    primes: HashMap<usize, u32>,
}

impl PrimeGenerator {
    /// `None` seeds from entropy; the result is not reproducible.
    pub fn new(seed: Option<i128>) -> Self {
        Self::seeded(seed.unwrap_or_else(|| i128::from(rand::random::<u64>())))
    }

    pub fn seeded(seed: i128) -> Self {
        Self { stream: seeded_stream(seed), primes: HashMap::new() }
    }

    /// Prime assigned to `index`.
    pub fn get(&mut self, index: i64) -> Result<u32> {
        let index = usize::try_from(index).map_err(|_| SynthError::InvalidPrimeIndex(index))?;
        Ok(self.prime_at(index))
    }

    pub(crate) fn prime_at(&mut self, index: usize) -> u32 {
        let stream = &mut self.stream;
        *self.primes.entry(index).or_insert_with(|| random_prime(stream))
    }
}

impl fmt::Debug for PrimeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimeGenerator").field("primes", &self.primes).finish_non_exhaustive()
    }
}

fn random_prime(stream: &mut Mt) -> u32 {
    let table = prime_table();
    let slot = (res53(stream) * table.len() as f64) as usize;
    table[slot.min(table.len() - 1)]
}
