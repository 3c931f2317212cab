//! 1-D fractal value noise built on an integer hash.
//!
//! Each octave `o` samples `x · 2^o`, weights it by `persistence^o`, and
//! perturbs the hash with its own prime so octaves decorrelate. The sum runs
//! over `octaves − 1` layers.
use noise::NoiseFn;

use super::cosine_interpolation;
use crate::primes::PrimeGenerator;

/// Fixed scale-up applied to `x` at the public call boundary.
pub const NOISE_SCALE: f64 = 10.0;

const HASH_MASK: u32 = 0x7fff_ffff;

/// The hash only sees the low 32 bits of a lattice index.
const LATTICE_PERIOD: f64 = 4_294_967_296.0;

#[derive(Debug, Clone)]
pub struct PerlinNoise {
    persistence: f64,
    octaves: u32,
    octave_primes: Vec<u32>,
}

impl PerlinNoise {
    /// Build from an existing prime source.
    ///
    /// Primes for every summed octave are drawn immediately, in octave order.
    /// That is the order a first evaluation would touch them in, so the
    /// result is identical to lazy lookup while keeping evaluation `&self`.
    pub fn new(persistence: f64, octaves: u32, primes: &mut PrimeGenerator) -> Self {
        let summed = octaves.saturating_sub(1) as usize;
        let octave_primes = (0..summed).map(|octave| primes.prime_at(octave)).collect();
        Self { persistence, octaves, octave_primes }
    }

    /// Build with a fresh prime generator for `seed`.
    pub fn seeded(persistence: f64, octaves: u32, seed: Option<i128>) -> Self {
        Self::new(persistence, octaves, &mut PrimeGenerator::new(seed))
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Perturbation prime per summed octave.
    pub fn octave_primes(&self) -> &[u32] {
        &self.octave_primes
    }

    /// Integer hash noise in roughly `(-1, 1]`.
    ///
    /// All arithmetic wraps in 32 bits and the result is masked to 31, which
    /// yields the same low bits as unbounded integer arithmetic followed by
    /// the mask. Only the low 32 bits of `x` matter.
    pub fn noise(x: u32, perturbation: u32) -> f64 {
        let mut n = x.wrapping_add(perturbation);
        n = ((n << 13) & HASH_MASK) ^ n;
        n = n
            .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15_731).wrapping_add(789_221))
            .wrapping_add(1_376_312_589)
            & HASH_MASK;
        1.0 - f64::from(n) / 1_073_741_824.0
    }

    pub fn smoothed_noise(x: u32, perturbation: u32) -> f64 {
        Self::noise(x, perturbation) / 2.0
            + Self::noise(x.wrapping_sub(1), perturbation) / 4.0
            + Self::noise(x.wrapping_add(1), perturbation) / 4.0
    }

    /// Smoothed noise at the two lattice points around `x`, cosine-blended.
    /// The lattice index is `x` truncated toward zero, reduced mod 2^32 so any
    /// finite `x` maps to the same hash input as its exact integer part.
    ///
    /// # Panics
    /// If `octave` is not one of the summed octaves.
    pub fn interpolated_noise(&self, x: f64, octave: usize) -> f64 {
        let int_x = x.trunc();
        let frac_x = x - int_x;
        let lattice = int_x.rem_euclid(LATTICE_PERIOD) as u32;
        let perturbation = self.octave_primes[octave];

        let v1 = Self::smoothed_noise(lattice, perturbation);
        let v2 = Self::smoothed_noise(lattice.wrapping_add(1), perturbation);
        cosine_interpolation(v1, v2, frac_x)
    }

    /// Octave sum at `x` without the boundary scale-up.
    pub fn perlin_noise_1d(&self, x: f64) -> f64 {
        let mut total = 0.0;
        for octave in 0..self.octave_primes.len() {
            let frequency = 2f64.powf(octave as f64);
            let amplitude = self.persistence.powf(octave as f64);
            total += self.interpolated_noise(x * frequency, octave) * amplitude;
        }
        total
    }

    /// Evaluate at `x`; the octave sum sees `x · NOISE_SCALE`.
    pub fn sample(&self, x: f64) -> f64 {
        self.perlin_noise_1d(x * NOISE_SCALE)
    }
}

impl NoiseFn<f64, 1> for PerlinNoise {
    fn get(&self, point: [f64; 1]) -> f64 {
        self.sample(point[0])
    }
}
