//! Factory for [`ShapedNoise`] instances.
use serde::{Deserialize, Serialize};

use super::perlin::PerlinNoise;
use super::shape::ShapeFunction;
use super::shaped::ShapedNoise;
use crate::error::Result;

/// Tuning for the stochastic term and output post-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseOptions {
    /// Amplitude decay per octave.
    pub persistence: f64,
    pub octaves: u32,
    pub offset: f64,
    /// Lower bound on the output.
    pub cutoff: Option<f64>,
}

impl Default for NoiseOptions {
    fn default() -> Self {
        Self { persistence: 0.2, octaves: 8, offset: 0.0, cutoff: None }
    }
}

pub struct ShapeCreator;

impl ShapeCreator {
    /// Sample points used by [`ShapeCreator::create_shape_function`] when no
    /// count is given.
    pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

    /// Assemble a shaped noise from a baseline and a divergence envelope.
    ///
    /// Missing shape defaults to constant 0, missing divergence to constant 1,
    /// i.e. bare Perlin noise. Every call derives its own prime generator.
    pub fn create_noise_function(
        shape: Option<ShapeFunction>,
        divergence: Option<ShapeFunction>,
        seed: Option<i128>,
        options: &NoiseOptions,
    ) -> ShapedNoise {
        let shape = shape.unwrap_or_else(|| ShapeFunction::constant(0.0));
        let divergence = divergence.unwrap_or_else(|| ShapeFunction::constant(1.0));
        let perlin = PerlinNoise::seeded(options.persistence, options.octaves, seed);

        ShapedNoise::new(perlin, shape, divergence)
            .with_offset(options.offset)
            .with_cutoff(options.cutoff)
    }

    /// A random envelope: Perlin noise sampled at `i / count` for
    /// `i ∈ [0, count)`. Fails when `count` is zero.
    pub fn create_shape_function(
        count: usize,
        persistence: f64,
        octaves: u32,
        seed: Option<i128>,
    ) -> Result<ShapeFunction> {
        let perlin = PerlinNoise::seeded(persistence, octaves, seed);
        let x: Vec<f64> = (0..count).map(|i| i as f64 / count as f64).collect();
        let y = x.iter().map(|&x| perlin.sample(x)).collect();
        ShapeFunction::new(x, y)
    }

    /// Generated baseline envelope with an explicit divergence curve.
    ///
    /// The baseline uses `shape_seed`, the stochastic term `perlin_seed`; both
    /// share the persistence and octave count in `options`.
    pub fn create_shaped_perlin_function(
        divergence_x: Vec<f64>,
        divergence_y: Vec<f64>,
        shape_seed: Option<i128>,
        perlin_seed: Option<i128>,
        count: usize,
        options: &NoiseOptions,
    ) -> Result<ShapedNoise> {
        let divergence = ShapeFunction::new(divergence_x, divergence_y)?;
        let shape = Self::create_shape_function(count, options.persistence, options.octaves, shape_seed)?;
        let perlin = PerlinNoise::seeded(options.persistence, options.octaves, perlin_seed);

        Ok(ShapedNoise::new(perlin, shape, divergence)
            .with_offset(options.offset)
            .with_cutoff(options.cutoff))
    }
}
