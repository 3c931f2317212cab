use noise::NoiseFn;

use super::perlin::PerlinNoise;
use super::shape::ShapeFunction;

/// A baseline envelope plus noise whose amplitude follows a divergence
/// envelope:
///
/// ```text
/// v = shape(x·s) + noise(x·s) · divergence(x·s) + offset      (then max with cutoff)
/// ```
///
/// Any 1-D [`NoiseFn`] can supply the stochastic term; the simulator uses
/// [`PerlinNoise`].
#[derive(Debug, Clone)]
pub struct ShapedNoise<N = PerlinNoise> {
    noise: N,
    shape: ShapeFunction,
    divergence: ShapeFunction,
    offset: f64,
    cutoff: Option<f64>,
}

impl<N: NoiseFn<f64, 1>> ShapedNoise<N> {
    pub fn new(noise: N, shape: ShapeFunction, divergence: ShapeFunction) -> Self {
        Self { noise, shape, divergence, offset: 0.0, cutoff: None }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Lower bound on the output; `None` leaves it unbounded.
    pub fn with_cutoff(mut self, cutoff: Option<f64>) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn cutoff(&self) -> Option<f64> {
        self.cutoff
    }

    pub fn shape(&self) -> &ShapeFunction {
        &self.shape
    }

    pub fn divergence(&self) -> &ShapeFunction {
        &self.divergence
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    pub fn evaluate(&self, x: f64, scale: f64) -> f64 {
        let scaled_x = x * scale;
        let mut result = self.shape.evaluate(scaled_x)
            + self.noise.get([scaled_x]) * self.divergence.evaluate(scaled_x);
        result += self.offset;
        match self.cutoff {
            Some(cutoff) if cutoff > result => cutoff,
            _ => result,
        }
    }
}
