//! Shaped-noise synthesis: fractal 1-D Perlin noise layered over
//! piecewise-cosine envelope curves.
//!
//! Pipeline:
//!   seed → `PrimeGenerator` → `PerlinNoise` → `ShapedNoise` (via `ShapeCreator`)
pub mod creator;
pub mod perlin;
pub mod presets;
pub mod shape;
pub mod shaped;

pub use creator::{NoiseOptions, ShapeCreator};
pub use perlin::PerlinNoise;
pub use shape::{Interpolator, ShapeFunction};
pub use shaped::ShapedNoise;

/// π truncated to eight significant digits. Stored series depend on this
/// exact value; `std::f64::consts::PI` shifts every interpolated point.
#[allow(clippy::approx_constant)]
pub const COSINE_PI: f64 = 3.1415927;

/// Cosine blend between `a` and `b` at fraction `x ∈ [0, 1]`.
#[inline]
pub fn cosine_interpolation(a: f64, b: f64, x: f64) -> f64 {
    let f = (1.0 - (x * COSINE_PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}
