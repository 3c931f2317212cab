//! Fixed envelope curves over normalized simulation time `[0, 1]`.
//!
//! Rate and pressure shapes are sampled at `x = [0.0, 0.2, 0.5, 0.7, 1.0]`,
//! divergence envelopes at `x = [0.0, 0.5, 0.7, 0.9, 1.0]`.
use std::sync::OnceLock;

use super::shape::ShapeFunction;

const SHAPE_X: [f64; 5] = [0.0, 0.2, 0.5, 0.7, 1.0];
const DIVERGENCE_X: [f64; 5] = [0.0, 0.5, 0.7, 0.9, 1.0];

/// Well and block envelope curves, built once and shared.
#[derive(Debug)]
pub struct Presets {
    /// Early peak, long decline.
    pub oil_rate: ShapeFunction,
    pub gas_rate: ShapeFunction,
    /// Water breakthrough: rises toward the end of field life.
    pub water_rate: ShapeFunction,
    /// Depletion from 1.0 down to 0.1.
    pub block_pressure: ShapeFunction,
    pub oil_divergence: ShapeFunction,
    pub gas_divergence: ShapeFunction,
    pub water_divergence: ShapeFunction,
    pub block_divergence: ShapeFunction,
}

pub fn presets() -> &'static Presets {
    static PRESETS: OnceLock<Presets> = OnceLock::new();
    PRESETS.get_or_init(|| Presets {
        oil_rate: ShapeFunction::from_points(SHAPE_X, [0.0, 0.7, 0.2, 0.1, 0.01]),
        gas_rate: ShapeFunction::from_points(SHAPE_X, [0.0, 0.5, 0.7, 0.7, 0.3]),
        water_rate: ShapeFunction::from_points(SHAPE_X, [0.0, 0.01, 0.3, 0.7, 1.0]),
        block_pressure: ShapeFunction::from_points(SHAPE_X, [1.0, 0.7, 0.5, 0.3, 0.1]),
        oil_divergence: ShapeFunction::from_points(DIVERGENCE_X, [0.0, 0.5, 0.3, 0.1, 0.01]),
        gas_divergence: ShapeFunction::from_points(DIVERGENCE_X, [0.0, 0.1, 0.3, 0.2, 0.1]),
        water_divergence: ShapeFunction::from_points(DIVERGENCE_X, [0.0, 0.1, 0.3, 0.2, 0.01]),
        block_divergence: ShapeFunction::from_points(DIVERGENCE_X, [0.0, 0.1, 0.2, 0.3, 0.5]),
    })
}
