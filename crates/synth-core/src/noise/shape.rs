//! Piecewise-cosine envelope curves over normalized time.
use std::sync::Arc;

use super::cosine_interpolation;
use crate::error::{Result, SynthError};

/// Ordered control points with cosine interpolation between neighbours.
/// Outside the x-range the boundary y is returned. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Interpolator {
    /// `x` must be non-decreasing; equal neighbours form a step.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(SynthError::ControlPointLengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        if x.is_empty() {
            return Err(SynthError::EmptyControlPoints);
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let last = self.x.len() - 1;
        if x <= self.x[0] {
            return self.y[0];
        }
        if x >= self.x[last] {
            return self.y[last];
        }
        for (xs, ys) in self.x.windows(2).zip(self.y.windows(2)) {
            if xs[0] <= x && x < xs[1] {
                let frac_x = (x - xs[0]) / (xs[1] - xs[0]);
                return cosine_interpolation(ys[0], ys[1], frac_x);
            }
        }
        // Only NaN falls through every bracket.
        f64::NAN
    }
}

/// An [`Interpolator`] with an output scale.
///
/// Control points are shared behind an `Arc`; scaled copies reuse them, so
/// one preset curve can back every entity without duplication.
#[derive(Debug, Clone)]
pub struct ShapeFunction {
    interpolator: Arc<Interpolator>,
    scale: f64,
}

impl ShapeFunction {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        Self::with_scale(x, y, 1.0)
    }

    pub fn with_scale(x: Vec<f64>, y: Vec<f64>, scale: f64) -> Result<Self> {
        Ok(Self { interpolator: Arc::new(Interpolator::new(x, y)?), scale })
    }

    /// Fixed-size control points; equal lengths hold by construction and
    /// `N == 0` is rejected at compile time.
    pub(crate) fn from_points<const N: usize>(x: [f64; N], y: [f64; N]) -> Self {
        const { assert!(N > 0, "a shape function needs at least one control point") };
        Self {
            interpolator: Arc::new(Interpolator { x: x.to_vec(), y: y.to_vec() }),
            scale: 1.0,
        }
    }

    /// Single control point: `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self::from_points([0.0], [value])
    }

    /// Same control points, new scale. `self` is left untouched.
    pub fn scaled_copy(&self, scale: f64) -> Self {
        Self { interpolator: Arc::clone(&self.interpolator), scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// True when both functions read the same control-point storage.
    pub fn shares_points_with(&self, other: &ShapeFunction) -> bool {
        Arc::ptr_eq(&self.interpolator, &other.interpolator)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.interpolator.evaluate(x) * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn oil_curve() -> ShapeFunction {
        ShapeFunction::from_points([0.0, 0.2, 0.5, 0.7, 1.0], [0.0, 0.7, 0.2, 0.1, 0.01])
    }

    #[test]
    fn boundaries_return_end_values() {
        let shape = oil_curve();
        assert_eq!(shape.evaluate(0.0), 0.0);
        assert_eq!(shape.evaluate(-3.0), 0.0);
        assert_eq!(shape.evaluate(1.0), 0.01);
        assert_eq!(shape.evaluate(42.0), 0.01);

        let scaled = shape.scaled_copy(3.0);
        assert_eq!(scaled.evaluate(-1.0), 0.0);
        assert_eq!(scaled.evaluate(2.0), 0.01 * 3.0);
    }

    #[test]
    fn interior_values_match_known_points() {
        let shape = oil_curve();
        assert_abs_diff_eq!(shape.evaluate(0.1), 0.350_000_008_121_786_17, epsilon = 1e-15);
        assert_abs_diff_eq!(shape.evaluate(0.35), 0.449_999_994_198_724_3, epsilon = 1e-15);
        assert_eq!(shape.evaluate(0.2), 0.7);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = ShapeFunction::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, SynthError::ControlPointLengthMismatch { x_len: 2, y_len: 1 }));
    }

    #[test]
    fn empty_points_fail() {
        let err = Interpolator::new(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, SynthError::EmptyControlPoints));
    }

    #[test]
    fn scaled_copy_leaves_original_alone() {
        let shape = oil_curve();
        let copy = shape.scaled_copy(0.5);
        assert_eq!(shape.scale(), 1.0);
        assert_eq!(copy.scale(), 0.5);
        assert!(copy.shares_points_with(&shape));
        assert_eq!(copy.interpolator(), shape.interpolator());
        assert_abs_diff_eq!(copy.evaluate(0.35), shape.evaluate(0.35) * 0.5, epsilon = 1e-15);
    }

    #[test]
    fn constant_is_flat() {
        let shape = ShapeFunction::constant(2.5);
        assert_eq!(shape.interpolator().x(), &[0.0]);
        for x in [-1.0, 0.0, 0.3, 10.0] {
            assert_eq!(shape.evaluate(x), 2.5);
        }
    }

    #[test]
    fn repeated_x_forms_a_step() {
        let shape = ShapeFunction::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(shape.evaluate(0.25), 0.0);
        assert_eq!(shape.evaluate(0.5), 1.0);
        assert!(shape.evaluate(0.75).is_finite());
    }
}
