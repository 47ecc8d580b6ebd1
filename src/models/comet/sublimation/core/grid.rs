//! Latitude grid uniform in `sin(latitude)`.
//!
//! Sampling the sine uniformly weights every grid cell by equal surface area,
//! so the nucleus average is a plain integral over `sin(latitude) ∈ [-1, 1]`.
//! Points cluster near the equator and thin out toward the poles.

/// A grid latitude with its trigonometric values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LatitudePoint {
    /// Latitude, radians.
    pub(super) latitude: f64,
    pub(super) sin: f64,
    pub(super) cos: f64,
    pub(super) tan: f64,
}

impl LatitudePoint {
    pub(super) fn from_sin(sin: f64) -> Self {
        let latitude = sin.asin();
        Self {
            latitude,
            sin,
            cos: latitude.cos(),
            tan: latitude.tan(),
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct LatitudeGrid {
    points: Vec<LatitudePoint>,
    step: f64,
}

impl LatitudeGrid {
    /// Builds a grid of `n` points with `sin(latitude)` spaced evenly from -1 to 1.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`.
    pub(super) fn new(n: usize) -> Self {
        assert!(n >= 2, "latitude grid requires at least 2 points");

        #[allow(clippy::cast_precision_loss)]
        let step = 2.0 / (n - 1) as f64;

        #[allow(clippy::cast_precision_loss)]
        let points = (0..n)
            .map(|i| {
                // Pin the last point so the pole is hit exactly.
                let sin = if i == n - 1 {
                    1.0
                } else {
                    i as f64 * step - 1.0
                };
                LatitudePoint::from_sin(sin)
            })
            .collect();

        Self { points, step }
    }

    pub(super) fn points(&self) -> &[LatitudePoint] {
        &self.points
    }

    /// Integrates `values` over `sin(latitude)` with the trapezoidal rule.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `values` does not match the grid length.
    pub(super) fn trapezoid(&self, values: &[f64]) -> f64 {
        debug_assert_eq!(values.len(), self.points.len());
        values
            .windows(2)
            .map(|pair| self.step * (pair[0] + pair[1]) / 2.0)
            .sum()
    }
}
