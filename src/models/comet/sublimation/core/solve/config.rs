use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver configuration for the per-latitude energy balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum Newton-Raphson iterations at one latitude.
    pub max_iters: usize,

    /// Convergence tolerance on the energy balance residual.
    ///
    /// Applied both relative to the absorbed solar flux and absolutely in
    /// erg/(cm²·s); meeting either test converges.
    pub residual_tol: f64,

    /// Largest temperature change allowed in a single iteration.
    pub max_step: TemperatureInterval,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 100_000,
            residual_tol: 1e-6,
            max_step: TemperatureInterval::new::<delta_kelvin>(10.0),
        }
    }
}
