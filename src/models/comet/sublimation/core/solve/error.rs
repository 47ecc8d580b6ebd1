use thiserror::Error;
use uom::si::f64::ThermodynamicTemperature;

use crate::models::comet::sublimation::core::PropertyError;

/// Errors that can occur while solving the energy balance at one latitude.
#[derive(Debug, Error)]
pub enum SolveError {
    /// An ice property was evaluated outside its valid domain.
    #[error("ice property evaluation failed")]
    Property(#[from] PropertyError),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:e} erg/(cm^2 s)")]
    MaxIters {
        /// Temperature estimate when the iteration budget ran out.
        temperature: ThermodynamicTemperature,

        /// Energy balance residual at the last iteration, erg/(cm²·s).
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The iteration produced a temperature that is not positive and finite.
    #[error("non-physical temperature estimate {temperature} K after {iters} iterations")]
    NonPhysicalTemperature {
        /// Offending temperature, K.
        temperature: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
