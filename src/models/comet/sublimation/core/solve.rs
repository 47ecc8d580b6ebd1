//! Per-latitude energy balance solver.
//!
//! At equilibrium the absorbed solar flux equals thermal re-radiation plus the
//! latent heat carried off by sublimating molecules:
//!
//! ```text
//! (1 - A_ir)·σ·T⁴ + L(T)·P(T)/√(2π·m·k·T) = S₀·f·(1 - A_v)/r_h²
//! ```
//!
//! The temperature is found with a damped Newton-Raphson iteration, written as
//! a fold over [`IterationState`].

mod config;
mod error;

pub use config::SolverConfig;
pub use error::SolveError;

use std::{f64::consts::PI, ops::ControlFlow};

use uom::si::{
    f64::ThermodynamicTemperature, ratio::ratio, temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{
    ModelInput, PropertyError, Species,
    constants::{BOLTZMANN, SOLAR_FLUX_1AU, STEFAN_BOLTZMANN},
};

/// Floor applied to the sublimation rate, molecules/(cm²·s).
const MIN_SUBLIMATION_RATE: f64 = 1e-30;

/// Converged result at one latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LatitudeSolution {
    /// Sublimation rate, molecules/(cm²·s).
    pub(super) sublimation_rate: f64,

    /// Equilibrium temperature, or `None` for a latitude in permanent darkness.
    pub(super) temperature: Option<ThermodynamicTemperature>,

    /// Newton-Raphson iterations used.
    pub(super) iters: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Status {
    Iterating,
    Converged,
    Exhausted,
}

/// Solver state carried between Newton-Raphson iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct IterationState {
    /// Current temperature estimate, K.
    pub(super) temperature: f64,

    /// Sublimation rate at the last evaluated temperature, molecules/(cm²·s).
    pub(super) sublimation_rate: f64,

    /// Energy balance residual at the last evaluated temperature, erg/(cm²·s).
    pub(super) residual: f64,

    pub(super) iters: usize,
    pub(super) status: Status,
}

impl IterationState {
    fn start(temperature: f64) -> Self {
        Self {
            temperature,
            sublimation_rate: 0.0,
            residual: f64::NAN,
            iters: 0,
            status: Status::Iterating,
        }
    }
}

/// Energy balance terms evaluated at one temperature.
#[derive(Debug, Clone, Copy)]
struct BalanceTerms {
    /// Emitted minus absorbed flux, erg/(cm²·s).
    residual: f64,

    /// Temperature slope of the residual.
    slope: f64,

    /// Sublimation rate, molecules/(cm²·s).
    sublimation_rate: f64,
}

/// Energy balance at one latitude.
#[derive(Debug, Clone, Copy)]
pub(super) struct EnergyBalance {
    species: Species,

    /// Absorbed solar flux, erg/(cm²·s).
    incident_flux: f64,

    /// `1 - A_ir`.
    emissivity: f64,
}

impl EnergyBalance {
    pub(super) fn new(input: &ModelInput, projection_factor: f64) -> Self {
        let visual_albedo = input.visual_albedo().get::<ratio>();
        let rh = input.heliocentric_distance_au();
        Self {
            species: input.species(),
            incident_flux: SOLAR_FLUX_1AU * projection_factor * (1.0 - visual_albedo) / (rh * rh),
            emissivity: 1.0 - input.infrared_albedo().get::<ratio>(),
        }
    }

    fn evaluate(&self, t: f64) -> Result<BalanceTerms, PropertyError> {
        let props = self.species.properties(t)?;

        let root = 1.0 / (props.mass * 2.0 * PI * BOLTZMANN).sqrt();
        let root_t = t.sqrt();

        let thermal_flux = self.emissivity * STEFAN_BOLTZMANN * t.powi(4);
        let thermal_slope = 4.0 * thermal_flux / t;

        let evaporation_flux = root / root_t * props.pressure * props.latent_heat;
        let evaporation_slope = root / root_t
            * (props.pressure_slope * props.latent_heat
                + props.pressure * props.latent_heat_slope);

        Ok(BalanceTerms {
            residual: thermal_flux + evaporation_flux - self.incident_flux,
            slope: thermal_slope + evaporation_slope,
            sublimation_rate: (evaporation_flux / props.latent_heat).max(MIN_SUBLIMATION_RATE),
        })
    }

    /// Performs one damped Newton-Raphson step.
    fn step(
        &self,
        state: IterationState,
        config: &SolverConfig,
    ) -> Result<IterationState, SolveError> {
        let terms = self.evaluate(state.temperature)?;
        let iters = state.iters + 1;

        let newton = terms.residual / terms.slope;
        let max_step = config.max_step.get::<delta_kelvin>();
        let delta = (newton / 2.0).abs().min(max_step).copysign(newton);
        let temperature = state.temperature - delta;

        let converged = (terms.residual / self.incident_flux).abs() < config.residual_tol
            || terms.residual.abs() < config.residual_tol;

        if !converged && !(temperature.is_finite() && temperature > 0.0) {
            return Err(SolveError::NonPhysicalTemperature { temperature, iters });
        }

        Ok(IterationState {
            temperature,
            sublimation_rate: terms.sublimation_rate,
            residual: terms.residual,
            iters,
            status: if converged {
                Status::Converged
            } else {
                Status::Iterating
            },
        })
    }

    /// Iterates from `initial_temperature` (K) until convergence or the iteration limit.
    ///
    /// The returned state is either [`Status::Converged`] or [`Status::Exhausted`].
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if a property evaluation fails or the
    /// temperature estimate becomes non-physical.
    pub(super) fn iterate(
        &self,
        initial_temperature: f64,
        config: &SolverConfig,
    ) -> Result<IterationState, SolveError> {
        let outcome = (0..config.max_iters).try_fold(
            IterationState::start(initial_temperature),
            |state, _| match self.step(state, config) {
                Ok(next) if next.status == Status::Converged => ControlFlow::Break(Ok(next)),
                Ok(next) => ControlFlow::Continue(next),
                Err(err) => ControlFlow::Break(Err(err)),
            },
        );

        match outcome {
            ControlFlow::Break(result) => result,
            ControlFlow::Continue(state) => Ok(IterationState {
                status: Status::Exhausted,
                ..state
            }),
        }
    }
}

/// Solves the energy balance at one latitude.
///
/// A latitude with no illumination does not sublimate and has no defined
/// equilibrium temperature; it returns immediately without iterating.
///
/// # Errors
///
/// Returns a [`SolveError`] if a property evaluation fails, the temperature
/// estimate becomes non-physical, or the iteration limit is reached.
pub(super) fn solve_latitude(
    input: &ModelInput,
    projection_factor: f64,
    initial_temperature: ThermodynamicTemperature,
    config: &SolverConfig,
) -> Result<LatitudeSolution, SolveError> {
    if projection_factor <= 0.0 {
        return Ok(LatitudeSolution {
            sublimation_rate: 0.0,
            temperature: None,
            iters: 0,
        });
    }

    let balance = EnergyBalance::new(input, projection_factor);
    let state = balance.iterate(initial_temperature.get::<kelvin>(), config)?;

    match state.status {
        Status::Converged => Ok(LatitudeSolution {
            sublimation_rate: state.sublimation_rate,
            temperature: Some(ThermodynamicTemperature::new::<kelvin>(state.temperature)),
            iters: state.iters,
        }),
        Status::Iterating | Status::Exhausted => Err(SolveError::MaxIters {
            temperature: ThermodynamicTemperature::new::<kelvin>(state.temperature),
            residual: state.residual,
            iters: state.iters,
        }),
    }
}
