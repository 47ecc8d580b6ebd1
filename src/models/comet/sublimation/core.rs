//! Steady-state sublimation of a rapidly rotating nucleus.
//!
//! Each parallel of latitude is treated as an isotherm. At every latitude of a
//! grid uniform in `sin(latitude)`, the rotation-averaged illumination sets the
//! absorbed solar flux, and a damped Newton-Raphson iteration finds the
//! surface temperature where re-radiation plus sublimation cooling balance it.
//! The per-latitude sublimation rates are then averaged over the sphere.

mod constants;
mod error;
mod geometry;
mod grid;
mod input;
mod results;
mod solve;
mod species;

#[cfg(test)]
mod test_support;

pub use error::RunError;
pub use input::ModelInput;
pub use results::{ModelResult, Profile};
pub use solve::{SolveError, SolverConfig};
pub use species::{ParseSpeciesError, PropertyError, Species};

pub(super) use geometry::ProjectionCache;

use uom::si::{angle::radian, f64::Angle, thermodynamic_temperature::kelvin};

use grid::LatitudeGrid;
use solve::{LatitudeSolution, solve_latitude};

/// Runs the sublimation model with the default solver configuration.
///
/// # Errors
///
/// Returns a [`RunError`] if the energy balance fails to converge at any
/// latitude or a species property is evaluated outside its valid domain.
/// No partial result is produced.
pub fn run(input: &ModelInput) -> Result<ModelResult, RunError> {
    let factors = projection_factors(input, &mut ProjectionCache::default());
    run_with(input, &SolverConfig::default(), &factors)
}

/// Returns the illumination factor at every grid latitude of `input`,
/// memoizing them in `projections`.
pub(super) fn projection_factors(
    input: &ModelInput,
    projections: &mut ProjectionCache,
) -> Vec<f64> {
    let arctic_latitude = input.arctic_latitude().get::<radian>();
    LatitudeGrid::new(input.grid_points())
        .points()
        .iter()
        .map(|point| projections.projection_factor(arctic_latitude, point))
        .collect()
}

/// Runs the sublimation model with precomputed illumination `factors`, one
/// per grid latitude as returned by [`projection_factors`].
///
/// # Errors
///
/// Returns a [`RunError`] under the same conditions as [`run`].
pub(super) fn run_with(
    input: &ModelInput,
    config: &SolverConfig,
    factors: &[f64],
) -> Result<ModelResult, RunError> {
    let initial_temperature = input.initial_temperature();
    let grid = LatitudeGrid::new(input.grid_points());
    debug_assert_eq!(factors.len(), grid.points().len());

    let solutions = grid
        .points()
        .iter()
        .zip(factors)
        .map(|(point, &factor)| {
            solve_latitude(input, factor, initial_temperature, config).map_err(|source| {
                RunError::Latitude {
                    latitude: Angle::new::<radian>(point.latitude),
                    source,
                }
            })
        })
        .collect::<Result<Vec<LatitudeSolution>, _>>()?;

    for (point, solution) in grid.points().iter().zip(&solutions) {
        log::debug!(
            "lat: {:8.4} deg\tT: {:?} K\titers: {}",
            point.latitude.to_degrees(),
            solution.temperature.map(|t| t.get::<kelvin>()),
            solution.iters,
        );
    }

    let rates: Vec<f64> = solutions.iter().map(|s| s.sublimation_rate).collect();

    // Average over sin(latitude) in [-1, 1].
    let mean_sublimation_rate = grid.trapezoid(&rates) / 2.0;
    let log10_mean_sublimation_rate = mean_sublimation_rate.log10();

    log::info!(
        "{} at {:.2} AU: mean sublimation rate {mean_sublimation_rate:.4e} \
         (log10 {log10_mean_sublimation_rate:.4})",
        input.species(),
        input.heliocentric_distance_au(),
    );

    let profile = input.retain_profile().then(|| Profile {
        latitudes: grid
            .points()
            .iter()
            .map(|p| Angle::new::<radian>(p.latitude))
            .collect(),
        sublimation_rates: rates,
        temperatures: solutions.iter().map(|s| s.temperature).collect(),
    });

    Ok(ModelResult {
        mean_sublimation_rate,
        log10_mean_sublimation_rate,
        profile,
    })
}
