//! Nucleus-averaged ice sublimation.
//!
//! This module provides the [`twine_core::Model`] implementation for the
//! sublimation model. The computational core is in the internal [`core`] module.
//!
//! Use [`run`] for a one-off evaluation, or [`SublimationModel`] when the same
//! latitude grid and sub-solar latitude are evaluated repeatedly (for example
//! sweeping heliocentric distance), so illumination factors are reused.

pub(crate) mod core;

use std::sync::{Mutex, PoisonError};

use twine_core::Model;

pub use self::core::{
    ModelInput, ModelResult, ParseSpeciesError, Profile, PropertyError, RunError, SolveError,
    SolverConfig, Species, run,
};

use self::core::{ProjectionCache, projection_factors, run_with};

/// Sublimation model with a fixed solver configuration.
///
/// Illumination factors are memoized across calls. The memo table is never
/// evicted; its size is bounded by the number of distinct grids and sub-solar
/// latitudes evaluated.
#[derive(Debug, Default)]
pub struct SublimationModel {
    config: SolverConfig,
    projections: Mutex<ProjectionCache>,
}

impl SublimationModel {
    /// Creates a model that solves each latitude with `config`.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            projections: Mutex::new(ProjectionCache::default()),
        }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the number of memoized illumination factors.
    #[must_use]
    pub fn cached_projections(&self) -> usize {
        self.projections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Model for SublimationModel {
    type Input = ModelInput;
    type Output = ModelResult;
    type Error = RunError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        // The cache only holds pure function results, so a poisoned lock is still usable.
        let factors = {
            let mut projections = self
                .projections
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            projection_factors(input, &mut projections)
        };
        run_with(input, &self.config, &factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        f64::{Angle, Length, Ratio},
        length::astronomical_unit,
        ratio::ratio,
    };

    fn water_at(rh_au: f64) -> ModelInput {
        ModelInput::new(
            Species::Water,
            Ratio::new::<ratio>(0.04),
            Ratio::new::<ratio>(0.0),
            Length::new::<astronomical_unit>(rh_au),
            Angle::new::<degree>(30.0),
        )
        .unwrap()
        .with_grid_points(41)
        .unwrap()
    }

    #[test]
    fn adapter_matches_free_function() {
        let model = SublimationModel::default();
        let input = water_at(1.5);

        let via_model = model.call(&input).expect("model call should succeed");
        let via_run = run(&input).expect("run should succeed");

        assert_relative_eq!(
            via_model.mean_sublimation_rate,
            via_run.mean_sublimation_rate
        );
    }

    #[test]
    fn reuses_projections_across_distances() {
        let model = SublimationModel::new(SolverConfig::default());

        model.call(&water_at(1.0)).expect("first call should succeed");
        let after_first = model.cached_projections();
        assert_eq!(after_first, 41);

        model.call(&water_at(2.0)).expect("second call should succeed");
        assert_eq!(model.cached_projections(), after_first);
    }

    #[test]
    fn shared_model_serves_concurrent_callers() {
        let model = &SublimationModel::default();
        let distances = [1.0, 1.5, 2.0, 2.5];

        let results: Vec<ModelResult> = std::thread::scope(|scope| {
            let handles: Vec<_> = distances
                .iter()
                .map(|&rh| scope.spawn(move || model.call(&water_at(rh))))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().expect("model call should succeed"))
                .collect()
        });

        for (rh, result) in distances.into_iter().zip(results) {
            let expected = run(&water_at(rh)).expect("run should succeed");
            assert_relative_eq!(
                result.mean_sublimation_rate,
                expected.mean_sublimation_rate
            );
        }
        assert_eq!(model.cached_projections(), 41);
    }

    #[test]
    fn propagates_solver_failure() {
        let model = SublimationModel::new(SolverConfig {
            max_iters: 1,
            ..SolverConfig::default()
        });

        let err = model.call(&water_at(1.0)).unwrap_err();
        assert!(matches!(
            err,
            RunError::Latitude {
                source: SolveError::MaxIters { iters: 1, .. },
                ..
            }
        ));
    }
}
