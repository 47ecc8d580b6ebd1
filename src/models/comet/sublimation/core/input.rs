use std::{cmp::Ordering, fmt};

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, ConstraintResult, StrictlyPositive, UnitInterval,
};
use uom::si::{
    angle::degree,
    f64::{Angle, Length, Ratio, ThermodynamicTemperature},
    length::astronomical_unit,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use super::Species;

/// Latitude grid resolution used unless overridden.
const DEFAULT_GRID_POINTS: usize = 181;

/// Inputs for one sublimation model run.
///
/// Construction validates every field, so a `ModelInput` always satisfies:
///
/// - both albedos lie in `[0, 1]`,
/// - the heliocentric distance is strictly positive (its sign is discarded),
/// - the sub-solar latitude lies in `[-90°, 90°]`,
/// - the grid has at least 2 points,
/// - an explicit initial temperature is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInput {
    species: Species,
    visual_albedo: Ratio,
    infrared_albedo: Ratio,
    heliocentric_distance: Length,
    sub_solar_latitude: Angle,
    grid_points: usize,
    initial_temperature: Option<ThermodynamicTemperature>,
    retain_profile: bool,
}

/// Marker type enforcing a latitude within `[-90°, 90°]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Latitude;

impl Constraint<Angle> for Latitude {
    fn check(value: &Angle) -> Result<(), ConstraintError> {
        let limit = Angle::new::<degree>(90.0);
        match (value.partial_cmp(&-limit), value.partial_cmp(&limit)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker type enforcing a finite, strictly positive temperature in kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AbsoluteTemperature;

impl Constraint<f64> for AbsoluteTemperature {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        <StrictlyPositive as Constraint<f64>>::check(value)?;
        if value.is_finite() {
            Ok(())
        } else {
            Err(ConstraintError::AboveMaximum)
        }
    }
}

impl ModelInput {
    /// Constructs validated model inputs.
    ///
    /// The grid defaults to 181 latitudes, the initial temperature to the
    /// species default, and no per-latitude profile is retained.
    ///
    /// # Errors
    ///
    /// Returns an error if an albedo is outside `[0, 1]`, the distance is
    /// zero or not a number, or the sub-solar latitude is outside `[-90°, 90°]`.
    pub fn new(
        species: Species,
        visual_albedo: Ratio,
        infrared_albedo: Ratio,
        heliocentric_distance: Length,
        sub_solar_latitude: Angle,
    ) -> ConstraintResult<Self> {
        let visual_albedo = Constrained::<Ratio, UnitInterval>::new(visual_albedo)?;
        let infrared_albedo = Constrained::<Ratio, UnitInterval>::new(infrared_albedo)?;
        let heliocentric_distance =
            Constrained::<Length, StrictlyPositive>::new(heliocentric_distance.abs())?;
        let sub_solar_latitude = Constrained::<Angle, Latitude>::new(sub_solar_latitude)?;

        Ok(Self {
            species,
            visual_albedo: visual_albedo.into_inner(),
            infrared_albedo: infrared_albedo.into_inner(),
            heliocentric_distance: heliocentric_distance.into_inner(),
            sub_solar_latitude: sub_solar_latitude.into_inner(),
            grid_points: DEFAULT_GRID_POINTS,
            initial_temperature: None,
            retain_profile: false,
        })
    }

    /// Sets the number of latitude grid points.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] if `n < 2`.
    pub fn with_grid_points(mut self, n: usize) -> ConstraintResult<Self> {
        if n < 2 {
            return Err(ConstraintError::BelowMinimum);
        }
        self.grid_points = n;
        Ok(self)
    }

    /// Sets the starting temperature for every latitude's iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if the temperature is not strictly positive and finite.
    pub fn with_initial_temperature(
        mut self,
        temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        Constrained::<f64, AbsoluteTemperature>::new(temperature.get::<kelvin>())?;
        self.initial_temperature = Some(temperature);
        Ok(self)
    }

    /// Requests that per-latitude results be kept in the output.
    #[must_use]
    pub fn with_profile(mut self, retain: bool) -> Self {
        self.retain_profile = retain;
        self
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn visual_albedo(&self) -> Ratio {
        self.visual_albedo
    }

    #[must_use]
    pub fn infrared_albedo(&self) -> Ratio {
        self.infrared_albedo
    }

    #[must_use]
    pub fn heliocentric_distance(&self) -> Length {
        self.heliocentric_distance
    }

    #[must_use]
    pub fn sub_solar_latitude(&self) -> Angle {
        self.sub_solar_latitude
    }

    #[must_use]
    pub fn grid_points(&self) -> usize {
        self.grid_points
    }

    /// Returns the starting temperature, falling back to the species default.
    #[must_use]
    pub fn initial_temperature(&self) -> ThermodynamicTemperature {
        self.initial_temperature
            .unwrap_or_else(|| self.species.default_initial_temperature())
    }

    #[must_use]
    pub fn retain_profile(&self) -> bool {
        self.retain_profile
    }

    pub(super) fn heliocentric_distance_au(&self) -> f64 {
        self.heliocentric_distance.get::<astronomical_unit>()
    }

    /// Latitude above which the surface sees the sun for a whole rotation.
    ///
    /// The sun-facing hemisphere is positive by convention, so the sign of the
    /// sub-solar latitude does not matter and the result lies in `[0°, 90°]`.
    pub(super) fn arctic_latitude(&self) -> Angle {
        Angle::new::<degree>(90.0 - self.sub_solar_latitude.get::<degree>().abs())
    }
}

impl fmt::Display for ModelInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let temperature = match self.initial_temperature {
            Some(t) => format!("{:6.2} K", t.get::<kelvin>()),
            None => "None".to_owned(),
        };
        writeln!(f, "Species: {}", self.species)?;
        writeln!(
            f,
            "Visual albedo:\t\t{:>6.2}\t\tInfrared albedo:\t{:<6.2}",
            self.visual_albedo.get::<ratio>(),
            self.infrared_albedo.get::<ratio>(),
        )?;
        writeln!(
            f,
            "Heliocentric distance:\t{:>6.2} AU\tSubsolar latitude:\t{:<6.2} degrees",
            self.heliocentric_distance_au(),
            self.sub_solar_latitude.get::<degree>(),
        )?;
        write!(
            f,
            "Latitude gridpoints:\t{:>5}\t\tInitial temperature:\t{temperature}",
            self.grid_points,
        )
    }
}
