//! Volatile ice species and their thermodynamic property fits.
//!
//! Each species provides an empirical fit for the latent heat of sublimation
//! and the vapor pressure of the solid, together with their slopes in
//! temperature for the Newton-Raphson energy balance. All values are in CGS:
//! latent heat in erg/molecule, pressure in dyne/cm², mass in grams.

mod carbon_dioxide;
mod carbon_monoxide;
mod error;
mod water;
mod water_methane;

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

pub use error::PropertyError;

use super::constants::AMU_TO_GRAMS;

/// Supported ice species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Water ice (`H2O`).
    Water,
    /// Water ice with trapped methane (`H2O_CH4`).
    WaterMethane,
    /// Carbon dioxide ice (`CO2`).
    CarbonDioxide,
    /// Carbon monoxide ice (`CO`).
    CarbonMonoxide,
}

/// Thermodynamic properties of an ice species at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpeciesProperties {
    /// Molecular mass, g.
    pub(crate) mass: f64,

    /// Latent heat of sublimation, erg/molecule.
    pub(crate) latent_heat: f64,

    /// Temperature slope of the latent heat, erg/(molecule·K).
    pub(crate) latent_heat_slope: f64,

    /// Vapor pressure of the solid, dyne/cm².
    pub(crate) pressure: f64,

    /// Temperature slope of the vapor pressure fit, dyne/(cm²·K).
    pub(crate) pressure_slope: f64,
}

/// Latent heat and vapor pressure from a species fit, before the mass is attached.
#[derive(Debug, Clone, Copy)]
struct Fit {
    latent_heat: f64,
    latent_heat_slope: f64,
    pressure: f64,
    pressure_slope: f64,
}

impl Species {
    /// Every supported species.
    pub const ALL: [Species; 4] = [
        Species::Water,
        Species::WaterMethane,
        Species::CarbonDioxide,
        Species::CarbonMonoxide,
    ];

    /// Returns the canonical tag for this species (e.g., `"H2O"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Species::Water => "H2O",
            Species::WaterMethane => "H2O_CH4",
            Species::CarbonDioxide => "CO2",
            Species::CarbonMonoxide => "CO",
        }
    }

    /// Returns the molecular mass in grams.
    #[must_use]
    pub fn molecular_mass(self) -> f64 {
        let amu = match self {
            Species::Water | Species::WaterMethane => 18.0,
            Species::CarbonDioxide => 44.0,
            Species::CarbonMonoxide => 28.0,
        };
        amu * AMU_TO_GRAMS
    }

    /// Returns the starting temperature used when none is supplied.
    #[must_use]
    pub fn default_initial_temperature(self) -> ThermodynamicTemperature {
        let t = match self {
            Species::Water | Species::WaterMethane => 190.0,
            Species::CarbonDioxide => 100.0,
            Species::CarbonMonoxide => 60.0,
        };
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    /// Evaluates the property fits at temperature `t` in kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] when the fit cannot be
    /// extrapolated to `t` (carbon monoxide above 68.127 K).
    pub(crate) fn properties(self, t: f64) -> Result<SpeciesProperties, PropertyError> {
        let fit = match self {
            Species::Water => water::fit(t),
            Species::WaterMethane => water_methane::fit(t),
            Species::CarbonDioxide => carbon_dioxide::fit(t),
            Species::CarbonMonoxide => carbon_monoxide::fit(t)?,
        };

        Ok(SpeciesProperties {
            mass: self.molecular_mass(),
            latent_heat: fit.latent_heat,
            latent_heat_slope: fit.latent_heat_slope,
            pressure: fit.pressure,
            pressure_slope: fit.pressure_slope,
        })
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown species tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown species {tag:?}; expected one of H2O, H2O_CH4, CO2, CO")]
pub struct ParseSpeciesError {
    tag: String,
}

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.tag() == s)
            .ok_or_else(|| ParseSpeciesError { tag: s.to_owned() })
    }
}

/// Returns `[t², t³, t⁴, t⁵, t⁶]`.
fn powers(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    [t2, t3, t4, t5, t5 * t]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tags_round_trip() {
        for species in Species::ALL {
            let parsed: Species = species.to_string().parse().unwrap();
            assert_eq!(parsed, species);
        }
        assert_eq!("H2O_CH4".parse::<Species>().unwrap(), Species::WaterMethane);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "CH4".parse::<Species>().unwrap_err();
        assert!(err.to_string().contains("CH4"));
        assert!("h2o".parse::<Species>().is_err());
    }

    #[test]
    fn default_temperatures() {
        let t = |s: Species| s.default_initial_temperature().get::<kelvin>();
        assert_relative_eq!(t(Species::Water), 190.0);
        assert_relative_eq!(t(Species::WaterMethane), 190.0);
        assert_relative_eq!(t(Species::CarbonDioxide), 100.0);
        assert_relative_eq!(t(Species::CarbonMonoxide), 60.0);
    }

    #[test]
    fn mass_is_positive_and_temperature_independent() {
        for species in Species::ALL {
            let cold = species.properties(30.0).unwrap();
            let warm = species.properties(60.0).unwrap();
            assert!(cold.mass > 0.0);
            assert_relative_eq!(cold.mass, warm.mass);
        }
        assert_relative_eq!(
            Species::CarbonDioxide.molecular_mass(),
            44.0 * AMU_TO_GRAMS
        );
    }

    #[test]
    fn powers_are_consecutive() {
        let [t2, t3, t4, t5, t6] = powers(2.0);
        assert_relative_eq!(t2, 4.0);
        assert_relative_eq!(t3, 8.0);
        assert_relative_eq!(t4, 16.0);
        assert_relative_eq!(t5, 32.0);
        assert_relative_eq!(t6, 64.0);
    }
}
