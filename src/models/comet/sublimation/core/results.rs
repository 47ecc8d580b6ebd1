//! Results types for the sublimation model.

use uom::si::f64::{Angle, ThermodynamicTemperature};

/// Nucleus-averaged sublimation rate and, optionally, its latitude profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResult {
    /// Surface-averaged sublimation rate, molecules/(cm²·s).
    pub mean_sublimation_rate: f64,

    /// Base-10 logarithm of [`Self::mean_sublimation_rate`].
    pub log10_mean_sublimation_rate: f64,

    /// Per-latitude results, present only when requested on the input.
    pub profile: Option<Profile>,
}

/// Per-latitude results as parallel arrays ordered from south to north.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Grid latitudes.
    pub latitudes: Vec<Angle>,

    /// Sublimation rate at each latitude, molecules/(cm²·s).
    pub sublimation_rates: Vec<f64>,

    /// Equilibrium surface temperature at each latitude.
    ///
    /// `None` where the latitude is never illuminated.
    pub temperatures: Vec<Option<ThermodynamicTemperature>>,
}
