//! Water ice with trapped methane.

use super::super::constants::CAL_PER_MOL_TO_ERG_PER_MOLECULE;
use super::{Fit, water};

pub(super) fn fit(t: f64) -> Fit {
    // cal/mol
    let latent_heat = 12_160.0 + 0.5 * t - 0.033 * t * t;
    let latent_heat_slope = 0.5 - 0.066 * t;

    let (pressure, pressure_slope) = water::vapor_pressure(t);

    Fit {
        latent_heat: latent_heat * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        latent_heat_slope: latent_heat_slope * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        pressure,
        pressure_slope,
    }
}
