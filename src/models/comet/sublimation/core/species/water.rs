//! Water ice.
//!
//! Marti & Mauersberger (1993), GRL 20, 363, doi:10.1029/93GL00105.
//! The fit is valid between 170 K and 250 K; the range is not enforced.

use super::super::constants::CAL_PER_MOL_TO_ERG_PER_MOLECULE;
use super::Fit;

pub(super) fn fit(t: f64) -> Fit {
    // cal/mol
    let latent_heat = 12_420.0 - 4.8 * t;
    let latent_heat_slope = -4.8;

    let (pressure, pressure_slope) = vapor_pressure(t);

    Fit {
        latent_heat: latent_heat * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        latent_heat_slope: latent_heat_slope * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        pressure,
        pressure_slope,
    }
}

/// Vapor pressure of water ice and its slope, dyne/cm².
///
/// Shared with the water-methane mixture, whose vapor is dominated by water.
pub(super) fn vapor_pressure(t: f64) -> (f64, f64) {
    let log10_pascals = -2663.5 / t + 12.537;
    let pressure = 10.0 * 10f64.powf(log10_pascals);
    (pressure, 2663.5 / (t * t) * pressure)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn latent_heat_at_200_kelvin() {
        let fit = fit(200.0);
        assert_relative_eq!(fit.latent_heat, 11_460.0 * CAL_PER_MOL_TO_ERG_PER_MOLECULE);
        assert!(fit.latent_heat_slope < 0.0);
    }

    #[test]
    fn pressure_matches_fit() {
        // At 2663.5 / 12.537 K the log term vanishes: 1 Pa = 10 dyne/cm².
        let t = 2663.5 / 12.537;
        let (p, _) = vapor_pressure(t);
        assert_relative_eq!(p, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn pressure_rises_with_temperature() {
        let (cold, cold_slope) = vapor_pressure(170.0);
        let (warm, _) = vapor_pressure(250.0);
        assert!(warm > cold);
        assert!(cold_slope > 0.0);
    }
}
