//! Carbon monoxide ice.
//!
//! Cowan & A'Hearn (1979), "Vaporization of Comet Nuclei: Light Curves and
//! Life Times", doi:10.1007/BF00897085.
//!
//! The fits are piecewise in temperature:
//!
//! | Band (K)            | Behavior                                        |
//! |---------------------|-------------------------------------------------|
//! | `T < 14`            | Warns; pressure clamped to zero                 |
//! | `14 ≤ T ≤ 61.544`   | Quintic latent heat, log10 pressure in torr     |
//! | `61.544 < T ≤ 68.127` | Quadratic latent heat, cubic pressure in 1/T  |
//! | `T > 68.127`        | Error; the fits cannot be extrapolated          |

use super::super::constants::{CAL_PER_MOL_TO_ERG_PER_MOLECULE, TORR_TO_DYNE_PER_CM2};
use super::{Fit, PropertyError, powers};

const MIN_PRESSURE_TEMPERATURE: f64 = 14.0;
const BAND_BOUNDARY_TEMPERATURE: f64 = 61.544;
const MAX_TEMPERATURE: f64 = 68.127;

pub(super) fn fit(t: f64) -> Result<Fit, PropertyError> {
    let [t2, t3, t4, t5, t6] = powers(t);

    // All latent heats in cal/mol.
    let (latent_heat, latent_heat_slope, pressure, pressure_slope) = if t > MAX_TEMPERATURE {
        return Err(PropertyError::OutOfDomain {
            context: format!("CO temperature {t} K exceeds {MAX_TEMPERATURE} K"),
        });
    } else if t > BAND_BOUNDARY_TEMPERATURE {
        let latent_heat = 1855.0 + 3.253 * t - 0.068_33 * t2;
        let latent_heat_slope = 3.253 - 0.136_66 * t;
        let pressure = 16.865_515_2 - 748.151_471 / t - 5.843_307_95 / t2 + 3.938_538_59 / t3;
        let pressure_slope = 748.151_47 / t2 + 11.686_615_9 / t3 - 11.815_615_77 / t4;
        (latent_heat, latent_heat_slope, pressure, pressure_slope)
    } else {
        let (latent_heat, latent_heat_slope) = low_band_latent_heat(t);
        if t >= MIN_PRESSURE_TEMPERATURE {
            let log10_torr = 18.074_118_3 - 769.842_078 / t - 12_148.775_9 / t2
                + 2.735_009_5e5 / t3
                - 2.908_746_7e6 / t4
                + 1.203_194_18e7 / t5;
            let log10_torr_slope = 769.842_078 / t2 + 24_297.551_8 / t3 - 820_502.85 / t4
                + 11_634_986.8 / t5
                - 60_159_709.0 / t6;
            let pressure = TORR_TO_DYNE_PER_CM2 * 10f64.powf(log10_torr);
            (
                latent_heat,
                latent_heat_slope,
                pressure,
                log10_torr_slope * pressure,
            )
        } else {
            log::warn!("CO temperature {t:.3} K is below {MIN_PRESSURE_TEMPERATURE} K");
            (latent_heat, latent_heat_slope, 0.0, 0.0)
        }
    };

    Ok(Fit {
        latent_heat: latent_heat * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        latent_heat_slope: latent_heat_slope * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        pressure,
        pressure_slope,
    })
}

/// Latent heat below 61.544 K and its slope, cal/mol.
fn low_band_latent_heat(t: f64) -> (f64, f64) {
    let [t2, t3, t4, t5, _] = powers(t);
    let latent_heat =
        1893.0 + 7.331 * t + 0.010_96 * t2 - 0.006_065_8 * t3 + 1.166e-4 * t4 - 7.8957e-7 * t5;
    let latent_heat_slope =
        7.331 + 0.021_92 * t - 0.018_197_4 * t2 + 4.664e-4 * t3 - 3.947_85e-6 * t4;
    (latent_heat, latent_heat_slope)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::comet::sublimation::core::test_support::{capture_logs, warnings};

    #[test]
    fn warns_only_outside_pressure_fit() {
        let (fit_10, records) = capture_logs(|| fit(10.0));
        assert!(fit_10.is_ok());
        assert_eq!(warnings(&records), 1);
        assert!(records[0].1.contains("CO"));

        for t in [14.0, 30.0, 65.0] {
            let (_, records) = capture_logs(|| fit(t));
            assert_eq!(warnings(&records), 0, "unexpected warning at {t} K");
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn clamps_pressure_when_too_cold() {
        let fit = fit(10.0).unwrap();
        assert_eq!(fit.pressure, 0.0);
        assert_eq!(fit.pressure_slope, 0.0);

        // Latent heat still comes from the low-temperature polynomial.
        let (expected, _) = low_band_latent_heat(10.0);
        assert_relative_eq!(fit.latent_heat, expected * CAL_PER_MOL_TO_ERG_PER_MOLECULE);
    }

    #[test]
    fn low_band_pressure_rises_with_temperature() {
        let cold = fit(30.0).unwrap();
        let warm = fit(50.0).unwrap();
        assert!(cold.pressure > 0.0);
        assert!(warm.pressure > cold.pressure);
        assert!(warm.pressure_slope > 0.0);
    }

    #[test]
    fn band_boundary_belongs_to_low_band() {
        let at_boundary = fit(BAND_BOUNDARY_TEMPERATURE).unwrap();
        let (expected, _) = low_band_latent_heat(BAND_BOUNDARY_TEMPERATURE);
        assert_relative_eq!(
            at_boundary.latent_heat,
            expected * CAL_PER_MOL_TO_ERG_PER_MOLECULE
        );
    }

    #[test]
    fn high_band_latent_heat_decreases() {
        let fit_65 = fit(65.0).unwrap();
        let expected = 1855.0 + 3.253 * 65.0 - 0.068_33 * 65.0 * 65.0;
        assert_relative_eq!(
            fit_65.latent_heat,
            expected * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
            max_relative = 1e-12
        );
        assert!(fit_65.latent_heat_slope < 0.0);

        let fit_68 = fit(MAX_TEMPERATURE).unwrap();
        assert!(fit_68.latent_heat < fit_65.latent_heat);
    }

    #[test]
    fn rejects_extrapolation_above_limit() {
        let err = fit(68.2).unwrap_err();
        assert!(matches!(err, PropertyError::OutOfDomain { .. }));
        assert!(err.to_string().contains("68.127"));
    }
}
