//! Carbon dioxide ice.

use super::super::constants::{CAL_PER_MOL_TO_ERG_PER_MOLECULE, TORR_TO_DYNE_PER_CM2};
use super::{Fit, powers};

/// The vapor pressure fit is not valid at or below this temperature, K.
const MIN_PRESSURE_TEMPERATURE: f64 = 20.0;

pub(super) fn fit(t: f64) -> Fit {
    let [t2, t3, t4, t5, t6] = powers(t);

    // cal/mol
    let latent_heat = 6269.0 + 9.877 * t - 0.130_997 * t2 + 6.2735e-4 * t3 - 1.2699e-6 * t4;
    let latent_heat_slope = 9.877 - 0.261_994 * t + 1.882_05e-3 * t2 - 5.0796e-6 * t3;

    let (pressure, pressure_slope) = if t <= MIN_PRESSURE_TEMPERATURE {
        log::warn!("CO2 temperature {t:.3} K is at or below {MIN_PRESSURE_TEMPERATURE} K");
        (0.0, 0.0)
    } else {
        let log10_torr = 21.380_764_9 - 2570.647 / t - 7.781_294_89e4 / t2 + 4.325_062_56e6 / t3
            - 1.206_713_68e8 / t4
            + 1.349_663_06e9 / t5;
        let log10_torr_slope = 2570.647 / t2 + 1.556_258_978e5 / t3 - 12.975_187_68e6 / t4
            + 4.826_854_72e8 / t5
            - 6.748_315_3e9 / t6;
        let pressure = TORR_TO_DYNE_PER_CM2 * 10f64.powf(log10_torr);
        (pressure, log10_torr_slope * pressure)
    };

    Fit {
        latent_heat: latent_heat * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        latent_heat_slope: latent_heat_slope * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
        pressure,
        pressure_slope,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::comet::sublimation::core::test_support::{capture_logs, warnings};

    #[test]
    fn warns_only_outside_pressure_fit() {
        let (_, records) = capture_logs(|| fit(15.0));
        assert_eq!(warnings(&records), 1);
        assert!(records[0].1.contains("CO2"));

        let (_, records) = capture_logs(|| fit(20.0));
        assert_eq!(warnings(&records), 1);

        let (_, records) = capture_logs(|| fit(100.0));
        assert_eq!(warnings(&records), 0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn clamps_pressure_when_too_cold() {
        for t in [5.0, 15.0, 20.0] {
            let fit = fit(t);
            assert_eq!(fit.pressure, 0.0);
            assert_eq!(fit.pressure_slope, 0.0);
            assert!(fit.latent_heat > 0.0);
        }
    }

    #[test]
    fn pressure_rises_with_temperature() {
        let cold = fit(80.0);
        let warm = fit(120.0);
        assert!(cold.pressure > 0.0);
        assert!(warm.pressure > cold.pressure);
        assert!(cold.pressure_slope > 0.0);
    }

    #[test]
    fn latent_heat_at_100_kelvin() {
        let fit = fit(100.0);
        let expected = 6269.0 + 987.7 - 1309.97 + 627.35 - 126.99;
        assert_relative_eq!(
            fit.latent_heat,
            expected * CAL_PER_MOL_TO_ERG_PER_MOLECULE,
            max_relative = 1e-12
        );
    }
}
