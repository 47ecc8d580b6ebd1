//! Physical constants and unit conversions, in CGS.

/// Converts calories per mole to ergs per molecule.
pub(super) const CAL_PER_MOL_TO_ERG_PER_MOLECULE: f64 = 6.947_695e-17;

/// Converts torr to dyne/cm².
pub(super) const TORR_TO_DYNE_PER_CM2: f64 = 1.333_22e3;

/// Solar flux at 1 AU, erg/(cm²·s).
pub(super) const SOLAR_FLUX_1AU: f64 = 1.39e6;

/// Boltzmann constant, erg/K.
pub(super) const BOLTZMANN: f64 = 1.38e-16;

/// Stefan-Boltzmann constant, erg/(cm²·s·K⁴).
pub(super) const STEFAN_BOLTZMANN: f64 = 5.67e-5;

/// Converts atomic mass units to grams.
pub(super) const AMU_TO_GRAMS: f64 = 1.660_539_07e-24;
