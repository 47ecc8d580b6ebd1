//! # Comet Sublimation
//!
//! Average sublimation rates of volatile ices from the surface of a rapidly
//! rotating, airless body (a comet nucleus), as a function of heliocentric
//! distance, albedo, ice species, and illumination geometry.
//!
//! The model balances absorbed sunlight against thermal re-radiation and the
//! energy carried away by sublimation at each latitude, then averages the
//! resulting molecular flux over the whole nucleus. Parallels of latitude are
//! assumed to be isotherms, which holds for rapid rotation or high thermal
//! inertia.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use comet_sublimation::models::comet::sublimation::{ModelInput, Species, run};
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, Length, Ratio},
//!     length::astronomical_unit,
//!     ratio::ratio,
//! };
//!
//! let input = ModelInput::new(
//!     Species::Water,
//!     Ratio::new::<ratio>(0.04),
//!     Ratio::new::<ratio>(0.0),
//!     Length::new::<astronomical_unit>(1.0),
//!     Angle::new::<degree>(0.0),
//! )
//! .unwrap();
//!
//! let result = run(&input).unwrap();
//! assert!(result.log10_mean_sublimation_rate > 17.0);
//! ```

pub mod models;
pub mod support;
