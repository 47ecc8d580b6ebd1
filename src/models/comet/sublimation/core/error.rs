use thiserror::Error;
use uom::si::{angle::degree, f64::Angle};

use super::SolveError;

/// Errors that can occur while running the sublimation model.
///
/// Any failure aborts the whole run. A latitude that cannot be solved leaves
/// the nucleus average undefined, so no partial result is produced.
#[derive(Debug, Error)]
pub enum RunError {
    /// The energy balance could not be solved at a grid latitude.
    #[error("energy balance failed at latitude {:.4} deg", .latitude.get::<degree>())]
    Latitude {
        /// Grid latitude where the failure occurred.
        latitude: Angle,

        /// Underlying solver error.
        #[source]
        source: SolveError,
    },
}
