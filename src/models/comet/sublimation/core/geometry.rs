//! Rotation-averaged illumination of a spherical nucleus.
//!
//! Latitudes are measured in a frame where positive latitudes lie in the
//! hemisphere tilted toward the sun. The arctic latitude `a` is the latitude
//! above which a point sees the sun for an entire rotation; below `-a` it
//! never does.

use std::{collections::HashMap, f64::consts::PI};

use super::grid::LatitudePoint;

/// Returns the rotation-averaged cosine of the solar incidence angle.
///
/// Follows equation 5 of Cowan & A'Hearn (1979). All angles are in radians,
/// and `sin_lat`, `cos_lat`, `tan_lat` must be the trigonometric values of
/// `latitude`, precomputed once per grid point.
pub(super) fn projection_factor(
    arctic_latitude: f64,
    latitude: f64,
    sin_lat: f64,
    cos_lat: f64,
    tan_lat: f64,
) -> f64 {
    if latitude <= -arctic_latitude {
        // Polar night.
        0.0
    } else if latitude > arctic_latitude {
        // Midnight sun.
        sin_lat * arctic_latitude.cos()
    } else {
        // Hour angle of sunset; clamped so round-off at the regime edges stays finite.
        let day_arc = (-tan_lat / arctic_latitude.tan()).clamp(-1.0, 1.0).acos();
        let x1 = arctic_latitude.cos() * sin_lat * day_arc / PI;
        let x2 = arctic_latitude.sin() * cos_lat * day_arc.sin() / PI;
        x1 + x2
    }
}

/// Memo table for [`projection_factor`].
///
/// Keys are the bit patterns of the five inputs, so only bit-identical inputs
/// hit. Entries are never evicted; growth is bounded by the number of distinct
/// latitude grids and arctic latitudes evaluated.
#[derive(Debug, Default)]
pub(crate) struct ProjectionCache {
    entries: HashMap<[u64; 5], f64>,
}

impl ProjectionCache {
    /// Returns the projection factor at `point`, computing it on a miss.
    pub(super) fn projection_factor(&mut self, arctic_latitude: f64, point: &LatitudePoint) -> f64 {
        let key = [
            arctic_latitude.to_bits(),
            point.latitude.to_bits(),
            point.sin.to_bits(),
            point.cos.to_bits(),
            point.tan.to_bits(),
        ];
        *self.entries.entry(key).or_insert_with(|| {
            projection_factor(
                arctic_latitude,
                point.latitude,
                point.sin,
                point.cos,
                point.tan,
            )
        })
    }

    /// Returns the number of memoized factors.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
