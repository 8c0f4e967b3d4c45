//! Geodesic computations on the WGS-84 ellipsoid.
//!
//! Implements Vincenty's direct and inverse solutions from scratch without
//! external dependencies. Radial files describe observations by range and
//! bearing from the antenna site; [`project`] turns such a pair back into a
//! geographic position.

pub mod ellipsoid;
pub mod vincenty;

pub use ellipsoid::Ellipsoid;
pub use vincenty::{normalize_longitude, Destination, Geodesic, Inverse};

/// Project a point from an origin by range and bearing on WGS-84.
///
/// # Arguments
/// * `lon0` - Origin longitude (degrees)
/// * `lat0` - Origin latitude (degrees)
/// * `range_km` - Geodesic distance (kilometers)
/// * `bearing_deg` - Initial bearing, clockwise from north (degrees)
///
/// Returns `(lon, lat)` in degrees, longitude normalised to [-180, 180).
pub fn project(lon0: f64, lat0: f64, range_km: f64, bearing_deg: f64) -> (f64, f64) {
    let dest = Geodesic::wgs84().direct(lat0, lon0, bearing_deg, range_km * 1000.0);
    (dest.lon, dest.lat)
}
