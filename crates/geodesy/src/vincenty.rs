//! Vincenty's direct and inverse geodesic solutions.
//!
//! Reference: T. Vincenty, "Direct and inverse solutions of geodesics on the
//! ellipsoid with application of nested equations", Survey Review XXIII,
//! No. 176 (1975). Accurate to well under a millimetre for the ranges an
//! HF radar covers.

use std::f64::consts::PI;

use crate::ellipsoid::Ellipsoid;

/// Convergence threshold on sigma / lambda (radians).
const TOLERANCE: f64 = 1e-12;
const MAX_ITERATIONS: usize = 200;

/// Result of a direct geodesic computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    /// Latitude (degrees)
    pub lat: f64,
    /// Longitude (degrees), normalised to [-180, 180)
    pub lon: f64,
    /// Forward azimuth at the destination (degrees)
    pub azimuth: f64,
}

/// Result of an inverse geodesic computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inverse {
    /// Geodesic distance (meters)
    pub distance: f64,
    /// Initial azimuth at the first point (degrees, [0, 360))
    pub azimuth1: f64,
    /// Forward azimuth at the second point (degrees, [0, 360))
    pub azimuth2: f64,
}

/// Geodesic solver bound to an ellipsoid.
#[derive(Debug, Clone, Copy)]
pub struct Geodesic {
    ellipsoid: Ellipsoid,
}

impl Geodesic {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    pub fn wgs84() -> Self {
        Self::new(Ellipsoid::WGS84)
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Solve the direct problem: start at (lat1, lon1), head along
    /// `azimuth_deg` for `distance_m` meters.
    pub fn direct(&self, lat1: f64, lon1: f64, azimuth_deg: f64, distance_m: f64) -> Destination {
        let f = self.ellipsoid.f;
        let b = self.ellipsoid.b();

        let alpha1 = azimuth_deg.to_radians();
        let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

        // Reduced latitude
        let tan_u1 = (1.0 - f) * lat1.to_radians().tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;

        let sigma1 = tan_u1.atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos2_alpha = 1.0 - sin_alpha * sin_alpha;

        let u2 = cos2_alpha * self.ellipsoid.ep2();
        let big_a = 1.0 + u2 / 16384.0 * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2)));
        let big_b = u2 / 1024.0 * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));

        let sigma0 = distance_m / (b * big_a);
        let mut sigma = sigma0;
        for _ in 0..MAX_ITERATIONS {
            let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            let (sin_sigma, cos_sigma) = sigma.sin_cos();
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
            let previous = sigma;
            sigma = sigma0 + delta_sigma;
            if (sigma - previous).abs() <= TOLERANCE {
                break;
            }
        }

        let cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        let (sin_sigma, cos_sigma) = sigma.sin_cos();

        let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + x * x).sqrt());

        let lambda = (sin_sigma * sin_alpha1)
            .atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let azimuth2 = sin_alpha.atan2(-x);

        Destination {
            lat: lat2.to_degrees(),
            lon: normalize_longitude((lon1.to_radians() + l).to_degrees()),
            azimuth: azimuth2.to_degrees(),
        }
    }

    /// Solve the inverse problem between two points.
    ///
    /// Returns `None` when the iteration fails to converge, which only
    /// happens for nearly antipodal points.
    pub fn inverse(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Option<Inverse> {
        let Ellipsoid { a, f } = self.ellipsoid;
        let b = self.ellipsoid.b();

        let l = (lon2 - lon1).to_radians();
        let u1 = ((1.0 - f) * lat1.to_radians().tan()).atan();
        let u2 = ((1.0 - f) * lat2.to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut converged = false;
        let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 1.0, 0.0);
        let (mut cos2_alpha, mut cos_2sigma_m) = (1.0, 0.0);
        let (mut sin_lambda, mut cos_lambda) = (0.0, 1.0);

        for _ in 0..MAX_ITERATIONS {
            (sin_lambda, cos_lambda) = lambda.sin_cos();
            let t1 = cos_u2 * sin_lambda;
            let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
            sin_sigma = (t1 * t1 + t2 * t2).sqrt();
            if sin_sigma == 0.0 {
                // Coincident points
                return Some(Inverse {
                    distance: 0.0,
                    azimuth1: 0.0,
                    azimuth2: 0.0,
                });
            }
            cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            sigma = sin_sigma.atan2(cos_sigma);

            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            cos2_alpha = 1.0 - sin_alpha * sin_alpha;
            // Equatorial line: cos2_alpha = 0
            cos_2sigma_m = if cos2_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
            } else {
                0.0
            };

            let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
            let previous = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - previous).abs() <= TOLERANCE {
                converged = true;
                break;
            }
        }

        if !converged {
            return None;
        }

        let u_sq = cos2_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        let distance = b * big_a * (sigma - delta_sigma);
        let azimuth1 = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
        let azimuth2 = (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

        Some(Inverse {
            distance,
            azimuth1: wrap_degrees(azimuth1 * 180.0 / PI),
            azimuth2: wrap_degrees(azimuth2 * 180.0 / PI),
        })
    }
}

/// Normalise a longitude to [-180, 180).
pub fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}
