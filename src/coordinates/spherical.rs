//! Geocentric latitude/longitude conversions and radial projection
//!
//! Angles at this boundary are in degrees. Latitude is the elevation above the
//! x-y plane, longitude the azimuth measured from +x toward +y.

use log::trace;
use serde::{Deserialize, Serialize};

use super::cartesian::Cartesian3;
use crate::errors::{GeometryError, Result};

/// Geocentric latitude and longitude of a point, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees, range [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, range (-180, 180]
    pub longitude: f64,
}

impl LatLon {
    /// Creates a new latitude/longitude pair from degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLon {
            latitude,
            longitude,
        }
    }

    /// The unit vector pointing at this latitude/longitude
    pub fn to_cartesian(&self) -> Cartesian3 {
        to_cartesian(self.latitude, self.longitude)
    }
}

/// Calculates the geocentric latitude and longitude of a point
///
/// The point need not lie on the unit sphere; only its direction matters.
///
/// # Errors
///
/// `ZeroVector` for the origin, `NonFinite` for NaN or infinite components.
///
/// # Examples
///
/// ```rust
/// use spherekit::coordinates::{latitude_longitude, Cartesian3};
///
/// let north = latitude_longitude(Cartesian3::new(0.0, 0.0, 1.0)).unwrap();
/// assert!((north.latitude - 90.0).abs() < 1e-12);
/// assert_eq!(north.longitude, 0.0);
/// ```
pub fn latitude_longitude(point: Cartesian3) -> Result<LatLon> {
    if !point.is_finite() {
        return Err(GeometryError::NonFinite("latitude_longitude"));
    }

    let r = point.magnitude();
    if r == 0.0 {
        return Err(GeometryError::ZeroVector {
            context: "latitude_longitude",
        });
    }

    let longitude = point.y.atan2(point.x).to_degrees();
    // Rounding can push |z| / r past 1 for points at the poles
    let latitude = (point.z / r).clamp(-1.0, 1.0).asin().to_degrees();

    Ok(LatLon {
        latitude,
        longitude,
    })
}

/// Converts a latitude/longitude in degrees to a unit vector
///
/// `(cos(lat)cos(lon), cos(lat)sin(lon), sin(lat))`
///
/// # Examples
///
/// ```rust
/// use spherekit::coordinates::{to_cartesian, Cartesian3};
///
/// assert_eq!(to_cartesian(0.0, 0.0), Cartesian3::new(1.0, 0.0, 0.0));
/// ```
pub fn to_cartesian(latitude: f64, longitude: f64) -> Cartesian3 {
    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
    let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
    Cartesian3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

/// Euclidean distance between two points
pub fn euclidean_distance(a: Cartesian3, b: Cartesian3) -> f64 {
    a.distance(&b)
}

/// Projects a non-zero point onto the unit sphere along its ray from the origin
///
/// The point keeps its azimuth and polar angle and gets radius 1. Points
/// already on the sphere map to themselves, up to rounding.
///
/// # Errors
///
/// `ZeroVector` for the origin, which has no direction; `NonFinite` for NaN
/// or infinite components.
pub fn project_to_unit_sphere(point: Cartesian3) -> Result<Cartesian3> {
    if !point.is_finite() {
        return Err(GeometryError::NonFinite("project_to_unit_sphere"));
    }

    let r = point.magnitude();
    if r == 0.0 {
        return Err(GeometryError::ZeroVector {
            context: "project_to_unit_sphere",
        });
    }

    let azimuth = point.y.atan2(point.x);
    let polar = (point.z / r).clamp(-1.0, 1.0).acos();
    trace!(
        "radial projection r={} azimuth={} polar={}",
        r,
        azimuth,
        polar
    );

    let (sin_az, cos_az) = azimuth.sin_cos();
    let (sin_pol, cos_pol) = polar.sin_cos();
    Ok(Cartesian3::new(cos_az * sin_pol, sin_az * sin_pol, cos_pol))
}
