//! Circumcircle of a triangle in 3D
//!
//! Uses the barycentric form of the circumcenter, so the three points may lie
//! anywhere in space (on the unit sphere for spherical triangles, or not).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::DEGENERACY_TOLERANCE;
use crate::coordinates::Cartesian3;
use crate::errors::{GeometryError, Result};

/// Center and radius of the circle through three points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circumcircle {
    /// Circumcenter, in the plane of the three points
    pub center: Cartesian3,
    /// Circumradius
    pub radius: f64,
}

/// Computes the circumcenter and circumradius of the triangle `p1 p2 p3`
///
/// With side lengths `a = |p2 - p3|`, `b = |p1 - p3|`, `c = |p1 - p2|` and
/// `n = (p1 - p2) × (p2 - p3)`:
///
/// ```text
/// R = a b c / (2 |n|)
/// α = a² (p1 - p2)·(p1 - p3) / (2 |n|²)
/// β = b² (p2 - p1)·(p2 - p3) / (2 |n|²)
/// γ = c² (p3 - p1)·(p3 - p2) / (2 |n|²)
/// center = α p1 + β p2 + γ p3
/// ```
///
/// # Errors
///
/// `Collinear` when `|n|` is within rounding of zero for inputs of this size
/// (collinear or repeated points), `NonFinite` for NaN or infinite input.
///
/// # Examples
///
/// ```rust
/// use spherekit::circumcircle::circumcenter;
/// use spherekit::coordinates::Cartesian3;
///
/// let circle = circumcenter(
///     Cartesian3::new(1.0, 0.0, 0.0),
///     Cartesian3::new(-1.0, 0.0, 0.0),
///     Cartesian3::new(0.0, 1.0, 0.0),
/// )
/// .unwrap();
/// assert!((circle.radius - 1.0).abs() < 1e-12);
/// assert!(circle.center.magnitude() < 1e-12);
/// ```
pub fn circumcenter(p1: Cartesian3, p2: Cartesian3, p3: Cartesian3) -> Result<Circumcircle> {
    if !(p1.is_finite() && p2.is_finite() && p3.is_finite()) {
        return Err(GeometryError::NonFinite("circumcenter"));
    }

    let a = p2.distance(&p3);
    let b = p1.distance(&p3);
    let c = p1.distance(&p2);

    let normal = (p1 - p2).cross(&(p2 - p3));
    let area = normal.magnitude();

    // Rounding in the edge vectors is relative to the coordinates, not the edges
    let scale = p1.magnitude().max(p2.magnitude()).max(p3.magnitude());
    if area <= DEGENERACY_TOLERANCE * scale * (a + c) {
        debug!(
            "collinear triangle {:?} {:?} {:?} (|n| = {:e})",
            p1, p2, p3, area
        );
        return Err(GeometryError::Collinear);
    }

    let normal_sq = normal.magnitude_squared();
    let radius = c * a * b / (2.0 * area);

    let denominator = 2.0 * normal_sq;
    let alpha = a * a * (p1 - p2).dot(&(p1 - p3)) / denominator;
    let beta = b * b * (p2 - p1).dot(&(p2 - p3)) / denominator;
    let gamma = c * c * (p3 - p1).dot(&(p3 - p2)) / denominator;

    Ok(Circumcircle {
        center: p1 * alpha + p2 * beta + p3 * gamma,
        radius,
    })
}
