//! Polylines between two points of the unit sphere
//!
//! Both samplers walk a straight line in space and push every sample back onto
//! the sphere with [`project_to_unit_sphere`]. The chord between the endpoints
//! yields the short great-circle arc from `u` to `v`; the tangent line at `u`
//! yields an arc leaving `u` in the direction of `v`.

use log::{debug, trace};

use crate::constants::DEGENERACY_TOLERANCE;
use crate::coordinates::{project_to_unit_sphere, Cartesian3};
use crate::errors::{GeometryError, Result};

fn check_samples(samples: usize) -> Result<()> {
    if samples < 2 {
        return Err(GeometryError::InvalidSampling(format!(
            "an arc needs at least 2 samples, got {}",
            samples
        )));
    }
    Ok(())
}

fn sample_line(start: Cartesian3, step: Cartesian3, samples: usize) -> Result<Vec<Cartesian3>> {
    check_samples(samples)?;
    trace!("sampling {} points from {:?} along {:?}", samples, start, step);

    (0..samples)
        .map(|i| {
            let t = i as f64 / (samples - 1) as f64;
            project_to_unit_sphere(start + step * t)
        })
        .collect()
}

/// Samples the chord from `u` to `v` and projects it onto the sphere
///
/// The first sample is `u` and the last is `v`, both projected.
///
/// # Errors
///
/// `InvalidSampling` for fewer than 2 samples. `ZeroVector` when the chord
/// passes through the origin, which happens for antipodal endpoints, whether
/// or not a sample lands on the origin itself.
pub fn chord_arc(u: Cartesian3, v: Cartesian3, samples: usize) -> Result<Vec<Cartesian3>> {
    check_samples(samples)?;
    if chord_passes_origin(u, v) {
        debug!("chord from {:?} to {:?} passes through the origin", u, v);
        return Err(GeometryError::ZeroVector {
            context: "chord_arc",
        });
    }
    sample_line(u, v - u, samples)
}

/// True when the segment `u v` meets the origin, up to rounding
///
/// The distance from the origin to the line is `|u × v| / |v - u|`, and the
/// foot of the perpendicular lies between the endpoints when `u · v < 0`.
fn chord_passes_origin(u: Cartesian3, v: Cartesian3) -> bool {
    let scale = u.magnitude().max(v.magnitude());
    u.dot(&v) < 0.0 && u.cross(&v).magnitude() <= DEGENERACY_TOLERANCE * scale * u.distance(&v)
}

/// Samples the tangent line at `u` toward `v` and projects it onto the sphere
///
/// The line is `u + t w` with `w = (u × v) × u`, the component of `v`
/// orthogonal to `u` (scaled by `|u|²`), for `t` in `[0, 1]`.
///
/// # Errors
///
/// `InvalidSampling` for fewer than 2 samples, `ZeroVector` if `u` is the
/// origin.
pub fn tangent_arc(u: Cartesian3, v: Cartesian3, samples: usize) -> Result<Vec<Cartesian3>> {
    let w = u.cross(&v).cross(&u);
    sample_line(u, w, samples)
}
