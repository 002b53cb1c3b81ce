//! # Stereographic Projection Module
//!
//! Maps points of the unit sphere onto the plane tangent at a chosen pole, and
//! lifts plane points back onto the sphere.
//!
//! ## Geometry
//!
//! For a pole `t` (a unit vector, the point of tangency) the projection centre
//! is the antipode `-t`. A sphere point `x` is sent along the ray from `-t`
//! through `x` until it meets the plane `t · p = 1`:
//!
//! ```text
//! s = 2 / (t · (x + t))
//! p = s x + (s - 1) t
//! ```
//!
//! The plane point is reported in the pole's [`TangentFrame`]. Lifting a plane
//! point with in-plane offset `d` from the tangent point inverts this:
//!
//! ```text
//! x = (4 d + (4 - |d|²) t) / (4 + |d|²)
//! ```
//!
//! The only singular input is the projection centre `-t` itself, which has no
//! image on the plane. Lifting is total.
//!
//! ## Pole direction
//!
//! A [`Pole`] always names the point of tangency. "Upper" projections use
//! [`Pole::NORTH`] and the south pole as their singularity; "lower" projections
//! use [`Pole::SOUTH`].
//!
//! ## Examples
//!
//! ```rust
//! use spherekit::coordinates::Cartesian3;
//! use spherekit::projection::{project_onto_upper_plane, project_onto_upper_sphere};
//!
//! let equator = Cartesian3::new(1.0, 0.0, 0.0);
//! let on_plane = project_onto_upper_plane(equator).unwrap();
//! assert_eq!((on_plane.x, on_plane.y), (2.0, 0.0));
//!
//! let back = project_onto_upper_sphere(on_plane);
//! assert!(back.distance(&equator) < 1e-15);
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{BASIS_EPSILON, NORTH_POLE, SOUTH_POLE};
use crate::coordinates::{Cartesian3, PlanePoint};
use crate::errors::{GeometryError, Result};

/// Point of tangency of a projection plane
///
/// Stored as a unit vector. The antipode of the pole is the singular point of
/// the projection. Serialises as its direction; deserialising goes through
/// [`Pole::new`], so zero and non-finite directions are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Cartesian3", into = "Cartesian3")]
pub struct Pole {
    direction: Cartesian3,
}

impl Pole {
    /// Tangent at the north pole (0, 0, 1), used by the "upper" projections
    pub const NORTH: Pole = Pole {
        direction: Cartesian3::from_array(NORTH_POLE),
    };

    /// Tangent at the south pole (0, 0, -1), used by the "lower" projections
    pub const SOUTH: Pole = Pole {
        direction: Cartesian3::from_array(SOUTH_POLE),
    };

    /// Creates a pole pointing along `direction`
    ///
    /// The direction is normalised, so any non-zero vector works.
    ///
    /// # Errors
    ///
    /// `ZeroVector` for the zero vector, `NonFinite` for NaN or infinite
    /// components.
    pub fn new(direction: Cartesian3) -> Result<Self> {
        if !direction.is_finite() {
            return Err(GeometryError::NonFinite("Pole::new"));
        }
        let direction = direction
            .normalize()
            .ok_or(GeometryError::ZeroVector { context: "Pole::new" })?;
        Ok(Pole { direction })
    }

    /// Unit vector of the point of tangency
    pub fn direction(&self) -> Cartesian3 {
        self.direction
    }

    /// The opposite pole, i.e. this projection's centre
    pub fn antipode(&self) -> Pole {
        Pole {
            direction: -self.direction,
        }
    }

    /// Orthonormal basis of the plane tangent at this pole
    pub fn frame(&self) -> TangentFrame {
        TangentFrame::new(self)
    }
}

impl TryFrom<Cartesian3> for Pole {
    type Error = GeometryError;

    fn try_from(direction: Cartesian3) -> Result<Self> {
        Pole::new(direction)
    }
}

impl From<Pole> for Cartesian3 {
    fn from(pole: Pole) -> Self {
        pole.direction
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.direction;
        write!(f, "{},{},{}", d.x, d.y, d.z)
    }
}

/// Parses `north`, `south`, or a comma separated `x,y,z` direction
impl FromStr for Pole {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "upper" => Ok(Pole::NORTH),
            "south" | "lower" => Ok(Pole::SOUTH),
            other => {
                let parts = other
                    .split(',')
                    .map(|part| part.trim().parse::<f64>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|e| GeometryError::Config(format!("invalid pole '{}': {}", s, e)))?;

                match parts.as_slice() {
                    [x, y, z] => Pole::new(Cartesian3::new(*x, *y, *z)),
                    _ => Err(GeometryError::Config(format!(
                        "pole '{}' must be north, south or x,y,z",
                        s
                    ))),
                }
            }
        }
    }
}

/// Orthonormal basis `(u, v)` of the plane tangent at a pole
///
/// Built by Gram-Schmidt from the world x, y and z axes in that order,
/// skipping any axis (nearly) parallel to the pole. For the north and south
/// poles this gives exactly `u = x̂, v = ŷ`, so plane coordinates there are
/// plain x/y components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentFrame {
    u: Cartesian3,
    v: Cartesian3,
}

impl TangentFrame {
    /// Builds the tangent frame of a pole
    pub fn new(pole: &Pole) -> Self {
        let t = pole.direction();
        let axes = [
            Cartesian3::new(1.0, 0.0, 0.0),
            Cartesian3::new(0.0, 1.0, 0.0),
            Cartesian3::new(0.0, 0.0, 1.0),
        ];

        let mut basis: Vec<Cartesian3> = Vec::with_capacity(2);
        for axis in axes {
            let mut w = axis - t * axis.dot(&t);
            for b in &basis {
                w = w - *b * w.dot(b);
            }
            if w.magnitude_squared() > BASIS_EPSILON {
                basis.push(w / w.magnitude());
            }
            if basis.len() == 2 {
                break;
            }
        }

        // Three axes span space, so at most one can be rejected against a unit pole
        TangentFrame {
            u: basis[0],
            v: basis[1],
        }
    }

    /// First basis vector
    pub fn u(&self) -> Cartesian3 {
        self.u
    }

    /// Second basis vector
    pub fn v(&self) -> Cartesian3 {
        self.v
    }

    /// Plane coordinates of an in-plane offset from the tangent point
    pub fn to_plane(&self, offset: Cartesian3) -> PlanePoint {
        PlanePoint::new(offset.dot(&self.u), offset.dot(&self.v))
    }

    /// In-plane offset from the tangent point for plane coordinates
    pub fn from_plane(&self, point: PlanePoint) -> Cartesian3 {
        self.u * point.x + self.v * point.y
    }
}

/// A bidirectional mapping between the unit sphere and a plane
pub trait PlaneProjection {
    /// Maps a point on (or near) the sphere to plane coordinates
    fn project(&self, point: Cartesian3) -> Result<PlanePoint>;

    /// Maps plane coordinates back onto the sphere
    fn lift(&self, point: PlanePoint) -> Cartesian3;
}

/// Stereographic projection onto the plane tangent at a pole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stereographic {
    pole: Pole,
    frame: TangentFrame,
}

impl Stereographic {
    /// Creates the projection tangent at `pole`
    pub fn new(pole: Pole) -> Self {
        Stereographic {
            pole,
            frame: pole.frame(),
        }
    }

    /// Projection tangent at the north pole
    pub fn upper() -> Self {
        Self::new(Pole::NORTH)
    }

    /// Projection tangent at the south pole
    pub fn lower() -> Self {
        Self::new(Pole::SOUTH)
    }

    /// The point of tangency
    pub fn pole(&self) -> Pole {
        self.pole
    }

    /// The tangent frame plane coordinates are expressed in
    pub fn frame(&self) -> TangentFrame {
        self.frame
    }
}

impl PlaneProjection for Stereographic {
    fn project(&self, point: Cartesian3) -> Result<PlanePoint> {
        if !point.is_finite() {
            return Err(GeometryError::NonFinite("stereographic projection"));
        }

        let t = self.pole.direction();
        let s = 2.0 / t.dot(&(point + t));
        if !s.is_finite() {
            debug!("point {:?} is antipodal to pole {}", point, self.pole);
            return Err(GeometryError::AntipodalToPole {
                x: point.x,
                y: point.y,
                z: point.z,
            });
        }

        let on_plane = point * s + t * (s - 1.0);
        Ok(self.frame.to_plane(on_plane - t))
    }

    fn lift(&self, point: PlanePoint) -> Cartesian3 {
        let t = self.pole.direction();
        let d = self.frame.from_plane(point);
        let dd = point.magnitude_squared();
        (d * 4.0 + t * (4.0 - dd)) / (4.0 + dd)
    }
}

/// Projects a sphere point onto the plane tangent at the south pole
///
/// # Errors
///
/// `AntipodalToPole` for the north pole.
pub fn project_onto_lower_plane(point: Cartesian3) -> Result<PlanePoint> {
    Stereographic::lower().project(point)
}

/// Projects a sphere point onto the plane tangent at the north pole
///
/// # Errors
///
/// `AntipodalToPole` for the south pole.
pub fn project_onto_upper_plane(point: Cartesian3) -> Result<PlanePoint> {
    Stereographic::upper().project(point)
}

/// Lifts a point of the plane tangent at the south pole onto the sphere
pub fn project_onto_lower_sphere(point: PlanePoint) -> Cartesian3 {
    Stereographic::lower().lift(point)
}

/// Lifts a point of the plane tangent at the north pole onto the sphere
pub fn project_onto_upper_sphere(point: PlanePoint) -> Cartesian3 {
    Stereographic::upper().lift(point)
}

/// Projects a sphere point onto the plane tangent at `pole`
///
/// The result is the offset of the plane point `s x + (s - 1) t` from the
/// tangent point, expressed in the pole's [`TangentFrame`]. For the north and
/// south poles this is the world x/y of the plane point. For any other pole it
/// differs from the world x/y, which would drop the component along the pole
/// axis and could not be lifted back.
///
/// # Errors
///
/// `AntipodalToPole` for the antipode of `pole`.
pub fn project_onto_tan_plane(point: Cartesian3, pole: &Pole) -> Result<PlanePoint> {
    Stereographic::new(*pole).project(point)
}

/// Lifts a point of the plane tangent at `pole` onto the sphere
///
/// `point` is read in the pole's [`TangentFrame`], as produced by
/// [`project_onto_tan_plane`], not as world x/y.
pub fn project_onto_tan_sphere(point: PlanePoint, pole: &Pole) -> Cartesian3 {
    Stereographic::new(*pole).lift(point)
}
