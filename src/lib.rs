//! Spherekit: geometry helpers for the unit sphere
//!
//! This crate converts between cartesian and geocentric latitude/longitude
//! coordinates, projects points radially and stereographically onto and off the
//! unit sphere, and computes circumcircles of triangles. A small drawing layer
//! samples sphere meshes and arcs for an external plotting backend.
//!
//! All geometric functions are pure. The ones with a numeric singularity
//! (the origin, the antipode of a projection pole, collinear points) return a
//! [`GeometryError`] instead of NaN.

pub mod circumcircle;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod plot;
pub mod projection;

// Re-export commonly used types
pub use circumcircle::{circumcenter, Circumcircle};
pub use coordinates::{
    euclidean_distance, latitude_longitude, project_to_unit_sphere, to_cartesian, Cartesian3,
    LatLon, PlanePoint,
};
pub use errors::{GeometryError, Result};
pub use projection::{
    project_onto_lower_plane, project_onto_lower_sphere, project_onto_tan_plane,
    project_onto_tan_sphere, project_onto_upper_plane, project_onto_upper_sphere, PlaneProjection,
    Pole, Stereographic,
};
