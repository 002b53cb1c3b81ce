//! Constants module for unit sphere geometry

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Poles of the unit sphere, as (x, y, z)
/// North pole of the unit sphere
pub const NORTH_POLE: [f64; 3] = [0.0, 0.0, 1.0];
/// South pole of the unit sphere
pub const SOUTH_POLE: [f64; 3] = [0.0, 0.0, -1.0];

// Sampling defaults for drawing
/// Points sampled along an arc between two sphere points
pub const ARC_SAMPLES: usize = 20;
/// Polar-angle rows of the sphere surface mesh
pub const MESH_ROWS: usize = 10;
/// Azimuth columns of the sphere surface mesh
pub const MESH_COLS: usize = 25;
/// Opacity of the drawn sphere surface
pub const SURFACE_ALPHA: f64 = 0.3;
/// Marker size for scattered points
pub const MARKER_SIZE: f64 = 20.0;

// Numeric tolerances
/// Below this squared length a vector is treated as too short to build a tangent basis from
pub const BASIS_EPSILON: f64 = 1e-12;
/// Relative size, in units of the input scale, below which a cross product or
/// offset is rounding noise and the configuration counts as degenerate
pub const DEGENERACY_TOLERANCE: f64 = 64.0 * f64::EPSILON;
