//! Latitude/longitude grid over the unit sphere, for drawing its surface

use serde::Serialize;
use std::f64::consts::PI;

use crate::constants::{MESH_COLS, MESH_ROWS, TAU};
use crate::coordinates::Cartesian3;
use crate::errors::{GeometryError, Result};

/// Vertices of a `rows × cols` grid on the unit sphere
///
/// Row `i` has polar angle `φ = π i / (rows - 1)`, column `j` has azimuth
/// `θ = 2π j / (cols - 1)`. Both ranges include their endpoints, so the first
/// and last columns coincide and the first and last rows collapse onto the
/// poles, which is what a surface plot expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereMesh {
    rows: usize,
    cols: usize,
    vertices: Vec<Cartesian3>,
}

impl SphereMesh {
    /// Samples the sphere on a `rows × cols` grid
    ///
    /// # Errors
    ///
    /// `InvalidSampling` if either dimension is below 2.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(GeometryError::InvalidSampling(format!(
                "sphere mesh needs at least 2x2 samples, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self::sample(rows, cols))
    }

    fn sample(rows: usize, cols: usize) -> Self {
        let mut vertices = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let phi = PI * i as f64 / (rows - 1) as f64;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for j in 0..cols {
                let theta = TAU * j as f64 / (cols - 1) as f64;
                let (sin_theta, cos_theta) = theta.sin_cos();
                vertices.push(Cartesian3::new(
                    sin_phi * cos_theta,
                    sin_phi * sin_theta,
                    cos_phi,
                ));
            }
        }

        SphereMesh {
            rows,
            cols,
            vertices,
        }
    }

    /// Number of polar-angle rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of azimuth columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Vertex at `(row, col)`, or `None` outside the grid
    pub fn vertex(&self, row: usize, col: usize) -> Option<Cartesian3> {
        if row < self.rows && col < self.cols {
            self.vertices.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// All vertices in row-major order
    pub fn vertices(&self) -> &[Cartesian3] {
        &self.vertices
    }

    /// Vertices grouped by row
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cartesian3]> {
        self.vertices.chunks(self.cols)
    }
}

impl Default for SphereMesh {
    fn default() -> Self {
        Self::sample(MESH_ROWS, MESH_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_dimensions() {
        let mesh = SphereMesh::default();
        assert_eq!(mesh.rows(), 10);
        assert_eq!(mesh.cols(), 25);
        assert_eq!(mesh.vertices().len(), 250);
        assert_eq!(mesh.rows_iter().count(), 10);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let mesh = SphereMesh::new(7, 13).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_grid_endpoints() {
        let mesh = SphereMesh::new(5, 9).unwrap();

        // First row is the north pole, last row the south pole
        for col in 0..mesh.cols() {
            assert_abs_diff_eq!(mesh.vertex(0, col).unwrap().z, 1.0, epsilon = 1e-15);
            assert_abs_diff_eq!(mesh.vertex(4, col).unwrap().z, -1.0, epsilon = 1e-15);
        }

        // The seam closes: first and last columns coincide
        for row in 0..mesh.rows() {
            let first = mesh.vertex(row, 0).unwrap();
            let last = mesh.vertex(row, 8).unwrap();
            assert_abs_diff_eq!(first.distance(&last), 0.0, epsilon = 1e-14);
        }

        // Middle row is the equator
        assert_abs_diff_eq!(mesh.vertex(2, 0).unwrap().x, 1.0, epsilon = 1e-15);
        assert!(mesh.vertex(5, 0).is_none());
        assert!(mesh.vertex(0, 9).is_none());
    }

    #[test]
    fn test_degenerate_dimensions_rejected() {
        assert!(matches!(
            SphereMesh::new(1, 25),
            Err(GeometryError::InvalidSampling(_))
        ));
        assert!(matches!(
            SphereMesh::new(10, 0),
            Err(GeometryError::InvalidSampling(_))
        ));
    }
}
