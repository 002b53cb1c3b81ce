//! # Sphere Drawing Module
//!
//! Helpers for drawing the unit sphere, points on it and arcs between them.
//!
//! Rendering itself belongs to an external graphing backend, represented here
//! by the [`SphereCanvas`] trait. The helpers in this module only compute
//! geometry (mesh vertices, arc samples) and issue draw calls against whatever
//! canvas they are given. [`SceneRecorder`] is a canvas that records those
//! calls so they can be inspected or serialised to JSON.
//!
//! ## Examples
//!
//! ```rust
//! use spherekit::coordinates::Cartesian3;
//! use spherekit::plot::{self, PlotConfig, SceneRecorder};
//!
//! let config = PlotConfig::default();
//! let mut canvas = SceneRecorder::new();
//!
//! plot::init_sphere(&mut canvas, &config).unwrap();
//! let u = Cartesian3::new(1.0, 0.0, 0.0);
//! let v = Cartesian3::new(0.0, 1.0, 0.0);
//! plot::sphere_points(&mut canvas, &[u, v], &config);
//! plot::sphere_line(&mut canvas, u, v, None, &config).unwrap();
//! plot::finish_sphere(&mut canvas);
//!
//! let scene = canvas.into_scene();
//! assert_eq!(scene.commands.len(), 5);
//! ```

pub mod arc;
pub mod mesh;
pub mod recorder;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{ARC_SAMPLES, MARKER_SIZE, MESH_COLS, MESH_ROWS, SURFACE_ALPHA};
use crate::coordinates::Cartesian3;
use crate::errors::{io_err, GeometryError, Result};

pub use arc::{chord_arc, tangent_arc};
pub use mesh::SphereMesh;
pub use recorder::{PlotCommand, Scene, SceneRecorder};

/// A named colour understood by the drawing backend, such as `"k"` or `"red"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Creates a colour from its backend name
    pub fn new(name: impl Into<String>) -> Self {
        Color(name.into())
    }

    /// Black, the default for points and lines
    pub fn black() -> Self {
        Color::new("k")
    }

    /// Cyan, the default for the sphere surface
    pub fn cyan() -> Self {
        Color::new("c")
    }

    /// The backend name of the colour
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(GeometryError::Config("colour name is empty".to_string()));
        }
        Ok(Color::new(name))
    }
}

/// Drawing settings
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Samples per arc drawn by `sphere_line` / `sphere_line2`
    pub arc_samples: usize,
    /// Polar-angle rows of the surface mesh
    pub mesh_rows: usize,
    /// Azimuth columns of the surface mesh
    pub mesh_cols: usize,
    /// Colour of the sphere surface
    pub surface_color: Color,
    /// Opacity of the sphere surface
    pub surface_alpha: f64,
    /// Colour of scattered points
    pub point_color: Color,
    /// Marker size of scattered points
    pub marker_size: f64,
    /// Colour of arcs when the caller gives none
    pub line_color: Color,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            arc_samples: ARC_SAMPLES,
            mesh_rows: MESH_ROWS,
            mesh_cols: MESH_COLS,
            surface_color: Color::cyan(),
            surface_alpha: SURFACE_ALPHA,
            point_color: Color::black(),
            marker_size: MARKER_SIZE,
            line_color: Color::black(),
        }
    }
}

impl PlotConfig {
    /// Parses a config from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: PlotConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        debug!("loaded plot config from {}", path.display());
        Self::from_json(&text)
    }

    /// Checks the sampling counts and opacity
    pub fn validate(&self) -> Result<()> {
        if self.arc_samples < 2 {
            return Err(GeometryError::Config(format!(
                "arc_samples must be at least 2, got {}",
                self.arc_samples
            )));
        }
        if self.mesh_rows < 2 || self.mesh_cols < 2 {
            return Err(GeometryError::Config(format!(
                "mesh must be at least 2x2, got {}x{}",
                self.mesh_rows, self.mesh_cols
            )));
        }
        if !(0.0..=1.0).contains(&self.surface_alpha) {
            return Err(GeometryError::Config(format!(
                "surface_alpha must be within [0, 1], got {}",
                self.surface_alpha
            )));
        }
        Ok(())
    }
}

/// A drawing surface for sphere plots
///
/// Implemented by adapters over a graphing backend. Calls are fire-and-forget;
/// the helpers in this module never read anything back from the canvas.
pub trait SphereCanvas {
    /// Draws the sphere surface from a mesh
    fn draw_surface(&mut self, mesh: &SphereMesh, color: &Color, alpha: f64);

    /// Draws a single marker
    fn scatter(&mut self, point: Cartesian3, color: &Color, size: f64);

    /// Draws a connected line through the points
    fn polyline(&mut self, points: &[Cartesian3], color: &Color);

    /// Sets the axis limits as `(min, max)` for x, y and z
    fn set_limits(&mut self, limits: [(f64, f64); 3]);
}

/// Draws the translucent unit sphere
pub fn init_sphere<C: SphereCanvas + ?Sized>(canvas: &mut C, config: &PlotConfig) -> Result<()> {
    let mesh = SphereMesh::new(config.mesh_rows, config.mesh_cols)?;
    canvas.draw_surface(&mesh, &config.surface_color, config.surface_alpha);
    Ok(())
}

/// Fixes the axes to the cube `[-1, 1]³` around the sphere
pub fn finish_sphere<C: SphereCanvas + ?Sized>(canvas: &mut C) {
    canvas.set_limits([(-1.0, 1.0); 3]);
}

/// Marks each point
pub fn sphere_points<C: SphereCanvas + ?Sized>(
    canvas: &mut C,
    points: &[Cartesian3],
    config: &PlotConfig,
) {
    for point in points {
        canvas.scatter(*point, &config.point_color, config.marker_size);
    }
}

/// Draws the great-circle arc from `u` to `v`
///
/// Uses `config.line_color` when `color` is `None`.
///
/// # Errors
///
/// See [`chord_arc`]; nothing is drawn on failure.
pub fn sphere_line<C: SphereCanvas + ?Sized>(
    canvas: &mut C,
    u: Cartesian3,
    v: Cartesian3,
    color: Option<&Color>,
    config: &PlotConfig,
) -> Result<()> {
    let points = chord_arc(u, v, config.arc_samples)?;
    canvas.polyline(&points, color.unwrap_or(&config.line_color));
    Ok(())
}

/// Draws the arc leaving `u` along the tangent toward `v`
///
/// Uses `config.line_color` when `color` is `None`.
///
/// # Errors
///
/// See [`tangent_arc`]; nothing is drawn on failure.
pub fn sphere_line2<C: SphereCanvas + ?Sized>(
    canvas: &mut C,
    u: Cartesian3,
    v: Cartesian3,
    color: Option<&Color>,
    config: &PlotConfig,
) -> Result<()> {
    let points = tangent_arc(u, v, config.arc_samples)?;
    canvas.polyline(&points, color.unwrap_or(&config.line_color));
    Ok(())
}
