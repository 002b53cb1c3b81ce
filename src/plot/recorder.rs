//! A canvas that records draw calls instead of rendering them

use serde::{Deserialize, Serialize};

use super::{Color, SphereCanvas, SphereMesh};
use crate::coordinates::Cartesian3;
use crate::errors::Result;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotCommand {
    /// Sphere surface, vertices in row-major order
    Surface {
        rows: usize,
        cols: usize,
        vertices: Vec<Cartesian3>,
        color: Color,
        alpha: f64,
    },
    /// Single marker
    Scatter {
        point: Cartesian3,
        color: Color,
        size: f64,
    },
    /// Connected line
    Polyline {
        points: Vec<Cartesian3>,
        color: Color,
    },
    /// Axis limits as `(min, max)` for x, y and z
    Limits { limits: [(f64, f64); 3] },
}

/// Everything drawn on a [`SceneRecorder`], in call order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Draw calls in the order they were made
    pub commands: Vec<PlotCommand>,
}

impl Scene {
    /// Serialises the scene as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a scene from JSON
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Number of markers in the scene
    pub fn scatter_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PlotCommand::Scatter { .. }))
            .count()
    }
}

/// [`SphereCanvas`] that keeps every call as a [`PlotCommand`]
#[derive(Debug, Default)]
pub struct SceneRecorder {
    scene: Scene,
}

impl SceneRecorder {
    /// Creates a recorder with no commands
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[PlotCommand] {
        &self.scene.commands
    }

    /// Finishes recording
    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl SphereCanvas for SceneRecorder {
    fn draw_surface(&mut self, mesh: &SphereMesh, color: &Color, alpha: f64) {
        self.scene.commands.push(PlotCommand::Surface {
            rows: mesh.rows(),
            cols: mesh.cols(),
            vertices: mesh.vertices().to_vec(),
            color: color.clone(),
            alpha,
        });
    }

    fn scatter(&mut self, point: Cartesian3, color: &Color, size: f64) {
        self.scene.commands.push(PlotCommand::Scatter {
            point,
            color: color.clone(),
            size,
        });
    }

    fn polyline(&mut self, points: &[Cartesian3], color: &Color) {
        self.scene.commands.push(PlotCommand::Polyline {
            points: points.to_vec(),
            color: color.clone(),
        });
    }

    fn set_limits(&mut self, limits: [(f64, f64); 3]) {
        self.scene.commands.push(PlotCommand::Limits { limits });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GeometryError;
    use crate::plot::{finish_sphere, init_sphere, sphere_line, sphere_points, PlotConfig};

    #[test]
    fn test_new_recorder_is_empty() {
        let recorder = SceneRecorder::new();
        assert!(recorder.commands().is_empty());
        assert_eq!(recorder.into_scene(), Scene::default());
    }

    #[test]
    fn test_line_between_antipodes_draws_nothing() {
        let config = PlotConfig::default();
        let mut recorder = SceneRecorder::new();
        let north = Cartesian3::new(0.0, 0.0, 1.0);

        let result = sphere_line(&mut recorder, north, -north, None, &config);
        assert!(matches!(result, Err(GeometryError::ZeroVector { .. })));
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_records_in_call_order() {
        let config = PlotConfig::default();
        let mut recorder = SceneRecorder::new();

        init_sphere(&mut recorder, &config).unwrap();
        sphere_points(
            &mut recorder,
            &[Cartesian3::new(1.0, 0.0, 0.0), Cartesian3::new(0.0, 0.0, -1.0)],
            &config,
        );
        finish_sphere(&mut recorder);

        let commands = recorder.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(
            &commands[0],
            PlotCommand::Surface { rows: 10, cols: 25, .. }
        ));
        assert!(matches!(&commands[1], PlotCommand::Scatter { size, .. } if *size == 20.0));
        assert_eq!(
            commands[3],
            PlotCommand::Limits {
                limits: [(-1.0, 1.0); 3]
            }
        );
        assert_eq!(recorder.into_scene().scatter_count(), 2);
    }

    #[test]
    fn test_scene_json_round_trip() {
        let mut recorder = SceneRecorder::new();
        recorder.scatter(Cartesian3::new(0.0, 1.0, 0.0), &Color::new("g"), 5.0);
        recorder.polyline(
            &[Cartesian3::new(1.0, 0.0, 0.0), Cartesian3::new(0.0, 1.0, 0.0)],
            &Color::black(),
        );
        let scene = recorder.into_scene();

        let json = scene.to_json().unwrap();
        assert!(json.contains(r#""kind": "scatter""#));
        assert!(json.contains(r#""color": "g""#));
        assert_eq!(Scene::from_json(&json).unwrap(), scene);
    }
}
