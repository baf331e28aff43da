//! Scene: the displayed shape plus its view state
//!
//! A [`Scene`] is a tagged variant over the two supported dimensions. The
//! 3D and 4D arms carry the same pipeline (rest pose → rotate → translate →
//! project → draw); only the shape tables, plane count, and panel layout
//! differ, so the event loop talks to one type.

use std::path::Path;

use wire4d_core::{
    cube, load_stl, posed_points, tesseract, Color, DepthAxis, MeshError, Projector, ViewCommand,
    ViewState3, ViewState4, Wireframe,
};
use wire4d_math::AXIS_NAMES;
use wire4d_render::Viewport;

use crate::config::{InputConfig, ViewConfig};

/// One viewport panel: which coordinates to project, and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSpec {
    pub label: String,
    pub axis_x: usize,
    pub axis_y: usize,
    /// Axis used for perspective depth when the mode is perspective.
    pub depth_axis: usize,
}

impl PanelSpec {
    /// A panel projecting `axis_x`/`axis_y`, labeled after them ("xy", "xz").
    fn new(axis_x: usize, axis_y: usize, depth_axis: usize) -> Self {
        Self {
            label: format!("{}{}", AXIS_NAMES[axis_x], AXIS_NAMES[axis_y]),
            axis_x,
            axis_y,
            depth_axis,
        }
    }
}

/// The displayed shape and its mutable view state.
pub enum Scene {
    Dim3 {
        shape: Wireframe<3>,
        view: ViewState3,
    },
    Dim4 {
        shape: Wireframe<4>,
        view: ViewState4,
    },
}

impl Scene {
    /// The built-in cube scene.
    pub fn cube(half_extent: f32) -> Self {
        Scene::Dim3 {
            shape: cube(half_extent),
            view: ViewState3::new(),
        }
    }

    /// The built-in tesseract scene.
    pub fn tesseract(half_extent: f32) -> Self {
        Scene::Dim4 {
            shape: tesseract(half_extent),
            view: ViewState4::new(),
        }
    }

    /// A 3D scene displaying an STL mesh.
    pub fn from_mesh<P: AsRef<Path>>(path: P, color: Color) -> Result<Self, MeshError> {
        Ok(Scene::Dim3 {
            shape: load_stl(path, color)?,
            view: ViewState3::new(),
        })
    }

    /// Spatial dimension of the displayed shape (3 or 4).
    pub fn dimension(&self) -> usize {
        match self {
            Scene::Dim3 { .. } => 3,
            Scene::Dim4 { .. } => 4,
        }
    }

    /// Point and edge counts of the displayed shape.
    pub fn shape_counts(&self) -> (usize, usize) {
        match self {
            Scene::Dim3 { shape, .. } => (shape.point_count(), shape.edge_count()),
            Scene::Dim4 { shape, .. } => (shape.point_count(), shape.edge_count()),
        }
    }

    /// Apply one view command with the configured step sizes.
    pub fn apply(&mut self, command: ViewCommand, input: &InputConfig) {
        match self {
            Scene::Dim3 { view, .. } => {
                view.apply(command, input.rotate_step, input.translate_step)
            }
            Scene::Dim4 { view, .. } => {
                view.apply(command, input.rotate_step, input.translate_step)
            }
        }
    }

    /// Finish an input pass. The 4D scene wraps its angles into [0, 360);
    /// the 3D scene historically lets them run free, and keeps doing so.
    pub fn end_input_pass(&mut self) {
        if let Scene::Dim4 { view, .. } = self {
            view.wrap_angles();
        }
    }

    /// One-line summary: rotation vector, translation vector, mode.
    pub fn status_line(&self) -> String {
        fn join(values: &[f32]) -> String {
            values
                .iter()
                .map(|v| format!("{v:.0}"))
                .collect::<Vec<_>>()
                .join(", ")
        }
        let (angles, offsets, perspective) = match self {
            Scene::Dim3 { view, .. } => (join(&view.angles), join(&view.offsets), view.perspective),
            Scene::Dim4 { view, .. } => (join(&view.angles), join(&view.offsets), view.perspective),
        };
        let mode = if perspective { "perspective" } else { "ortho" };
        format!("R[{angles}] T[{offsets}] {mode}")
    }

    /// The viewport panels this scene wants, left to right.
    ///
    /// 3D: the single XY panel with Z depth. 4D: XY and XZ side by side,
    /// both with W as the depth axis, so perspective mode foreshortens
    /// along the dimension that has no screen axis of its own.
    pub fn panels(&self) -> Vec<PanelSpec> {
        match self {
            Scene::Dim3 { .. } => vec![PanelSpec::new(0, 1, 2)],
            Scene::Dim4 { .. } => vec![PanelSpec::new(0, 1, 3), PanelSpec::new(0, 2, 3)],
        }
    }

    /// Pose the shape and draw every edge into `viewport` for one panel.
    pub fn draw(&self, viewport: &mut Viewport, panel: &PanelSpec, view_config: &ViewConfig) {
        let origin = viewport.center();
        match self {
            Scene::Dim3 { shape, view } => {
                let points = posed_points(shape.rest_points(), &view.rotation_matrix(), &view.offsets);
                let projector =
                    make_projector(origin, panel, view.perspective, view_config.projection_distance);
                draw_edges(shape, &points, &projector, viewport);
            }
            Scene::Dim4 { shape, view } => {
                let points = posed_points(shape.rest_points(), &view.rotation_matrix(), &view.offsets);
                let projector =
                    make_projector(origin, panel, view.perspective, view_config.projection_distance);
                draw_edges(shape, &points, &projector, viewport);
            }
        }
    }
}

fn make_projector(
    origin: [f32; 2],
    panel: &PanelSpec,
    perspective: bool,
    distance: f32,
) -> Projector {
    if perspective {
        Projector::perspective(
            origin,
            panel.axis_x,
            panel.axis_y,
            DepthAxis {
                axis: panel.depth_axis,
                distance,
            },
        )
    } else {
        Projector::orthographic(origin, panel.axis_x, panel.axis_y)
    }
}

/// Draw every edge in list order; endpoints with a degenerate perspective
/// denominator skip their edge for this frame.
fn draw_edges<const N: usize>(
    shape: &Wireframe<N>,
    points: &[[f32; N]],
    projector: &Projector,
    viewport: &mut Viewport,
) {
    for edge in shape.edges() {
        let (Some(a), Some(b)) = (
            projector.project(&points[edge.a]),
            projector.project(&points[edge.b]),
        ) else {
            continue;
        };
        viewport.canvas().line(a, b, edge.color);
    }
}
