//! Core model for the Wire4D visualizer
//!
//! This crate provides everything between raw input and pixels:
//!
//! - [`Wireframe`] - a dimension-tagged point set plus colored edge list,
//!   with an immutable rest pose
//! - [`cube`] / [`tesseract`] - the built-in shape tables
//! - [`load_stl`] - triangle-soup wireframe from an STL mesh file
//! - [`ViewState`] - the per-frame mutable state (rotation angles,
//!   translation offsets, projection mode) and the commands that drive it
//! - [`posed_points`] - rest pose → rotated and translated points
//! - [`Projector`] - N-dimensional points → 2D screen offsets
//!
//! Nothing in here touches a window or a GPU; the whole pipeline is
//! exercised by plain unit tests.

mod color;
mod mesh;
mod project;
mod shape;
mod shapes;
mod state;
mod transform;

pub use color::Color;
pub use mesh::{load_stl, parse_stl, MeshError};
pub use project::{DepthAxis, Projector, DEFAULT_PROJECTION_DISTANCE};
pub use shape::{Edge, ShapeError, Wireframe};
pub use shapes::{cube, tesseract};
pub use state::{ViewCommand, ViewState, ViewState3, ViewState4};
pub use transform::posed_points;

// Re-export the plane tables; callers pairing a `ViewState` with its
// composition order shouldn't need a separate math import.
pub use wire4d_math::{ROTATION_PLANES_3, ROTATION_PLANES_4};
