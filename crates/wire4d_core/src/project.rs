//! Projection to screen coordinates
//!
//! A [`Projector`] maps N-dimensional points to 2D offsets relative to a
//! viewport-local origin. Two axis indices select which coordinates become
//! screen X and Y; an optional third axis supplies perspective depth.
//!
//! Perspective scales each point independently by
//! `distance / (distance + depth)` — each edge endpoint gets its own scale
//! factor, which is the visualizer's deliberate simplification rather than
//! perspective-correct interpolation. There is no clipping, sorting, or
//! culling anywhere downstream: edges draw in list order.

/// Default perspective projection distance.
pub const DEFAULT_PROJECTION_DISTANCE: f32 = 500.0;

/// Denominators smaller than this are treated as a degenerate projection.
const MIN_DEPTH_DENOMINATOR: f32 = 1e-6;

/// The depth axis and eye distance for perspective projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthAxis {
    pub axis: usize,
    pub distance: f32,
}

impl DepthAxis {
    pub fn new(axis: usize) -> Self {
        Self {
            axis,
            distance: DEFAULT_PROJECTION_DISTANCE,
        }
    }
}

/// Maps points of any dimension onto a 2D plane around `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    /// Viewport-local origin the projected offsets are relative to.
    pub origin: [f32; 2],
    /// Coordinate index that becomes screen X.
    pub axis_x: usize,
    /// Coordinate index that becomes screen Y.
    pub axis_y: usize,
    /// Depth axis for perspective; `None` projects orthographically.
    pub depth: Option<DepthAxis>,
}

impl Projector {
    pub fn orthographic(origin: [f32; 2], axis_x: usize, axis_y: usize) -> Self {
        Self {
            origin,
            axis_x,
            axis_y,
            depth: None,
        }
    }

    pub fn perspective(origin: [f32; 2], axis_x: usize, axis_y: usize, depth: DepthAxis) -> Self {
        Self {
            origin,
            axis_x,
            axis_y,
            depth: Some(depth),
        }
    }

    /// Project one point to screen coordinates.
    ///
    /// Returns `None` when the perspective denominator
    /// `distance + point[depth]` is (numerically) zero; the caller skips
    /// the edge for this frame instead of dividing by zero.
    ///
    /// # Panics
    ///
    /// Panics if a configured axis index is not below `N`; panel axis
    /// tables are static and checked by tests, so this is a programming
    /// error rather than an input condition.
    pub fn project<const N: usize>(&self, point: &[f32; N]) -> Option<[f32; 2]> {
        let x = point[self.axis_x];
        let y = point[self.axis_y];

        let scale = match self.depth {
            None => 1.0,
            Some(DepthAxis { axis, distance }) => {
                let denominator = distance + point[axis];
                if denominator.abs() < MIN_DEPTH_DENOMINATOR {
                    return None;
                }
                distance / denominator
            }
        };

        Some([self.origin[0] + x * scale, self.origin[1] + y * scale])
    }
}
