//! Per-frame view state
//!
//! The input pass turns key events into [`ViewCommand`]s; applying a command
//! mutates a [`ViewState`]. The render pass only ever reads the state, so
//! the whole state machine is testable without a window.

use wire4d_math::{compose_rotation, MatN, ROTATION_PLANES_3, ROTATION_PLANES_4};

/// A single state transition produced by the input pass.
///
/// Rotation and translation carry a direction of `+1.0` or `-1.0`; the step
/// size is configuration, applied by [`ViewState::apply`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewCommand {
    /// Step the angle of one rotation plane (index into the plane table).
    Rotate { plane: usize, dir: f32 },
    /// Step the translation offset of one spatial axis.
    Translate { axis: usize, dir: f32 },
    /// Switch between orthographic and perspective projection.
    ToggleProjection,
    /// Zero the rotation and translation vectors.
    Reset,
}

/// Mutable view state: one rotation angle per plane (degrees), one
/// translation offset per axis, and the projection mode.
///
/// `N` is the spatial dimension, `P` the number of rotation planes
/// (`N·(N−1)/2`, spelled out because const arithmetic can't). Use the
/// [`ViewState3`] / [`ViewState4`] aliases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState<const N: usize, const P: usize> {
    /// Rotation angles in degrees, ordered like the plane table.
    pub angles: [f32; P],
    /// Translation offsets, one per axis.
    pub offsets: [f32; N],
    /// `true` = perspective, `false` = orthographic.
    pub perspective: bool,
}

/// View state for 3D shapes: 3 rotation planes, 3 translation axes.
pub type ViewState3 = ViewState<3, 3>;

/// View state for 4D shapes: 6 rotation planes, 4 translation axes.
pub type ViewState4 = ViewState<4, 6>;

impl<const N: usize, const P: usize> Default for ViewState<N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const P: usize> ViewState<N, P> {
    /// Zero rotation and translation, perspective projection on.
    pub fn new() -> Self {
        Self {
            angles: [0.0; P],
            offsets: [0.0; N],
            perspective: true,
        }
    }

    /// Apply one command. Steps are in degrees (rotation) and world units
    /// (translation). Out-of-range plane or axis indices are ignored with a
    /// debug log; a 3D scene silently drops commands for 4D-only planes.
    pub fn apply(&mut self, command: ViewCommand, rotate_step: f32, translate_step: f32) {
        match command {
            ViewCommand::Rotate { plane, dir } => {
                if let Some(angle) = self.angles.get_mut(plane) {
                    *angle += dir * rotate_step;
                } else {
                    log::debug!("ignoring rotation on plane {plane}: only {} planes", P);
                }
            }
            ViewCommand::Translate { axis, dir } => {
                if let Some(offset) = self.offsets.get_mut(axis) {
                    *offset += dir * translate_step;
                } else {
                    log::debug!("ignoring translation on axis {axis}: only {} axes", N);
                }
            }
            ViewCommand::ToggleProjection => self.perspective = !self.perspective,
            ViewCommand::Reset => {
                self.angles = [0.0; P];
                self.offsets = [0.0; N];
            }
        }
    }

    /// Normalize every angle into `[0, 360)`.
    pub fn wrap_angles(&mut self) {
        for angle in &mut self.angles {
            *angle = angle.rem_euclid(360.0);
        }
    }
}

impl ViewState3 {
    /// The composed rotation matrix for the current angles, in the canonical
    /// 3D plane order.
    pub fn rotation_matrix(&self) -> MatN<3> {
        compose_rotation::<3>(&self.angles, &ROTATION_PLANES_3)
    }
}

impl ViewState4 {
    /// The composed rotation matrix for the current angles, in the canonical
    /// 4D plane order.
    pub fn rotation_matrix(&self) -> MatN<4> {
        compose_rotation::<4>(&self.angles, &ROTATION_PLANES_4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_steps_one_plane() {
        let mut state = ViewState3::new();
        state.apply(ViewCommand::Rotate { plane: 1, dir: 1.0 }, 5.0, 5.0);
        state.apply(ViewCommand::Rotate { plane: 1, dir: 1.0 }, 5.0, 5.0);
        state.apply(ViewCommand::Rotate { plane: 0, dir: -1.0 }, 5.0, 5.0);
        assert_eq!(state.angles, [-5.0, 10.0, 0.0]);
    }

    #[test]
    fn test_translate_steps_one_axis() {
        let mut state = ViewState4::new();
        state.apply(ViewCommand::Translate { axis: 3, dir: -1.0 }, 5.0, 5.0);
        assert_eq!(state.offsets, [0.0, 0.0, 0.0, -5.0]);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut state = ViewState3::new();
        state.apply(ViewCommand::Rotate { plane: 5, dir: 1.0 }, 5.0, 5.0);
        state.apply(ViewCommand::Translate { axis: 3, dir: 1.0 }, 5.0, 5.0);
        assert_eq!(state, ViewState3::new());
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut state = ViewState4::new();
        assert!(state.perspective);
        state.apply(ViewCommand::ToggleProjection, 5.0, 5.0);
        assert!(!state.perspective);

        state.apply(ViewCommand::Rotate { plane: 2, dir: 1.0 }, 5.0, 5.0);
        state.apply(ViewCommand::Translate { axis: 0, dir: 1.0 }, 5.0, 5.0);
        state.apply(ViewCommand::Reset, 5.0, 5.0);
        assert_eq!(state.angles, [0.0; 6]);
        assert_eq!(state.offsets, [0.0; 4]);
        // Reset restores the vectors, not the projection mode.
        assert!(!state.perspective);
    }

    #[test]
    fn test_wrap_angles() {
        let mut state = ViewState4::new();
        state.angles[0] = 365.0;
        state.angles[1] = -5.0;
        state.angles[2] = 360.0;
        state.wrap_angles();
        assert_eq!(state.angles[0], 5.0);
        assert_eq!(state.angles[1], 355.0);
        assert_eq!(state.angles[2], 0.0);
    }
}
