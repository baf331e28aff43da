//! Pose application
//!
//! Rest pose in, transformed copy out. The original geometry is shared,
//! immutable state; callers get a fresh `Vec` every frame and transforms are
//! never composed destructively across frames.

use wire4d_math::{transform_row, MatN, VecN};

/// Rotate every rest-pose point by `rotation` (row-vector convention), then
/// translate by `offsets`, component-wise.
pub fn posed_points<const N: usize>(
    rest: &[[f32; N]],
    rotation: &MatN<N>,
    offsets: &VecN<N>,
) -> Vec<[f32; N]> {
    rest.iter()
        .map(|point| {
            let mut p = transform_row(point, rotation);
            for (value, offset) in p.iter_mut().zip(offsets) {
                *value += offset;
            }
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cube, ViewCommand, ViewState3, ViewState4};
    use wire4d_math::identity;

    const EPSILON: f32 = 1e-3;

    fn points_approx_eq<const N: usize>(a: &[[f32; N]], b: &[[f32; N]]) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(p, q)| p.iter().zip(q).all(|(x, y)| (x - y).abs() < EPSILON))
    }

    #[test]
    fn test_zero_state_is_identity() {
        let shape = cube(100.0);
        let state = ViewState3::new();
        let posed = posed_points(shape.rest_points(), &state.rotation_matrix(), &state.offsets);
        assert!(points_approx_eq(&posed, shape.rest_points()));
    }

    #[test]
    fn test_translation_only() {
        let shape = cube(1.0);
        let posed = posed_points(shape.rest_points(), &identity::<3>(), &[10.0, -2.0, 0.5]);
        for (p, rest) in posed.iter().zip(shape.rest_points()) {
            assert_eq!(p[0], rest[0] + 10.0);
            assert_eq!(p[1], rest[1] - 2.0);
            assert_eq!(p[2], rest[2] + 0.5);
        }
    }

    #[test]
    fn test_rest_pose_survives_any_command_sequence() {
        let shape = crate::tesseract(50.0);
        let original = shape.rest_points().to_vec();

        let mut state = ViewState4::new();
        state.apply(ViewCommand::Rotate { plane: 2, dir: 1.0 }, 35.0, 5.0);
        state.apply(ViewCommand::Translate { axis: 1, dir: -1.0 }, 5.0, 80.0);
        let _ = posed_points(shape.rest_points(), &state.rotation_matrix(), &state.offsets);

        // Posing is non-destructive, and a zeroed state reproduces the rest
        // pose exactly.
        assert_eq!(shape.rest_points(), &original[..]);
        state.apply(ViewCommand::Reset, 5.0, 5.0);
        let posed = posed_points(shape.rest_points(), &state.rotation_matrix(), &state.offsets);
        assert!(points_approx_eq(&posed, &original));
    }

    #[test]
    fn test_full_turn_restores_points() {
        let shape = cube(10.0);
        let mut state = ViewState3::new();
        for _ in 0..72 {
            state.apply(ViewCommand::Rotate { plane: 1, dir: 1.0 }, 5.0, 5.0);
        }
        assert_eq!(state.angles[1], 360.0);
        let posed = posed_points(shape.rest_points(), &state.rotation_matrix(), &state.offsets);
        assert!(points_approx_eq(&posed, shape.rest_points()));
    }
}
