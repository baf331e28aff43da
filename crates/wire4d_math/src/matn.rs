//! Fixed-size square matrices over plain arrays
//!
//! Conventions, which every caller relies on:
//!
//! - Matrices are row-major: `m[row][col]`.
//! - Points are row vectors and are transformed as `p' = p × M`
//!   ([`transform_row`]).
//! - [`mul`]`(a, b)` is the ordinary product `a × b`, so under the
//!   row-vector convention `a` is applied first.
//!
//! Rotation composition is therefore `compose_rotation = P1 × P2 × … × Pk`
//! in plane-table order, and that order is load-bearing: plane rotations do
//! not commute, and the tests pin the ordering down.

/// N×N matrix, row-major.
pub type MatN<const N: usize> = [[f32; N]; N];

/// N-dimensional point or offset.
pub type VecN<const N: usize> = [f32; N];

/// Identity matrix.
pub fn identity<const N: usize>() -> MatN<N> {
    let mut m = [[0.0; N]; N];
    for i in 0..N {
        m[i][i] = 1.0;
    }
    m
}

/// Rotation by `angle` radians in the plane spanned by axes `p1` and `p2`.
///
/// The standard 2D rotation block is embedded into the identity:
///
/// ```text
/// m[p1][p1] =  cos   m[p1][p2] = -sin
/// m[p2][p1] =  sin   m[p2][p2] =  cos
/// ```
///
/// All other axes are left fixed.
///
/// # Panics
///
/// Panics if `p1 == p2` or either index is out of range (a malformed plane
/// table is a programming error, not an input error).
pub fn plane_rotation<const N: usize>(angle: f32, p1: usize, p2: usize) -> MatN<N> {
    assert!(
        p1 < N && p2 < N && p1 != p2,
        "invalid rotation plane ({}, {}) for dimension {}",
        p1,
        p2,
        N
    );

    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = identity::<N>();
    m[p1][p1] = cs;
    m[p1][p2] = -sn;
    m[p2][p1] = sn;
    m[p2][p2] = cs;
    m
}

/// Matrix product `a × b`.
#[allow(clippy::needless_range_loop)]
pub fn mul<const N: usize>(a: &MatN<N>, b: &MatN<N>) -> MatN<N> {
    let mut result = [[0.0; N]; N];
    for i in 0..N {
        for j in 0..N {
            for k in 0..N {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Transform a row-vector point: `p' = p × m`.
#[inline]
pub fn transform_row<const N: usize>(p: &VecN<N>, m: &MatN<N>) -> VecN<N> {
    let mut out = [0.0; N];
    for j in 0..N {
        for i in 0..N {
            out[j] += p[i] * m[i][j];
        }
    }
    out
}

/// Compose per-plane rotations into one matrix, in table order.
///
/// `angles_deg[k]` is the rotation (in degrees) for `planes[k]`. The result
/// is `P1 × P2 × … × Pk`; with row vectors the first table entry is applied
/// first.
///
/// # Panics
///
/// Panics if `angles_deg` and `planes` differ in length.
pub fn compose_rotation<const N: usize>(
    angles_deg: &[f32],
    planes: &[(usize, usize)],
) -> MatN<N> {
    assert_eq!(
        angles_deg.len(),
        planes.len(),
        "one angle per rotation plane"
    );

    let mut composed = identity::<N>();
    for (&angle, &(p1, p2)) in angles_deg.iter().zip(planes) {
        let rotation = plane_rotation::<N>(angle.to_radians(), p1, p2);
        composed = mul(&composed, &rotation);
    }
    composed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planes::{ROTATION_PLANES_3, ROTATION_PLANES_4};

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq<const N: usize>(a: VecN<N>, b: VecN<N>) -> bool {
        a.iter().zip(&b).all(|(x, y)| approx_eq(*x, *y))
    }

    fn mat_approx_eq<const N: usize>(a: MatN<N>, b: MatN<N>) -> bool {
        (0..N).all(|i| (0..N).all(|j| approx_eq(a[i][j], b[i][j])))
    }

    #[test]
    fn test_identity_transform() {
        let p = [1.0, 2.0, 3.0];
        let result = transform_row(&p, &identity::<3>());
        assert!(vec_approx_eq(p, result));
    }

    #[test]
    fn test_plane_rotation_matches_axis_matrices() {
        use std::f32::consts::FRAC_PI_3;

        // The three 3D plane rotations must reproduce the classic
        // axis-rotation matrices under the (1,2)/(0,2)/(0,1) plane table.
        let (s, c) = FRAC_PI_3.sin_cos();

        let rx = plane_rotation::<3>(FRAC_PI_3, 1, 2);
        assert!(mat_approx_eq(rx, [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]));

        let ry = plane_rotation::<3>(FRAC_PI_3, 0, 2);
        assert!(mat_approx_eq(ry, [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]]));

        let rz = plane_rotation::<3>(FRAC_PI_3, 0, 1);
        assert!(mat_approx_eq(rz, [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]));
    }

    #[test]
    fn test_zero_angles_is_identity() {
        let m3 = compose_rotation::<3>(&[0.0; 3], &ROTATION_PLANES_3);
        assert!(mat_approx_eq(m3, identity::<3>()));

        let m4 = compose_rotation::<4>(&[0.0; 6], &ROTATION_PLANES_4);
        assert!(mat_approx_eq(m4, identity::<4>()));
    }

    #[test]
    fn test_rotation_roundtrip_single_plane() {
        let p = [3.0, -1.0, 2.0, 0.5];
        for (i, _) in ROTATION_PLANES_4.iter().enumerate() {
            let mut angles = [0.0; 6];
            angles[i] = 37.0;
            let forward = compose_rotation::<4>(&angles, &ROTATION_PLANES_4);
            angles[i] = -37.0;
            let back = compose_rotation::<4>(&angles, &ROTATION_PLANES_4);

            let rotated = transform_row(&p, &forward);
            let restored = transform_row(&rotated, &back);
            assert!(
                vec_approx_eq(p, restored),
                "plane {i}: roundtrip produced {restored:?}"
            );
        }
    }

    #[test]
    fn test_composition_order_is_not_commutative() {
        // (90, 0, 0) then (0, 90, 0) must differ from the reverse order for
        // a point off the shared invariant axis.
        let p = [10.0, 20.0, 30.0];

        let rx = compose_rotation::<3>(&[90.0, 0.0, 0.0], &ROTATION_PLANES_3);
        let ry = compose_rotation::<3>(&[0.0, 90.0, 0.0], &ROTATION_PLANES_3);

        let xy = transform_row(&transform_row(&p, &rx), &ry);
        let yx = transform_row(&transform_row(&p, &ry), &rx);

        assert!(
            !vec_approx_eq(xy, yx),
            "X-then-Y and Y-then-X rotations unexpectedly agree: {xy:?}"
        );
    }

    #[test]
    fn test_mul_identity() {
        let a = plane_rotation::<4>(0.5, 0, 3);
        assert!(mat_approx_eq(mul(&identity::<4>(), &a), a));
        assert!(mat_approx_eq(mul(&a, &identity::<4>()), a));
    }

    #[test]
    fn test_mul_composes_angles() {
        use std::f32::consts::FRAC_PI_4;

        // Two 45° rotations in the same plane equal one 90° rotation.
        let r45 = plane_rotation::<4>(FRAC_PI_4, 0, 1);
        let r90 = plane_rotation::<4>(FRAC_PI_4 * 2.0, 0, 1);
        let composed = mul(&r45, &r45);

        let p = [1.0, 0.0, 0.0, 0.0];
        assert!(vec_approx_eq(
            transform_row(&p, &composed),
            transform_row(&p, &r90)
        ));
    }

    #[test]
    #[should_panic(expected = "invalid rotation plane")]
    fn test_degenerate_plane_panics() {
        let _ = plane_rotation::<3>(1.0, 2, 2);
    }
}
