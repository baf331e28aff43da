//! Canonical rotation-plane tables
//!
//! In N dimensions a rotation happens in a plane (a pair of axes), not
//! around an axis: 3D has 3 planes, 4D has 6. The tables below fix both the
//! axis pairs and the composition order used everywhere in Wire4D. Changing
//! an entry or its position changes the final orientation produced by a
//! given angle vector, so these are part of the observable behavior.

/// Axis names, indexed by coordinate.
pub const AXIS_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// The 3D rotation planes, in composition order.
///
/// Expressed in the traditional axis-rotation convention: rotation "about X"
/// is the YZ plane, "about Y" the XZ plane, "about Z" the XY plane. The
/// order (X-axis, then Y-axis, then Z-axis) is also the angle-vector layout
/// of the 3D view state.
pub const ROTATION_PLANES_3: [(usize, usize); 3] = [
    (1, 2), // about X
    (0, 2), // about Y
    (0, 1), // about Z
];

/// The 4D rotation planes, in composition order: XY, XZ, XW, YZ, YW, ZW.
pub const ROTATION_PLANES_4: [(usize, usize); 6] = [
    (0, 1), // XY
    (0, 2), // XZ
    (0, 3), // XW
    (1, 2), // YZ
    (1, 3), // YW
    (2, 3), // ZW
];
