//! N-dimensional wireframe math
//!
//! This crate provides the fixed-size matrix and vector operations used by
//! the Wire4D visualizer. Everything is built on plain arrays
//! (`[f32; N]` points, `[[f32; N]; N]` matrices) with the dimension known at
//! compile time, so there is no dynamic allocation in the transform path.
//!
//! ## Core items
//!
//! - [`MatN`] / [`VecN`] - matrix and point type aliases
//! - [`plane_rotation`] - rotation in one axis pair, embedded in identity
//! - [`compose_rotation`] - ordered composition of per-plane rotations
//! - [`ROTATION_PLANES_3`] / [`ROTATION_PLANES_4`] - the canonical plane
//!   tables (3 planes in 3D, 6 in 4D)

pub mod matn;
pub mod planes;

pub use matn::{MatN, VecN, identity, plane_rotation, mul, transform_row, compose_rotation};
pub use planes::{ROTATION_PLANES_3, ROTATION_PLANES_4, AXIS_NAMES};
