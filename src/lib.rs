//! Wire4D - interactive 3D/4D wireframe visualizer
//!
//! Rotates, translates, and projects wireframe shapes (a cube, a tesseract,
//! or an STL mesh) onto bordered viewport panels, with live keyboard
//! control of the rotation angles, translation offsets, and projection
//! mode. The geometry pipeline lives in `wire4d_core`; this crate supplies
//! the configuration, input mapping, scene selection, and event loop.

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod scene;
