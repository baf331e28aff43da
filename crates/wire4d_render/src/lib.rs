//! Rendering for the Wire4D visualizer
//!
//! The frame is composed on the CPU and presented through wgpu:
//!
//! - [`Canvas`] - an RGBA8 pixel surface with line drawing, rectangle
//!   outlines, and sub-surface blitting
//! - [`Viewport`] - a bordered, optionally labeled panel owning an inner
//!   canvas with its own local coordinate space
//! - [`TextPainter`] - single-line text rasterization (status bar, labels)
//! - [`RenderContext`] - window surface, device, and queue management
//! - [`BlitPipeline`] - uploads the composed canvas as a texture and draws
//!   it with a fullscreen triangle
//!
//! Everything above the `context`/`blit` pair is plain CPU code and is
//! covered by unit tests.

pub mod blit;
pub mod canvas;
pub mod context;
pub mod text;
pub mod viewport;

pub use blit::BlitPipeline;
pub use canvas::Canvas;
pub use context::{ContextError, RenderContext};
pub use text::{FontError, TextPainter};
pub use viewport::Viewport;
