//! Rendering surface abstraction
//!
//! The engine core never talks to a GPU directly. Everything that draws goes
//! through the [`RenderSurface`] capability: named uniform writes plus a
//! "draw the named mesh" call. A real backend binds these to shader uniforms
//! and vertex buffers; the bundled [`RecordingSurface`] captures them for
//! headless runs and tests.

pub mod recorder;
pub mod surface;

pub use recorder::{RecordingSurface, SurfaceCommand};
pub use surface::RenderSurface;
