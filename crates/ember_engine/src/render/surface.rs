//! The drawing capability consumed by scene rendering

use crate::foundation::math::{Mat4, Vec3};

/// Capability contract for anything the scene can draw into
///
/// Implementations own shader internals and mesh buffers; the scene only
/// issues named uniform writes and draw calls. Uniform names are part of the
/// engine's shader contract: `model`, `lightPos`, `lightColor`,
/// `objectColor`.
pub trait RenderSurface {
    /// Write a scalar uniform
    fn set_uniform_f32(&mut self, name: &str, value: f32);

    /// Write a vector uniform
    fn set_uniform_vec3(&mut self, name: &str, value: Vec3);

    /// Write a matrix uniform
    fn set_uniform_mat4(&mut self, name: &str, value: Mat4);

    /// Draw the mesh registered under `mesh` with the currently set uniforms
    ///
    /// Unknown mesh names must degrade to drawing nothing; they are never a
    /// frame-fatal error.
    fn draw_mesh(&mut self, mesh: &str);
}
