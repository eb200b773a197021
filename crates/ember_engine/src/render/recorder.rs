//! A recording implementation of [`RenderSurface`]
//!
//! Captures every uniform write and draw call in submission order. Used by
//! the headless sandbox and by tests that assert on dispatch order and
//! uniform values without a GPU.

use crate::assets::MeshLibrary;
use crate::foundation::math::{Mat4, Vec3};
use crate::render::RenderSurface;

/// One recorded surface operation
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    /// A scalar uniform write
    UniformF32 {
        /// Uniform name
        name: String,
        /// Written value
        value: f32,
    },
    /// A vector uniform write
    UniformVec3 {
        /// Uniform name
        name: String,
        /// Written value
        value: Vec3,
    },
    /// A matrix uniform write
    UniformMat4 {
        /// Uniform name
        name: String,
        /// Written value
        value: Mat4,
    },
    /// A draw call for a named mesh
    Draw {
        /// Mesh name as submitted
        mesh: String,
    },
}

/// Surface that records commands instead of drawing
///
/// When constructed with a [`MeshLibrary`], draw calls for unregistered mesh
/// names are dropped with a warning, mirroring how a real backend degrades
/// when a resource reference cannot be resolved.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    library: Option<MeshLibrary>,
}

impl RecordingSurface {
    /// Create a surface that records every submitted command
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface that validates draw calls against a mesh library
    pub fn with_library(library: MeshLibrary) -> Self {
        Self {
            commands: Vec::new(),
            library: Some(library),
        }
    }

    /// All commands recorded so far, in submission order
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Names of all recorded draw calls, in submission order
    pub fn draw_calls(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Draw { mesh } => Some(mesh.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The last value written to a vector uniform, if any
    pub fn uniform_vec3(&self, uniform: &str) -> Option<Vec3> {
        self.commands.iter().rev().find_map(|command| match command {
            SurfaceCommand::UniformVec3 { name, value } if name == uniform => Some(*value),
            _ => None,
        })
    }

    /// Forget all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn set_uniform_f32(&mut self, name: &str, value: f32) {
        self.commands.push(SurfaceCommand::UniformF32 {
            name: name.to_string(),
            value,
        });
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) {
        self.commands.push(SurfaceCommand::UniformVec3 {
            name: name.to_string(),
            value,
        });
    }

    fn set_uniform_mat4(&mut self, name: &str, value: Mat4) {
        self.commands.push(SurfaceCommand::UniformMat4 {
            name: name.to_string(),
            value,
        });
    }

    fn draw_mesh(&mut self, mesh: &str) {
        if let Some(library) = &self.library {
            if library.get(mesh).is_none() {
                log::warn!("mesh `{mesh}` is not registered, skipping draw");
                return;
            }
        }
        self.commands.push(SurfaceCommand::Draw {
            mesh: mesh.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_submission_order() {
        let mut surface = RecordingSurface::new();
        surface.set_uniform_vec3("lightColor", Vec3::new(1.0, 1.0, 1.0));
        surface.draw_mesh("Cube");
        surface.draw_mesh("Sphere");

        assert_eq!(surface.draw_calls(), ["Cube", "Sphere"]);
        assert_eq!(
            surface.uniform_vec3("lightColor"),
            Some(Vec3::new(1.0, 1.0, 1.0))
        );
    }

    #[test]
    fn test_unknown_mesh_is_skipped_with_library() {
        let mut surface = RecordingSurface::with_library(MeshLibrary::with_primitives());
        surface.draw_mesh("Cube");
        surface.draw_mesh("DoesNotExist");

        assert_eq!(surface.draw_calls(), ["Cube"]);
    }

    #[test]
    fn test_uniform_vec3_reports_last_write() {
        let mut surface = RecordingSurface::new();
        surface.set_uniform_vec3("objectColor", Vec3::new(1.0, 0.0, 0.0));
        surface.set_uniform_vec3("objectColor", Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(
            surface.uniform_vec3("objectColor"),
            Some(Vec3::new(0.0, 1.0, 0.0))
        );
    }
}
