//! Mesh renderer component

use serde::{Deserialize, Serialize};

use crate::editor::PropertySheet;
use crate::foundation::math::Vec3;
use crate::render::RenderSurface;
use crate::scene::serialization::{default_enabled, vec3_xyz};

/// Draws a named mesh with a flat material color
///
/// The mesh is referenced by name; resolution happens at the rendering
/// surface, and an unresolved name draws nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshRendererComponent {
    /// Whether the component participates in update/render dispatch
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Name of the mesh to draw, or `None` to draw nothing
    #[serde(default)]
    pub mesh: Option<String>,

    /// Flat material color
    #[serde(with = "vec3_xyz", default = "default_color")]
    pub color: Vec3,
}

fn default_color() -> Vec3 {
    Vec3::new(0.7, 0.2, 0.2)
}

impl Default for MeshRendererComponent {
    fn default() -> Self {
        Self {
            enabled: true,
            mesh: None,
            color: default_color(),
        }
    }
}

impl MeshRendererComponent {
    /// Create a renderer for a named mesh with a material color
    pub fn new(mesh: impl Into<String>, color: Vec3) -> Self {
        Self {
            enabled: true,
            mesh: Some(mesh.into()),
            color,
        }
    }

    /// Issue the material uniform and draw call for this renderer
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        let Some(mesh) = &self.mesh else {
            return;
        };
        surface.set_uniform_vec3("objectColor", self.color);
        surface.draw_mesh(mesh);
    }

    /// Editor hook: expose mesh selection and color
    pub fn draw_properties(&mut self, sheet: &mut dyn PropertySheet) {
        sheet.color3("Color", &mut self.color);

        const OPTIONS: [&str; 3] = ["None", "Cube", "Sphere"];
        let mut selected = match self.mesh.as_deref() {
            Some("Cube") => 1,
            Some("Sphere") => 2,
            _ => 0,
        };
        if sheet.combo("Mesh", &mut selected, &OPTIONS) {
            self.mesh = match selected {
                1 => Some("Cube".to_string()),
                2 => Some("Sphere".to_string()),
                _ => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::render::RecordingSurface;

    #[test]
    fn test_render_sets_color_then_draws() {
        let renderer = MeshRendererComponent::new("Cube", Vec3::new(1.0, 0.0, 0.0));
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface);

        assert_eq!(surface.draw_calls(), ["Cube"]);
        assert_eq!(
            surface.uniform_vec3("objectColor"),
            Some(Vec3::new(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_render_without_mesh_draws_nothing() {
        let renderer = MeshRendererComponent::default();
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface);

        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_document_mesh_name() {
        let doc =
            serde_json::to_value(MeshRendererComponent::new("Sphere", default_color())).unwrap();
        assert_eq!(doc["mesh"], json!("Sphere"));

        let back: MeshRendererComponent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(back.mesh, None);
    }
}
