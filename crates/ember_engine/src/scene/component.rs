//! The component sum type
//!
//! Components form a closed set. Dispatch is a `match` over [`Component`]
//! rather than dynamic downcasting, so adding a variant makes the compiler
//! point at every site that needs updating.

use serde::Serialize;
use serde_json::Value;

use crate::editor::PropertySheet;
use crate::render::RenderSurface;
use crate::scene::components::{
    ColliderComponent, LightComponent, MeshRendererComponent, ScriptComponent, TransformComponent,
};
use crate::scene::serialization::DataError;

/// Discriminant for the closed component set
///
/// The tag strings are the `"type"` field values used by scene documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Position, rotation, and scale
    Transform,
    /// Light source
    Light,
    /// Mesh drawing
    MeshRenderer,
    /// Lua behavior
    Script,
    /// Collision volume
    Collider,
}

impl ComponentKind {
    /// Every kind, in dispatch order
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Transform,
        ComponentKind::Light,
        ComponentKind::MeshRenderer,
        ComponentKind::Script,
        ComponentKind::Collider,
    ];

    /// The `"type"` string written to scene documents
    pub fn tag(self) -> &'static str {
        match self {
            ComponentKind::Transform => "TransformComponent",
            ComponentKind::Light => "Light",
            ComponentKind::MeshRenderer => "MeshRenderer",
            ComponentKind::Script => "ScriptComponent",
            ComponentKind::Collider => "ColliderComponent",
        }
    }

    /// Look up a kind from a document tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }
}

/// A component attached to a GameObject
///
/// Serializes as an internally tagged document: the variant's tag string
/// lands in a `"type"` field alongside the component's own fields.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Component {
    /// Position, rotation, and scale
    #[serde(rename = "TransformComponent")]
    Transform(TransformComponent),
    /// Light source
    #[serde(rename = "Light")]
    Light(LightComponent),
    /// Mesh drawing
    #[serde(rename = "MeshRenderer")]
    MeshRenderer(MeshRendererComponent),
    /// Lua behavior
    #[serde(rename = "ScriptComponent")]
    Script(ScriptComponent),
    /// Collision volume
    #[serde(rename = "ColliderComponent")]
    Collider(ColliderComponent),
}

impl Component {
    /// Construct a default-initialized component of the given kind
    pub fn new(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Transform => Component::Transform(TransformComponent::default()),
            ComponentKind::Light => Component::Light(LightComponent::default()),
            ComponentKind::MeshRenderer => {
                Component::MeshRenderer(MeshRendererComponent::default())
            }
            ComponentKind::Script => Component::Script(ScriptComponent::default()),
            ComponentKind::Collider => Component::Collider(ColliderComponent::default()),
        }
    }

    /// The kind of this component
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Light(_) => ComponentKind::Light,
            Component::MeshRenderer(_) => ComponentKind::MeshRenderer,
            Component::Script(_) => ComponentKind::Script,
            Component::Collider(_) => ComponentKind::Collider,
        }
    }

    /// The document tag string for this component
    pub fn type_tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// Whether the component participates in dispatch
    pub fn enabled(&self) -> bool {
        match self {
            Component::Transform(c) => c.enabled,
            Component::Light(c) => c.enabled,
            Component::MeshRenderer(c) => c.enabled,
            Component::Script(c) => c.enabled,
            Component::Collider(c) => c.enabled,
        }
    }

    /// Enable or disable the component
    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            Component::Transform(c) => c.enabled = enabled,
            Component::Light(c) => c.enabled = enabled,
            Component::MeshRenderer(c) => c.enabled = enabled,
            Component::Script(c) => c.enabled = enabled,
            Component::Collider(c) => c.enabled = enabled,
        }
    }

    /// Borrow as a transform, if that is what this is
    pub fn as_transform(&self) -> Option<&TransformComponent> {
        match self {
            Component::Transform(c) => Some(c),
            _ => None,
        }
    }

    /// Mutably borrow as a transform
    pub fn as_transform_mut(&mut self) -> Option<&mut TransformComponent> {
        match self {
            Component::Transform(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow as a light
    pub fn as_light(&self) -> Option<&LightComponent> {
        match self {
            Component::Light(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow as a mesh renderer
    pub fn as_mesh_renderer(&self) -> Option<&MeshRendererComponent> {
        match self {
            Component::MeshRenderer(c) => Some(c),
            _ => None,
        }
    }

    /// Mutably borrow as a mesh renderer
    pub fn as_mesh_renderer_mut(&mut self) -> Option<&mut MeshRendererComponent> {
        match self {
            Component::MeshRenderer(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow as a script
    pub fn as_script(&self) -> Option<&ScriptComponent> {
        match self {
            Component::Script(c) => Some(c),
            _ => None,
        }
    }

    /// Mutably borrow as a script
    pub fn as_script_mut(&mut self) -> Option<&mut ScriptComponent> {
        match self {
            Component::Script(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow as a collider
    pub fn as_collider(&self) -> Option<&ColliderComponent> {
        match self {
            Component::Collider(c) => Some(c),
            _ => None,
        }
    }

    /// Per-frame update for components without special dispatch needs
    ///
    /// Scripts are advanced separately by the owning GameObject because
    /// they need simultaneous mutable access to the transform.
    pub fn update(&mut self, _delta_time: f32) {
        match self {
            Component::Transform(_)
            | Component::Light(_)
            | Component::MeshRenderer(_)
            | Component::Script(_)
            | Component::Collider(_) => {}
        }
    }

    /// Render dispatch; only mesh renderers draw
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        if let Component::MeshRenderer(renderer) = self {
            renderer.render(surface);
        }
    }

    /// Editor property dispatch
    pub fn draw_properties(&mut self, sheet: &mut dyn PropertySheet) {
        match self {
            Component::Transform(c) => c.draw_properties(sheet),
            Component::Light(c) => c.draw_properties(sheet),
            Component::MeshRenderer(c) => c.draw_properties(sheet),
            Component::Script(c) => c.draw_properties(sheet),
            Component::Collider(c) => c.draw_properties(sheet),
        }
    }

    /// Serialize to a scene document value
    pub fn to_document(&self) -> Result<Value, DataError> {
        serde_json::to_value(self).map_err(|err| DataError::invalid("component", err.to_string()))
    }

    /// Deserialize from a scene document value
    ///
    /// Unknown component tags are skipped with a warning so newer documents
    /// still load; a missing or malformed `"type"` field is a hard error.
    pub fn from_document(doc: &Value) -> Result<Option<Self>, DataError> {
        let tag = doc
            .get("type")
            .ok_or(DataError::MissingField { field: "type" })?;
        let tag = tag
            .as_str()
            .ok_or_else(|| DataError::invalid("type", format!("expected string, got {tag}")))?;

        let Some(kind) = ComponentKind::from_tag(tag) else {
            log::warn!("skipping unknown component type `{tag}`");
            return Ok(None);
        };

        let component = match kind {
            ComponentKind::Transform => Component::Transform(parse(doc)?),
            ComponentKind::Light => Component::Light(parse(doc)?),
            ComponentKind::MeshRenderer => Component::MeshRenderer(parse(doc)?),
            ComponentKind::Script => Component::Script(parse(doc)?),
            ComponentKind::Collider => Component::Collider(parse(doc)?),
        };
        Ok(Some(component))
    }
}

fn parse<T: serde::de::DeserializeOwned>(doc: &Value) -> Result<T, DataError> {
    serde_json::from_value(doc.clone())
        .map_err(|err| DataError::invalid("component", err.to_string()))
}
