//! GameObjects
//!
//! A GameObject is a named, identified bag of components. Every object
//! carries exactly one transform; the attach and remove operations enforce
//! that invariant, so transform access never fails at use sites.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::editor::PropertySheet;
use crate::render::RenderSurface;
use crate::scene::component::{Component, ComponentKind};
use crate::scene::components::TransformComponent;
use crate::scene::serialization::DataError;

/// Stable identifier for a GameObject within its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameObjectId(u64);

impl GameObjectId {
    /// The raw numeric value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for GameObjectId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for GameObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from component attachment and removal
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    /// Removing the transform would break the one-transform invariant
    #[error("a GameObject must keep its transform component")]
    TransformRequired,
    /// Every object has exactly one transform
    #[error("GameObject already has a transform component")]
    DuplicateTransform,
    /// Index past the end of the component list
    #[error("component index {0} out of range")]
    BadIndex(usize),
}

/// A named entity in the scene
#[derive(Debug)]
pub struct GameObject {
    id: GameObjectId,
    /// Display name, not required to be unique
    pub name: String,
    /// Static objects render in the first pass and are assumed immobile
    pub is_static: bool,
    /// Inactive objects are skipped by update and render
    pub is_active: bool,
    components: Vec<Component>,
    transform_idx: usize,
}

impl GameObject {
    /// Create an object with a default transform at the origin
    pub fn new(id: GameObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_static: false,
            is_active: true,
            components: vec![Component::Transform(TransformComponent::default())],
            transform_idx: 0,
        }
    }

    /// The object's scene-stable id
    pub fn id(&self) -> GameObjectId {
        self.id
    }

    // the owning scene repairs id-less loaded objects before exposing them
    pub(crate) fn set_id(&mut self, id: GameObjectId) {
        self.id = id;
    }

    /// All attached components, in attachment order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Attach a component, checking the transform invariant
    pub fn attach(&mut self, component: Component) -> Result<&mut Component, ComponentError> {
        if component.kind() == ComponentKind::Transform {
            return Err(ComponentError::DuplicateTransform);
        }
        self.components.push(component);
        // just pushed, so the list is non-empty
        Ok(self.components.last_mut().expect("component was just pushed"))
    }

    /// Attach a default-initialized component of the given kind
    pub fn add_component(&mut self, kind: ComponentKind) -> Result<&mut Component, ComponentError> {
        self.attach(Component::new(kind))
    }

    /// First component of the given kind, if any
    pub fn get_component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind() == kind)
    }

    /// Mutable variant of [`get_component`](Self::get_component)
    pub fn get_component_mut(&mut self, kind: ComponentKind) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.kind() == kind)
    }

    /// All components of the given kind
    pub fn components_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind() == kind)
    }

    /// Remove the component at `index`
    ///
    /// The transform cannot be removed; objects always have one.
    pub fn remove_component(&mut self, index: usize) -> Result<Component, ComponentError> {
        if index >= self.components.len() {
            return Err(ComponentError::BadIndex(index));
        }
        if index == self.transform_idx {
            return Err(ComponentError::TransformRequired);
        }
        let removed = self.components.remove(index);
        if index < self.transform_idx {
            self.transform_idx -= 1;
        }
        Ok(removed)
    }

    /// Drop every component except the transform
    pub fn clear_components(&mut self) {
        let transform = self.components.swap_remove(self.transform_idx);
        self.components.clear();
        self.components.push(transform);
        self.transform_idx = 0;
    }

    /// The object's transform
    pub fn transform(&self) -> &TransformComponent {
        // the constructor and removal rules keep exactly one transform
        self.components[self.transform_idx]
            .as_transform()
            .expect("transform index points at a transform")
    }

    /// Mutable access to the object's transform
    pub fn transform_mut(&mut self) -> &mut TransformComponent {
        self.components[self.transform_idx]
            .as_transform_mut()
            .expect("transform index points at a transform")
    }

    /// World matrix from the object's transform
    pub fn model_matrix(&self) -> crate::foundation::math::Mat4 {
        self.transform().model_matrix()
    }

    /// Advance the object by one frame
    ///
    /// Generic components update first; scripts run afterwards so they
    /// observe fully advanced state.
    pub fn update(&mut self, delta_time: f32) {
        if !self.is_active {
            return;
        }
        for component in &mut self.components {
            if component.enabled() {
                component.update(delta_time);
            }
        }
        self.update_scripts(delta_time);
    }

    fn update_scripts(&mut self, delta_time: f32) {
        let transform_idx = self.transform_idx;
        for index in 0..self.components.len() {
            if index == transform_idx {
                continue;
            }
            let (script, transform) = pair_mut(&mut self.components, index, transform_idx);
            let Some(script) = script.as_script_mut() else {
                continue;
            };
            if !script.enabled {
                continue;
            }
            let Some(transform) = transform.as_transform_mut() else {
                continue;
            };
            script.update(delta_time, transform);
        }
    }

    /// Run `Start` hooks on every enabled script
    pub fn start_scripts(&mut self) {
        let transform_idx = self.transform_idx;
        for index in 0..self.components.len() {
            if index == transform_idx {
                continue;
            }
            let (script, transform) = pair_mut(&mut self.components, index, transform_idx);
            let Some(script) = script.as_script_mut() else {
                continue;
            };
            if !script.enabled {
                continue;
            }
            let Some(transform) = transform.as_transform_mut() else {
                continue;
            };
            script.start(transform);
        }
    }

    /// Draw the object through its enabled renderer components
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        if !self.is_active {
            return;
        }
        surface.set_uniform_mat4("model", self.model_matrix());
        for component in &self.components {
            if component.enabled() {
                component.render(surface);
            }
        }
    }

    /// Editor hook: name, flags, and per-component property sections
    pub fn draw_properties(&mut self, sheet: &mut dyn PropertySheet) {
        sheet.text_field("Name", &mut self.name);
        sheet.checkbox("Static", &mut self.is_static);
        sheet.checkbox("Active", &mut self.is_active);
        for component in &mut self.components {
            if sheet.header(component.type_tag()) {
                let mut enabled = component.enabled();
                if sheet.checkbox("Enabled", &mut enabled) {
                    component.set_enabled(enabled);
                }
                component.draw_properties(sheet);
            }
        }
    }

    /// Serialize to a scene document value
    pub fn serialize(&self) -> Result<Value, DataError> {
        let mut components = Vec::with_capacity(self.components.len());
        for component in &self.components {
            components.push(component.to_document()?);
        }
        Ok(json!({
            "id": self.id,
            "name": self.name,
            "isStatic": self.is_static,
            "isActive": self.is_active,
            "components": components,
        }))
    }

    /// Rebuild an object from a scene document value
    ///
    /// Loading only restores fields; script `Start` hooks do not run here.
    /// They fire when the simulation enters play mode, so a load (or a
    /// rollback restore) never mutates live state.
    pub fn deserialize(doc: &Value) -> Result<Self, DataError> {
        let header: GameObjectDoc = serde_json::from_value(doc.clone())
            .map_err(|err| DataError::invalid("gameObject", err.to_string()))?;

        let mut object = GameObject::new(header.id, header.name);
        object.is_static = header.is_static;
        object.is_active = header.is_active;

        let mut saw_transform = false;
        for component_doc in &header.components {
            let Some(component) = Component::from_document(component_doc)? else {
                continue;
            };
            if let Component::Transform(transform) = component {
                if saw_transform {
                    log::warn!(
                        "object `{}` has more than one transform entry, extra skipped",
                        object.name
                    );
                    continue;
                }
                saw_transform = true;
                *object.transform_mut() = transform;
            } else if let Err(err) = object.attach(component) {
                return Err(DataError::invalid("components", err.to_string()));
            }
        }

        Ok(object)
    }
}

/// Borrow two distinct components mutably at once
///
/// Panics if `a == b`; callers skip the transform's own index.
fn pair_mut(components: &mut [Component], a: usize, b: usize) -> (&mut Component, &mut Component) {
    assert_ne!(a, b);
    if a < b {
        let (left, right) = components.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = components.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameObjectDoc {
    #[serde(default)]
    id: GameObjectId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    is_static: bool,
    #[serde(default = "crate::scene::serialization::default_enabled")]
    is_active: bool,
    #[serde(default)]
    components: Vec<Value>,
}

impl Default for GameObjectId {
    fn default() -> Self {
        Self(0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::RecordingSurface;
    use crate::scene::components::{LightComponent, MeshRendererComponent};

    fn object(id: u64) -> GameObject {
        GameObject::new(GameObjectId::from(id), "test")
    }

    #[test]
    fn test_new_object_has_exactly_one_transform() {
        let obj = object(1);
        assert_eq!(obj.components().len(), 1);
        assert_eq!(obj.components()[0].kind(), ComponentKind::Transform);
    }

    #[test]
    fn test_second_transform_is_rejected() {
        let mut obj = object(1);
        assert!(matches!(
            obj.add_component(ComponentKind::Transform),
            Err(ComponentError::DuplicateTransform)
        ));
    }

    #[test]
    fn test_transform_removal_is_forbidden() {
        let mut obj = object(1);
        obj.add_component(ComponentKind::Light).unwrap();
        assert!(matches!(
            obj.remove_component(0),
            Err(ComponentError::TransformRequired)
        ));
        // the light at index 1 can go
        assert!(obj.remove_component(1).is_ok());
        assert_eq!(obj.components().len(), 1);
    }

    #[test]
    fn test_clear_keeps_the_transform() {
        let mut obj = object(1);
        obj.transform_mut().position = Vec3::new(4.0, 0.0, 0.0);
        obj.add_component(ComponentKind::Light).unwrap();
        obj.add_component(ComponentKind::MeshRenderer).unwrap();

        obj.clear_components();
        assert_eq!(obj.components().len(), 1);
        assert_eq!(obj.transform().position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_deserialize_with_transform_after_other_components() {
        // document order puts the light first; the transform must still land
        let doc = json!({
            "id": 9,
            "name": "lamp",
            "isStatic": true,
            "isActive": true,
            "components": [
                { "type": "Light", "intensity": 2.0 },
                {
                    "type": "TransformComponent",
                    "position": { "x": 0.0, "y": 3.0, "z": 0.0 },
                },
            ],
        });

        let obj = GameObject::deserialize(&doc).unwrap();
        assert_eq!(obj.id(), GameObjectId::from(9));
        assert!(obj.is_static);
        assert_eq!(obj.transform().position, Vec3::new(0.0, 3.0, 0.0));
        assert!(obj.get_component(ComponentKind::Light).is_some());
    }

    #[test]
    fn test_missing_transform_entry_gets_a_default_one() {
        let doc = json!({
            "id": 5,
            "name": "bare",
            "components": [ { "type": "Light" } ],
        });
        let obj = GameObject::deserialize(&doc).unwrap();
        assert_eq!(obj.transform().position, Vec3::zeros());
        assert_eq!(obj.transform().scale, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(obj.components().len(), 2);
    }

    #[test]
    fn test_duplicate_transform_entries_keep_the_first() {
        let doc = json!({
            "id": 1,
            "name": "dup",
            "components": [
                { "type": "TransformComponent", "position": { "x": 1.0, "y": 0.0, "z": 0.0 } },
                { "type": "TransformComponent", "position": { "x": 9.0, "y": 0.0, "z": 0.0 } },
            ],
        });
        let obj = GameObject::deserialize(&doc).unwrap();
        assert_eq!(obj.transform().position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(obj.components().len(), 1);
    }

    #[test]
    fn test_round_trip() {
        let mut obj = object(42);
        obj.name = "player".to_string();
        obj.transform_mut().position = Vec3::new(1.0, 2.0, 3.0);
        obj.attach(Component::Light(LightComponent::point(
            Vec3::new(1.0, 0.5, 0.0),
            3.0,
            12.0,
        )))
        .unwrap();

        let doc = obj.serialize().unwrap();
        let restored = GameObject::deserialize(&doc).unwrap();

        assert_eq!(restored.id(), GameObjectId::from(42));
        assert_eq!(restored.name, "player");
        assert_eq!(restored.transform().position, Vec3::new(1.0, 2.0, 3.0));
        let light = restored
            .get_component(ComponentKind::Light)
            .and_then(Component::as_light)
            .unwrap();
        assert_eq!(light.intensity, 3.0);
    }

    #[test]
    fn test_disabled_renderer_does_not_draw() {
        let mut obj = object(1);
        obj.attach(Component::MeshRenderer(MeshRendererComponent::new(
            "Cube",
            Vec3::new(1.0, 0.0, 0.0),
        )))
        .unwrap();
        obj.get_component_mut(ComponentKind::MeshRenderer)
            .unwrap()
            .set_enabled(false);

        let mut surface = RecordingSurface::new();
        obj.render(&mut surface);
        assert!(surface.draw_calls().is_empty());
    }

    #[test]
    fn test_inactive_object_skips_render() {
        let mut obj = object(1);
        obj.attach(Component::MeshRenderer(MeshRendererComponent::new(
            "Cube",
            Vec3::new(1.0, 0.0, 0.0),
        )))
        .unwrap();
        obj.is_active = false;

        let mut surface = RecordingSurface::new();
        obj.render(&mut surface);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_pair_mut_returns_distinct_borrows() {
        let mut obj = object(1);
        obj.add_component(ComponentKind::Light).unwrap();
        let (a, b) = pair_mut(&mut obj.components, 1, 0);
        assert_eq!(a.kind(), ComponentKind::Light);
        assert_eq!(b.kind(), ComponentKind::Transform);
    }
}
