//! Scene container and persistence
//!
//! The scene owns every GameObject, hands out ids, and drives per-frame
//! update and render dispatch. Persistence is transactional: loading a
//! document either replaces the whole scene or leaves it untouched.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use thiserror::Error;

use crate::editor::TransformGizmo;
use crate::foundation::math::Vec3;
use crate::render::RenderSurface;
use crate::scene::components::{sphere_check, Collision};
use crate::scene::game_object::{GameObject, GameObjectId};
use crate::scene::serialization::DataError;
use crate::scene::ComponentKind;

/// Light position used when no enabled light exists in the scene
const DEFAULT_LIGHT_POSITION: [f32; 3] = [2.0, 2.0, 2.0];

/// Errors from scene persistence
#[derive(Debug, Error)]
pub enum SceneError {
    /// The document was structurally invalid
    #[error(transparent)]
    Data(#[from] DataError),
    /// The file could not be read or written
    #[error("scene file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hands out GameObject ids, never repeating one within a scene
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Allocator starting at 1; id 0 is reserved for "unset"
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocator whose first id is `seed`
    pub fn seeded(seed: u64) -> Self {
        Self { next: seed.max(1) }
    }

    /// Take the next id
    pub fn allocate(&mut self) -> GameObjectId {
        let id = self.next;
        self.next += 1;
        GameObjectId::from(id)
    }

    /// Ensure future ids are strictly greater than `id`
    pub fn bump_past(&mut self, id: GameObjectId) {
        self.next = self.next.max(id.value() + 1);
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// The world: a flat list of GameObjects plus an id allocator
#[derive(Debug)]
pub struct Scene {
    /// Display name, stored in the scene document
    pub name: String,
    objects: Vec<GameObject>,
    ids: IdAllocator,
    play_mode: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// An empty, unnamed scene
    pub fn new() -> Self {
        Self {
            name: "Untitled".to_string(),
            objects: Vec::new(),
            ids: IdAllocator::new(),
            play_mode: false,
        }
    }

    /// Create a new object with a fresh id and return it for configuration
    pub fn create_game_object(&mut self, name: impl Into<String>) -> &mut GameObject {
        let id = self.ids.allocate();
        self.objects.push(GameObject::new(id, name));
        // just pushed, so the list is non-empty
        self.objects.last_mut().expect("object was just pushed")
    }

    /// Remove an object by id
    ///
    /// Components are cleared before the object is dropped so scripts and
    /// other resource holders release in a defined order.
    pub fn remove_game_object(&mut self, id: GameObjectId) -> bool {
        let Some(index) = self.objects.iter().position(|o| o.id() == id) else {
            return false;
        };
        self.objects[index].clear_components();
        self.objects.remove(index);
        true
    }

    /// Remove every object
    ///
    /// The id allocator is deliberately left alone: ids are never reused
    /// within a scene's lifetime, even across a clear or a reload.
    pub fn clear(&mut self) {
        for object in &mut self.objects {
            object.clear_components();
        }
        self.objects.clear();
    }

    /// All objects, in creation order
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Mutable access to all objects
    pub fn objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    /// Number of objects in the scene
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find an object by id
    pub fn find_by_id(&self, id: GameObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Mutable variant of [`find_by_id`](Self::find_by_id)
    pub fn find_by_id_mut(&mut self, id: GameObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// First object with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Mutable variant of [`find_by_name`](Self::find_by_name)
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    /// Whether scripts and component updates run each frame
    pub fn play_mode(&self) -> bool {
        self.play_mode
    }

    /// Toggle simulation; the editor pauses scripts by leaving play mode
    ///
    /// Entering play mode is where script `Start` hooks fire. Starting is
    /// idempotent per script, so re-entering play does not re-run hooks of
    /// scripts that are already loaded.
    pub fn set_play_mode(&mut self, play_mode: bool) {
        let entering = play_mode && !self.play_mode;
        self.play_mode = play_mode;
        if entering {
            for object in &mut self.objects {
                if object.is_active {
                    object.start_scripts();
                }
            }
        }
    }

    /// Advance every active object by one frame
    ///
    /// Outside play mode the world is frozen and this is a no-op.
    pub fn update(&mut self, delta_time: f32) {
        if !self.play_mode {
            return;
        }
        for object in &mut self.objects {
            object.update(delta_time);
        }
    }

    /// The scene's dominant light: position and radiance
    ///
    /// The first enabled light on an active object wins. With no light at
    /// all, a white light above and behind the origin keeps unlit scenes
    /// visible.
    pub fn dominant_light(&self) -> (Vec3, Vec3) {
        for object in &self.objects {
            if !object.is_active {
                continue;
            }
            for component in object.components_of_kind(ComponentKind::Light) {
                if !component.enabled() {
                    continue;
                }
                if let Some(light) = component.as_light() {
                    return (object.transform().position, light.radiance());
                }
            }
        }
        (Vec3::from(DEFAULT_LIGHT_POSITION), Vec3::new(1.0, 1.0, 1.0))
    }

    /// Draw the scene: lighting uniforms, then static pass, then dynamic
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        let (light_position, light_color) = self.dominant_light();
        surface.set_uniform_vec3("lightPos", light_position);
        surface.set_uniform_vec3("lightColor", light_color);

        for object in self.objects.iter().filter(|o| o.is_static) {
            object.render(surface);
        }
        for object in self.objects.iter().filter(|o| !o.is_static) {
            object.render(surface);
        }
    }

    /// Draw the scene and then run a gizmo over the selected object
    pub fn render_with_gizmo(
        &mut self,
        surface: &mut dyn RenderSurface,
        gizmo: &mut dyn TransformGizmo,
        selected: GameObjectId,
    ) {
        self.render(surface);
        let Some(object) = self.find_by_id_mut(selected) else {
            return;
        };
        let matrix = object.model_matrix();
        if let Some(edited) = gizmo.manipulate(&matrix) {
            object.transform_mut().set_from_matrix(&edited);
        }
    }

    /// Sphere-sphere check between two objects' colliders
    ///
    /// Returns `None` when either object is missing, inactive, or has no
    /// enabled collider.
    pub fn check_collision(&self, a: GameObjectId, b: GameObjectId) -> Option<Collision> {
        let obj_a = self.find_by_id(a).filter(|o| o.is_active)?;
        let obj_b = self.find_by_id(b).filter(|o| o.is_active)?;
        let col_a = obj_a
            .components_of_kind(ComponentKind::Collider)
            .find(|c| c.enabled())?
            .as_collider()?;
        let col_b = obj_b
            .components_of_kind(ComponentKind::Collider)
            .find(|c| c.enabled())?
            .as_collider()?;
        sphere_check(
            col_a,
            obj_a.transform().position,
            col_b,
            obj_b.transform().position,
            b,
        )
    }

    /// Serialize the whole scene to a document value
    pub fn serialize(&self) -> Result<Value, DataError> {
        let mut objects = Vec::with_capacity(self.objects.len());
        for object in &self.objects {
            objects.push(object.serialize()?);
        }
        Ok(json!({ "name": self.name, "gameObjects": objects }))
    }

    /// Replace this scene's contents from a document value
    ///
    /// Transactional: on any error the scene is restored to its previous
    /// contents before the error is returned.
    pub fn deserialize(&mut self, doc: &Value) -> Result<(), DataError> {
        let snapshot = self.serialize()?;
        self.clear();

        match self.load_objects(doc) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::error!("scene load failed, rolling back: {err}");
                self.clear();
                // the snapshot came from serialize(), so it loads cleanly
                self.load_objects(&snapshot)
                    .expect("snapshot of a live scene must deserialize");
                Err(err)
            }
        }
    }

    fn load_objects(&mut self, doc: &Value) -> Result<(), DataError> {
        if let Some(name) = doc.get("name").and_then(Value::as_str) {
            self.name = name.to_string();
        }
        let objects = doc
            .get("gameObjects")
            .ok_or(DataError::MissingField {
                field: "gameObjects",
            })?
            .as_array()
            .ok_or_else(|| DataError::invalid("gameObjects", "expected an array"))?;

        let mut loaded = Vec::with_capacity(objects.len());
        for object_doc in objects {
            let object = GameObject::deserialize(object_doc)?;
            self.ids.bump_past(object.id());
            loaded.push(object);
        }

        // id 0 marks a document entry with no id; assign fresh ones only
        // after every explicit id has raised the allocator's floor
        for mut object in loaded {
            if object.id() == GameObjectId::from(0) {
                let id = self.ids.allocate();
                log::warn!("object `{}` has no id, assigned {id}", object.name);
                object.set_id(id);
            }
            self.objects.push(object);
        }
        Ok(())
    }

    /// Write the scene to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let doc = self.serialize()?;
        // pretty output keeps scene files diffable under version control
        let text = serde_json::to_string_pretty(&doc)
            .map_err(|err| DataError::invalid("scene", err.to_string()))?;
        fs::write(path.as_ref(), text)?;
        log::info!(
            "saved scene with {} objects to {}",
            self.objects.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load the scene from a JSON file
    ///
    /// Parse errors and structural errors both leave the current scene
    /// contents untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let text = fs::read_to_string(path.as_ref())?;
        let doc: Value = serde_json::from_str(&text).map_err(|err| DataError::parse(&err))?;
        self.deserialize(&doc)?;
        log::info!(
            "loaded scene with {} objects from {}",
            self.objects.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}
