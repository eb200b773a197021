//! Named mesh cache

use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::Mesh;

/// Process-level cache of meshes by name
///
/// Mesh renderers reference meshes by name; the library resolves those
/// references. A name that resolves to nothing is a valid, common case and
/// degrades to "nothing drawn" at the surface.
#[derive(Debug, Clone, Default)]
pub struct MeshLibrary {
    meshes: HashMap<String, Arc<Mesh>>,
}

impl MeshLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library pre-populated with the `Cube` and `Sphere` primitives
    pub fn with_primitives() -> Self {
        let mut library = Self::new();
        library.insert("Cube", Mesh::cube());
        library.insert("Sphere", Mesh::sphere(1.0, 32, 16));
        library
    }

    /// Register a mesh under a name, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, mesh: Mesh) {
        self.meshes.insert(name.into(), Arc::new(mesh));
    }

    /// Look up a mesh by name
    pub fn get(&self, name: &str) -> Option<Arc<Mesh>> {
        self.meshes.get(name).cloned()
    }

    /// Whether a mesh is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.meshes.contains_key(name)
    }

    /// Number of registered meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the library has no meshes
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_registered() {
        let library = MeshLibrary::with_primitives();
        assert!(library.contains("Cube"));
        assert!(library.contains("Sphere"));
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_unknown_name_resolves_to_none() {
        let library = MeshLibrary::with_primitives();
        assert!(library.get("Teapot").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut library = MeshLibrary::new();
        library.insert("Quad", Mesh::cube());
        library.insert("Quad", Mesh::sphere(1.0, 8, 4));
        assert_eq!(library.len(), 1);
    }
}
