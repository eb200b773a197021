//! # Ember Engine
//!
//! A small 3D game engine library built around a GameObject/Component
//! runtime with JSON scene persistence and Lua scripting.
//!
//! ## Features
//!
//! - **GameObject/Component model**: heterogeneous behaviors (transform,
//!   lighting, mesh rendering, collision, scripting) attached to generic
//!   entities and dispatched in a defined per-frame order
//! - **Scene persistence**: full scene serialize/deserialize round-trip with
//!   transactional rollback on malformed documents
//! - **Lua scripting**: `Start`/`Update` lifecycle hooks with errors
//!   contained at the bridge boundary
//! - **Editor surface**: property-sheet and gizmo capabilities for an
//!   immediate-mode editor host
//!
//! ## Quick Start
//!
//! ```rust
//! use ember_engine::prelude::*;
//!
//! let mut scene = Scene::new();
//! let cube = scene.create_game_object("Cube");
//! cube.attach(Component::MeshRenderer(MeshRendererComponent::new(
//!     "Cube",
//!     Vec3::new(1.0, 0.0, 0.0),
//! )))
//! .unwrap();
//!
//! let mut surface = RecordingSurface::new();
//! scene.update(1.0 / 60.0);
//! scene.render(&mut surface);
//! assert_eq!(surface.draw_calls(), ["Cube"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod config;
pub mod editor;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod scripting;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{Mesh, MeshLibrary},
        config::{Config, EngineConfig},
        editor::{Editor, PropertySheet, TransformGizmo},
        foundation::{
            math::{Mat4, Quat, Vec3},
            time::Timer,
        },
        render::{RecordingSurface, RenderSurface, SurfaceCommand},
        scene::{
            components::{
                ColliderComponent, ColliderShape, Collision, LightComponent, LightType,
                MeshRendererComponent, ScriptComponent, TransformComponent,
            },
            Component, ComponentKind, GameObject, GameObjectId, Scene, SceneError,
        },
        scripting::ScriptError,
    };
}
