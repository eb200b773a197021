//! Scene graph: GameObjects, components, and persistence
//!
//! The world is a flat list of [`GameObject`]s owned by a [`Scene`]. Each
//! object carries one mandatory [`TransformComponent`](components::TransformComponent)
//! plus any number of other components from the closed [`Component`] set.
//! Scenes serialize to JSON documents and load transactionally: a bad
//! document leaves the previous contents intact.

pub mod component;
pub mod components;
pub mod game_object;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod serialization;

pub use component::{Component, ComponentKind};
pub use game_object::{ComponentError, GameObject, GameObjectId};
pub use scene::{IdAllocator, Scene, SceneError};
pub use serialization::DataError;
