//! Built-in component implementations
//!
//! Each component is a plain struct with serde derives; the closed
//! [`Component`](crate::scene::Component) sum type in the parent module
//! wires them into update, render, and serialization dispatch.

pub mod collider;
pub mod light;
pub mod mesh_renderer;
pub mod script;
pub mod transform;

pub use collider::{sphere_check, ColliderComponent, ColliderShape, Collision};
pub use light::{LightComponent, LightType};
pub use mesh_renderer::MeshRendererComponent;
pub use script::ScriptComponent;
pub use transform::TransformComponent;
