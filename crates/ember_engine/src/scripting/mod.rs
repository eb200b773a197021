//! Lua scripting bridge
//!
//! A [`ScriptComponent`](crate::scene::components::ScriptComponent) owns one
//! [`LuaContext`] per loaded script. The bridge binds a `transform` global
//! (Euler-angle get/set on the owning object's transform) and invokes the
//! script's `Start` and `Update(dt)` hooks. Interpreter failures stop at
//! this boundary: they are reported as [`ScriptError`] and logged by the
//! caller, never allowed to abort the frame loop.

pub mod lua_context;

pub use lua_context::{LuaContext, ScriptError};
