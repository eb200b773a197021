//! Embedded Lua interpreter for script components

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use mlua::{Function, Lua};
use thiserror::Error;

use crate::foundation::math::Vec3;
use crate::scene::components::TransformComponent;

/// Script interpreter load/call failure
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file does not exist
    #[error("script file not found: {path}")]
    NotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// The script file could not be read
    #[error("failed to read script {path}: {source}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The interpreter rejected or aborted the script
    #[error("lua error: {0}")]
    Lua(#[from] mlua::Error),
}

/// One Lua interpreter bound to one script file
///
/// The owning object's transform is exposed to scripts as a `transform`
/// global with `getEulerAngles()` and `setEulerAngles(x, y, z)` (degrees).
/// Angles are staged through a shared cell: synced in before each hook call
/// and applied back to the transform afterwards.
pub struct LuaContext {
    lua: Lua,
    euler: Rc<RefCell<Vec3>>,
    source: PathBuf,
}

impl fmt::Debug for LuaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LuaContext")
            .field("source", &self.source)
            .finish()
    }
}

impl LuaContext {
    /// Create an interpreter and bind the engine API
    pub fn new() -> Result<Self, ScriptError> {
        let lua = Lua::new();
        let euler = Rc::new(RefCell::new(Vec3::zeros()));

        let transform = lua.create_table()?;

        let get_euler = {
            let euler = Rc::clone(&euler);
            lua.create_function(move |_, ()| {
                let angles = euler.borrow();
                Ok((angles.x, angles.y, angles.z))
            })?
        };
        transform.set("getEulerAngles", get_euler)?;

        let set_euler = {
            let euler = Rc::clone(&euler);
            lua.create_function(move |_, (x, y, z): (f32, f32, f32)| {
                *euler.borrow_mut() = Vec3::new(x, y, z);
                Ok(())
            })?
        };
        transform.set("setEulerAngles", set_euler)?;

        lua.globals().set("transform", transform)?;

        Ok(Self {
            lua,
            euler,
            source: PathBuf::new(),
        })
    }

    /// Load and execute a script file, defining its global functions
    pub fn load_script(&mut self, path: &Path) -> Result<(), ScriptError> {
        if !path.exists() {
            return Err(ScriptError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.lua
            .load(&source)
            .set_name(path.display().to_string())
            .exec()?;
        self.source = path.to_path_buf();
        log::info!("loaded script {}", path.display());
        Ok(())
    }

    /// Invoke the script's `Start` hook
    pub fn call_start(&self, transform: &mut TransformComponent) -> Result<(), ScriptError> {
        self.invoke("Start", None, transform)
    }

    /// Invoke the script's `Update(dt)` hook
    pub fn call_update(
        &self,
        delta_time: f32,
        transform: &mut TransformComponent,
    ) -> Result<(), ScriptError> {
        self.invoke("Update", Some(delta_time), transform)
    }

    fn invoke(
        &self,
        name: &str,
        delta_time: Option<f32>,
        transform: &mut TransformComponent,
    ) -> Result<(), ScriptError> {
        let Ok(function) = self.lua.globals().get::<Function>(name) else {
            log::warn!("lua function `{name}` not defined in {}", self.source.display());
            return Ok(());
        };

        *self.euler.borrow_mut() = transform.euler_angles_deg();

        let result = match delta_time {
            Some(dt) => function.call::<()>(dt),
            None => function.call::<()>(()),
        };
        result?;

        transform.set_euler_angles_deg(*self.euler.borrow());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn context_with(source: &str) -> LuaContext {
        let context = LuaContext::new().unwrap();
        context.lua.load(source).exec().unwrap();
        context
    }

    #[test]
    fn test_update_spins_transform() {
        let context = context_with(
            r#"
            function Update(dt)
                local x, y, z = transform.getEulerAngles()
                transform.setEulerAngles(x, y + 90.0 * dt, z)
            end
            "#,
        );

        let mut transform = TransformComponent::default();
        context.call_update(0.5, &mut transform).unwrap();

        assert_relative_eq!(transform.euler_angles_deg().y, 45.0, epsilon = 1e-3);
    }

    #[test]
    fn test_missing_hook_is_not_an_error() {
        let context = context_with("-- no hooks defined");
        let mut transform = TransformComponent::default();
        assert!(context.call_start(&mut transform).is_ok());
        assert!(context.call_update(0.016, &mut transform).is_ok());
    }

    #[test]
    fn test_runtime_error_is_reported_and_contained() {
        let context = context_with(
            r#"
            function Update(dt)
                error("boom")
            end
            "#,
        );

        let mut transform = TransformComponent::default();
        transform.set_euler_angles_deg(Vec3::new(0.0, 30.0, 0.0));

        let result = context.call_update(0.016, &mut transform);
        assert!(matches!(result, Err(ScriptError::Lua(_))));

        // a failed hook must not half-apply state
        assert_relative_eq!(transform.euler_angles_deg().y, 30.0, epsilon = 1e-3);
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let mut context = LuaContext::new().unwrap();
        let result = context.load_script(Path::new("/definitely/not/here.lua"));
        assert!(matches!(result, Err(ScriptError::NotFound { .. })));
    }
}
