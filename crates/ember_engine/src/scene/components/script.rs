//! Script component
//!
//! Attaches a Lua script to a GameObject. The script's `Start` hook runs
//! when the component starts; `Update(dt)` runs every frame after the
//! object's generic component updates, so scripts always observe a frame
//! whose physical state has already advanced.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::editor::PropertySheet;
use crate::scene::components::TransformComponent;
use crate::scene::serialization::default_enabled;
use crate::scripting::LuaContext;

/// Behavior driven by a Lua script file
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptComponent {
    /// Whether the component participates in update dispatch
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Path to the Lua script file
    #[serde(default, deserialize_with = "string_or_coerced")]
    pub script_path: String,

    #[serde(skip)]
    context: Option<LuaContext>,

    // a failed load is not retried every frame
    #[serde(skip)]
    failed: bool,
}

/// Older editors sometimes wrote non-string paths; coerce them to their
/// textual form rather than failing the whole document.
fn string_or_coerced<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(path) => Ok(path),
        other => {
            log::warn!("scriptPath was not a string, coerced to `{other}`");
            Ok(other.to_string())
        }
    }
}

impl Default for ScriptComponent {
    fn default() -> Self {
        Self {
            enabled: true,
            script_path: String::new(),
            context: None,
            failed: false,
        }
    }
}

impl ScriptComponent {
    /// Create a script component for a script file path
    pub fn new(script_path: impl Into<String>) -> Self {
        Self {
            script_path: script_path.into(),
            ..Self::default()
        }
    }

    /// Whether a script is loaded and its hooks will run
    pub fn is_loaded(&self) -> bool {
        self.context.is_some()
    }

    /// Load the script and run its `Start` hook
    ///
    /// Idempotent: an already-loaded script and a previously failed load
    /// are both no-ops, so `start` marks the single point where a script
    /// enters the simulation. All failures are contained here: a missing or
    /// broken script leaves the component attached but inert, and never
    /// aborts the caller.
    pub fn start(&mut self, transform: &mut TransformComponent) {
        if self.context.is_some() || self.failed {
            return;
        }
        if self.script_path.is_empty() {
            log::warn!("script path is empty");
            self.failed = true;
            return;
        }
        if let Err(err) = self.try_start(transform) {
            log::error!("failed to start script `{}`: {err}", self.script_path);
            self.failed = true;
        }
    }

    fn try_start(
        &mut self,
        transform: &mut TransformComponent,
    ) -> Result<(), crate::scripting::ScriptError> {
        let mut context = LuaContext::new()?;
        context.load_script(Path::new(&self.script_path))?;
        context.call_start(transform)?;
        self.context = Some(context);
        Ok(())
    }

    /// Run the script's `Update(dt)` hook
    ///
    /// A script attached while the simulation is already running starts
    /// here, on its first advanced frame.
    pub fn update(&mut self, delta_time: f32, transform: &mut TransformComponent) {
        if self.context.is_none() {
            self.start(transform);
        }
        let Some(context) = &self.context else {
            return;
        };
        if let Err(err) = context.call_update(delta_time, transform) {
            log::error!("error in script Update(): {err}");
        }
    }

    /// Editor hook: expose the script path
    pub fn draw_properties(&mut self, sheet: &mut dyn PropertySheet) {
        sheet.text_field("Script", &mut self.script_path);
    }
}
