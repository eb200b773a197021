//! Editor integration seams
//!
//! The engine does not depend on a UI toolkit. Instead, components expose
//! their editable fields through the [`PropertySheet`] capability and the
//! scene accepts a [`TransformGizmo`] for in-viewport manipulation; a host
//! application backs these with whatever immediate-mode UI it uses.

use crate::foundation::math::{Mat4, Vec3};
use crate::scene::{GameObjectId, Scene};

/// Widget sink for component property editing
///
/// Mutating widgets return `true` when the host changed the value this
/// frame, so components can react (for example re-deriving a quaternion
/// from edited Euler angles).
pub trait PropertySheet {
    /// Draggable three-float row
    fn drag_vec3(&mut self, label: &str, value: &mut Vec3) -> bool;
    /// Draggable single float
    fn drag_float(&mut self, label: &str, value: &mut f32) -> bool;
    /// Boolean toggle
    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;
    /// RGB color picker
    fn color3(&mut self, label: &str, value: &mut Vec3) -> bool;
    /// Single-line text input
    fn text_field(&mut self, label: &str, value: &mut String) -> bool;
    /// Dropdown over `options`; `index` is the selected entry
    fn combo(&mut self, label: &str, index: &mut usize, options: &[&str]) -> bool;
    /// Collapsible section header; widgets that follow belong to it when
    /// this returns `true`
    fn header(&mut self, label: &str) -> bool;
}

/// In-viewport transform manipulation
pub trait TransformGizmo {
    /// Offer `matrix` for manipulation; returns the edited matrix when the
    /// user dragged the gizmo this frame
    fn manipulate(&mut self, matrix: &Mat4) -> Option<Mat4>;
}

/// Editor session state: which object is selected
#[derive(Debug, Default)]
pub struct Editor {
    selected: Option<GameObjectId>,
}

impl Editor {
    /// Editor with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an object, or clear the selection with `None`
    pub fn select(&mut self, id: Option<GameObjectId>) {
        self.selected = id;
    }

    /// The currently selected object
    pub fn selected(&self) -> Option<GameObjectId> {
        self.selected
    }

    /// Draw the hierarchy panel: one selectable row per object
    ///
    /// `row` receives each object's id, name, and whether it is selected,
    /// and returns `true` when the user clicked that row.
    pub fn hierarchy(&mut self, scene: &Scene, mut row: impl FnMut(GameObjectId, &str, bool) -> bool) {
        for object in scene.objects() {
            let is_selected = self.selected == Some(object.id());
            if row(object.id(), &object.name, is_selected) {
                self.selected = Some(object.id());
            }
        }
    }

    /// Draw the inspector panel for the selected object
    pub fn inspect(&mut self, scene: &mut Scene, sheet: &mut dyn PropertySheet) {
        let Some(id) = self.selected else {
            return;
        };
        let Some(object) = scene.find_by_id_mut(id) else {
            // object was removed since selection
            self.selected = None;
            return;
        };
        object.draw_properties(sheet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::components::TransformComponent;
    use crate::scene::ComponentKind;

    /// Records every widget label it is shown, in order
    #[derive(Default)]
    struct RecordingSheet {
        labels: Vec<String>,
    }

    impl PropertySheet for RecordingSheet {
        fn drag_vec3(&mut self, label: &str, _value: &mut Vec3) -> bool {
            self.labels.push(label.to_string());
            false
        }
        fn drag_float(&mut self, label: &str, _value: &mut f32) -> bool {
            self.labels.push(label.to_string());
            false
        }
        fn checkbox(&mut self, label: &str, _value: &mut bool) -> bool {
            self.labels.push(label.to_string());
            false
        }
        fn color3(&mut self, label: &str, _value: &mut Vec3) -> bool {
            self.labels.push(label.to_string());
            false
        }
        fn text_field(&mut self, label: &str, _value: &mut String) -> bool {
            self.labels.push(label.to_string());
            false
        }
        fn combo(&mut self, label: &str, _index: &mut usize, _options: &[&str]) -> bool {
            self.labels.push(label.to_string());
            false
        }
        fn header(&mut self, label: &str) -> bool {
            self.labels.push(label.to_string());
            true
        }
    }

    #[test]
    fn test_inspect_walks_component_sections() {
        let mut scene = Scene::new();
        let id = {
            let object = scene.create_game_object("cube");
            object.add_component(ComponentKind::MeshRenderer).unwrap();
            object.id()
        };

        let mut editor = Editor::new();
        editor.select(Some(id));
        let mut sheet = RecordingSheet::default();
        editor.inspect(&mut scene, &mut sheet);

        assert!(sheet.labels.contains(&"Name".to_string()));
        assert!(sheet.labels.contains(&"TransformComponent".to_string()));
        assert!(sheet.labels.contains(&"MeshRenderer".to_string()));
    }

    #[test]
    fn test_selection_clears_when_object_is_gone() {
        let mut scene = Scene::new();
        let id = scene.create_game_object("doomed").id();
        let mut editor = Editor::new();
        editor.select(Some(id));
        scene.remove_game_object(id);

        let mut sheet = RecordingSheet::default();
        editor.inspect(&mut scene, &mut sheet);
        assert_eq!(editor.selected(), None);
        assert!(sheet.labels.is_empty());
    }

    #[test]
    fn test_hierarchy_reports_selection_and_clicks() {
        let mut scene = Scene::new();
        let a = scene.create_game_object("a").id();
        let b = scene.create_game_object("b").id();
        let mut editor = Editor::new();
        editor.select(Some(a));

        // click on the row named "b"
        editor.hierarchy(&scene, |_, name, _| name == "b");
        assert_eq!(editor.selected(), Some(b));
    }

    /// Gizmo that translates everything it touches one unit along +X
    struct NudgeGizmo;

    impl TransformGizmo for NudgeGizmo {
        fn manipulate(&mut self, matrix: &Mat4) -> Option<Mat4> {
            Some(Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0)) * matrix)
        }
    }

    #[test]
    fn test_gizmo_edits_land_in_the_transform() {
        let mut scene = Scene::new();
        let id = {
            let object = scene.create_game_object("movable");
            *object.transform_mut() = TransformComponent::from_position(Vec3::new(2.0, 0.0, 0.0));
            object.id()
        };

        let mut surface = crate::render::RecordingSurface::new();
        scene.render_with_gizmo(&mut surface, &mut NudgeGizmo, id);
        let position = scene.find_by_id(id).unwrap().transform().position;
        approx::assert_relative_eq!(position.x, 3.0, epsilon = 1e-5);
    }
}
