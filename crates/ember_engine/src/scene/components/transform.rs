//! Transform component
//!
//! Every GameObject owns exactly one of these; the rest of the engine leans
//! on that invariant for the per-object `model` uniform and the script
//! bridge's Euler-angle bindings.

use serde::{Deserialize, Serialize};

use crate::editor::PropertySheet;
use crate::foundation::math::{quat_from_euler_deg, quat_to_euler_deg, Mat4, Quat, Vec3};
use crate::scene::serialization::{default_enabled, default_scale, quat_wxyz, vec3_xyz};

/// Position, rotation and scale of a GameObject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformComponent {
    /// Whether the component participates in update/render dispatch
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// World space position
    #[serde(with = "vec3_xyz", default = "Vec3::zeros")]
    pub position: Vec3,

    /// World space rotation
    #[serde(with = "quat_wxyz", default = "Quat::identity")]
    pub rotation: Quat,

    /// World space scale factors
    #[serde(with = "vec3_xyz", default = "default_scale")]
    pub scale: Vec3,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            enabled: true,
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: default_scale(),
        }
    }
}

impl TransformComponent {
    /// Create a transform at a position with identity rotation and unit scale
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Local forward axis (-Z rotated into world space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::new(0.0, 0.0, -1.0)
    }

    /// Local right axis (+X rotated into world space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::new(1.0, 0.0, 0.0)
    }

    /// Local up axis (+Y rotated into world space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::new(0.0, 1.0, 0.0)
    }

    /// World matrix in translate-rotate-scale order
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Rotation as Euler angles in degrees (x = roll, y = pitch, z = yaw)
    pub fn euler_angles_deg(&self) -> Vec3 {
        quat_to_euler_deg(&self.rotation)
    }

    /// Set the rotation from Euler angles in degrees
    pub fn set_euler_angles_deg(&mut self, euler: Vec3) {
        self.rotation = quat_from_euler_deg(euler);
    }

    /// Decompose a world matrix back into position, rotation, and scale
    pub fn set_from_matrix(&mut self, matrix: &Mat4) {
        let decomposed = crate::foundation::math::Transform::from_matrix(*matrix);
        self.position = decomposed.position;
        self.rotation = decomposed.rotation;
        self.scale = decomposed.scale;
    }

    /// Rotate to face a world-space target, keeping +Y as up
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        if direction.magnitude() <= f32::EPSILON {
            return;
        }
        // face_towards points +Z at its target; our forward axis is -Z
        self.rotation = Quat::face_towards(&-direction, &Vec3::new(0.0, 1.0, 0.0));
    }

    /// Editor hook: expose position/rotation/scale for interactive editing
    pub fn draw_properties(&mut self, sheet: &mut dyn PropertySheet) {
        sheet.drag_vec3("Position", &mut self.position);

        let mut euler = self.euler_angles_deg();
        if sheet.drag_vec3("Rotation", &mut euler) {
            self.set_euler_angles_deg(euler);
        }

        sheet.drag_vec3("Scale", &mut self.scale);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_is_identity() {
        let transform = TransformComponent::default();
        assert!(transform.enabled);
        assert_eq!(transform.position, Vec3::zeros());
        assert_eq!(transform.rotation, Quat::identity());
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_euler_degrees_roundtrip() {
        let mut transform = TransformComponent::default();
        transform.set_euler_angles_deg(Vec3::new(15.0, -40.0, 70.0));
        assert_relative_eq!(
            transform.euler_angles_deg(),
            Vec3::new(15.0, -40.0, 70.0),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_forward_follows_pitch() {
        let mut transform = TransformComponent::default();
        transform.set_euler_angles_deg(Vec3::new(0.0, 90.0, 0.0));
        assert_relative_eq!(
            transform.forward(),
            Vec3::new(-1.0, 0.0, 0.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_look_at_faces_target() {
        let mut transform = TransformComponent::from_position(Vec3::new(0.0, 0.0, 5.0));
        transform.look_at(Vec3::zeros());
        assert_relative_eq!(
            transform.forward(),
            Vec3::new(0.0, 0.0, -1.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_document_shape() {
        let doc = serde_json::to_value(TransformComponent::default()).unwrap();
        assert_eq!(
            doc,
            json!({
                "enabled": true,
                "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
                "rotation": { "w": 1.0, "x": 0.0, "y": 0.0, "z": 0.0 },
                "scale": { "x": 1.0, "y": 1.0, "z": 1.0 },
            })
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let transform: TransformComponent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(transform, TransformComponent::default());
    }
}
