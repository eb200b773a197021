//! Collision volumes
//!
//! Colliders describe an object's physical extent. Only sphere-sphere
//! overlap is evaluated for now; box and capsule shapes serialize and
//! round-trip but fall back to their bounding sphere during checks.

use serde::{Deserialize, Serialize};

use crate::editor::PropertySheet;
use crate::foundation::math::Vec3;
use crate::scene::game_object::GameObjectId;
use crate::scene::serialization::{default_enabled, vec3_xyz};

/// The geometric shape of a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Axis-aligned box, extents given by `size`
    Box,
    /// Sphere, radius given by `size.x`
    Sphere,
    /// Capsule, radius `size.x` and height `size.y`
    Capsule,
}

impl Default for ColliderShape {
    fn default() -> Self {
        Self::Sphere
    }
}

/// Collision volume attached to a GameObject
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColliderComponent {
    /// Whether this collider participates in checks
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Shape of the volume
    #[serde(default)]
    pub shape: ColliderShape,

    /// Shape extents; interpretation depends on `shape`
    #[serde(with = "vec3_xyz", default = "default_size")]
    pub size: Vec3,

    /// Triggers report overlap without expecting a physical response
    #[serde(default)]
    pub is_trigger: bool,
}

fn default_size() -> Vec3 {
    Vec3::new(1.0, 1.0, 1.0)
}

impl Default for ColliderComponent {
    fn default() -> Self {
        Self {
            enabled: true,
            shape: ColliderShape::default(),
            size: default_size(),
            is_trigger: false,
        }
    }
}

impl ColliderComponent {
    /// Sphere collider with the given radius
    pub fn sphere(radius: f32) -> Self {
        Self {
            shape: ColliderShape::Sphere,
            size: Vec3::new(radius, radius, radius),
            ..Self::default()
        }
    }

    /// Radius of the bounding sphere used for overlap checks
    pub fn bounding_radius(&self) -> f32 {
        match self.shape {
            ColliderShape::Sphere => self.size.x,
            ColliderShape::Box => self.size.norm() * 0.5,
            ColliderShape::Capsule => self.size.x + self.size.y * 0.5,
        }
    }

    /// Editor hook: expose shape and extents
    pub fn draw_properties(&mut self, sheet: &mut dyn PropertySheet) {
        let shapes = ["Box", "Sphere", "Capsule"];
        let mut index = match self.shape {
            ColliderShape::Box => 0,
            ColliderShape::Sphere => 1,
            ColliderShape::Capsule => 2,
        };
        if sheet.combo("Shape", &mut index, &shapes) {
            self.shape = match index {
                0 => ColliderShape::Box,
                2 => ColliderShape::Capsule,
                _ => ColliderShape::Sphere,
            };
        }
        sheet.drag_vec3("Size", &mut self.size);
        sheet.checkbox("Is Trigger", &mut self.is_trigger);
    }
}

/// Result of a positive overlap check
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    /// The other object involved
    pub other: GameObjectId,
    /// World-space contact point, midway along the overlap
    pub point: Vec3,
    /// Direction pushing this object out of the other
    pub normal: Vec3,
    /// Overlap depth along the normal
    pub penetration: f32,
}

/// Sphere-sphere overlap between two colliders at world positions
pub fn sphere_check(
    a: &ColliderComponent,
    a_position: Vec3,
    b: &ColliderComponent,
    b_position: Vec3,
    b_id: GameObjectId,
) -> Option<Collision> {
    let offset = a_position - b_position;
    let distance = offset.norm();
    let combined = a.bounding_radius() + b.bounding_radius();
    if distance >= combined {
        return None;
    }
    // coincident centers have no meaningful direction; pick +Y
    let normal = if distance > f32::EPSILON {
        offset / distance
    } else {
        Vec3::new(0.0, 1.0, 0.0)
    };
    Some(Collision {
        other: b_id,
        point: b_position + normal * b.bounding_radius(),
        normal,
        penetration: combined - distance,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_overlapping_spheres_collide() {
        let a = ColliderComponent::sphere(1.0);
        let b = ColliderComponent::sphere(1.0);
        let hit = sphere_check(
            &a,
            Vec3::new(1.5, 0.0, 0.0),
            &b,
            Vec3::zeros(),
            GameObjectId::from(7),
        )
        .unwrap();
        assert_eq!(hit.other, GameObjectId::from(7));
        assert_relative_eq!(hit.penetration, 0.5);
        assert_relative_eq!(hit.normal.x, 1.0);
    }

    #[test]
    fn test_separated_spheres_do_not_collide() {
        let a = ColliderComponent::sphere(1.0);
        let b = ColliderComponent::sphere(1.0);
        assert!(sphere_check(
            &a,
            Vec3::new(3.0, 0.0, 0.0),
            &b,
            Vec3::zeros(),
            GameObjectId::from(1),
        )
        .is_none());
    }

    #[test]
    fn test_coincident_centers_pick_up_axis() {
        let a = ColliderComponent::sphere(0.5);
        let b = ColliderComponent::sphere(0.5);
        let hit =
            sphere_check(&a, Vec3::zeros(), &b, Vec3::zeros(), GameObjectId::from(2)).unwrap();
        assert_relative_eq!(hit.normal.y, 1.0);
    }

    #[test]
    fn test_document_round_trip() {
        let doc = json!({
            "shape": "Capsule",
            "size": { "x": 0.5, "y": 2.0, "z": 0.5 },
            "isTrigger": true,
        });
        let collider: ColliderComponent = serde_json::from_value(doc).unwrap();
        assert_eq!(collider.shape, ColliderShape::Capsule);
        assert!(collider.is_trigger);
        assert!(collider.enabled);
        assert_relative_eq!(collider.size.y, 2.0);
    }
}
