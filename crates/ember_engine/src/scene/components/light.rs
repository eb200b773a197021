//! Light component
//!
//! Pure light data; the scene render pass decides which light actually
//! reaches the surface (first enabled light wins, see
//! [`Scene::render`](crate::scene::Scene::render)).

use serde::{Deserialize, Serialize};

use crate::editor::PropertySheet;
use crate::foundation::math::Vec3;
use crate::scene::serialization::{default_enabled, vec3_xyz};

/// Kinds of light sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    /// Parallel rays, no position
    Directional,
    /// Radiates in all directions from the owner's position
    Point,
    /// Cone of light from the owner's position
    Spot,
}

/// A light source attached to a GameObject
///
/// Position and direction come from the owner's transform; only the optical
/// properties live here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightComponent {
    /// Whether the component participates in update/render dispatch
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Kind of light source
    #[serde(default = "default_light_type")]
    pub light_type: LightType,

    /// RGB color in the 0.0 to 1.0 range
    #[serde(with = "vec3_xyz", default = "default_color")]
    pub color: Vec3,

    /// Intensity multiplier applied to `color`
    #[serde(default = "default_intensity")]
    pub intensity: f32,

    /// Maximum reach for point/spot lights
    #[serde(default = "default_range")]
    pub range: f32,

    /// Cone angle in degrees for spot lights
    #[serde(default = "default_spot_angle")]
    pub spot_angle: f32,

    /// Whether this light should cast shadows
    #[serde(default)]
    pub cast_shadows: bool,
}

fn default_light_type() -> LightType {
    LightType::Point
}

fn default_color() -> Vec3 {
    Vec3::new(1.0, 1.0, 1.0)
}

fn default_intensity() -> f32 {
    1.0
}

fn default_range() -> f32 {
    10.0
}

fn default_spot_angle() -> f32 {
    45.0
}

impl Default for LightComponent {
    fn default() -> Self {
        Self {
            enabled: true,
            light_type: default_light_type(),
            color: default_color(),
            intensity: default_intensity(),
            range: default_range(),
            spot_angle: default_spot_angle(),
            cast_shadows: false,
        }
    }
}

impl LightComponent {
    /// Create a point light
    pub fn point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            light_type: LightType::Point,
            color,
            intensity,
            range,
            ..Default::default()
        }
    }

    /// Create a directional light
    pub fn directional(color: Vec3, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            color,
            intensity,
            ..Default::default()
        }
    }

    /// Create a spot light
    pub fn spot(color: Vec3, intensity: f32, range: f32, spot_angle: f32) -> Self {
        Self {
            light_type: LightType::Spot,
            color,
            intensity,
            range,
            spot_angle,
            ..Default::default()
        }
    }

    /// Effective radiated color (`color * intensity`)
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }

    /// Editor hook: expose light settings
    pub fn draw_properties(&mut self, sheet: &mut dyn PropertySheet) {
        let mut selected = match self.light_type {
            LightType::Directional => 0,
            LightType::Point => 1,
            LightType::Spot => 2,
        };
        if sheet.combo("Type", &mut selected, &["Directional", "Point", "Spot"]) {
            self.light_type = match selected {
                0 => LightType::Directional,
                1 => LightType::Point,
                _ => LightType::Spot,
            };
        }

        sheet.color3("Color", &mut self.color);
        sheet.drag_float("Intensity", &mut self.intensity);
        sheet.drag_float("Range", &mut self.range);
        if self.light_type == LightType::Spot {
            sheet.drag_float("Spot Angle", &mut self.spot_angle);
        }
        sheet.checkbox("Cast Shadows", &mut self.cast_shadows);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_radiance_scales_color() {
        let light = LightComponent::point(Vec3::new(1.0, 0.5, 0.0), 2.0, 5.0);
        assert_eq!(light.radiance(), Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_light_type_serializes_as_name() {
        let doc = serde_json::to_value(LightComponent::directional(
            Vec3::new(1.0, 1.0, 1.0),
            1.0,
        ))
        .unwrap();
        assert_eq!(doc["lightType"], json!("Directional"));
        assert_eq!(doc["spotAngle"], json!(45.0));
    }

    #[test]
    fn test_missing_fields_default() {
        let light: LightComponent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(light, LightComponent::default());
    }
}
