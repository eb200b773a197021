//! Scene document schema helpers
//!
//! The persisted scene format is a UTF-8 JSON tree:
//!
//! ```json
//! {
//!   "name": "...",
//!   "gameObjects": [
//!     { "id": 0, "name": "...", "isStatic": false, "isActive": true,
//!       "components": [ { "type": "...", "enabled": true, ... } ] }
//!   ]
//! }
//! ```
//!
//! Math types serialize with named fields (`{x, y, z}` vectors,
//! `{w, x, y, z}` quaternions) so documents stay hand-editable. This module
//! owns those field mappings plus the [`DataError`] type every deserializer
//! in the scene tree reports through.

use thiserror::Error;

use crate::foundation::math::Vec3;

/// Malformed or missing data in a serialized scene document
#[derive(Debug, Error)]
pub enum DataError {
    /// A required field is absent
    #[error("missing required field `{field}`")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// A field is present but has the wrong shape
    #[error("field `{field}` has the wrong shape: {reason}")]
    InvalidField {
        /// Name or path of the offending field
        field: String,
        /// What went wrong
        reason: String,
    },

    /// The document itself could not be parsed
    #[error("malformed document at line {line}, column {column}: {message}")]
    Parse {
        /// 1-based line of the offending content
        line: usize,
        /// 1-based column of the offending content
        column: usize,
        /// Parser message
        message: String,
    },
}

impl DataError {
    /// Wrap a serde error for a named field or document region
    pub fn invalid(field: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a JSON parse error, keeping its line/column position
    pub fn parse(err: &serde_json::Error) -> Self {
        Self::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Serde default: components are enabled unless the document says otherwise
pub(crate) fn default_enabled() -> bool {
    true
}

/// Serde default: unit scale
pub(crate) fn default_scale() -> Vec3 {
    Vec3::new(1.0, 1.0, 1.0)
}

/// `{x, y, z}` field mapping for [`Vec3`]
pub mod vec3_xyz {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::foundation::math::Vec3;

    #[derive(Serialize, Deserialize)]
    struct Xyz {
        x: f32,
        y: f32,
        z: f32,
    }

    /// Serialize a vector as `{x, y, z}`
    pub fn serialize<S: Serializer>(value: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
        Xyz {
            x: value.x,
            y: value.y,
            z: value.z,
        }
        .serialize(serializer)
    }

    /// Deserialize a vector from `{x, y, z}`
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
        let value = Xyz::deserialize(deserializer)?;
        Ok(Vec3::new(value.x, value.y, value.z))
    }
}

/// `{w, x, y, z}` field mapping for [`Quat`](crate::foundation::math::Quat)
pub mod quat_wxyz {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::foundation::math::{Quat, Quaternion, Unit};

    #[derive(Serialize, Deserialize)]
    struct Wxyz {
        w: f32,
        x: f32,
        y: f32,
        z: f32,
    }

    /// Serialize a quaternion as `{w, x, y, z}`
    pub fn serialize<S: Serializer>(value: &Quat, serializer: S) -> Result<S::Ok, S::Error> {
        let coords = &value.coords;
        Wxyz {
            w: coords[3],
            x: coords[0],
            y: coords[1],
            z: coords[2],
        }
        .serialize(serializer)
    }

    /// Deserialize a quaternion from `{w, x, y, z}`
    ///
    /// Already-unit quaternions pass through bit-exact so that round-trips
    /// are field-for-field stable; anything else is renormalized, and a
    /// degenerate zero quaternion falls back to identity.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Quat, D::Error> {
        let value = Wxyz::deserialize(deserializer)?;
        let quaternion = Quaternion::new(value.w, value.x, value.y, value.z);
        let norm = quaternion.norm();
        if norm == 0.0 {
            Ok(Quat::identity())
        } else if (norm - 1.0).abs() < 1e-6 {
            Ok(Unit::new_unchecked(quaternion))
        } else {
            Ok(Unit::new_normalize(quaternion))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::foundation::math::{quat_from_euler_deg, Quat};

    #[derive(Serialize, Deserialize)]
    struct VecHolder {
        #[serde(with = "vec3_xyz")]
        v: Vec3,
    }

    #[derive(Serialize, Deserialize)]
    struct QuatHolder {
        #[serde(with = "quat_wxyz")]
        q: Quat,
    }

    #[test]
    fn test_vec3_named_fields() {
        let holder = VecHolder {
            v: Vec3::new(1.0, 2.0, 3.0),
        };
        let doc = serde_json::to_value(&holder).unwrap();
        assert_eq!(doc, json!({ "v": { "x": 1.0, "y": 2.0, "z": 3.0 } }));

        let back: VecHolder = serde_json::from_value(doc).unwrap();
        assert_eq!(back.v, holder.v);
    }

    #[test]
    fn test_quat_roundtrip_is_exact() {
        let holder = QuatHolder {
            q: quat_from_euler_deg(Vec3::new(12.0, 34.0, 56.0)),
        };
        let doc = serde_json::to_value(&holder).unwrap();
        let back: QuatHolder = serde_json::from_value(doc.clone()).unwrap();
        let doc_again = serde_json::to_value(&back).unwrap();
        assert_eq!(doc, doc_again);
    }

    #[test]
    fn test_zero_quat_falls_back_to_identity() {
        let doc = json!({ "q": { "w": 0.0, "x": 0.0, "y": 0.0, "z": 0.0 } });
        let back: QuatHolder = serde_json::from_value(doc).unwrap();
        assert_eq!(back.q, Quat::identity());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let doc = json!({ "v": "not a vector" });
        assert!(serde_json::from_value::<VecHolder>(doc).is_err());
    }

    #[test]
    fn test_parse_error_keeps_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\"name\": ").unwrap_err();
        match DataError::parse(&err) {
            DataError::Parse { line, column, .. } => {
                assert_eq!(line, 1);
                assert!(column > 0);
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }
}
