//! Light and material descriptors
//!
//! A descriptor is the static declaration of an object's tunable surface: an
//! ordered list of parameters, each with a field name, a kind, a default and
//! (for numeric kinds) a slider range. Descriptors are plain serde data so a
//! whole rig can live in a config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::foundation::math::{utils, vec3_from_array};
use crate::foundation::Color;
use crate::render::lighting::LightKind;
use crate::rig::tunable::{FieldKind, FieldMut};

/// Slider bounds: `(min, max, step)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
    /// Slider increment
    pub step: f32,
}

impl ScalarRange {
    /// Create a range
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp `value` into the range; NaN clamps to `min`
    pub fn clamp(&self, value: f32) -> f32 {
        utils::clamp(value, self.min, self.max)
    }

    /// Whether `value` lies inside the range
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(format!("range ({}, {}, {}) is not finite", self.min, self.max, self.step));
        }
        if self.min > self.max {
            return Err(format!("range min {} exceeds max {}", self.min, self.max));
        }
        if self.step < 0.0 {
            return Err(format!("range step {} is negative", self.step));
        }
        Ok(())
    }
}

/// What kind of control a parameter gets, with its default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Color picker
    Color {
        /// Initial color
        default: Color,
    },
    /// One slider
    Scalar {
        /// Slider bounds
        range: ScalarRange,
        /// Initial value
        default: f32,
    },
    /// Three sliders (x, y, z) sharing one range
    Vector3 {
        /// Slider bounds for every component
        range: ScalarRange,
        /// Initial value
        default: [f32; 3],
    },
    /// Checkbox writing a boolean field
    Toggle {
        /// Initial state
        default: bool,
    },
    /// Checkbox that loads or releases a texture
    Texture {
        /// Image to load on enable
        path: PathBuf,
        /// Whether the texture starts enabled
        default: bool,
    },
}

impl ParameterKind {
    /// Field kind this parameter must be bound to
    pub fn field_kind(&self) -> FieldKind {
        match self {
            Self::Color { .. } => FieldKind::Color,
            Self::Scalar { .. } => FieldKind::Scalar,
            Self::Vector3 { .. } => FieldKind::Vector3,
            Self::Toggle { .. } => FieldKind::Toggle,
            Self::Texture { .. } => FieldKind::Texture,
        }
    }

    /// Write the default into `field`; returns false on a kind mismatch
    ///
    /// Texture slots are left untouched: loading is the caller's job because
    /// it needs the texture manager.
    pub fn write_default(&self, field: FieldMut<'_>) -> bool {
        match (self, field) {
            (Self::Color { default }, FieldMut::Color(color)) => color.set(*default),
            (Self::Scalar { default, .. }, FieldMut::Scalar(value)) => *value = *default,
            (Self::Vector3 { default, .. }, FieldMut::Vector3(value)) => *value = vec3_from_array(*default),
            (Self::Toggle { default }, FieldMut::Toggle(value)) => *value = *default,
            (Self::Texture { .. }, FieldMut::Texture(_)) => {}
            _ => return false,
        }
        true
    }
}

/// One tunable parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Field name on the target object
    pub name: String,
    /// Control label; defaults to the field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Control kind and default
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// Color parameter with a packed `0xrrggbb` default
    pub fn color(name: impl Into<String>, default: u32) -> Self {
        Self::new(name, ParameterKind::Color { default: Color::from_hex(default) })
    }

    /// Scalar parameter
    pub fn scalar(name: impl Into<String>, range: ScalarRange, default: f32) -> Self {
        Self::new(name, ParameterKind::Scalar { range, default })
    }

    /// Vector parameter
    pub fn vector3(name: impl Into<String>, range: ScalarRange, default: [f32; 3]) -> Self {
        Self::new(name, ParameterKind::Vector3 { range, default })
    }

    /// Boolean parameter
    pub fn toggle(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, ParameterKind::Toggle { default })
    }

    /// Texture toggle parameter
    pub fn texture(name: impl Into<String>, path: impl Into<PathBuf>, default: bool) -> Self {
        Self::new(name, ParameterKind::Texture { path: path.into(), default })
    }

    fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self { name: name.into(), label: None, kind }
    }

    /// Override the control label (builder)
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label shown next to the control
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Check ranges and defaults
    pub fn validate(&self) -> Result<(), String> {
        let in_range = |range: &ScalarRange, value: f32| {
            if range.contains(value) {
                Ok(())
            } else {
                Err(format!(
                    "default {} of {} lies outside ({}, {})",
                    value, self.name, range.min, range.max
                ))
            }
        };

        match &self.kind {
            ParameterKind::Scalar { range, default } => {
                range.check().map_err(|e| format!("{}: {e}", self.name))?;
                in_range(range, *default)
            }
            ParameterKind::Vector3 { range, default } => {
                range.check().map_err(|e| format!("{}: {e}", self.name))?;
                default.iter().try_for_each(|value| in_range(range, *value))
            }
            ParameterKind::Color { .. } | ParameterKind::Toggle { .. } | ParameterKind::Texture { .. } => Ok(()),
        }
    }
}

/// Construction-only values that are not exposed as controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Initial position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    /// Point the light aims at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub look_at: Option<[f32; 3]>,
}

/// Static declaration of one light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDescriptor {
    /// Folder title and log name
    pub name: String,
    /// Light kind
    pub kind: LightKind,
    /// Tunable parameters, in control order
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Construction-only values
    #[serde(default)]
    pub placement: Placement,
}

impl LightDescriptor {
    /// Descriptor with no parameters, named after the kind
    pub fn new(kind: LightKind) -> Self {
        Self {
            name: kind.label().to_string(),
            kind,
            parameters: Vec::new(),
            placement: Placement::default(),
        }
    }

    /// Rename (builder)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a parameter (builder)
    pub fn with(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Fixed initial position (builder)
    pub fn at(mut self, position: [f32; 3]) -> Self {
        self.placement.position = Some(position);
        self
    }

    /// Fixed aim point (builder)
    pub fn looking_at(mut self, target: [f32; 3]) -> Self {
        self.placement.look_at = Some(target);
        self
    }
}

/// Static declaration of the shared material's tunable surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    /// Folder title
    pub name: String,
    /// Tunable parameters, in control order
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl MaterialDescriptor {
    /// Descriptor with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parameters: Vec::new() }
    }

    /// Append a parameter (builder)
    pub fn with(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_boundaries() {
        let range = ScalarRange::new(0.0, 1.0, 0.001);
        assert_eq!(range.clamp(1.7), 1.0);
        assert_eq!(range.clamp(-0.2), 0.0);
        assert_eq!(range.clamp(0.25), 0.25);
        assert_eq!(range.clamp(f32::NAN), 0.0);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let parameter = ParameterSpec::scalar("intensity", ScalarRange::new(1.0, 0.0, 0.1), 0.5);
        assert!(parameter.validate().unwrap_err().contains("exceeds"));
    }

    #[test]
    fn test_validate_rejects_default_outside_range() {
        let parameter = ParameterSpec::vector3("position", ScalarRange::new(-1.0, 1.0, 0.1), [0.0, 2.0, 0.0]);
        assert!(parameter.validate().is_err());
        let parameter = ParameterSpec::vector3("position", ScalarRange::new(-10.0, 10.0, 0.1), [0.0, 2.0, 3.0]);
        assert!(parameter.validate().is_ok());
    }

    #[test]
    fn test_write_default_checks_kinds() {
        let mut intensity = 0.0_f32;
        let parameter = ParameterSpec::scalar("intensity", ScalarRange::new(0.0, 1.0, 0.001), 0.5);
        assert!(parameter.kind.write_default(FieldMut::Scalar(&mut intensity)));
        assert_eq!(intensity, 0.5);

        let mut flag = false;
        assert!(!parameter.kind.write_default(FieldMut::Toggle(&mut flag)));
    }

    #[test]
    fn test_label_falls_back_to_field_name() {
        let sky = ParameterSpec::color("color", 0x87ceeb).labeled("skyColor");
        assert_eq!(sky.display_label(), "skyColor");
        assert_eq!(ParameterSpec::toggle("visible", false).display_label(), "visible");
    }
}
