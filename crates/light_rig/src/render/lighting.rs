//! Lighting system
//!
//! Light objects owned by the scene. Every kind shares color, intensity and a
//! position; the kind-specific values live in [`LightParams`]. Construction
//! defaults follow the usual real-time engine conventions (white, intensity
//! 1, decay 2, 60 degree spot cone).

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

use crate::foundation::math::Vec3;
use crate::foundation::Color;
use crate::rig::tunable::{FieldKind, FieldMut, Tunable};

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightKind {
    /// Uniform light with no direction
    Ambient,
    /// Sky/ground gradient light
    Hemisphere,
    /// Parallel rays (like sunlight)
    Directional,
    /// Omnidirectional light from a point (like a lightbulb)
    Point,
    /// Cone of light from a point (like a flashlight)
    Spot,
    /// Light emitted from a rectangle
    RectArea,
}

const AMBIENT_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Color),
    ("intensity", FieldKind::Scalar),
];

const HEMISPHERE_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Color),
    ("groundColor", FieldKind::Color),
    ("intensity", FieldKind::Scalar),
];

const DIRECTIONAL_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Color),
    ("intensity", FieldKind::Scalar),
    ("position", FieldKind::Vector3),
];

const POINT_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Color),
    ("intensity", FieldKind::Scalar),
    ("position", FieldKind::Vector3),
    ("distance", FieldKind::Scalar),
    ("decay", FieldKind::Scalar),
];

const SPOT_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Color),
    ("intensity", FieldKind::Scalar),
    ("position", FieldKind::Vector3),
    ("distance", FieldKind::Scalar),
    ("angle", FieldKind::Scalar),
    ("penumbra", FieldKind::Scalar),
    ("decay", FieldKind::Scalar),
];

const RECT_AREA_FIELDS: &[(&str, FieldKind)] = &[
    ("color", FieldKind::Color),
    ("intensity", FieldKind::Scalar),
    ("position", FieldKind::Vector3),
    ("width", FieldKind::Scalar),
    ("height", FieldKind::Scalar),
];

impl LightKind {
    /// Every light kind, cheapest first
    pub const ALL: [Self; 6] = [
        Self::Ambient,
        Self::Hemisphere,
        Self::Directional,
        Self::Point,
        Self::Spot,
        Self::RectArea,
    ];

    /// Editable fields exposed by lights of this kind
    pub fn fields(self) -> &'static [(&'static str, FieldKind)] {
        match self {
            Self::Ambient => AMBIENT_FIELDS,
            Self::Hemisphere => HEMISPHERE_FIELDS,
            Self::Directional => DIRECTIONAL_FIELDS,
            Self::Point => POINT_FIELDS,
            Self::Spot => SPOT_FIELDS,
            Self::RectArea => RECT_AREA_FIELDS,
        }
    }

    /// Kind of the field called `name`, if this light kind has it
    pub fn field_kind(self, name: &str) -> Option<FieldKind> {
        self.fields()
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
    }

    /// Whether the position of this kind affects shading
    pub fn is_positioned(self) -> bool {
        !matches!(self, Self::Ambient | Self::Hemisphere)
    }

    /// Human readable name, used as the default folder title
    pub fn label(self) -> &'static str {
        match self {
            Self::Ambient => "Ambient Light",
            Self::Hemisphere => "Hemisphere Light",
            Self::Directional => "Directional Light",
            Self::Point => "Point Light",
            Self::Spot => "Spot Light",
            Self::RectArea => "RectArea Light",
        }
    }
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific light values
#[derive(Debug, Clone, PartialEq)]
pub enum LightParams {
    /// No extra values
    Ambient,
    /// Gradient light
    Hemisphere {
        /// Color seen from below
        ground_color: Color,
    },
    /// No extra values; aims at [`Light::target`]
    Directional,
    /// Point light attenuation
    Point {
        /// Cutoff distance (0 = unlimited)
        distance: f32,
        /// Falloff exponent
        decay: f32,
    },
    /// Spot light cone and attenuation
    Spot {
        /// Cutoff distance (0 = unlimited)
        distance: f32,
        /// Cone half-angle in radians
        angle: f32,
        /// Fraction of the cone that is soft, `0.0..=1.0`
        penumbra: f32,
        /// Falloff exponent
        decay: f32,
    },
    /// Emitting rectangle size
    RectArea {
        /// Rectangle width
        width: f32,
        /// Rectangle height
        height: f32,
    },
}

impl LightParams {
    fn defaults(kind: LightKind) -> Self {
        match kind {
            LightKind::Ambient => Self::Ambient,
            LightKind::Hemisphere => Self::Hemisphere { ground_color: Color::WHITE },
            LightKind::Directional => Self::Directional,
            LightKind::Point => Self::Point { distance: 0.0, decay: 2.0 },
            LightKind::Spot => Self::Spot {
                distance: 0.0,
                angle: PI / 3.0,
                penumbra: 0.0,
                decay: 2.0,
            },
            LightKind::RectArea => Self::RectArea { width: 10.0, height: 10.0 },
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match (self, name) {
            (Self::Hemisphere { ground_color }, "groundColor") => Some(FieldMut::Color(ground_color)),
            (Self::Point { distance, .. } | Self::Spot { distance, .. }, "distance") => {
                Some(FieldMut::Scalar(distance))
            }
            (Self::Point { decay, .. } | Self::Spot { decay, .. }, "decay") => Some(FieldMut::Scalar(decay)),
            (Self::Spot { angle, .. }, "angle") => Some(FieldMut::Scalar(angle)),
            (Self::Spot { penumbra, .. }, "penumbra") => Some(FieldMut::Scalar(penumbra)),
            (Self::RectArea { width, .. }, "width") => Some(FieldMut::Scalar(width)),
            (Self::RectArea { height, .. }, "height") => Some(FieldMut::Scalar(height)),
            _ => None,
        }
    }
}

/// Light source
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    kind: LightKind,
    /// Light color (sky color for hemisphere lights)
    pub color: Color,
    /// Light intensity
    pub intensity: f32,
    /// Position in world space
    pub position: Vec3,
    /// Point the light aims at (directional, spot and rect-area lights)
    pub target: Vec3,
    /// Kind-specific values
    pub params: LightParams,
}

impl Light {
    /// Create a light of `kind` with engine defaults
    pub fn new(kind: LightKind) -> Self {
        let position = match kind {
            LightKind::Directional | LightKind::Hemisphere => Vec3::new(0.0, 1.0, 0.0),
            _ => Vec3::zeros(),
        };
        Self {
            kind,
            color: Color::WHITE,
            intensity: 1.0,
            position,
            target: Vec3::zeros(),
            params: LightParams::defaults(kind),
        }
    }

    /// Light kind, fixed at creation
    pub fn kind(&self) -> LightKind {
        self.kind
    }

    /// Aim the light at a world-space point
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Normalized direction from the light towards its target
    pub fn direction(&self) -> Vec3 {
        let delta = self.target - self.position;
        if delta.norm_squared() > f32::EPSILON {
            delta.normalize()
        } else {
            Vec3::new(0.0, -1.0, 0.0)
        }
    }

    /// Cutoff distance for point and spot lights
    pub fn distance(&self) -> Option<f32> {
        match self.params {
            LightParams::Point { distance, .. } | LightParams::Spot { distance, .. } => Some(distance),
            _ => None,
        }
    }
}

impl Tunable for Light {
    fn type_name(&self) -> &'static str {
        self.kind.label()
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "color" => Some(FieldMut::Color(&mut self.color)),
            "intensity" => Some(FieldMut::Scalar(&mut self.intensity)),
            "position" if self.kind.is_positioned() => Some(FieldMut::Vector3(&mut self.position)),
            _ => self.params.field_mut(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_matches_light_objects() {
        for kind in LightKind::ALL {
            let mut light = Light::new(kind);
            for (name, field_kind) in kind.fields() {
                let field = light.field_mut(name).unwrap_or_else(|| panic!("{kind} lacks {name}"));
                assert_eq!(field.kind(), *field_kind, "{kind}.{name}");
            }
        }
    }

    #[test]
    fn test_undeclared_fields_are_absent() {
        let mut ambient = Light::new(LightKind::Ambient);
        assert!(ambient.field_mut("position").is_none());
        assert!(ambient.field_mut("distance").is_none());

        let mut point = Light::new(LightKind::Point);
        assert!(point.field_mut("penumbra").is_none());
        assert!(point.field_mut("groundColor").is_none());
        assert_eq!(LightKind::Point.field_kind("penumbra"), None);
    }

    #[test]
    fn test_spot_defaults() {
        let spot = Light::new(LightKind::Spot);
        assert_eq!(spot.intensity, 1.0);
        assert_eq!(spot.color, Color::WHITE);
        match spot.params {
            LightParams::Spot { angle, penumbra, decay, .. } => {
                assert!((angle - PI / 3.0).abs() < f32::EPSILON);
                assert_eq!(penumbra, 0.0);
                assert_eq!(decay, 2.0);
            }
            other => panic!("unexpected params {other:?}"),
        }
    }

    #[test]
    fn test_direction_towards_target() {
        let mut light = Light::new(LightKind::RectArea);
        light.position = Vec3::new(1.0, 0.0, 0.0);
        light.look_at(Vec3::zeros());
        assert!((light.direction() - Vec3::new(-1.0, 0.0, 0.0)).norm() < 1e-6);
    }
}
