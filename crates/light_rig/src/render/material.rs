//! Material system
//!
//! One standard (metallic/roughness) material is shared by every primitive in
//! the scene. Its texture slot is managed by the texture toggle control.

use crate::foundation::Color;
use crate::render::texture_manager::TextureHandle;
use crate::rig::tunable::{FieldMut, Tunable};

/// Standard metallic/roughness material
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    /// Base color
    pub color: Color,
    /// Roughness factor (0.0 = mirror, 1.0 = fully diffuse)
    pub roughness: f32,
    /// Metalness factor (0.0 = dielectric, 1.0 = metal)
    pub metalness: f32,
    /// Draw as wireframe
    pub wireframe: bool,
    /// Color map
    pub map: Option<TextureHandle>,
    /// Set when the texture slot changed and the backend must rebuild bindings
    pub needs_update: bool,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            roughness: 1.0,
            metalness: 0.0,
            wireframe: false,
            map: None,
            needs_update: false,
        }
    }
}

impl StandardMaterial {
    /// Create a material with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set roughness (builder)
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Set metalness (builder)
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }
}

impl Tunable for StandardMaterial {
    fn type_name(&self) -> &'static str {
        "StandardMaterial"
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "color" => Some(FieldMut::Color(&mut self.color)),
            "roughness" => Some(FieldMut::Scalar(&mut self.roughness)),
            "metalness" => Some(FieldMut::Scalar(&mut self.metalness)),
            "wireframe" => Some(FieldMut::Toggle(&mut self.wireframe)),
            "map" => Some(FieldMut::Texture(&mut self.map)),
            _ => None,
        }
    }

    fn mark_updated(&mut self) {
        self.needs_update = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::tunable::FieldKind;

    #[test]
    fn test_material_fields() {
        let mut material = StandardMaterial::new().with_roughness(0.4).with_metalness(0.7);
        assert_eq!(material.field_mut("map").map(|f| f.kind()), Some(FieldKind::Texture));
        assert_eq!(material.field_mut("wireframe").map(|f| f.kind()), Some(FieldKind::Toggle));
        assert!(material.field_mut("penumbra").is_none());

        if let Some(FieldMut::Scalar(roughness)) = material.field_mut("roughness") {
            assert_eq!(*roughness, 0.4);
        } else {
            panic!("roughness should be a scalar");
        }
    }
}
