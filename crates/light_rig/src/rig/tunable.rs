//! Named, typed access to the fields a control may edit
//!
//! Targets expose their editable fields by name instead of through
//! reflection. Each field reports one of a small set of kinds, and the binder
//! refuses to wire a parameter to a field of a different kind.

use crate::foundation::math::Vec3;
use crate::foundation::Color;
use crate::render::texture_manager::TextureHandle;

/// Kind of an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Mutable color holder
    Color,
    /// Single float
    Scalar,
    /// Three floats
    Vector3,
    /// Boolean flag
    Toggle,
    /// Optional texture slot
    Texture,
}

/// Mutable borrow of one editable field
#[derive(Debug)]
pub enum FieldMut<'a> {
    /// Color holder, edited through [`Color::set`]
    Color(&'a mut Color),
    /// Float field
    Scalar(&'a mut f32),
    /// Vector field
    Vector3(&'a mut Vec3),
    /// Boolean field
    Toggle(&'a mut bool),
    /// Texture slot
    Texture(&'a mut Option<TextureHandle>),
}

impl FieldMut<'_> {
    /// Kind of the borrowed field
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Color(_) => FieldKind::Color,
            Self::Scalar(_) => FieldKind::Scalar,
            Self::Vector3(_) => FieldKind::Vector3,
            Self::Toggle(_) => FieldKind::Toggle,
            Self::Texture(_) => FieldKind::Texture,
        }
    }

    /// Read the current value
    pub fn get(&self) -> FieldValue {
        match self {
            Self::Color(color) => FieldValue::Color(**color),
            Self::Scalar(value) => FieldValue::Scalar(**value),
            Self::Vector3(value) => FieldValue::Vector3(**value),
            Self::Toggle(value) => FieldValue::Toggle(**value),
            Self::Texture(slot) => FieldValue::Texture(slot.is_some()),
        }
    }
}

/// Copy of a field's current value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Color value
    Color(Color),
    /// Float value
    Scalar(f32),
    /// Vector value
    Vector3(Vec3),
    /// Boolean value
    Toggle(bool),
    /// Whether a texture is assigned
    Texture(bool),
}

/// An object whose fields can be tuned at runtime
pub trait Tunable {
    /// Short name used in logs and errors
    fn type_name(&self) -> &'static str;

    /// Borrow the field called `name`, if the object has one
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;

    /// Called after a control replaced a resource on this object
    fn mark_updated(&mut self) {}
}
