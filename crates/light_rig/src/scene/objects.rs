//! Renderable primitives and helpers
//!
//! The scene shows a fixed set of primitives sharing one material. Their
//! rotation is derived from elapsed time on every frame and never stored as
//! authoritative state.

use std::f32::consts::PI;

use crate::foundation::math::{vec3_from_array, Vec3};
use crate::rig::tunable::{FieldMut, Tunable};

/// Primitive geometry, described by its construction parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// UV sphere
    Sphere {
        /// Radius
        radius: f32,
        /// Horizontal segments
        width_segments: u32,
        /// Vertical segments
        height_segments: u32,
    },
    /// Axis-aligned box with equal sides
    Cube {
        /// Edge length
        size: f32,
    },
    /// Torus around the Z axis
    Torus {
        /// Distance from the center to the tube center
        radius: f32,
        /// Tube radius
        tube: f32,
        /// Segments around the tube
        radial_segments: u32,
        /// Segments along the ring
        tubular_segments: u32,
    },
    /// Flat plane in the XY plane
    Plane {
        /// Width
        width: f32,
        /// Height
        height: f32,
    },
}

/// One primitive placed in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Display name
    pub name: &'static str,
    /// Geometry
    pub primitive: Primitive,
    /// Position in world space
    pub position: Vec3,
    /// Euler rotation (radians) at elapsed time zero
    pub base_rotation: Vec3,
    /// Angular rate per axis (radians per second)
    pub angular_rate: Vec3,
    /// Current Euler rotation (radians), derived from elapsed time
    pub rotation: Vec3,
}

impl SceneObject {
    /// Place a primitive at `position`
    pub fn new(name: &'static str, primitive: Primitive, position: Vec3) -> Self {
        Self {
            name,
            primitive,
            position,
            base_rotation: Vec3::zeros(),
            angular_rate: Vec3::zeros(),
            rotation: Vec3::zeros(),
        }
    }

    /// Set the rotation at elapsed time zero (builder)
    pub fn with_base_rotation(mut self, rotation: Vec3) -> Self {
        self.base_rotation = rotation;
        self.rotation = rotation;
        self
    }

    /// Set the angular rate (builder)
    pub fn with_angular_rate(mut self, rate: Vec3) -> Self {
        self.angular_rate = rate;
        self
    }

    /// Recompute rotation for `elapsed` seconds since start
    pub fn animate(&mut self, elapsed: f32) {
        self.rotation = self.base_rotation + self.angular_rate * elapsed;
    }
}

/// Spin applied to the animated primitives, radians per second about (x, y, z)
pub const PRIMITIVE_SPIN: [f32; 3] = [0.15, 0.1, 0.0];

/// Sphere, cube and torus in a row above a ground plane
pub fn standard_objects() -> Vec<SceneObject> {
    vec![
        SceneObject::new(
            "sphere",
            Primitive::Sphere { radius: 0.5, width_segments: 32, height_segments: 32 },
            Vec3::new(-1.5, 0.0, 0.0),
        )
        .with_angular_rate(vec3_from_array(PRIMITIVE_SPIN)),
        SceneObject::new("cube", Primitive::Cube { size: 0.75 }, Vec3::zeros())
            .with_angular_rate(vec3_from_array(PRIMITIVE_SPIN)),
        SceneObject::new(
            "torus",
            Primitive::Torus { radius: 0.3, tube: 0.2, radial_segments: 32, tubular_segments: 64 },
            Vec3::new(1.5, 0.0, 0.0),
        )
        .with_angular_rate(vec3_from_array(PRIMITIVE_SPIN)),
        SceneObject::new("plane", Primitive::Plane { width: 5.0, height: 5.0 }, Vec3::new(0.0, -0.65, 0.0))
            .with_base_rotation(Vec3::new(-PI * 0.5, 0.0, 0.0)),
    ]
}

/// World axes gizmo
#[derive(Debug, Clone, PartialEq)]
pub struct AxesHelper {
    /// Axis length
    pub size: f32,
    /// Whether the gizmo is drawn
    pub visible: bool,
}

impl AxesHelper {
    /// Create a hidden axes helper
    pub fn new(size: f32) -> Self {
        Self { size, visible: false }
    }
}

impl Tunable for AxesHelper {
    fn type_name(&self) -> &'static str {
        "AxesHelper"
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "visible" => Some(FieldMut::Toggle(&mut self.visible)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_is_pure_function_of_time() {
        let mut objects = standard_objects();
        for object in &mut objects {
            object.animate(12.5);
        }
        let first: Vec<Vec3> = objects.iter().map(|o| o.rotation).collect();

        for object in &mut objects {
            object.animate(3.0);
            object.animate(12.5);
        }
        let second: Vec<Vec3> = objects.iter().map(|o| o.rotation).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_plane_stays_flat() {
        let mut objects = standard_objects();
        let plane = objects.iter_mut().find(|o| o.name == "plane").unwrap();
        plane.animate(100.0);
        assert_relative_eq!(plane.rotation.x, -PI * 0.5);
        assert_relative_eq!(plane.rotation.y, 0.0);
    }

    #[test]
    fn test_cube_spin_rates() {
        let mut objects = standard_objects();
        let cube = objects.iter_mut().find(|o| o.name == "cube").unwrap();
        cube.animate(2.0);
        assert_relative_eq!(cube.rotation.x, 0.3, epsilon = 1e-6);
        assert_relative_eq!(cube.rotation.y, 0.2, epsilon = 1e-6);
    }
}
