//! # 3D Camera
//!
//! Perspective camera plus the seam for interactive camera controls. The
//! controls themselves (orbit, damping) belong to the host; the render loop
//! only asks them to update the camera once per frame.

use std::f32::consts::PI;

use crate::foundation::math::{utils, Mat4, Point3, Vec3};

/// Perspective camera
///
/// Uses a right-handed Y-up coordinate system in view space.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,

    projection: Mat4,
}

impl Camera {
    /// Create a new perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
            projection: Mat4::identity(),
        };
        camera.update_projection_matrix();
        camera
    }

    /// Configure camera to look at a specific point
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Update the aspect ratio and recompute the projection
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Whether fov, aspect and clipping planes describe a usable frustum
    pub fn has_valid_projection(&self) -> bool {
        self.aspect > 0.0 && self.fov > 0.0 && self.fov < PI && self.near > 0.0 && self.far > self.near
    }

    /// Recompute the cached projection after changing fov, aspect or planes
    ///
    /// A degenerate frustum keeps the previous projection.
    pub fn update_projection_matrix(&mut self) {
        if !self.has_valid_projection() {
            log::warn!(
                "Keeping previous projection: fov {:.3} aspect {:.3} near {} far {}",
                self.fov,
                self.aspect,
                self.near,
                self.far
            );
            return;
        }
        self.projection = Mat4::new_perspective(self.aspect, self.fov, self.near, self.far);
    }

    /// Cached projection matrix
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(self.position), &Point3::from(self.target), &self.up)
    }
}

/// Interactive camera controls owned by the host
pub trait CameraControls {
    /// Advance the controls by one frame; returns true if the camera moved
    fn update(&mut self, camera: &mut Camera) -> bool;
}

/// Controls that never move the camera
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticControls;

impl CameraControls for StaticControls {
    fn update(&mut self, _camera: &mut Camera) -> bool {
        false
    }
}
