//! Rig file
//!
//! A [`RigConfig`] describes a whole scene: window, camera, lights, material
//! and helpers. Missing sections fall back to the lighting showcase.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::vec3_from_array;
use crate::render::camera::Camera;
use crate::render::viewport::Viewport;
use crate::rig::descriptor::{LightDescriptor, MaterialDescriptor};
use crate::rig::presets;

/// Initial window size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in CSS pixels
    pub width: u32,
    /// Height in CSS pixels
    pub height: u32,
    /// Device pixel ratio reported by the host
    pub pixel_ratio: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            width: viewport.width,
            height: viewport.height,
            pixel_ratio: viewport.device_pixel_ratio,
        }
    }
}

impl ViewportConfig {
    /// Viewport described by this section
    pub fn to_viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.pixel_ratio)
    }

    /// Both sides non-zero and a positive pixel ratio
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport {}x{} has no area",
                self.width, self.height
            )));
        }
        if self.pixel_ratio <= 0.0 || self.pixel_ratio.is_nan() {
            return Err(ConfigError::Invalid(format!("pixel ratio {} must be positive", self.pixel_ratio)));
        }
        Ok(())
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Position in world space
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 100.0,
            position: [1.0, 1.0, 2.0],
        }
    }
}

impl CameraConfig {
    /// Field of view strictly between 0 and 180 degrees, `0 < near < far`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::Invalid(format!("camera fov {} is outside (0, 180)", self.fov)));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::Invalid(format!(
                "camera planes near {} far {} need 0 < near < far",
                self.near, self.far
            )));
        }
        Ok(())
    }

    /// Camera looking at the origin
    pub fn to_camera(&self, aspect: f32) -> Camera {
        Camera::perspective(vec3_from_array(self.position), self.fov, aspect, self.near, self.far)
    }
}

/// Whole rig description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RigConfig {
    /// Stop after this many frames; run until stopped when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<u64>,
    /// Seconds per frame for a fixed-step clock; realtime when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_step: Option<f32>,
    /// Window
    pub viewport: ViewportConfig,
    /// Camera
    pub camera: CameraConfig,
    /// Lights in registration order
    pub lights: Vec<LightDescriptor>,
    /// Shared material
    pub material: MaterialDescriptor,
    /// Axes helper
    pub axes: MaterialDescriptor,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            frames: None,
            frame_step: None,
            viewport: ViewportConfig::default(),
            camera: CameraConfig::default(),
            lights: presets::default_lights(),
            material: presets::default_material(),
            axes: presets::default_axes(),
        }
    }
}

impl Config for RigConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.viewport.validate()?;
        self.camera.validate()?;
        if let Some(step) = self.frame_step {
            if step <= 0.0 || step.is_nan() {
                return Err(ConfigError::Invalid(format!("frame step {step} must be positive")));
            }
        }
        Ok(())
    }
}
