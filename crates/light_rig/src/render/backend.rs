//! Rendering backend seam
//!
//! The renderer is an external collaborator: the rig configures a scene and a
//! camera and asks the backend to draw them. [`HeadlessBackend`] draws nothing
//! but records what a real backend would have consumed, which is what the
//! demo and the tests run against.

use crate::foundation::math::Vec3;
use crate::render::camera::Camera;
use crate::render::lighting::LightKind;
use crate::render::texture_manager::TextureHandle;
use crate::scene::Scene;

/// Backend errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A draw call failed
    #[error("draw call failed: {0}")]
    DrawFailed(String),

    /// The output surface is gone
    #[error("render surface lost")]
    SurfaceLost,
}

/// Renderer interface used by the render loop
pub trait RenderBackend {
    /// Resize the output surface in CSS pixels
    fn set_size(&mut self, width: u32, height: u32);

    /// Set the device pixel ratio
    fn set_pixel_ratio(&mut self, ratio: f32);

    /// Draw one frame
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError>;
}

/// What a light looked like when a frame was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LightSample {
    /// Light kind
    pub kind: LightKind,
    /// Packed `0xrrggbb` color
    pub color: u32,
    /// Intensity
    pub intensity: f32,
    /// Position
    pub position: Vec3,
}

/// State consumed by the last draw call
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Lights in scene order
    pub lights: Vec<LightSample>,
    /// Primitive rotations in scene order
    pub rotations: Vec<Vec3>,
    /// Material texture
    pub texture: Option<TextureHandle>,
    /// Material wireframe flag
    pub wireframe: bool,
    /// Axes helper visibility
    pub axes_visible: bool,
    /// Camera aspect ratio
    pub aspect: f32,
}

/// Backend without a GPU
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    size: (u32, u32),
    pixel_ratio: f32,
    frames_drawn: u64,
    last_frame: Option<FrameSnapshot>,
    fail_next: Option<RenderError>,
}

impl HeadlessBackend {
    /// Create a headless backend
    pub fn new() -> Self {
        Self {
            pixel_ratio: 1.0,
            ..Self::default()
        }
    }

    /// Current surface size
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Current device pixel ratio
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Frames drawn so far
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// State seen by the most recent draw
    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.last_frame.as_ref()
    }

    /// Make the next draw call fail with `error`
    pub fn fail_next_frame(&mut self, error: RenderError) {
        self.fail_next = Some(error);
    }
}

impl RenderBackend for HeadlessBackend {
    fn set_size(&mut self, width: u32, height: u32) {
        log::debug!("Headless surface resized to {}x{}", width, height);
        self.size = (width, height);
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        if let Some(error) = self.fail_next.take() {
            return Err(error);
        }

        let material = scene.material().borrow();
        let snapshot = FrameSnapshot {
            lights: scene
                .lights()
                .map(|(_, light)| {
                    let light = light.borrow();
                    LightSample {
                        kind: light.kind(),
                        color: light.color.hex(),
                        intensity: light.intensity,
                        position: light.position,
                    }
                })
                .collect(),
            rotations: scene.objects().iter().map(|o| o.rotation).collect(),
            texture: material.map,
            wireframe: material.wireframe,
            axes_visible: scene.axes().borrow().visible,
            aspect: camera.aspect,
        };

        self.frames_drawn += 1;
        log::trace!(
            "Frame {}: {} lights, {} objects",
            self.frames_drawn,
            snapshot.lights.len(),
            snapshot.rotations.len()
        );
        self.last_frame = Some(snapshot);
        Ok(())
    }
}
