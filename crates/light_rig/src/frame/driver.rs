//! Render loop driver
//!
//! One tick animates the primitives from elapsed time, lets the camera
//! controls move the camera, draws once and asks for the next frame. Lights
//! and the material are read as they are at draw time, so control edits
//! show up on the next frame without any extra bookkeeping.

use crate::frame::scheduler::FrameScheduler;
use crate::render::backend::{RenderBackend, RenderError};
use crate::render::camera::CameraControls;
use crate::scene::context::SceneContext;

/// Per-frame driver
#[derive(Debug, Default)]
pub struct RenderLoop {
    ticks: u64,
}

impl RenderLoop {
    /// Create a render loop
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Draw the frame for `elapsed` seconds since start
    ///
    /// The next frame is requested only after a successful draw; a draw error
    /// is returned as is and nothing is retried.
    pub fn tick<B: RenderBackend, C: CameraControls>(
        &mut self,
        elapsed: f32,
        context: &mut SceneContext<B, C>,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<(), RenderError> {
        for object in context.scene.objects_mut() {
            object.animate(elapsed);
        }

        context.controls.update(&mut context.camera);
        context.backend.render(&context.scene, &context.camera)?;

        {
            let mut material = context.scene.material().borrow_mut();
            if material.needs_update {
                log::debug!("Material rebuilt on frame {}", self.ticks);
                material.needs_update = false;
            }
        }

        self.ticks += 1;
        log::trace!("Tick {} at {:.3}s", self.ticks, elapsed);
        scheduler.request_frame();
        Ok(())
    }
}
