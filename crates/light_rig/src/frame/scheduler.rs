//! Frame scheduling
//!
//! The render loop asks for the next frame after every successful draw. The
//! host decides when (or whether) that frame runs; [`FrameLoop`] is the
//! host-side loop used by the demo and the tests.

use crate::foundation::time::Clock;
use crate::frame::driver::RenderLoop;
use crate::render::backend::{RenderBackend, RenderError};
use crate::render::camera::CameraControls;
use crate::scene::context::SceneContext;

/// Host hook that runs the next frame
pub trait FrameScheduler {
    /// Ask for one more frame
    fn request_frame(&mut self);
}

/// Runs frames for as long as they are requested
#[derive(Debug)]
pub struct FrameLoop {
    clock: Clock,
    pending: bool,
    running: bool,
    frames: u64,
    max_frames: Option<u64>,
}

impl FrameLoop {
    /// Create a loop timed by `clock`
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            pending: true,
            running: true,
            frames: 0,
            max_frames: None,
        }
    }

    /// Stop after `frames` frames (builder)
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether the loop will run another frame
    pub fn is_running(&self) -> bool {
        self.running && self.pending && self.max_frames.map_or(true, |max| self.frames < max)
    }

    /// Stop the loop; no frame runs after this
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Frame loop stopped after {} frames", self.frames);
        }
        self.running = false;
        self.pending = false;
    }

    /// Run one frame if one is due
    ///
    /// Returns `Ok(false)` when the loop is stopped, no frame was requested
    /// or the frame limit is reached. A draw error stops the loop and is
    /// returned to the caller.
    pub fn step<B: RenderBackend, C: CameraControls>(
        &mut self,
        render_loop: &mut RenderLoop,
        context: &mut SceneContext<B, C>,
    ) -> Result<bool, RenderError> {
        if !self.is_running() {
            return Ok(false);
        }

        self.pending = false;
        let elapsed = self.clock.elapsed_secs();
        if let Err(err) = render_loop.tick(elapsed, context, self) {
            log::error!("Frame {} failed: {}", self.frames, err);
            self.stop();
            return Err(err);
        }
        self.frames += 1;
        Ok(true)
    }

    /// Run frames until the loop stops; returns the number of frames run
    pub fn run<B: RenderBackend, C: CameraControls>(
        &mut self,
        render_loop: &mut RenderLoop,
        context: &mut SceneContext<B, C>,
    ) -> Result<u64, RenderError> {
        let start = self.frames;
        while self.step(render_loop, context)? {}
        Ok(self.frames - start)
    }
}

impl FrameScheduler for FrameLoop {
    fn request_frame(&mut self) {
        if self.running {
            self.pending = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::backend::HeadlessBackend;
    use crate::render::camera::{Camera, StaticControls};
    use crate::render::texture_manager::test_support::MemoryLoader;
    use crate::render::texture_manager::TextureManager;
    use crate::render::viewport::Viewport;
    use crate::scene::scene_graph::Scene;

    fn context() -> SceneContext<HeadlessBackend, StaticControls> {
        SceneContext::new(
            Scene::with_standard_objects(),
            Camera::perspective(Vec3::new(1.0, 1.0, 2.0), 75.0, 1.0, 0.1, 100.0),
            HeadlessBackend::new(),
            StaticControls,
            TextureManager::new(MemoryLoader),
            Viewport::default(),
        )
    }

    #[test]
    fn test_run_honors_frame_limit() {
        let mut context = context();
        let mut frame_loop = FrameLoop::new(Clock::fixed_step(1.0 / 60.0)).with_frame_limit(5);

        let frames = frame_loop.run(&mut RenderLoop::new(), &mut context).unwrap();

        assert_eq!(frames, 5);
        assert_eq!(context.backend.frames_drawn(), 5);
    }

    #[test]
    fn test_stop_prevents_further_frames() {
        let mut context = context();
        let mut render_loop = RenderLoop::new();
        let mut frame_loop = FrameLoop::new(Clock::fixed_step(0.5));

        assert!(frame_loop.step(&mut render_loop, &mut context).unwrap());
        frame_loop.stop();
        assert!(!frame_loop.step(&mut render_loop, &mut context).unwrap());
        frame_loop.request_frame();
        assert!(!frame_loop.is_running());
        assert_eq!(context.backend.frames_drawn(), 1);
    }

    #[test]
    fn test_draw_error_stops_loop() {
        let mut context = context();
        context.backend.fail_next_frame(RenderError::SurfaceLost);
        let mut frame_loop = FrameLoop::new(Clock::fixed_step(0.5)).with_frame_limit(10);

        let err = frame_loop.run(&mut RenderLoop::new(), &mut context).unwrap_err();

        assert_eq!(err, RenderError::SurfaceLost);
        assert!(!frame_loop.is_running());
        assert_eq!(frame_loop.frames(), 0);
    }
}
