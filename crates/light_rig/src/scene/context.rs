//! Scene context
//!
//! Everything a frame needs, owned in one place and passed explicitly to the
//! render loop.

use crate::foundation::{shared, Shared};
use crate::render::backend::RenderBackend;
use crate::render::camera::{Camera, CameraControls};
use crate::render::texture_manager::TextureManager;
use crate::render::viewport::Viewport;
use crate::scene::scene_graph::Scene;

/// Scene, camera, renderer and controls of one running rig
pub struct SceneContext<B: RenderBackend, C: CameraControls> {
    /// Lights, primitives, material and axes helper
    pub scene: Scene,
    /// Viewing camera
    pub camera: Camera,
    /// Renderer
    pub backend: B,
    /// Camera controls
    pub controls: C,
    /// Texture owner shared with the binder
    pub textures: Shared<TextureManager>,
    viewport: Viewport,
}

impl<B: RenderBackend, C: CameraControls> SceneContext<B, C> {
    /// Assemble a context and size the renderer to `viewport`
    pub fn new(
        scene: Scene,
        camera: Camera,
        backend: B,
        controls: C,
        textures: TextureManager,
        viewport: Viewport,
    ) -> Self {
        let mut context = Self {
            scene,
            camera,
            backend,
            controls,
            textures: shared(textures),
            viewport,
        };
        context.resize(viewport);
        context
    }

    /// Current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply a new viewport to the camera and the renderer
    ///
    /// An empty viewport leaves the camera aspect untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !viewport.is_empty() {
            self.camera.set_aspect_ratio(viewport.aspect());
        }
        self.backend.set_size(viewport.width, viewport.height);
        self.backend.set_pixel_ratio(viewport.render_pixel_ratio());
        log::debug!(
            "Viewport {}x{} @ {:.2} (renderer ratio {:.2})",
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio,
            viewport.render_pixel_ratio()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::backend::HeadlessBackend;
    use crate::render::camera::StaticControls;
    use crate::render::texture_manager::test_support::MemoryLoader;
    use approx::assert_relative_eq;

    fn context() -> SceneContext<HeadlessBackend, StaticControls> {
        SceneContext::new(
            Scene::with_standard_objects(),
            Camera::perspective(Vec3::new(1.0, 1.0, 2.0), 75.0, 1.0, 0.1, 100.0),
            HeadlessBackend::new(),
            StaticControls,
            TextureManager::new(MemoryLoader),
            Viewport::new(800, 600, 1.0),
        )
    }

    #[test]
    fn test_new_sizes_renderer() {
        let context = context();
        assert_eq!(context.backend.size(), (800, 600));
        assert_relative_eq!(context.camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn test_resize_caps_pixel_ratio() {
        let mut context = context();
        context.resize(Viewport::new(1920, 1080, 3.0));

        assert_eq!(context.backend.size(), (1920, 1080));
        assert_eq!(context.backend.pixel_ratio(), 2.0);
        assert_relative_eq!(context.camera.aspect, 1920.0 / 1080.0);
        assert_eq!(context.viewport().device_pixel_ratio, 3.0);
    }

    #[test]
    fn test_minimized_window_keeps_camera_aspect() {
        let mut context = context();
        context.resize(Viewport::new(0, 600, 1.0));

        assert_eq!(context.backend.size(), (0, 600));
        assert_relative_eq!(context.camera.aspect, 800.0 / 600.0);

        context.resize(Viewport::new(1024, 512, 1.0));
        assert_relative_eq!(context.camera.aspect, 2.0);
    }
}
