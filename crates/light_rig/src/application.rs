//! Light lab assembly and lifecycle
//!
//! [`LightLab`] wires a [`RigConfig`] into a running scene: it registers the
//! lights, configures the shared material and the axes helper, binds every
//! descriptor to the host's debug panel and drives frames.

use thiserror::Error;

use crate::config::{ConfigError, RigConfig};
use crate::error::RigError;
use crate::frame::{FrameLoop, FrameScheduler, RenderLoop};
use crate::render::backend::{RenderBackend, RenderError};
use crate::render::camera::CameraControls;
use crate::render::texture_manager::TextureManager;
use crate::render::viewport::Viewport;
use crate::rig::material::{apply_defaults, configure_material};
use crate::rig::registry::LightRegistry;
use crate::scene::context::SceneContext;
use crate::scene::scene_graph::Scene;
use crate::ui::{Binder, DebugUi, WidgetEvent};

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Rig setup or control error
    #[error("Rig error: {0}")]
    Rig(#[from] RigError),

    /// Draw error propagated from the backend
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Rig file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// A running light rig
pub struct LightLab<B: RenderBackend, C: CameraControls> {
    context: SceneContext<B, C>,
    registry: LightRegistry,
    binder: Binder,
    render_loop: RenderLoop,
    issues: Vec<RigError>,
}

impl<B: RenderBackend, C: CameraControls> LightLab<B, C> {
    /// Build the scene described by `config` and bind its controls on `ui`
    ///
    /// Bad lights, parameters or textures are logged, collected in
    /// [`LightLab::issues`] and skipped; the rest of the rig still comes up.
    pub fn build(
        config: &RigConfig,
        backend: B,
        controls: C,
        textures: TextureManager,
        ui: &mut dyn DebugUi,
    ) -> Self {
        let viewport = config.viewport.to_viewport();
        let camera = config.camera.to_camera(viewport.aspect());
        let mut context = SceneContext::new(
            Scene::with_standard_objects(),
            camera,
            backend,
            controls,
            textures,
            viewport,
        );

        let mut registry = LightRegistry::new();
        let mut issues = registry.register_all(config.lights.iter().cloned(), &mut context.scene);

        {
            let mut textures = context.textures.borrow_mut();
            let mut material = context.scene.material().borrow_mut();
            if let Err(err) = configure_material(&config.material, &mut *material, &mut textures) {
                log::error!("Material setup incomplete: {}", err);
                issues.push(err);
            }
            let mut axes = context.scene.axes().borrow_mut();
            if let Err(err) = apply_defaults(&config.axes.name, &mut *axes, &config.axes.parameters, &mut textures) {
                log::error!("Axes helper setup incomplete: {}", err);
                issues.push(err);
            }
        }

        let mut binder = Binder::new(context.textures.clone());
        let mut record = |result: Result<Vec<_>, RigError>| {
            if let Err(err) = result {
                log::error!("Control skipped: {}", err);
                issues.push(err);
            }
        };
        for (descriptor, instance) in registry.all() {
            record(binder.bind(instance.light(), &descriptor.name, &descriptor.parameters, ui));
        }
        record(binder.bind(context.scene.material(), &config.material.name, &config.material.parameters, ui));
        record(binder.bind(context.scene.axes(), &config.axes.name, &config.axes.parameters, ui));

        log::info!(
            "Light lab ready: {} lights, {} controls, {} issues",
            registry.len(),
            binder.len(),
            issues.len()
        );

        Self {
            context,
            registry,
            binder,
            render_loop: RenderLoop::new(),
            issues,
        }
    }

    /// Apply a widget edit from the panel
    pub fn handle_event(&mut self, event: WidgetEvent) -> Result<(), AppError> {
        self.binder.on_change(event)?;
        Ok(())
    }

    /// React to a window resize
    pub fn resize(&mut self, viewport: Viewport) {
        self.context.resize(viewport);
    }

    /// Draw one frame for `elapsed` seconds since start
    pub fn frame(&mut self, elapsed: f32, scheduler: &mut dyn FrameScheduler) -> Result<(), AppError> {
        self.render_loop.tick(elapsed, &mut self.context, scheduler)?;
        Ok(())
    }

    /// Run one frame of `frame_loop` if one is due
    pub fn step(&mut self, frame_loop: &mut FrameLoop) -> Result<bool, AppError> {
        Ok(frame_loop.step(&mut self.render_loop, &mut self.context)?)
    }

    /// Run `frame_loop` until it stops; returns the number of frames drawn
    pub fn run(&mut self, frame_loop: &mut FrameLoop) -> Result<u64, AppError> {
        Ok(frame_loop.run(&mut self.render_loop, &mut self.context)?)
    }

    /// Scene, camera and renderer
    pub fn context(&self) -> &SceneContext<B, C> {
        &self.context
    }

    /// Mutable scene, camera and renderer
    pub fn context_mut(&mut self) -> &mut SceneContext<B, C> {
        &mut self.context
    }

    /// Registered lights
    pub fn registry(&self) -> &LightRegistry {
        &self.registry
    }

    /// Bound controls
    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    /// Problems found while building the rig
    pub fn issues(&self) -> &[RigError] {
        &self.issues
    }

    /// Tear the rig down: unbind controls, release the texture, detach lights
    pub fn shutdown(&mut self) {
        self.binder.teardown();
        if let Some(map) = self.context.scene.material().borrow_mut().map.take() {
            self.context.textures.borrow_mut().release(map);
        }
        self.registry.clear(&mut self.context.scene);
        log::info!("Light lab shut down");
    }
}
