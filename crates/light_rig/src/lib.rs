//! # Light Rig
//!
//! Declarative light configuration and live tuning for real-time 3D scenes.
//!
//! ## Features
//!
//! - **Light Rig Registry**: lights declared as data, validated and built in one place
//! - **Live Parameter Binder**: one routine turns any descriptor into debug-panel controls
//! - **Render Loop Driver**: a frame tick that reads the scene as it is at draw time
//! - **Rig Files**: whole scenes in RON or TOML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use light_rig::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = RigConfig::default();
//!     let mut panel = DebugPanel::new();
//!     let mut lab = LightLab::build(
//!         &config,
//!         HeadlessBackend::new(),
//!         StaticControls,
//!         TextureManager::default(),
//!         &mut panel,
//!     );
//!
//!     let mut frames = FrameLoop::new(Clock::new()).with_frame_limit(60);
//!     lab.run(&mut frames)?;
//!     lab.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod foundation;
pub mod config;
pub mod render;
pub mod scene;
pub mod rig;
pub mod ui;
pub mod frame;

mod application;
mod error;

#[cfg(test)]
mod tests;

pub use application::{AppError, LightLab};
pub use error::{RigError, RigResult};

/// Common imports for rig users
pub mod prelude {
    pub use crate::{
        AppError, LightLab, RigError, RigResult,
        config::{Config, RigConfig},
        foundation::{shared, time::Clock, Color, Shared},
        frame::{FrameLoop, FrameScheduler, RenderLoop},
        render::{Camera, CameraControls, HeadlessBackend, Light, LightKind, RenderBackend, StaticControls, TextureManager, Viewport},
        rig::{LightDescriptor, LightRegistry, MaterialDescriptor, ParameterSpec, ScalarRange, Tunable},
        scene::{Scene, SceneContext},
        ui::{Binder, ControlSpec, DebugPanel, DebugUi, WidgetEvent, WidgetValue},
    };
}
