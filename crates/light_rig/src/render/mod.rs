//! Rendering collaborators
//!
//! Lights, the shared material, textures and the camera are plain data that
//! the rig configures; drawing them is delegated to a [`RenderBackend`].

pub mod lighting;
pub mod material;
pub mod texture_manager;
pub mod camera;
pub mod viewport;
pub mod backend;

pub use backend::{FrameSnapshot, HeadlessBackend, LightSample, RenderBackend, RenderError};
pub use camera::{Camera, CameraControls, StaticControls};
pub use lighting::{Light, LightKind, LightParams};
pub use material::StandardMaterial;
pub use texture_manager::{ImageLoader, TextureData, TextureError, TextureHandle, TextureLoader, TextureManager};
pub use viewport::Viewport;
