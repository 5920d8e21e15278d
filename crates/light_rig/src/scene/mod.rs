//! Scene management
//!
//! The scene graph holds what is drawn; the context bundles it with the
//! camera, renderer and controls.

pub mod objects;
pub mod scene_graph;
pub mod context;

pub use context::SceneContext;
pub use objects::{standard_objects, AxesHelper, Primitive, SceneObject, PRIMITIVE_SPIN};
pub use scene_graph::{LightId, Scene};
