//! Declarative light rig
//!
//! Descriptors declare what can be tuned; the registry builds lights from
//! them and [`material`] applies the material and helper defaults.

pub mod tunable;
pub mod descriptor;
pub mod registry;
pub mod material;
pub mod presets;

pub use descriptor::{LightDescriptor, MaterialDescriptor, ParameterKind, ParameterSpec, Placement, ScalarRange};
pub use material::{apply_defaults, configure_material};
pub use registry::{LightInstance, LightRegistry};
pub use tunable::{FieldKind, FieldMut, FieldValue, Tunable};
