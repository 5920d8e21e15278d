//! Frame driving

pub mod driver;
pub mod scheduler;

pub use driver::RenderLoop;
pub use scheduler::{FrameLoop, FrameScheduler};
