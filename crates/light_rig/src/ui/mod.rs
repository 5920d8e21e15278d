//! Debug UI wiring
//!
//! [`DebugUi`] is the panel a host provides, [`DebugPanel`] is an in-memory
//! panel, and the [`Binder`] turns descriptor parameters into controls that
//! edit live objects.

pub mod control;
pub mod panel;
pub mod binding;
pub mod binder;

pub use binder::Binder;
pub use binding::{BindingId, Control, ControlBinding};
pub use control::{ControlSpec, DebugUi, FolderId, WidgetEvent, WidgetId, WidgetKind, WidgetValue};
pub use panel::DebugPanel;
