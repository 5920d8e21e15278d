//! Control bindings
//!
//! A binding ties one descriptor parameter to its widget(s) and to one field
//! of a target object. Writing through a binding mutates the target at once.

use std::fmt;
use std::path::PathBuf;

use crate::error::{RigError, RigResult};
use crate::foundation::{Color, Shared};
use crate::render::texture_manager::TextureManager;
use crate::rig::descriptor::ScalarRange;
use crate::rig::tunable::{FieldMut, Tunable};

use super::control::{FolderId, WidgetId, WidgetValue};

/// Identifier of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(pub u64);

/// How widget values reach the target field
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Color picker backed by its own holder
    ///
    /// The picker shows the holder, never the live field. Edits update the
    /// holder and are then copied into the live color with [`Color::set`].
    Color {
        /// Value shown by the picker
        holder: Color,
    },
    /// Slider clamped to `range`
    Scalar {
        /// Slider bounds
        range: ScalarRange,
    },
    /// Three sliders, one per component, clamped to `range`
    Vector3 {
        /// Slider bounds
        range: ScalarRange,
    },
    /// Checkbox writing a boolean
    Toggle,
    /// Checkbox that loads or releases a texture
    Texture {
        /// Image loaded on enable
        path: PathBuf,
    },
}

/// Live wiring between one parameter, its widget(s) and one target field
pub struct ControlBinding {
    id: BindingId,
    label: String,
    field: String,
    folder: FolderId,
    widgets: Vec<WidgetId>,
    control: Control,
    target_name: &'static str,
    target: Shared<dyn Tunable>,
}

impl fmt::Debug for ControlBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlBinding")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("target", &self.target_name)
            .field("field", &self.field)
            .field("widgets", &self.widgets)
            .field("control", &self.control)
            .finish_non_exhaustive()
    }
}

pub(crate) fn invalid_binding(target: &str, field: &str, reason: impl Into<String>) -> RigError {
    RigError::InvalidBinding {
        target: target.to_string(),
        field: field.to_string(),
        reason: reason.into(),
    }
}

impl ControlBinding {
    pub(crate) fn new(
        id: BindingId,
        label: String,
        field: String,
        folder: FolderId,
        widgets: Vec<WidgetId>,
        control: Control,
        target_name: &'static str,
        target: Shared<dyn Tunable>,
    ) -> Self {
        Self { id, label, field, folder, widgets, control, target_name, target }
    }

    /// Binding id
    pub fn id(&self) -> BindingId {
        self.id
    }

    /// Control label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Target field name
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Target type name
    pub fn target_name(&self) -> &'static str {
        self.target_name
    }

    /// Folder holding the widgets
    pub fn folder(&self) -> FolderId {
        self.folder
    }

    /// Widgets in component order
    pub fn widgets(&self) -> &[WidgetId] {
        &self.widgets
    }

    /// How values are applied
    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Apply a widget value to the target
    ///
    /// `component` selects x/y/z for vector controls and is ignored otherwise.
    pub(crate) fn write(
        &mut self,
        component: usize,
        value: WidgetValue,
        textures: &Shared<TextureManager>,
    ) -> RigResult<()> {
        let target = self.target.clone();
        let mut target = target.borrow_mut();
        let Some(field) = target.field_mut(&self.field) else {
            return Err(invalid_binding(self.target_name, &self.field, "field disappeared from target"));
        };

        let mut resource_changed = false;
        let mut loaded = Ok(());
        match (&mut self.control, field, value) {
            (Control::Scalar { range }, FieldMut::Scalar(slot), WidgetValue::Scalar(v)) => {
                *slot = range.clamp(v);
            }
            (Control::Vector3 { range }, FieldMut::Vector3(slot), WidgetValue::Scalar(v)) => {
                if component > 2 {
                    return Err(invalid_binding(
                        self.target_name,
                        &self.field,
                        format!("vector component {component} out of range"),
                    ));
                }
                slot[component] = range.clamp(v);
            }
            (Control::Color { holder }, FieldMut::Color(slot), WidgetValue::Color(color)) => {
                *holder = color;
                slot.set(color);
            }
            (Control::Toggle, FieldMut::Toggle(slot), WidgetValue::Toggle(on)) => {
                *slot = on;
            }
            (Control::Texture { path }, FieldMut::Texture(slot), WidgetValue::Toggle(on)) => {
                let mut textures = textures.borrow_mut();
                if let Some(previous) = slot.take() {
                    textures.release(previous);
                }
                if on {
                    loaded = textures.acquire(path.as_path()).map(|handle| *slot = Some(handle));
                }
                resource_changed = true;
            }
            (_, _, value) => {
                return Err(invalid_binding(
                    self.target_name,
                    &self.field,
                    format!("widget value {value:?} does not fit the control"),
                ));
            }
        }

        // The slot may already be empty when the load fails.
        if resource_changed {
            target.mark_updated();
        }
        loaded?;
        log::trace!("{}.{} <- {:?}", self.target_name, self.field, value);
        Ok(())
    }
}
