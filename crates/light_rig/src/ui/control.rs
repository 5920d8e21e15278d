//! Debug UI collaborator interface
//!
//! The panel is owned by the host. The rig only adds folders and controls and
//! receives [`WidgetEvent`]s back when the user edits something; there are no
//! callbacks, so bindings stay explicit records that tests can drive.

use std::fmt;

use crate::foundation::Color;

/// Identifier of a folder on a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId(pub u32);

/// Identifier of a widget on a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u32);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Value carried by a widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetValue {
    /// Slider position
    Scalar(f32),
    /// Picked color
    Color(Color),
    /// Checkbox state
    Toggle(bool),
}

/// A user edit reported by the panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetEvent {
    /// Edited widget
    pub widget: WidgetId,
    /// New value
    pub value: WidgetValue,
}

/// Widget flavor and its constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetKind {
    /// Numeric slider
    Slider {
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
        /// Increment
        step: f32,
    },
    /// Color picker
    ColorPicker,
    /// Checkbox
    Checkbox,
}

/// Description of one control, built with chained setters
///
/// ```
/// use light_rig::ui::ControlSpec;
///
/// let spec = ControlSpec::slider(0.5).min(0.0).max(1.0).step(0.001).name("intensity");
/// assert_eq!(spec.label(), "intensity");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    label: String,
    kind: WidgetKind,
    initial: WidgetValue,
}

impl ControlSpec {
    /// Slider starting at `value`, unbounded until `min`/`max` are set
    pub fn slider(value: f32) -> Self {
        Self {
            label: String::new(),
            kind: WidgetKind::Slider { min: f32::MIN, max: f32::MAX, step: 0.0 },
            initial: WidgetValue::Scalar(value),
        }
    }

    /// Color picker starting at `value`
    pub fn color(value: Color) -> Self {
        Self {
            label: String::new(),
            kind: WidgetKind::ColorPicker,
            initial: WidgetValue::Color(value),
        }
    }

    /// Checkbox starting at `value`
    pub fn checkbox(value: bool) -> Self {
        Self {
            label: String::new(),
            kind: WidgetKind::Checkbox,
            initial: WidgetValue::Toggle(value),
        }
    }

    /// Slider lower bound
    pub fn min(mut self, min: f32) -> Self {
        if let WidgetKind::Slider { min: bound, .. } = &mut self.kind {
            *bound = min;
        }
        self
    }

    /// Slider upper bound
    pub fn max(mut self, max: f32) -> Self {
        if let WidgetKind::Slider { max: bound, .. } = &mut self.kind {
            *bound = max;
        }
        self
    }

    /// Slider increment
    pub fn step(mut self, step: f32) -> Self {
        if let WidgetKind::Slider { step: increment, .. } = &mut self.kind {
            *increment = step;
        }
        self
    }

    /// Control label
    pub fn name(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Control label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Widget flavor
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Value shown when the widget is created
    pub fn initial(&self) -> WidgetValue {
        self.initial
    }
}

/// A debug panel that can host folders of controls
pub trait DebugUi {
    /// Add a folder to the panel
    fn add_folder(&mut self, title: &str) -> FolderId;

    /// Add a control to `folder`
    fn add_control(&mut self, folder: FolderId, spec: ControlSpec) -> WidgetId;
}
