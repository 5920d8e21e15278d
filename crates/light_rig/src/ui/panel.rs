//! In-memory debug panel
//!
//! Keeps folders and widgets in plain collections. Hosts without a real GUI
//! (the headless demo, tests) use it to simulate user edits: [`DebugPanel::set_value`]
//! stores the new value and returns the event a real panel would emit.

use std::collections::HashMap;
use std::fmt::Write as _;

use super::control::{ControlSpec, DebugUi, FolderId, WidgetEvent, WidgetId, WidgetKind, WidgetValue};

/// Folder on the panel
#[derive(Debug, Clone)]
struct Folder {
    title: String,
    widgets: Vec<WidgetId>,
}

/// Widget on the panel
#[derive(Debug, Clone)]
struct Widget {
    spec: ControlSpec,
    value: WidgetValue,
}

/// Panel that lives entirely in memory
#[derive(Debug, Default)]
pub struct DebugPanel {
    /// Folders in creation order
    folders: Vec<Folder>,

    /// Widgets by ID
    widgets: HashMap<WidgetId, Widget>,

    /// Next widget ID
    next_id: u32,
}

impl DebugPanel {
    /// Create an empty panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a user edit
    ///
    /// Returns `None` if the widget does not exist or the value does not fit
    /// the widget (a color sent to a slider, for instance).
    pub fn set_value(&mut self, widget: WidgetId, value: WidgetValue) -> Option<WidgetEvent> {
        let entry = self.widgets.get_mut(&widget)?;
        let fits = matches!(
            (entry.spec.kind(), value),
            (WidgetKind::Slider { .. }, WidgetValue::Scalar(_))
                | (WidgetKind::ColorPicker, WidgetValue::Color(_))
                | (WidgetKind::Checkbox, WidgetValue::Toggle(_))
        );
        if !fits {
            log::warn!("{} rejected value {:?}", widget, value);
            return None;
        }
        entry.value = value;
        Some(WidgetEvent { widget, value })
    }

    /// Find a widget by folder title and control label
    pub fn find(&self, folder: &str, label: &str) -> Option<WidgetId> {
        self.folders
            .iter()
            .filter(|f| f.title == folder)
            .flat_map(|f| f.widgets.iter())
            .copied()
            .find(|id| self.widgets.get(id).is_some_and(|w| w.spec.label() == label))
    }

    /// Current value of a widget
    pub fn value(&self, widget: WidgetId) -> Option<WidgetValue> {
        self.widgets.get(&widget).map(|w| w.value)
    }

    /// Widget description
    pub fn spec(&self, widget: WidgetId) -> Option<&ControlSpec> {
        self.widgets.get(&widget).map(|w| &w.spec)
    }

    /// Folder titles in creation order
    pub fn folder_titles(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(|f| f.title.as_str())
    }

    /// Widgets in a folder, in creation order
    pub fn folder_widgets(&self, folder: FolderId) -> &[WidgetId] {
        self.folders
            .get(folder.0 as usize)
            .map_or(&[][..], |f| f.widgets.as_slice())
    }

    /// Total number of widgets
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Remove every folder and widget
    pub fn clear(&mut self) {
        self.folders.clear();
        self.widgets.clear();
    }

    /// Multi-line listing of folders and their controls
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for folder in &self.folders {
            let _ = writeln!(out, "[{}]", folder.title);
            for id in &folder.widgets {
                if let Some(widget) = self.widgets.get(id) {
                    let _ = writeln!(out, "  {} = {}", widget.spec.label(), format_value(widget.value));
                }
            }
        }
        out
    }
}

fn format_value(value: WidgetValue) -> String {
    match value {
        WidgetValue::Scalar(v) => format!("{v:.3}"),
        WidgetValue::Color(c) => c.hex_string(),
        WidgetValue::Toggle(b) => b.to_string(),
    }
}

impl DebugUi for DebugPanel {
    fn add_folder(&mut self, title: &str) -> FolderId {
        let id = FolderId(self.folders.len() as u32);
        self.folders.push(Folder { title: title.to_string(), widgets: Vec::new() });
        id
    }

    fn add_control(&mut self, folder: FolderId, spec: ControlSpec) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;

        let value = spec.initial();
        self.widgets.insert(id, Widget { spec, value });
        if let Some(folder) = self.folders.get_mut(folder.0 as usize) {
            folder.widgets.push(id);
        }
        id
    }
}
