//! Live parameter binder
//!
//! One routine wires any descriptor to any [`Tunable`] target: lights, the
//! material and the axes helper all go through [`Binder::bind`]. Bindings are
//! stored as they are created, so a failing parameter leaves the earlier
//! ones of the same call working.

use std::collections::HashMap;

use crate::error::{RigError, RigResult};
use crate::foundation::Shared;
use crate::render::texture_manager::TextureManager;
use crate::rig::descriptor::{ParameterKind, ParameterSpec, ScalarRange};
use crate::rig::tunable::{FieldValue, Tunable};

use super::binding::{invalid_binding, BindingId, Control, ControlBinding};
use super::control::{ControlSpec, DebugUi, FolderId, WidgetEvent, WidgetId, WidgetValue};

/// Labels of the per-component sliders of a vector control
const AXIS_LABELS: [&str; 3] = ["x", "y", "z"];

/// Owns every control binding and routes widget edits to them
///
/// Widget ids are only unique within one panel, so a binder serves a single
/// [`DebugUi`]. Binding a widget id that is already routed is rejected.
pub struct Binder {
    textures: Shared<TextureManager>,
    bindings: Vec<ControlBinding>,
    /// Widget -> (binding index, vector component)
    widgets: HashMap<WidgetId, (usize, usize)>,
    next_id: u64,
}

impl Binder {
    /// Create a binder; texture toggles load through `textures`
    pub fn new(textures: Shared<TextureManager>) -> Self {
        Self {
            textures,
            bindings: Vec::new(),
            widgets: HashMap::new(),
            next_id: 0,
        }
    }

    /// Add a folder titled `title` and one control per parameter
    ///
    /// Fails with [`RigError::InvalidBinding`] on the first parameter whose
    /// field is missing on `target` or has a different kind. Controls created
    /// before the failure stay bound.
    pub fn bind<T: Tunable + 'static>(
        &mut self,
        target: &Shared<T>,
        title: &str,
        parameters: &[ParameterSpec],
        ui: &mut dyn DebugUi,
    ) -> RigResult<Vec<BindingId>> {
        let target: Shared<dyn Tunable> = target.clone();
        self.bind_dyn(&target, title, parameters, ui)
    }

    /// [`Binder::bind`] for an already type-erased target
    pub fn bind_dyn(
        &mut self,
        target: &Shared<dyn Tunable>,
        title: &str,
        parameters: &[ParameterSpec],
        ui: &mut dyn DebugUi,
    ) -> RigResult<Vec<BindingId>> {
        let folder = ui.add_folder(title);
        let mut created = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            created.push(self.bind_parameter(target, folder, parameter, ui)?);
        }
        log::debug!("Bound {} controls in folder {:?}", created.len(), title);
        Ok(created)
    }

    fn bind_parameter(
        &mut self,
        target: &Shared<dyn Tunable>,
        folder: FolderId,
        parameter: &ParameterSpec,
        ui: &mut dyn DebugUi,
    ) -> RigResult<BindingId> {
        let (target_name, current) = {
            let mut object = target.borrow_mut();
            let target_name = object.type_name();
            let current = object
                .field_mut(&parameter.name)
                .map(|field| field.get())
                .ok_or_else(|| invalid_binding(target_name, &parameter.name, "no such field"))?;
            (target_name, current)
        };

        let label = parameter.display_label();
        let slider = |value: f32, range: &ScalarRange, label: &str| {
            ControlSpec::slider(value)
                .min(range.min)
                .max(range.max)
                .step(range.step)
                .name(label)
        };

        let (control, widgets) = match (&parameter.kind, current) {
            (ParameterKind::Color { default }, FieldValue::Color(_)) => {
                let widget = ui.add_control(folder, ControlSpec::color(*default).name(label));
                (Control::Color { holder: *default }, vec![widget])
            }
            (ParameterKind::Scalar { range, .. }, FieldValue::Scalar(value)) => {
                let widget = ui.add_control(folder, slider(value, range, label));
                (Control::Scalar { range: *range }, vec![widget])
            }
            (ParameterKind::Vector3 { range, .. }, FieldValue::Vector3(value)) => {
                let widgets = AXIS_LABELS
                    .iter()
                    .enumerate()
                    .map(|(axis, name)| ui.add_control(folder, slider(value[axis], range, *name)))
                    .collect();
                (Control::Vector3 { range: *range }, widgets)
            }
            (ParameterKind::Toggle { .. }, FieldValue::Toggle(value)) => {
                let widget = ui.add_control(folder, ControlSpec::checkbox(value).name(label));
                (Control::Toggle, vec![widget])
            }
            (ParameterKind::Texture { path, .. }, FieldValue::Texture(enabled)) => {
                let widget = ui.add_control(folder, ControlSpec::checkbox(enabled).name(label));
                (Control::Texture { path: path.clone() }, vec![widget])
            }
            (kind, current) => {
                return Err(invalid_binding(
                    target_name,
                    &parameter.name,
                    format!("{:?} parameter cannot drive a field holding {current:?}", kind.field_kind()),
                ));
            }
        };

        if let Some(widget) = widgets.iter().find(|w| self.widgets.contains_key(*w)) {
            return Err(invalid_binding(
                target_name,
                &parameter.name,
                format!("{widget} is already routed; bind each panel with its own binder"),
            ));
        }

        let id = BindingId(self.next_id);
        self.next_id += 1;

        let index = self.bindings.len();
        for (component, widget) in widgets.iter().enumerate() {
            self.widgets.insert(*widget, (index, component));
        }
        self.bindings.push(ControlBinding::new(
            id,
            label.to_string(),
            parameter.name.clone(),
            folder,
            widgets,
            control,
            target_name,
            target.clone(),
        ));
        Ok(id)
    }

    /// Route a widget edit to its binding and write the target
    pub fn on_change(&mut self, event: WidgetEvent) -> RigResult<()> {
        let (index, component) = *self
            .widgets
            .get(&event.widget)
            .ok_or(RigError::UnknownWidget(event.widget))?;
        self.bindings[index].write(component, event.value, &self.textures)
    }

    /// Write through a binding without going through a panel
    pub fn drive(&mut self, id: BindingId, component: usize, value: WidgetValue) -> RigResult<()> {
        let binding = self
            .bindings
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or_else(|| invalid_binding("Binder", &format!("{id:?}"), "no such binding"))?;
        binding.write(component, value, &self.textures)
    }

    /// Every live binding in creation order
    pub fn bindings(&self) -> &[ControlBinding] {
        &self.bindings
    }

    /// Binding by id
    pub fn binding(&self, id: BindingId) -> Option<&ControlBinding> {
        self.bindings.iter().find(|b| b.id() == id)
    }

    /// Binding that owns `widget`
    pub fn binding_for_widget(&self, widget: WidgetId) -> Option<&ControlBinding> {
        self.widgets.get(&widget).map(|(index, _)| &self.bindings[*index])
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every binding; there is no partial unbind
    pub fn teardown(&mut self) {
        log::debug!("Tearing down {} bindings", self.bindings.len());
        self.bindings.clear();
        self.widgets.clear();
    }
}
