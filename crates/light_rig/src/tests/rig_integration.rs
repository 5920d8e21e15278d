//! Registry and binder integration
//!
//! Lights built from descriptors, then edited through panel widgets.

use crate::foundation::{shared, Color};
use crate::render::lighting::{LightKind, LightParams};
use crate::render::material::StandardMaterial;
use crate::render::texture_manager::test_support::MemoryLoader;
use crate::render::texture_manager::TextureManager;
use crate::rig::descriptor::{LightDescriptor, ParameterKind, ParameterSpec, ScalarRange};
use crate::rig::presets;
use crate::rig::registry::LightRegistry;
use crate::rig::tunable::{FieldValue, Tunable};
use crate::scene::scene_graph::Scene;
use crate::ui::{Binder, DebugPanel, WidgetValue};
use crate::RigError;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn textures() -> crate::foundation::Shared<TextureManager> {
        shared(TextureManager::new(MemoryLoader))
    }

    #[test]
    fn test_registered_lights_match_declared_defaults() {
        let mut scene = Scene::new();
        let mut registry = LightRegistry::new();
        let failures = registry.register_all(presets::default_lights(), &mut scene);
        assert!(failures.is_empty());

        for (descriptor, instance) in registry.all() {
            let mut light = instance.light().borrow_mut();
            for parameter in &descriptor.parameters {
                let value = light.field_mut(&parameter.name).unwrap().get();
                match (&parameter.kind, value) {
                    (ParameterKind::Color { default }, FieldValue::Color(color)) => {
                        assert_eq!(color, *default, "{}.{}", descriptor.name, parameter.name);
                    }
                    (ParameterKind::Scalar { default, .. }, FieldValue::Scalar(value)) => {
                        assert_eq!(value, *default, "{}.{}", descriptor.name, parameter.name);
                    }
                    (ParameterKind::Vector3 { default, .. }, FieldValue::Vector3(value)) => {
                        assert_eq!([value.x, value.y, value.z], *default);
                    }
                    (kind, value) => panic!("unexpected pair {kind:?} / {value:?}"),
                }
            }
        }
    }

    #[test]
    fn test_point_intensity_end_to_end() {
        let mut scene = Scene::new();
        let mut registry = LightRegistry::new();
        let descriptor = LightDescriptor::new(LightKind::Point)
            .with(ParameterSpec::scalar("intensity", ScalarRange::new(0.0, 1.0, 0.001), 0.5));

        let instance = registry.register(descriptor.clone(), &mut scene).unwrap();
        assert_eq!(instance.light().borrow().intensity, 0.5);

        let mut panel = DebugPanel::new();
        let mut binder = Binder::new(textures());
        binder
            .bind(instance.light(), &descriptor.name, &descriptor.parameters, &mut panel)
            .unwrap();

        let widget = panel.find("Point Light", "intensity").unwrap();
        let event = panel.set_value(widget, WidgetValue::Scalar(0.9)).unwrap();
        binder.on_change(event).unwrap();

        assert_eq!(instance.light().borrow().intensity, 0.9);
    }

    #[test]
    fn test_scalar_values_inside_range_pass_through() {
        let mut scene = Scene::new();
        let mut registry = LightRegistry::new();
        let range = ScalarRange::new(0.0, 50.0, 0.1);
        let descriptor = LightDescriptor::new(LightKind::Spot).with(ParameterSpec::scalar("distance", range, 7.0));
        let instance = registry.register(descriptor.clone(), &mut scene).unwrap();

        let mut panel = DebugPanel::new();
        let mut binder = Binder::new(textures());
        binder.bind(instance.light(), "Spot Light", &descriptor.parameters, &mut panel).unwrap();
        let widget = panel.find("Spot Light", "distance").unwrap();

        for (input, expected) in [(0.0, 0.0), (12.34, 12.34), (50.0, 50.0), (73.0, 50.0), (-3.0, 0.0)] {
            binder.on_change(panel.set_value(widget, WidgetValue::Scalar(input)).unwrap()).unwrap();
            assert_relative_eq!(instance.light().borrow().distance().unwrap(), expected);
        }
    }

    #[test]
    fn test_color_edit_keeps_color_identity() {
        let mut scene = Scene::new();
        let mut registry = LightRegistry::new();
        let descriptor = LightDescriptor::new(LightKind::Directional)
            .with(ParameterSpec::color("color", 0xfff4e6));
        let instance = registry.register(descriptor.clone(), &mut scene).unwrap();

        let mut panel = DebugPanel::new();
        let mut binder = Binder::new(textures());
        binder.bind(instance.light(), "Directional Light", &descriptor.parameters, &mut panel).unwrap();

        let before = {
            let light = instance.light().borrow();
            &light.color as *const Color
        };
        let widget = panel.find("Directional Light", "color").unwrap();
        let sky = Color::parse("#87ceeb").unwrap();
        binder.on_change(panel.set_value(widget, WidgetValue::Color(sky)).unwrap()).unwrap();

        let light = instance.light().borrow();
        assert_eq!(light.color.hex_string(), "#87ceeb");
        assert!(std::ptr::eq(before, &light.color));
    }

    #[test]
    fn test_missing_penumbra_keeps_earlier_bindings() {
        let mut scene = Scene::new();
        let mut registry = LightRegistry::new();
        let point = registry
            .register(
                LightDescriptor::new(LightKind::Point)
                    .with(ParameterSpec::scalar("intensity", ScalarRange::new(0.0, 1.0, 0.001), 0.5)),
                &mut scene,
            )
            .unwrap();

        let mut panel = DebugPanel::new();
        let mut binder = Binder::new(textures());
        let err = binder
            .bind(
                point.light(),
                "Point Light",
                &[
                    ParameterSpec::scalar("intensity", ScalarRange::new(0.0, 1.0, 0.001), 0.5),
                    ParameterSpec::scalar("penumbra", ScalarRange::new(0.0, 1.0, 0.01), 0.25),
                ],
                &mut panel,
            )
            .unwrap_err();
        assert!(matches!(err, RigError::InvalidBinding { ref field, .. } if field == "penumbra"));
        assert_eq!(binder.len(), 1);

        let widget = panel.find("Point Light", "intensity").unwrap();
        binder.on_change(panel.set_value(widget, WidgetValue::Scalar(0.75)).unwrap()).unwrap();
        assert_eq!(point.light().borrow().intensity, 0.75);
    }

    #[test]
    fn test_texture_toggle_never_leaks() {
        let textures = textures();
        let material = shared(StandardMaterial::new());
        let mut panel = DebugPanel::new();
        let mut binder = Binder::new(textures.clone());
        binder
            .bind(
                &material,
                "Texture",
                &[ParameterSpec::texture("map", presets::DEFAULT_TEXTURE, false).labeled("Toggle Texture")],
                &mut panel,
            )
            .unwrap();
        let toggle = panel.find("Texture", "Toggle Texture").unwrap();

        for on in [true, false, true, false, true] {
            binder.on_change(panel.set_value(toggle, WidgetValue::Toggle(on)).unwrap()).unwrap();
        }

        assert_eq!(textures.borrow().live_count(), 1);
        assert_eq!(textures.borrow().total_loads(), 3);
        let map = material.borrow().map.unwrap();
        assert!(textures.borrow().is_live(map));
        assert!(material.borrow().needs_update);

        // Disabling twice releases once.
        binder.on_change(panel.set_value(toggle, WidgetValue::Toggle(false)).unwrap()).unwrap();
        binder.on_change(panel.set_value(toggle, WidgetValue::Toggle(false)).unwrap()).unwrap();
        assert_eq!(textures.borrow().live_count(), 0);
        assert!(material.borrow().map.is_none());
    }

    #[test]
    fn test_failed_texture_load_still_flags_update() {
        let textures = textures();
        let material = shared(StandardMaterial::new());
        let loaded = textures.borrow_mut().acquire("matcaps/3.png").unwrap();
        material.borrow_mut().map = Some(loaded);

        let mut panel = DebugPanel::new();
        let mut binder = Binder::new(textures.clone());
        binder
            .bind(&material, "Texture", &[ParameterSpec::texture("map", "missing.png", true)], &mut panel)
            .unwrap();
        let toggle = panel.find("Texture", "map").unwrap();

        let err = binder.on_change(panel.set_value(toggle, WidgetValue::Toggle(true)).unwrap()).unwrap_err();

        assert!(matches!(err, RigError::Texture(_)));
        assert!(material.borrow().map.is_none());
        assert!(material.borrow().needs_update);
        assert!(!textures.borrow().is_live(loaded));
        assert_eq!(textures.borrow().live_count(), 0);
    }

    #[test]
    fn test_hemisphere_ground_color() {
        let mut scene = Scene::new();
        let mut registry = LightRegistry::new();
        let hemisphere = presets::default_lights()
            .into_iter()
            .find(|d| d.kind == LightKind::Hemisphere)
            .unwrap();
        let instance = registry.register(hemisphere.clone(), &mut scene).unwrap();

        let mut panel = DebugPanel::new();
        let mut binder = Binder::new(textures());
        binder.bind(instance.light(), &hemisphere.name, &hemisphere.parameters, &mut panel).unwrap();

        assert!(panel.find("Hemisphere Light", "skyColor").is_some());
        let ground = panel.find("Hemisphere Light", "groundColor").unwrap();
        binder
            .on_change(panel.set_value(ground, WidgetValue::Color(Color::from_hex(0x102030))).unwrap())
            .unwrap();

        let light = instance.light().borrow();
        assert_eq!(light.color.hex(), 0x87ceeb);
        assert!(matches!(light.params, LightParams::Hemisphere { ground_color } if ground_color.hex() == 0x102030));
    }
}
