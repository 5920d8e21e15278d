//! Whole-rig tests: default config, panel edits and frames

use crate::config::RigConfig;
use crate::foundation::logging;
use crate::foundation::time::Clock;
use crate::frame::FrameLoop;
use crate::render::backend::HeadlessBackend;
use crate::render::camera::StaticControls;
use crate::render::lighting::LightKind;
use crate::render::texture_manager::test_support::MemoryLoader;
use crate::render::texture_manager::TextureManager;
use crate::render::viewport::Viewport;
use crate::rig::descriptor::{LightDescriptor, ParameterSpec, ScalarRange};
use crate::ui::{DebugPanel, WidgetValue};
use crate::{LightLab, RigError};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lab(config: &RigConfig, panel: &mut DebugPanel) -> LightLab<HeadlessBackend, StaticControls> {
        logging::init_for_tests();
        LightLab::build(
            config,
            HeadlessBackend::new(),
            StaticControls,
            TextureManager::new(MemoryLoader),
            panel,
        )
    }

    #[test]
    fn test_default_rig_comes_up_complete() {
        let mut panel = DebugPanel::new();
        let lab = lab(&RigConfig::default(), &mut panel);

        assert!(lab.issues().is_empty(), "{:?}", lab.issues());
        assert_eq!(lab.registry().len(), 6);
        assert_eq!(lab.binder().len(), 28);
        assert_eq!(panel.widget_count(), 34);

        let folders: Vec<&str> = panel.folder_titles().collect();
        assert_eq!(
            folders,
            vec![
                "Ambient Light",
                "Directional Light",
                "Hemisphere Light",
                "Point Light",
                "RectArea Light",
                "Spot Light",
                "Texture",
                "Axes Helper",
            ]
        );

        let material = lab.context().scene.material().borrow();
        assert_eq!(material.roughness, 0.4);
        assert_eq!(material.metalness, 0.7);
        assert!(material.map.is_some());
        assert_eq!(lab.context().textures.borrow().live_count(), 1);
        assert!(!lab.context().scene.axes().borrow().visible);
    }

    #[test]
    fn test_rect_area_light_aims_at_origin() {
        let mut panel = DebugPanel::new();
        let lab = lab(&RigConfig::default(), &mut panel);

        let (_, rect) = lab
            .registry()
            .all()
            .iter()
            .find(|(d, _)| d.kind == LightKind::RectArea)
            .unwrap();
        let light = rect.light().borrow();
        assert_relative_eq!(light.target.norm(), 0.0);
        assert_relative_eq!(light.direction().x, -1.0, epsilon = 0.1);
    }

    #[test]
    fn test_panel_edits_reach_next_frame() {
        let mut panel = DebugPanel::new();
        let mut lab = lab(&RigConfig::default(), &mut panel);
        let mut frames = FrameLoop::new(Clock::fixed_step(1.0 / 60.0));

        let intensity = panel.find("Point Light", "intensity").unwrap();
        lab.handle_event(panel.set_value(intensity, WidgetValue::Scalar(0.9)).unwrap()).unwrap();
        let axes = panel.find("Axes Helper", "Axes Helper Visible").unwrap();
        lab.handle_event(panel.set_value(axes, WidgetValue::Toggle(true)).unwrap()).unwrap();
        let wireframe = panel.find("Texture", "Material Wireframe").unwrap();
        lab.handle_event(panel.set_value(wireframe, WidgetValue::Toggle(true)).unwrap()).unwrap();

        assert!(lab.step(&mut frames).unwrap());

        let frame = lab.context().backend.last_frame().unwrap();
        let point = frame.lights.iter().find(|l| l.kind == LightKind::Point).unwrap();
        assert_eq!(point.intensity, 0.9);
        assert!(frame.axes_visible);
        assert!(frame.wireframe);
    }

    #[test]
    fn test_texture_toggle_through_panel() {
        let mut panel = DebugPanel::new();
        let mut lab = lab(&RigConfig::default(), &mut panel);
        let toggle = panel.find("Texture", "Toggle Texture").unwrap();

        for on in [false, true, false, true] {
            lab.handle_event(panel.set_value(toggle, WidgetValue::Toggle(on)).unwrap()).unwrap();
        }

        let textures = lab.context().textures.borrow();
        assert_eq!(textures.live_count(), 1);
        assert_eq!(textures.total_loads(), 3);
    }

    #[test]
    fn test_bad_light_is_skipped() {
        let mut config = RigConfig::default();
        config.lights.insert(
            1,
            LightDescriptor::new(LightKind::Ambient)
                .with(ParameterSpec::scalar("width", ScalarRange::new(0.0, 20.0, 0.1), 1.0)),
        );
        let mut panel = DebugPanel::new();
        let lab = lab(&config, &mut panel);

        assert_eq!(lab.issues().len(), 1);
        assert!(matches!(lab.issues()[0], RigError::InvalidDescriptor { .. }));
        assert_eq!(lab.registry().len(), 6);
    }

    #[test]
    fn test_missing_texture_is_reported() {
        let mut config = RigConfig::default();
        config.material.parameters[0] = ParameterSpec::texture("map", "missing.png", true);
        let mut panel = DebugPanel::new();
        let lab = lab(&config, &mut panel);

        assert!(matches!(lab.issues(), [RigError::Texture(_)]));
        assert!(lab.context().scene.material().borrow().map.is_none());
        assert_eq!(lab.binder().len(), 28);
    }

    #[test]
    fn test_resize_and_run() {
        let mut panel = DebugPanel::new();
        let mut lab = lab(&RigConfig::default(), &mut panel);
        lab.resize(Viewport::new(1280, 720, 2.5));

        let mut frames = FrameLoop::new(Clock::fixed_step(0.5)).with_frame_limit(4);
        assert_eq!(lab.run(&mut frames).unwrap(), 4);

        let backend = &lab.context().backend;
        assert_eq!(backend.size(), (1280, 720));
        assert_eq!(backend.pixel_ratio(), 2.0);
        let frame = backend.last_frame().unwrap();
        assert_relative_eq!(frame.aspect, 1280.0 / 720.0);
        // Fourth frame is sampled at 1.5s.
        assert_relative_eq!(frame.rotations[0].x, 0.15 * 1.5);
        assert_relative_eq!(frame.rotations[3].x, -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_minimized_window_keeps_drawing() {
        let mut panel = DebugPanel::new();
        let mut lab = lab(&RigConfig::default(), &mut panel);
        lab.resize(Viewport::new(0, 600, 1.0));

        let mut frames = FrameLoop::new(Clock::fixed_step(0.5)).with_frame_limit(2);
        assert_eq!(lab.run(&mut frames).unwrap(), 2);

        let backend = &lab.context().backend;
        assert_eq!(backend.size(), (0, 600));
        assert_relative_eq!(backend.last_frame().unwrap().aspect, 800.0 / 600.0);
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let mut panel = DebugPanel::new();
        let mut lab = lab(&RigConfig::default(), &mut panel);

        lab.shutdown();

        assert!(lab.binder().is_empty());
        assert!(lab.registry().is_empty());
        assert_eq!(lab.context().scene.light_count(), 0);
        assert_eq!(lab.context().textures.borrow().live_count(), 0);
    }
}
