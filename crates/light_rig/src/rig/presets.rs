//! Default rig
//!
//! The lighting showcase: six lights, one of each kind, a matcap-textured
//! material and a hidden axes helper.

use std::f32::consts::PI;

use crate::render::lighting::LightKind;
use crate::rig::descriptor::{LightDescriptor, MaterialDescriptor, ParameterSpec, ScalarRange};

/// Default matcap texture
pub const DEFAULT_TEXTURE: &str = "textures/matcaps/3.png";

const UNIT: ScalarRange = ScalarRange::new(0.0, 1.0, 0.001);
const COARSE_UNIT: ScalarRange = ScalarRange::new(0.0, 1.0, 0.01);
const POSITION: ScalarRange = ScalarRange::new(-10.0, 10.0, 0.1);

/// The six showcase lights in registration order
pub fn default_lights() -> Vec<LightDescriptor> {
    vec![
        LightDescriptor::new(LightKind::Ambient)
            .with(ParameterSpec::color("color", 0xffffff))
            .with(ParameterSpec::scalar("intensity", UNIT, 0.2)),
        LightDescriptor::new(LightKind::Directional)
            .with(ParameterSpec::color("color", 0xfff4e6))
            .with(ParameterSpec::scalar("intensity", UNIT, 0.6))
            .at([1.0, 0.25, 0.0]),
        LightDescriptor::new(LightKind::Hemisphere)
            .with(ParameterSpec::color("color", 0x87ceeb).labeled("skyColor"))
            .with(ParameterSpec::color("groundColor", 0x228b22))
            .with(ParameterSpec::scalar("intensity", UNIT, 0.2)),
        LightDescriptor::new(LightKind::Point)
            .with(ParameterSpec::color("color", 0xff9000))
            .with(ParameterSpec::scalar("intensity", UNIT, 0.5))
            .with(ParameterSpec::scalar("distance", ScalarRange::new(0.0, 10.0, 0.1), 10.0))
            .with(ParameterSpec::vector3("position", POSITION, [1.0, 1.0, 1.0])),
        LightDescriptor::new(LightKind::RectArea)
            .with(ParameterSpec::color("color", 0x4e00ff))
            .with(ParameterSpec::scalar("intensity", ScalarRange::new(0.0, 10.0, 0.1), 2.0))
            .with(ParameterSpec::vector3("position", POSITION, [1.0, 0.25, 0.0]))
            .with(ParameterSpec::scalar("width", ScalarRange::new(0.0, 20.0, 0.1), 1.0))
            .with(ParameterSpec::scalar("height", ScalarRange::new(0.0, 20.0, 0.1), 1.0))
            .looking_at([0.0, 0.0, 0.0]),
        LightDescriptor::new(LightKind::Spot)
            .with(ParameterSpec::color("color", 0x78ff00))
            .with(ParameterSpec::scalar("intensity", COARSE_UNIT, 0.5))
            .with(ParameterSpec::scalar("distance", ScalarRange::new(0.0, 50.0, 0.1), 7.0))
            .with(ParameterSpec::scalar("angle", ScalarRange::new(0.0, PI * 0.5, 0.01), PI * 0.1))
            .with(ParameterSpec::scalar("penumbra", COARSE_UNIT, 0.25))
            .with(ParameterSpec::scalar("decay", COARSE_UNIT, 0.1))
            .with(ParameterSpec::vector3("position", POSITION, [0.0, 2.0, 3.0])),
    ]
}

/// The shared material: matcap on, roughness 0.4, metalness 0.7
pub fn default_material() -> MaterialDescriptor {
    MaterialDescriptor::new("Texture")
        .with(ParameterSpec::texture("map", DEFAULT_TEXTURE, true).labeled("Toggle Texture"))
        .with(ParameterSpec::scalar("roughness", UNIT, 0.4).labeled("Material Roughness"))
        .with(ParameterSpec::scalar("metalness", UNIT, 0.7).labeled("Material Metalness"))
        .with(ParameterSpec::toggle("wireframe", false).labeled("Material Wireframe"))
}

/// The axes helper folder
pub fn default_axes() -> MaterialDescriptor {
    MaterialDescriptor::new("Axes Helper")
        .with(ParameterSpec::toggle("visible", false).labeled("Axes Helper Visible"))
}
