//! Material and helper setup
//!
//! The shared material and the axes helper already exist in the scene, so
//! their descriptors only write defaults. Texture parameters that start
//! enabled load their image here.

use crate::error::{RigError, RigResult};
use crate::render::texture_manager::TextureManager;
use crate::rig::descriptor::{MaterialDescriptor, ParameterKind, ParameterSpec};
use crate::rig::tunable::{FieldMut, Tunable};

/// Write every parameter default into `target`
///
/// All parameters are checked before the first write; a texture that fails
/// to load is reported after the other defaults are in place.
pub fn apply_defaults(
    name: &str,
    target: &mut dyn Tunable,
    parameters: &[ParameterSpec],
    textures: &mut TextureManager,
) -> RigResult<()> {
    let invalid = |reason: String| RigError::InvalidDescriptor { light: name.to_string(), reason };
    let type_name = target.type_name();

    for parameter in parameters {
        parameter.validate().map_err(invalid)?;
        let field = target
            .field_mut(&parameter.name)
            .ok_or_else(|| invalid(format!("{type_name} has no field {:?}", parameter.name)))?;
        if field.kind() != parameter.kind.field_kind() {
            return Err(invalid(format!(
                "field {:?} is {:?} but the parameter is {:?}",
                parameter.name,
                field.kind(),
                parameter.kind.field_kind()
            )));
        }
    }

    for parameter in parameters {
        if let Some(field) = target.field_mut(&parameter.name) {
            parameter.kind.write_default(field);
        }
    }

    for parameter in parameters {
        let ParameterKind::Texture { path, default } = &parameter.kind else {
            continue;
        };
        let loaded = match target.field_mut(&parameter.name) {
            Some(FieldMut::Texture(slot)) => {
                if let Some(previous) = slot.take() {
                    textures.release(previous);
                }
                if *default {
                    textures.acquire(path).map(|handle| *slot = Some(handle))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        };
        target.mark_updated();
        loaded?;
    }

    log::debug!("Applied {} defaults to {}", parameters.len(), name);
    Ok(())
}

/// Configure the shared material from its descriptor
pub fn configure_material(
    descriptor: &MaterialDescriptor,
    material: &mut dyn Tunable,
    textures: &mut TextureManager,
) -> RigResult<()> {
    apply_defaults(&descriptor.name, material, &descriptor.parameters, textures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::material::StandardMaterial;
    use crate::render::texture_manager::test_support::MemoryLoader;
    use crate::rig::descriptor::ScalarRange;

    fn descriptor(texture: &str) -> MaterialDescriptor {
        MaterialDescriptor::new("Texture")
            .with(ParameterSpec::texture("map", texture, true))
            .with(ParameterSpec::scalar("roughness", ScalarRange::new(0.0, 1.0, 0.001), 0.4))
            .with(ParameterSpec::toggle("wireframe", false))
    }

    #[test]
    fn test_material_defaults_and_texture() {
        let mut textures = TextureManager::new(MemoryLoader);
        let mut material = StandardMaterial::new();

        configure_material(&descriptor("matcap.png"), &mut material, &mut textures).unwrap();

        assert_eq!(material.roughness, 0.4);
        assert!(material.map.is_some());
        assert!(material.needs_update);
        assert_eq!(textures.live_count(), 1);
    }

    #[test]
    fn test_missing_texture_keeps_other_defaults() {
        let mut textures = TextureManager::new(MemoryLoader);
        let mut material = StandardMaterial::new();

        let err = configure_material(&descriptor("missing.png"), &mut material, &mut textures).unwrap_err();

        assert!(matches!(err, RigError::Texture(_)));
        assert_eq!(material.roughness, 0.4);
        assert!(material.map.is_none());
        assert!(material.needs_update);
        assert_eq!(textures.live_count(), 0);
    }

    #[test]
    fn test_reconfigure_with_missing_texture_flags_update() {
        let mut textures = TextureManager::new(MemoryLoader);
        let mut material = StandardMaterial::new();
        configure_material(&descriptor("matcap.png"), &mut material, &mut textures).unwrap();
        material.needs_update = false;

        assert!(configure_material(&descriptor("missing.png"), &mut material, &mut textures).is_err());

        assert!(material.map.is_none());
        assert!(material.needs_update);
        assert_eq!(textures.live_count(), 0);
    }

    #[test]
    fn test_unknown_field_writes_nothing() {
        let mut textures = TextureManager::new(MemoryLoader);
        let mut material = StandardMaterial::new();
        let bad = MaterialDescriptor::new("Texture")
            .with(ParameterSpec::scalar("roughness", ScalarRange::new(0.0, 1.0, 0.001), 0.4))
            .with(ParameterSpec::scalar("clearcoat", ScalarRange::new(0.0, 1.0, 0.001), 0.5));

        assert!(configure_material(&bad, &mut material, &mut textures).is_err());
        assert_eq!(material.roughness, 1.0);
    }
}
