//! Light rig registry
//!
//! Turns light descriptors into live lights attached to a [`Scene`]. Each
//! descriptor is validated against the field surface of its kind before
//! anything is constructed, so a bad entry never leaves a half-built light
//! behind.

use crate::error::{RigError, RigResult};
use crate::foundation::math::vec3_from_array;
use crate::foundation::{shared, Shared};
use crate::render::lighting::{Light, LightKind};
use crate::rig::descriptor::LightDescriptor;
use crate::rig::tunable::Tunable;
use crate::scene::scene_graph::{LightId, Scene};

/// Handle to a registered light
#[derive(Debug, Clone)]
pub struct LightInstance {
    id: LightId,
    kind: LightKind,
    light: Shared<Light>,
}

impl LightInstance {
    /// Scene id of the light
    pub fn id(&self) -> LightId {
        self.id
    }

    /// Light kind, fixed at creation
    pub fn kind(&self) -> LightKind {
        self.kind
    }

    /// The live light, shared with the scene and any bound controls
    pub fn light(&self) -> &Shared<Light> {
        &self.light
    }
}

fn invalid_descriptor(descriptor: &LightDescriptor, reason: impl Into<String>) -> RigError {
    RigError::InvalidDescriptor {
        light: descriptor.name.clone(),
        reason: reason.into(),
    }
}

/// Registered lights in registration order
#[derive(Debug, Default)]
pub struct LightRegistry {
    entries: Vec<(LightDescriptor, LightInstance)>,
}

impl LightRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a descriptor against the field surface of its kind
    pub fn validate(descriptor: &LightDescriptor) -> RigResult<()> {
        let kind = descriptor.kind;
        for parameter in &descriptor.parameters {
            let expected = kind.field_kind(&parameter.name).ok_or_else(|| {
                invalid_descriptor(descriptor, format!("{kind} has no field {:?}", parameter.name))
            })?;
            if expected != parameter.kind.field_kind() {
                return Err(invalid_descriptor(
                    descriptor,
                    format!(
                        "field {:?} is {:?} but the parameter is {:?}",
                        parameter.name,
                        expected,
                        parameter.kind.field_kind()
                    ),
                ));
            }
            parameter.validate().map_err(|reason| invalid_descriptor(descriptor, reason))?;
        }

        if descriptor.placement.position.is_some() && !kind.is_positioned() {
            return Err(invalid_descriptor(descriptor, format!("{kind} has no position")));
        }
        Ok(())
    }

    /// Build the light a descriptor declares and attach it to `scene`
    ///
    /// On error nothing is attached and the registry is unchanged.
    pub fn register(&mut self, descriptor: LightDescriptor, scene: &mut Scene) -> RigResult<LightInstance> {
        Self::validate(&descriptor)?;

        let mut light = Light::new(descriptor.kind);
        if let Some(position) = descriptor.placement.position {
            light.position = vec3_from_array(position);
        }
        if let Some(target) = descriptor.placement.look_at {
            light.look_at(vec3_from_array(target));
        }
        for parameter in &descriptor.parameters {
            let applied = light
                .field_mut(&parameter.name)
                .is_some_and(|field| parameter.kind.write_default(field));
            if !applied {
                return Err(invalid_descriptor(
                    &descriptor,
                    format!("default for {:?} could not be applied", parameter.name),
                ));
            }
        }

        let light = shared(light);
        let id = scene.add_light(light.clone());
        let instance = LightInstance { id, kind: descriptor.kind, light };

        log::info!(
            "Registered {} ({}) with {} tunable parameters",
            descriptor.name,
            descriptor.kind,
            descriptor.parameters.len()
        );
        self.entries.push((descriptor, instance.clone()));
        Ok(instance)
    }

    /// Register every descriptor, skipping the ones that fail
    ///
    /// Returns the failures; the successful lights are in [`LightRegistry::all`].
    pub fn register_all(
        &mut self,
        descriptors: impl IntoIterator<Item = LightDescriptor>,
        scene: &mut Scene,
    ) -> Vec<RigError> {
        let mut failures = Vec::new();
        for descriptor in descriptors {
            if let Err(err) = self.register(descriptor, scene) {
                log::error!("Skipping light: {}", err);
                failures.push(err);
            }
        }
        failures
    }

    /// Every registered light with its descriptor, in registration order
    pub fn all(&self) -> &[(LightDescriptor, LightInstance)] {
        &self.entries
    }

    /// Number of registered lights
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no light is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every light and detach it from `scene`
    pub fn clear(&mut self, scene: &mut Scene) {
        for (_, instance) in self.entries.drain(..) {
            scene.remove_light(instance.id);
        }
    }
}
