//! Scene container
//!
//! Holds the lights, the primitives, the shared material and the axes
//! helper. Lights are stored in a slot map so removing one never invalidates
//! the ids of the others.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::{shared, Shared};
use crate::render::lighting::Light;
use crate::render::material::StandardMaterial;
use crate::scene::objects::{standard_objects, AxesHelper, SceneObject};

new_key_type! {
    /// Identifier of a light attached to a scene
    pub struct LightId;
}

/// Everything the renderer draws
pub struct Scene {
    lights: SlotMap<LightId, Shared<Light>>,
    objects: Vec<SceneObject>,
    material: Shared<StandardMaterial>,
    axes: Shared<AxesHelper>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Empty scene with a default material and hidden axes
    pub fn new() -> Self {
        Self {
            lights: SlotMap::with_key(),
            objects: Vec::new(),
            material: shared(StandardMaterial::default()),
            axes: shared(AxesHelper::new(3.0)),
        }
    }

    /// Scene with the standard primitives
    pub fn with_standard_objects() -> Self {
        let mut scene = Self::new();
        scene.objects = standard_objects();
        scene
    }

    /// Attach a light
    pub fn add_light(&mut self, light: Shared<Light>) -> LightId {
        self.lights.insert(light)
    }

    /// Detach a light
    pub fn remove_light(&mut self, id: LightId) -> Option<Shared<Light>> {
        self.lights.remove(id)
    }

    /// Light by id
    pub fn light(&self, id: LightId) -> Option<&Shared<Light>> {
        self.lights.get(id)
    }

    /// Attached lights
    pub fn lights(&self) -> impl Iterator<Item = (LightId, &Shared<Light>)> {
        self.lights.iter()
    }

    /// Number of attached lights
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Add a primitive
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Primitives in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable primitives
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    /// Material shared by every primitive
    pub fn material(&self) -> &Shared<StandardMaterial> {
        &self.material
    }

    /// Axes gizmo
    pub fn axes(&self) -> &Shared<AxesHelper> {
        &self.axes
    }

    /// Drop every light and primitive
    pub fn clear(&mut self) {
        self.lights.clear();
        self.objects.clear();
    }
}
