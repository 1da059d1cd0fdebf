//=========================================================================
// Stage
//=========================================================================
//
// Engine-side store of everything the interaction core manipulates:
// scene objects (visibility, scale, rotation, colour, collider,
// interactability), the environment backdrop, and the orbit camera pose.
//
// The renderer reads the stage after each tick; the state machines only
// ever write to it. Objects are addressed by `ObjectId` handles handed
// out at spawn time.
//
// Architecture:
//   Stage
//     ├─ objects: Vec<StageObject>     (indexed by ObjectId)
//     ├─ backdrop: Option<Backdrop>
//     └─ camera: Option<CameraPose>    (None = no camera resolvable)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::error::SetupError;
use crate::core::tween::{Animatable, Property, TweenTarget, TweenValue};

//=== ObjectId ============================================================

/// Handle to an object on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Raw index, mainly for logging.
    pub fn index(self) -> u32 {
        self.0
    }
}

//=== Color ===============================================================

/// Linear RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Component-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

//=== Backdrop ============================================================

/// Environment backdrop (skybox) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Backdrop(pub String);

impl Backdrop {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

//=== CameraPose ==========================================================

/// Orbit camera orientation around the globe and distance from its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub orientation: Quat,
    pub distance: f32,
}

impl CameraPose {
    pub fn new(orientation: Quat, distance: f32) -> Self {
        Self { orientation, distance }
    }
}

//=== StageObject =========================================================

/// Mutable render/physics state of one scene object.
#[derive(Debug, Clone, PartialEq)]
pub struct StageObject {
    pub name: String,
    pub active: bool,
    pub scale: Vec3,
    pub rotation: Quat,
    pub color: Color,
    pub collider_enabled: bool,
    pub interactable: bool,
}

impl StageObject {
    /// Active, unit-scaled, unrotated, white, collidable, interactable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            color: Color::WHITE,
            collider_enabled: true,
            interactable: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

//=== Stage ===============================================================

/// Object, backdrop and camera store shared by all interaction systems.
#[derive(Debug, Default)]
pub struct Stage {
    objects: Vec<StageObject>,
    backdrop: Option<Backdrop>,
    camera: Option<CameraPose>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Objects ----------------------------------------------------------

    /// Adds an object and returns its handle.
    pub fn spawn(&mut self, object: StageObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(object);
        id
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        (id.0 as usize) < self.objects.len()
    }

    pub fn get(&self, id: ObjectId) -> Option<&StageObject> {
        self.objects.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut StageObject> {
        self.objects.get_mut(id.0 as usize)
    }

    /// Returns `Err(UnknownObject)` if `id` was never spawned here.
    pub fn require(&self, id: ObjectId) -> Result<(), SetupError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(SetupError::UnknownObject(id))
        }
    }

    /// Applies `f` to the object, warning if it does not exist.
    fn with_object(&mut self, id: ObjectId, f: impl FnOnce(&mut StageObject)) {
        match self.get_mut(id) {
            Some(object) => f(object),
            None => warn!("Stage object {:?} not found", id),
        }
    }

    pub fn set_active(&mut self, id: ObjectId, active: bool) {
        self.with_object(id, |o| o.active = active);
    }

    pub fn set_scale(&mut self, id: ObjectId, scale: Vec3) {
        self.with_object(id, |o| o.scale = scale);
    }

    pub fn set_rotation(&mut self, id: ObjectId, rotation: Quat) {
        self.with_object(id, |o| o.rotation = rotation);
    }

    pub fn set_color(&mut self, id: ObjectId, color: Color) {
        self.with_object(id, |o| o.color = color);
    }

    pub fn set_collider_enabled(&mut self, id: ObjectId, enabled: bool) {
        self.with_object(id, |o| o.collider_enabled = enabled);
    }

    pub fn set_interactable(&mut self, id: ObjectId, interactable: bool) {
        self.with_object(id, |o| o.interactable = interactable);
    }

    pub fn is_active(&self, id: ObjectId) -> bool {
        self.get(id).map(|o| o.active).unwrap_or(false)
    }

    pub fn scale(&self, id: ObjectId) -> Option<Vec3> {
        self.get(id).map(|o| o.scale)
    }

    pub fn rotation(&self, id: ObjectId) -> Option<Quat> {
        self.get(id).map(|o| o.rotation)
    }

    pub fn color(&self, id: ObjectId) -> Option<Color> {
        self.get(id).map(|o| o.color)
    }

    //--- Backdrop ---------------------------------------------------------

    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.backdrop.as_ref()
    }

    pub fn set_backdrop(&mut self, backdrop: Option<Backdrop>) {
        self.backdrop = backdrop;
    }

    //--- Camera -----------------------------------------------------------

    pub fn camera(&self) -> Option<&CameraPose> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut CameraPose> {
        self.camera.as_mut()
    }

    pub fn set_camera(&mut self, pose: CameraPose) {
        self.camera = Some(pose);
    }
}

//--- Trait Implementations -----------------------------------------------

impl Animatable for Stage {
    fn read(&self, target: TweenTarget, property: Property) -> Option<TweenValue> {
        match (target, property) {
            (TweenTarget::Object(id), Property::Scale) => self.scale(id).map(TweenValue::Vector),
            (TweenTarget::Object(id), Property::Rotation) => {
                self.rotation(id).map(TweenValue::Rotation)
            }
            (TweenTarget::Camera, Property::Rotation) => {
                self.camera.map(|c| TweenValue::Rotation(c.orientation))
            }
            (TweenTarget::Camera, Property::Distance) => {
                self.camera.map(|c| TweenValue::Scalar(c.distance))
            }
            _ => None,
        }
    }

    fn write(&mut self, target: TweenTarget, property: Property, value: TweenValue) {
        match (target, property, value) {
            (TweenTarget::Object(id), Property::Scale, TweenValue::Vector(v)) => {
                self.set_scale(id, v)
            }
            (TweenTarget::Object(id), Property::Rotation, TweenValue::Rotation(q)) => {
                self.set_rotation(id, q)
            }
            (TweenTarget::Camera, Property::Rotation, TweenValue::Rotation(q)) => {
                if let Some(camera) = self.camera.as_mut() {
                    camera.orientation = q;
                }
            }
            (TweenTarget::Camera, Property::Distance, TweenValue::Scalar(d)) => {
                if let Some(camera) = self.camera.as_mut() {
                    camera.distance = d;
                }
            }
            (target, property, value) => {
                warn!("Unsupported tween write {:?}.{:?} = {:?}", target, property, value)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
