//! Live body registry: catalog entries instantiated with random phases and
//! runtime-adjustable speeds.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::catalog::CatalogEntry;
use crate::error::RegistryError;

/// Lower bound of the speed control range.
pub const SPEED_MIN: f32 = 0.001;
/// Upper bound of the speed control range.
pub const SPEED_MAX: f32 = 0.1;
/// Step size of the speed control.
pub const SPEED_STEP: f32 = 0.001;

/// Opaque reference to a body's renderable scene node.
///
/// Minted once per body at registry construction and never reassigned; the
/// scene graph stores node state under the same handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub(crate) u32);

impl RenderHandle {
    /// Raw index for scene-side storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single orbiting body with live kinematic state.
#[derive(Clone, Debug)]
pub struct Body {
    /// Unique name, immutable after creation.
    pub name: &'static str,
    /// Sphere render radius.
    pub radius: f32,
    /// Orbit semi-major axis.
    pub orbit_semi_major: f32,
    /// Current angular speed in radians per simulated-time unit. The only
    /// kinematic field that changes after startup.
    pub angular_speed: f32,
    /// Phase offset in [0, 2π), assigned once at creation for visual variety.
    pub initial_phase: f32,
    /// Whether a ring attachment is parented to this body.
    pub has_ring: bool,
    /// Display color carried through from the catalog.
    pub color: [f32; 3],
    /// Scene node owned by this body for transform writes.
    pub handle: RenderHandle,
}

/// Ordered collection of bodies, instantiated from the static catalog.
///
/// Iteration order is catalog order and is stable for the lifetime of the
/// registry; rendering and the control panel both rely on it.
#[derive(Debug)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    /// Instantiates every catalog entry, assigning each a fresh random
    /// initial phase from a seeded RNG and a sequential render handle.
    pub fn from_catalog(catalog: &[CatalogEntry], seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let bodies = catalog
            .iter()
            .enumerate()
            .map(|(i, entry)| Body {
                name: entry.name,
                radius: entry.radius,
                orbit_semi_major: entry.orbit_semi_major,
                angular_speed: entry.base_angular_speed,
                initial_phase: rng.random::<f32>() * std::f32::consts::TAU,
                has_ring: entry.has_ring,
                color: entry.color,
                handle: RenderHandle(i as u32),
            })
            .collect();
        Self { bodies }
    }

    /// All bodies in catalog order.
    pub fn all(&self) -> &[Body] {
        &self.bodies
    }

    /// Looks up a body by name.
    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Overwrites a body's angular speed. The new value is visible to the
    /// next frame update. Any finite value is accepted; range clamping is the
    /// input boundary's job.
    pub fn set_speed(&mut self, name: &str, speed: f32) -> Result<(), RegistryError> {
        let body = self
            .bodies
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        debug!(body = name, speed, "speed override");
        body.angular_speed = speed;
        Ok(())
    }
}
