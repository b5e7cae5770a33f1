//! Simulation core for the Orrery solar-system visualization.
//!
//! Holds the static planet catalog, the live body registry, the pure orbit
//! kinematics, and the pausable simulation clock. Nothing here touches the
//! window, GPU, or input; the presentation crates drive this through plain
//! function calls, which keeps every piece testable without a display.

mod catalog;
mod clock;
mod error;
mod orbit;
mod registry;

pub use catalog::{CatalogEntry, ORBIT_CENTER_X, PLANET_CATALOG, SUN_RADIUS};
pub use clock::SimClock;
pub use error::RegistryError;
pub use orbit::{ECCENTRICITY_RATIO, SPIN_PER_FRAME, orbit_angle, orbit_position};
pub use registry::{Body, BodyRegistry, RenderHandle, SPEED_MAX, SPEED_MIN, SPEED_STEP};
