//! Static catalog of solar-system bodies.
//!
//! Sizes and orbit radii are scaled for visual clarity, not to astronomical
//! scale. Catalog order is load-bearing: it fixes render order, control-panel
//! row order, and hover tie-breaking.

/// Shared X offset of the sun and every orbit ellipse center.
///
/// All ellipses are centered on the sun's position rather than the world
/// origin, so the whole system sits slightly off-axis in the scene.
pub const ORBIT_CENTER_X: f32 = -2.0;

/// Render radius of the sun sphere.
pub const SUN_RADIUS: f32 = 1.0;

/// A single planet definition in the startup catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogEntry {
    /// Unique display name, also used as the hover tooltip text.
    pub name: &'static str,
    /// Sphere render radius.
    pub radius: f32,
    /// Orbit semi-major axis. The semi-minor axis is always derived as
    /// 0.7 times this value.
    pub orbit_semi_major: f32,
    /// Default angular speed in radians per simulated-time unit.
    pub base_angular_speed: f32,
    /// Whether the body carries a ring attachment.
    pub has_ring: bool,
    /// Unlit display color (linear RGB). Stands in for textures, which are
    /// outside this crate's concern.
    pub color: [f32; 3],
}

/// The eight planets, in orbital order from the sun.
pub const PLANET_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Mercury",
        radius: 0.2,
        orbit_semi_major: 2.0,
        base_angular_speed: 0.014,
        has_ring: false,
        color: [0.55, 0.52, 0.50],
    },
    CatalogEntry {
        name: "Venus",
        radius: 0.3,
        orbit_semi_major: 3.0,
        base_angular_speed: 0.023,
        has_ring: false,
        color: [0.85, 0.70, 0.45],
    },
    CatalogEntry {
        name: "Earth",
        radius: 0.35,
        orbit_semi_major: 4.0,
        base_angular_speed: 0.07,
        has_ring: false,
        color: [0.25, 0.45, 0.85],
    },
    CatalogEntry {
        name: "Mars",
        radius: 0.25,
        orbit_semi_major: 5.0,
        base_angular_speed: 0.05,
        has_ring: false,
        color: [0.80, 0.35, 0.20],
    },
    CatalogEntry {
        name: "Jupiter",
        radius: 0.8,
        orbit_semi_major: 6.5,
        base_angular_speed: 0.025,
        has_ring: false,
        color: [0.75, 0.60, 0.45],
    },
    CatalogEntry {
        name: "Saturn",
        radius: 0.7,
        orbit_semi_major: 9.0,
        base_angular_speed: 0.0112,
        has_ring: true,
        color: [0.85, 0.75, 0.55],
    },
    CatalogEntry {
        name: "Uranus",
        radius: 0.5,
        orbit_semi_major: 11.3,
        base_angular_speed: 0.059,
        has_ring: false,
        color: [0.55, 0.80, 0.85],
    },
    CatalogEntry {
        name: "Neptune",
        radius: 0.5,
        orbit_semi_major: 13.0,
        base_angular_speed: 0.07,
        has_ring: false,
        color: [0.30, 0.40, 0.85],
    },
];
