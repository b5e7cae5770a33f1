//! Scene-side state for the Orrery visualization: node transforms keyed by
//! render handles, the procedural starfield, CPU mesh generation, and
//! ray/sphere picking.

mod mesh;
mod picking;
mod scene;
mod starfield;

pub use mesh::{MeshData, ellipse_track, ring_annulus, uv_sphere};
pub use picking::{Hit, Ray, intersect_bodies, ray_sphere};
pub use scene::{NodeTransform, SceneGraph};
pub use starfield::{STARFIELD_EXTENT, Starfield};
