//! Ray/sphere picking for hover detection.
//!
//! Bodies are rendered as spheres, so analytic ray/sphere intersection is
//! exact. The hit list is returned sorted by distance; which hit wins is the
//! interaction controller's policy, not this module's.

use glam::Vec3;

use orrery_core::{Body, RenderHandle};

use crate::scene::SceneGraph;

/// A world-space ray, typically unprojected from the pointer position.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// A single body intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Handle of the intersected body's node.
    pub handle: RenderHandle,
    /// Index of the body in catalog order.
    pub body_index: usize,
    /// Distance from the ray origin to the nearest intersection point.
    pub distance: f32,
}

/// Nearest intersection distance of `ray` with a sphere, if any.
///
/// Returns the smaller positive root; a ray starting inside the sphere
/// reports the exit point. Intersections behind the origin are discarded.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    if near > 0.0 {
        return Some(near);
    }
    let far = -b + sqrt_d;
    (far > 0.0).then_some(far)
}

/// Intersects `ray` against every body sphere at its current scene position.
///
/// The result is sorted by ascending distance; equal distances keep catalog
/// order (stable sort), which is exactly the tie-break the hover policy
/// wants.
pub fn intersect_bodies(ray: &Ray, bodies: &[Body], scene: &SceneGraph) -> Vec<Hit> {
    let mut hits: Vec<Hit> = bodies
        .iter()
        .enumerate()
        .filter_map(|(i, body)| {
            let center = scene.transform(body.handle).position;
            ray_sphere(ray, center, body.radius).map(|distance| Hit {
                handle: body.handle,
                body_index: i,
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
