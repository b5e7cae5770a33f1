//! CPU-side mesh generation for spheres, ring annuli, and orbit track lines.
//!
//! Geometry is produced in model space around the origin; the renderer places
//! it with per-draw model transforms.

use glam::Vec3;

use orrery_core::ECCENTRICITY_RATIO;

/// Raw indexed triangle geometry.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// Generates a UV sphere of the given radius.
///
/// `stacks` is the number of latitude bands, `slices` the number of longitude
/// segments. Both are clamped to a sane minimum of 3.
pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> MeshData {
    let stacks = stacks.max(3);
    let slices = slices.max(3);

    let mut positions = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for stack in 0..=stacks {
        // phi: 0 at the north pole, PI at the south pole.
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        for slice in 0..=slices {
            let theta = std::f32::consts::TAU * slice as f32 / slices as f32;
            positions.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }

    let ring = slices + 1;
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * ring + slice;
            let i1 = i0 + 1;
            let i2 = i0 + ring;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    MeshData { positions, indices }
}

/// Generates a flat ring annulus in the horizontal plane.
///
/// Used for Saturn's ring attachment: inner radius 1.2x and outer radius 2x
/// of the body radius at the call site.
pub fn ring_annulus(inner_radius: f32, outer_radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);

    let mut positions = Vec::with_capacity((segments as usize + 1) * 2);
    for i in 0..=segments {
        let theta = std::f32::consts::TAU * i as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        positions.push(Vec3::new(inner_radius * cos, 0.0, inner_radius * sin));
        positions.push(Vec3::new(outer_radius * cos, 0.0, outer_radius * sin));
    }

    let mut indices = Vec::with_capacity(segments as usize * 12);
    for i in 0..segments {
        let i0 = i * 2;
        let [inner0, outer0, inner1, outer1] = [i0, i0 + 1, i0 + 2, i0 + 3];
        // Two triangles per segment, emitted with both windings so the ring
        // is visible from above and below without a two-sided pipeline.
        indices.extend_from_slice(&[inner0, outer0, inner1, inner1, outer0, outer1]);
        indices.extend_from_slice(&[inner1, outer0, inner0, outer1, outer0, inner1]);
    }

    MeshData { positions, indices }
}

/// Samples an orbit ellipse as a closed polyline in world space.
///
/// The returned points trace the ellipse centered at `(center_x, 0, 0)` with
/// semi-axes `(a, 0.7a)`; the first point is repeated at the end so the strip
/// closes into a loop.
pub fn ellipse_track(center_x: f32, semi_major: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    let b = semi_major * ECCENTRICITY_RATIO;
    (0..=segments)
        .map(|i| {
            let theta = std::f32::consts::TAU * i as f32 / segments as f32;
            Vec3::new(
                center_x + semi_major * theta.cos(),
                0.0,
                b * theta.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_vertices_lie_on_the_radius() {
        let mesh = uv_sphere(0.35, 16, 24);
        for (i, p) in mesh.positions.iter().enumerate() {
            assert!(
                (p.length() - 0.35).abs() < 1e-5,
                "vertex {i} off the sphere: |{p:?}| = {}",
                p.length()
            );
        }
    }

    #[test]
    fn test_sphere_indices_are_in_bounds() {
        let mesh = uv_sphere(1.0, 8, 12);
        let count = mesh.positions.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_sphere_clamps_degenerate_resolution() {
        let mesh = uv_sphere(1.0, 0, 1);
        assert!(!mesh.indices.is_empty());
    }

    #[test]
    fn test_annulus_radii() {
        let mesh = ring_annulus(0.84, 1.4, 32);
        for p in &mesh.positions {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r >= 0.84 - 1e-5 && r <= 1.4 + 1e-5, "radius {r}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_track_closes_on_itself() {
        let track = ellipse_track(-2.0, 4.0, 256);
        assert_eq!(track.len(), 257);
        assert!((track[0] - track[256]).length() < 1e-4);
    }

    #[test]
    fn test_track_points_satisfy_ellipse_equation() {
        let a = 9.0;
        let track = ellipse_track(-2.0, a, 128);
        for p in &track {
            let lhs = ((p.x + 2.0) / a).powi(2) + (p.z / (a * ECCENTRICITY_RATIO)).powi(2);
            assert!((lhs - 1.0).abs() < 1e-4);
        }
    }
}
