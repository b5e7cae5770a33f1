//! Procedural starfield: a fixed set of randomly placed points, generated
//! once at startup from a seed and never mutated.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Side length of the cube the stars are scattered through.
pub const STARFIELD_EXTENT: f32 = 200.0;

/// Backdrop star positions, deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct Starfield {
    points: Vec<Vec3>,
}

impl Starfield {
    /// Scatters `count` stars uniformly through a cube of side
    /// [`STARFIELD_EXTENT`] centered on the origin.
    pub fn generate(seed: u64, count: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut points = Vec::with_capacity(count as usize);
        for _ in 0..count {
            points.push(Vec3::new(
                (rng.random::<f32>() - 0.5) * STARFIELD_EXTENT,
                (rng.random::<f32>() - 0.5) * STARFIELD_EXTENT,
                (rng.random::<f32>() - 0.5) * STARFIELD_EXTENT,
            ));
        }
        Self { points }
    }

    /// The generated star positions.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_count_matches_request() {
        let field = Starfield::generate(42, 4000);
        assert_eq!(field.points().len(), 4000);
    }

    #[test]
    fn test_stars_stay_within_the_cube() {
        let field = Starfield::generate(42, 4000);
        let half = STARFIELD_EXTENT / 2.0;
        for (i, p) in field.points().iter().enumerate() {
            assert!(
                p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half,
                "star {i} escaped the cube: {p:?}"
            );
        }
    }

    #[test]
    fn test_same_seed_produces_same_field() {
        let a = Starfield::generate(123, 1000);
        let b = Starfield::generate(123, 1000);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Starfield::generate(1, 1000);
        let b = Starfield::generate(2, 1000);
        let moved = a
            .points()
            .iter()
            .zip(b.points())
            .filter(|(x, y)| (**x - **y).length() > 0.01)
            .count();
        assert!(moved > 500, "only {moved}/1000 stars differ between seeds");
    }

    #[test]
    fn test_distribution_covers_all_octants() {
        let field = Starfield::generate(42, 4000);
        let mut octants = [0u32; 8];
        for p in field.points() {
            let idx = ((p.x >= 0.0) as usize)
                | (((p.y >= 0.0) as usize) << 1)
                | (((p.z >= 0.0) as usize) << 2);
            octants[idx] += 1;
        }
        for (i, &count) in octants.iter().enumerate() {
            assert!(
                (300..=700).contains(&count),
                "octant {i} has {count} stars, expected roughly 500"
            );
        }
    }
}
