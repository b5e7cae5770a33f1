//! Per-frame simulation step.
//!
//! Each rendered frame advances the simulation clock (unless paused) and
//! writes every body's orbital position and axial spin into the scene graph.
//! While paused the clock holds its value, so resuming continues from the
//! frozen positions instead of jumping to where the bodies would have been.

use orrery_core::{BodyRegistry, SPIN_PER_FRAME, SimClock, orbit_position};
use orrery_scene::SceneGraph;

/// Drives body transforms from wall-clock frame deltas.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    clock: SimClock,
    frame_count: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated simulation time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Total frames ticked, paused or not.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one frame.
    ///
    /// When running, the clock gains `dt`, each body moves to its orbital
    /// position for the new time, and each body spins by a fixed increment
    /// per frame. When paused, nothing in the scene changes.
    pub fn tick(&mut self, dt: f64, paused: bool, registry: &BodyRegistry, scene: &mut SceneGraph) {
        self.frame_count += 1;
        if paused {
            return;
        }

        self.clock.advance(dt);
        let time = self.clock.elapsed();
        for body in registry.all() {
            scene.set_position(body.handle, orbit_position(time, body));
            scene.add_yaw(body.handle, SPIN_PER_FRAME);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::PLANET_CATALOG;

    fn setup() -> (FrameScheduler, BodyRegistry, SceneGraph) {
        let registry = BodyRegistry::from_catalog(PLANET_CATALOG, 0);
        let scene = SceneGraph::with_nodes(registry.all().len());
        (FrameScheduler::new(), registry, scene)
    }

    #[test]
    fn test_running_tick_advances_clock_and_positions() {
        let (mut scheduler, registry, mut scene) = setup();
        scheduler.tick(1.0, false, &registry, &mut scene);
        assert_eq!(scheduler.elapsed(), 1.0);

        for body in registry.all() {
            let expected = orbit_position(1.0, body);
            assert_eq!(scene.transform(body.handle).position, expected);
        }
    }

    #[test]
    fn test_paused_tick_freezes_everything() {
        let (mut scheduler, registry, mut scene) = setup();
        scheduler.tick(1.0, false, &registry, &mut scene);
        let frozen: Vec<_> = registry
            .all()
            .iter()
            .map(|body| scene.transform(body.handle))
            .collect();

        for _ in 0..100 {
            scheduler.tick(0.016, true, &registry, &mut scene);
        }

        assert_eq!(scheduler.elapsed(), 1.0, "clock must hold while paused");
        for (body, before) in registry.all().iter().zip(&frozen) {
            let after = scene.transform(body.handle);
            assert_eq!(after.position, before.position);
            assert_eq!(after.yaw, before.yaw, "spin must stop while paused");
        }
    }

    #[test]
    fn test_resume_continues_without_catch_up() {
        let (mut scheduler, registry, mut scene) = setup();
        scheduler.tick(2.0, false, &registry, &mut scene);
        scheduler.tick(50.0, true, &registry, &mut scene);
        scheduler.tick(1.0, false, &registry, &mut scene);

        // Paused wall time never reaches the clock: 2.0 + 1.0, not 53.0.
        assert_eq!(scheduler.elapsed(), 3.0);
        let mercury = &registry.all()[0];
        assert_eq!(
            scene.transform(mercury.handle).position,
            orbit_position(3.0, mercury)
        );
    }

    #[test]
    fn test_spin_accumulates_per_running_frame() {
        let (mut scheduler, registry, mut scene) = setup();
        for _ in 0..10 {
            scheduler.tick(0.016, false, &registry, &mut scene);
        }
        let earth = &registry.all()[2];
        let yaw = scene.transform(earth.handle).yaw;
        assert!((yaw - 10.0 * SPIN_PER_FRAME).abs() < 1e-6);
    }

    #[test]
    fn test_speed_change_isolated_to_one_body() {
        let (mut scheduler, mut registry, mut scene) = setup();
        registry.set_speed("Mars", 0.09).unwrap();
        scheduler.tick(10.0, false, &registry, &mut scene);

        let mars = registry.get("Mars").unwrap();
        assert_eq!(
            scene.transform(mars.handle).position,
            orbit_position(10.0, mars)
        );
        // Every other body still follows its catalog speed.
        for body in registry.all().iter().filter(|b| b.name != "Mars") {
            assert_eq!(
                scene.transform(body.handle).position,
                orbit_position(10.0, body)
            );
        }
    }

    #[test]
    fn test_frame_count_ticks_even_while_paused() {
        let (mut scheduler, registry, mut scene) = setup();
        scheduler.tick(0.016, true, &registry, &mut scene);
        scheduler.tick(0.016, false, &registry, &mut scene);
        assert_eq!(scheduler.frame_count(), 2);
    }
}
