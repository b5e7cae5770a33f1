//! Pure orbit kinematics: elliptical position from simulated time.
//!
//! All orbits are coplanar on the horizontal plane and share a fixed
//! eccentricity ratio. Given the same `(time, body)` these functions always
//! yield the same transform, which is what makes the frame update
//! deterministic and testable.

use glam::Vec3;

use crate::catalog::ORBIT_CENTER_X;
use crate::registry::Body;

/// Semi-minor over semi-major ratio, fixed for every orbit.
pub const ECCENTRICITY_RATIO: f32 = 0.7;

/// Yaw increment applied to a body each running frame.
///
/// Deliberately a per-frame constant rather than time-scaled: self-spin rate
/// tracks the display refresh rate, matching the observed reference behavior.
pub const SPIN_PER_FRAME: f32 = 0.01;

/// Orbital phase angle of `body` at simulated time `time`.
pub fn orbit_angle(time: f64, body: &Body) -> f32 {
    (time * body.angular_speed as f64) as f32 + body.initial_phase
}

/// World-space position of `body` at simulated time `time`.
///
/// The ellipse is centered on the sun at `(ORBIT_CENTER_X, 0, 0)` with
/// semi-axes `(a, 0.7a)`.
pub fn orbit_position(time: f64, body: &Body) -> Vec3 {
    let angle = orbit_angle(time, body);
    let a = body.orbit_semi_major;
    let b = a * ECCENTRICITY_RATIO;
    Vec3::new(ORBIT_CENTER_X + a * angle.cos(), 0.0, b * angle.sin())
}
