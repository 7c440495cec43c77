//! Elastic collision response between two particles
//!
//! The 1D elastic-collision equations only hold along one axis, so both
//! velocities are rotated into the frame where the x-axis is the line
//! through the two centers, the x-components are exchanged according to
//! the masses, and the result is rotated back.
//!
//! ```text
//!   before (rotated frame)         after
//!     a ●→      ←● b            a ←●      ●→ b
//!   ────┼────────┼──── normal   ────┼────────┼────
//! ```
//!
//! Tangential (y) components pass through untouched.

use super::geometry::rotate;
use super::states::{NVec2, Particle};

/// Apply an elastic collision to `a` and `b` if they are still closing
///
/// Callers decide that the pair touches; this only checks the approach
/// guard. A pair that is already separating is left alone, so an overlap
/// that lasts several ticks is resolved once instead of flipping every
/// tick. Masses must be positive.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) {
    let dv = a.v - b.v; // relative velocity
    let d = b.x - a.x; // a -> b

    if dv.x * d.x + dv.y * d.y < 0.0 {
        return;
    }

    // angle that puts the line of centers on the x-axis
    let angle = -d.y.atan2(d.x);

    let m1 = a.m;
    let m2 = b.m;
    let total = m1 + m2;

    let u1 = rotate(&a.v, angle);
    let u2 = rotate(&b.v, angle);

    let v1 = NVec2::new((u1.x * (m1 - m2) + 2.0 * m2 * u2.x) / total, u1.y);
    let v2 = NVec2::new((u2.x * (m2 - m1) + 2.0 * m1 * u1.x) / total, u2.y);

    a.v = rotate(&v1, -angle);
    b.v = rotate(&v2, -angle);
}

/// Borrow two distinct particles mutably, in the order given
///
/// Panics if `i == j` or either index is out of bounds.
pub fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    assert_ne!(i, j, "a particle cannot collide with itself");
    if i < j {
        let (head, tail) = particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
