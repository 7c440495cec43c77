//! Plane geometry helpers used by collision detection and resolution

use super::states::NVec2;

/// Euclidean distance between two points
pub fn distance(p1: &NVec2, p2: &NVec2) -> f64 {
    let d = p2 - p1;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Rotate a velocity vector by `angle` radians (counter-clockwise in a
/// y-up frame)
///
/// Used to move velocities into the frame whose x-axis lies along the
/// collision normal, and back out again.
pub fn rotate(velocity: &NVec2, angle: f64) -> NVec2 {
    let (sin, cos) = angle.sin_cos();
    NVec2::new(
        velocity.x * cos - velocity.y * sin,
        velocity.x * sin + velocity.y * cos,
    )
}
