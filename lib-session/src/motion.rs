//! Target drift. The fish swims rightwards at a constant speed and
//! teleports back to the left edge once it passes the playfield.

use glam::{vec2, Vec2};

/// Advances `pos` by `speed * dt` along the X axis. The result's x
/// wraps to exactly `0.0` once it reaches `bound_x`; y never changes.
pub fn advance(pos: Vec2, dt: f32, speed: f32, bound_x: f32) -> Vec2 {
    let x = pos.x + speed * dt;

    if x >= bound_x {
        vec2(0.0, pos.y)
    } else {
        vec2(x, pos.y)
    }
}
