//! Per-particle tick: draw, collide, reflect, highlight, move
//!
//! Every step reads the shared [`TickContext`] and touches only the
//! particle being updated, except collision resolution which also changes
//! the velocity of the other particle in the pair.

use std::f64::consts::TAU;

use super::canvas::Canvas;
use super::collision::{pair_mut, resolve_collision};
use super::geometry::distance;
use super::states::{Particle, Pointer, Viewport};

/// Read-only surroundings shared by every particle during one tick
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    pub viewport: Viewport,
    pub pointer: Pointer,
    pub radius: f64,
    pub proximity_radius: f64,
    pub opacity_step: f64,
    pub max_opacity: f64,
}

impl Particle {
    /// Issue the path for this particle: translucent fill, opaque outline
    pub fn draw<C: Canvas>(&self, ctx: &TickContext, canvas: &mut C) {
        canvas.begin_path();
        canvas.arc(self.x, ctx.radius, 0.0, TAU);
        canvas.fill(self.color, self.opacity);
        canvas.stroke(self.color);
        canvas.close_path();
    }

    /// Flip the velocity component of any axis whose wall the particle
    /// pokes through. Position is left as is.
    pub fn reflect_at_bounds(&mut self, ctx: &TickContext) {
        let r = ctx.radius;
        let Viewport { width, height } = ctx.viewport;

        if self.x.x + r > width || self.x.x - r < 0.0 {
            self.v.x = -self.v.x;
        }
        if self.x.y + r > height || self.x.y - r < 0.0 {
            self.v.y = -self.v.y;
        }
    }

    /// Fade the highlight in while the pointer is close, out otherwise.
    /// A particle at full highlight holds it for as long as the pointer
    /// stays near.
    pub fn update_highlight(&mut self, ctx: &TickContext) {
        let near = distance(&ctx.pointer.0, &self.x) < ctx.proximity_radius;

        if near {
            if self.opacity < ctx.max_opacity {
                self.opacity = (self.opacity + ctx.opacity_step).min(ctx.max_opacity);
            }
        } else if self.opacity > 0.0 {
            self.opacity = (self.opacity - ctx.opacity_step).max(0.0);
        }
    }

    /// Explicit Euler step with a unit tick
    pub fn integrate(&mut self) {
        self.x += self.v;
    }
}

/// Advance `particles[index]` by one tick
///
/// Draws first, then resolves against every touching neighbour in
/// collection order, reflects, updates the highlight and moves.
pub fn update<C: Canvas>(particles: &mut [Particle], index: usize, ctx: &TickContext, canvas: &mut C) {
    particles[index].draw(ctx, canvas);

    let contact = 2.0 * ctx.radius;
    for other in 0..particles.len() {
        if other == index {
            continue;
        }
        let (me, them) = pair_mut(particles, index, other);
        if distance(&me.x, &them.x) - contact <= 0.0 {
            resolve_collision(me, them);
        }
    }

    let me = &mut particles[index];
    me.reflect_at_bounds(ctx);
    me.update_highlight(ctx);
    me.integrate();
}
