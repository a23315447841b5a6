//! Axis-aligned collision detection and its gameplay consequences
//!
//! Everything on screen is a rectangle, so the whole system is one strict
//! AABB overlap predicate applied to two entity pairings per tick.

use super::state::{Asteroid, Bullet, GameState};

/// Integer pixel rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Strict AABB overlap: rectangles sharing only an edge do not overlap, and a
/// zero-area rectangle overlaps nothing, which is what keeps inert pool slots
/// out of play without an alive flag.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x.max(b.x) < (a.x + a.w).min(b.x + b.w) && a.y.max(b.y) < (a.y + a.h).min(b.y + b.h)
}

/// One collision pass over the live asteroids.
///
/// For each asteroid the player check runs before the bullet sweep, so a
/// player hit and a bullet kill can both land on the same asteroid within a
/// single tick. Hits zero the involved slots in place; indices never shift.
/// O(asteroids x bullets), which is fine at 10 x 100.
pub fn detect_collisions(state: &mut GameState) {
    for i in 0..state.asteroids.len() {
        if overlaps(state.player.bounds(), state.asteroids.live()[i].bounds()) {
            state.player.reset_to_center();
            state.lives = state.lives.saturating_sub(1);
            state.collisions += 1;
            log::info!(
                "Player asteroid collision detected: {} (lives {})",
                state.collisions,
                state.lives
            );
        }

        for j in 0..state.player.bullets.len() {
            // Re-read the asteroid each time: once a bullet kills it, the
            // zeroed slot must not absorb further bullets this tick
            let ast_bounds = state.asteroids.live()[i].bounds();
            let bullet_bounds = state.player.bullets.live()[j].bounds();
            if overlaps(ast_bounds, bullet_bounds) {
                state.asteroids.live_mut()[i] = Asteroid::default();
                state.player.bullets.live_mut()[j] = Bullet::default();
                state.collisions += 1;
                log::info!("Bullet asteroid collision detected: {}", state.collisions);
            }
        }
    }
}
