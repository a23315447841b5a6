//! Spawn policy and asteroid drift
//!
//! All randomness flows through the state-owned seeded RNG so a run can be
//! replayed from its seed.

use glam::IVec2;
use rand::Rng;

use super::state::{Asteroid, Bullet, GameState};
use crate::consts::*;

/// One Bernoulli draw per tick; on success a fresh asteroid enters just above
/// the visible top edge at a random column.
pub fn maybe_spawn_asteroid(state: &mut GameState) {
    if !state.rng.random_bool(ASTEROID_SPAWN_CHANCE) {
        return;
    }
    let x = state.rng.random_range(0..SCREEN_WIDTH);
    spawn_asteroid(state, x);
}

/// A full pool only recycles once its newest member has scrolled out the
/// bottom; until then fresh spawns are dropped on the floor.
fn spawn_asteroid(state: &mut GameState, x: i32) {
    if state.asteroids.is_full()
        && state
            .asteroids
            .last()
            .is_some_and(|ast| ast.pos.y > SCREEN_HEIGHT)
    {
        state.asteroids.flush();
    }

    let ast = Asteroid::new(IVec2::new(x, ASTEROID_SPAWN_Y), state.assets.asteroid);
    if state.asteroids.insert(ast) {
        log::debug!("Asteroid spawned at x={x}");
    } else {
        log::debug!("Asteroid pool full, spawn dropped");
    }
}

/// Fire straight from the player's position. There is no cooldown; the only
/// rate limit is the pool wrapping, which flushes everything and starts over
/// at slot 0 so the fresh shot always lands.
pub fn fire_bullet(state: &mut GameState) {
    if state.player.bullets.is_full() {
        state.player.bullets.flush();
    }
    let bullet = Bullet::new(state.player.pos, state.assets.bullet);
    state.player.bullets.insert(bullet);
}

/// Per-tick drift: constant fall plus two independent low-probability
/// horizontal nudges, both bounded to the screen.
///
/// Every slot in the live range advances, inert ones included; otherwise a
/// bullet-killed slot at the pool's tail would stall above the bottom edge
/// and hold the flush condition shut for good.
pub fn advance_asteroids(state: &mut GameState) {
    let rng = &mut state.rng;
    for ast in state.asteroids.live_mut() {
        if ast.pos.y > SCREEN_HEIGHT + ASTEROID_BOTTOM_MARGIN {
            continue;
        }
        ast.pos.y += ASTEROID_FALL_STEP;

        if rng.random_bool(ASTEROID_JITTER_CHANCE) && ast.pos.x > 0 {
            ast.pos.x -= 1;
        }
        if rng.random_bool(ASTEROID_JITTER_CHANCE) && ast.pos.x < SCREEN_WIDTH - ASTEROID_SIZE {
            ast.pos.x += 1;
        }
    }
}
