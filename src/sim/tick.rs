//! Per-tick simulation orchestration
//!
//! One call to [`tick`] advances the game by exactly one unit of simulation
//! time. The host owns pacing and event draining; nothing in here blocks.

use super::collision::detect_collisions;
use super::spawn;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input flags for a single tick.
///
/// Direction flags are level-triggered (held keys); `fire` and `restart` are
/// one-shots the host clears after the tick that consumed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.ticks += 1;
    match state.phase {
        GamePhase::Playing => tick_playing(state, input),
        GamePhase::GameOver => tick_game_over(state, input),
    }
}

/// Per-tick order: spawn, fire, player movement and animation, bullet
/// advancement, asteroid drift, collisions, game-over check.
fn tick_playing(state: &mut GameState, input: &TickInput) {
    spawn::maybe_spawn_asteroid(state);

    if input.fire {
        spawn::fire_bullet(state);
    }

    state.player.apply_movement(input);
    state.player.advance_animation(state.ticks);

    advance_bullets(state);
    spawn::advance_asteroids(state);

    detect_collisions(state);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over after {} collisions", state.collisions);
    }
}

/// Player and bullets freeze; the asteroid field keeps spawning and falling
/// behind the game-over text until the restart command arrives. Fire is
/// ignored here.
fn tick_game_over(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }
    spawn::maybe_spawn_asteroid(state);
    spawn::advance_asteroids(state);
}

/// Move live bullets up the screen. A bullet whose y went negative last pass
/// is cleared on this one, so it stays observable for exactly one tick beyond
/// the top edge.
fn advance_bullets(state: &mut GameState) {
    for bullet in state.player.bullets.live_mut() {
        if bullet.pos.y < 0 {
            *bullet = Default::default();
        } else if !bullet.is_inert() {
            bullet.pos.y -= BULLET_STEP;
        }
    }
}
