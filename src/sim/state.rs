//! Game state and core entity types

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::pool::EntityPool;
use super::tick::TickInput;
use crate::consts::*;
use crate::render::{Assets, TextureId};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; the asteroid field keeps falling until a restart
    GameOver,
}

/// A bullet in flight. The zero value doubles as the inert dead-slot marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bullet {
    pub pos: IVec2,
    pub w: i32,
    pub h: i32,
    /// Shared handle into the host's texture table, not owned
    pub texture: TextureId,
}

impl Bullet {
    pub fn new(pos: IVec2, texture: TextureId) -> Self {
        Self {
            pos,
            w: BULLET_SIZE,
            h: BULLET_SIZE,
            texture,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }

    /// Inert slots have zero extent and fail every overlap test.
    pub fn is_inert(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// A descending asteroid. The zero value doubles as the inert dead-slot marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Asteroid {
    pub pos: IVec2,
    pub w: i32,
    pub h: i32,
    /// Shared handle into the host's texture table, not owned
    pub texture: TextureId,
}

impl Asteroid {
    pub fn new(pos: IVec2, texture: TextureId) -> Self {
        Self {
            pos,
            w: ASTEROID_SIZE,
            h: ASTEROID_SIZE,
            texture,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }

    pub fn is_inert(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// The player ship: position, three-frame animation, and the bullets it owns.
///
/// Created once per session and only ever reset, never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: IVec2,
    /// Horizontal offset into the sprite sheet for the current frame
    pub frame_offset: i32,
    pub texture: TextureId,
    pub bullets: EntityPool<Bullet, MAX_BULLETS>,
}

impl Player {
    pub fn new(texture: TextureId) -> Self {
        let mut player = Self {
            pos: IVec2::ZERO,
            frame_offset: 0,
            texture,
            bullets: EntityPool::new(),
        };
        player.reset_to_center();
        log::info!("Player initialized at {}", player.pos);
        player
    }

    /// Respawn point: horizontal center biased one sprite width left,
    /// vertical center. Does not reset the animation phase.
    pub fn reset_to_center(&mut self) {
        self.pos = IVec2::new(SCREEN_WIDTH / 2 - PLAYER_W, (SCREEN_HEIGHT - PLAYER_H) / 2);
    }

    /// Step in each held direction, but only when the move stays inside
    /// `[0, screen_extent - player_extent]` on that axis. Axes are
    /// independent, so diagonals compose from both.
    pub fn apply_movement(&mut self, input: &TickInput) {
        if input.up && self.pos.y - PLAYER_STEP >= 0 {
            self.pos.y -= PLAYER_STEP;
        }
        if input.down && self.pos.y + PLAYER_STEP <= SCREEN_HEIGHT - PLAYER_H {
            self.pos.y += PLAYER_STEP;
        }
        if input.left && self.pos.x - PLAYER_STEP >= 0 {
            self.pos.x -= PLAYER_STEP;
        }
        if input.right && self.pos.x + PLAYER_STEP <= SCREEN_WIDTH - PLAYER_W {
            self.pos.x += PLAYER_STEP;
        }
    }

    /// Advance the three-frame cycle from elapsed ticks alone, decoupled from
    /// movement distance. Wraps back to frame 0 past the sheet width.
    pub fn advance_animation(&mut self, ticks: u64) {
        if ticks % ANIM_PERIOD == 0 {
            self.frame_offset += PLAYER_W;
            if self.frame_offset >= PLAYER_SHEET_W {
                self.frame_offset = 0;
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_W, PLAYER_H)
    }

    /// Source rectangle into the sprite sheet for the current frame.
    pub fn frame_src(&self) -> Rect {
        Rect::new(self.frame_offset, 0, PLAYER_W, PLAYER_H)
    }
}

/// Complete simulation state, owned by the host loop and advanced by
/// [`tick`](super::tick::tick) once per frame.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for logging and replay
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub ticks: u64,
    pub phase: GamePhase,
    pub lives: u8,
    /// Collisions of both kinds, the score surrogate shown on the HUD
    pub collisions: u32,
    pub player: Player,
    pub asteroids: EntityPool<Asteroid, MAX_ASTEROIDS>,
    /// Opaque handles from the asset collaborator
    pub assets: Assets,
}

impl GameState {
    /// Create a fresh game with the given seed. Same seed + same inputs
    /// replay the same run.
    pub fn new(seed: u64, assets: Assets) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
            phase: GamePhase::Playing,
            lives: START_LIVES,
            collisions: 0,
            player: Player::new(assets.player_sheet),
            asteroids: EntityPool::new(),
            assets,
        }
    }

    /// Back to a fresh game: full lives, zeroed counter, centered player,
    /// empty pools. The RNG and tick counter keep running; a restart is not
    /// a reseed.
    pub fn restart(&mut self) {
        self.lives = START_LIVES;
        self.collisions = 0;
        self.phase = GamePhase::Playing;
        self.player.reset_to_center();
        self.player.bullets.flush();
        self.asteroids.flush();
        log::info!("Restarted with {} lives", self.lives);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Assets, FontId};

    fn test_assets() -> Assets {
        Assets {
            player_sheet: TextureId(1),
            bullet: TextureId(2),
            asteroid: TextureId(3),
            hud_font: FontId(1),
        }
    }

    fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }

    #[test]
    fn player_spawns_at_center() {
        let player = Player::new(TextureId(1));
        assert_eq!(player.pos, IVec2::new(468, 375));
    }

    #[test]
    fn movement_clamps_at_top_edge() {
        let mut player = Player::new(TextureId(1));
        let input = held(true, false, false, false);
        for _ in 0..100 {
            player.apply_movement(&input);
            assert!(player.pos.y >= 0);
        }
        // 375 is not a multiple of the step, so the ship parks just short
        assert_eq!(player.pos.y, 5);
    }

    #[test]
    fn movement_clamps_at_bottom_edge() {
        let mut player = Player::new(TextureId(1));
        let input = held(false, true, false, false);
        for _ in 0..100 {
            player.apply_movement(&input);
            assert!(player.pos.y <= SCREEN_HEIGHT - PLAYER_H);
        }
        assert_eq!(player.pos.y, 745);
    }

    #[test]
    fn movement_clamps_at_left_edge() {
        let mut player = Player::new(TextureId(1));
        let input = held(false, false, true, false);
        for _ in 0..100 {
            player.apply_movement(&input);
            assert!(player.pos.x >= 0);
        }
        assert_eq!(player.pos.x, 8);
    }

    #[test]
    fn movement_clamps_at_right_edge() {
        let mut player = Player::new(TextureId(1));
        let input = held(false, false, false, true);
        for _ in 0..100 {
            player.apply_movement(&input);
            assert!(player.pos.x <= SCREEN_WIDTH - PLAYER_W);
        }
        // 468 + 50 * 10 lands exactly on the bound
        assert_eq!(player.pos.x, 968);
    }

    #[test]
    fn diagonal_movement_composes_both_axes() {
        let mut player = Player::new(TextureId(1));
        player.apply_movement(&held(true, false, true, false));
        assert_eq!(player.pos, IVec2::new(458, 365));
    }

    #[test]
    fn animation_cycles_three_frames() {
        let mut player = Player::new(TextureId(1));
        let mut seen = Vec::new();
        for tick in 1..=12u64 {
            player.advance_animation(tick);
            if tick % ANIM_PERIOD == 0 {
                seen.push(player.frame_offset);
            }
        }
        assert_eq!(seen, vec![32, 64, 0]);
    }

    #[test]
    fn animation_ignores_off_period_ticks() {
        let mut player = Player::new(TextureId(1));
        player.advance_animation(1);
        player.advance_animation(2);
        player.advance_animation(3);
        assert_eq!(player.frame_offset, 0);
    }

    #[test]
    fn reset_to_center_keeps_animation_phase() {
        let mut player = Player::new(TextureId(1));
        player.advance_animation(ANIM_PERIOD);
        player.pos = IVec2::new(0, 0);
        player.reset_to_center();
        assert_eq!(player.pos, IVec2::new(468, 375));
        assert_eq!(player.frame_offset, 32);
    }

    #[test]
    fn restart_resets_counters_and_pools() {
        let mut state = GameState::new(7, test_assets());
        state.lives = 0;
        state.collisions = 9;
        state.phase = GamePhase::GameOver;
        state
            .asteroids
            .insert(Asteroid::new(IVec2::new(10, 10), TextureId(3)));
        state
            .player
            .bullets
            .insert(Bullet::new(IVec2::new(5, 5), TextureId(2)));

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.collisions, 0);
        assert!(state.asteroids.is_empty());
        assert!(state.player.bullets.is_empty());
        assert_eq!(state.player.pos, IVec2::new(468, 375));
    }
}
