//! Draw-command surface
//!
//! The simulation never touches a GPU or a glyph. Each tick it translates its
//! state into positioned, texture-tagged commands; executing them (blitting,
//! text rasterization, vsync) is entirely the render collaborator's problem.

use crate::consts::*;
use crate::sim::collision::Rect;
use crate::sim::state::{GamePhase, GameState};

/// Opaque handle into the host's texture table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureId(pub u32);

/// Opaque handle to the host's HUD font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontId(pub u32);

/// Handles provided once at startup by the asset collaborator. The core only
/// ever tags entities and commands with them.
#[derive(Debug, Clone, Copy)]
pub struct Assets {
    pub player_sheet: TextureId,
    pub bullet: TextureId,
    pub asteroid: TextureId,
    pub hud_font: FontId,
}

/// A single command for the render collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Blit `src` (or the whole texture when `None`) to `dest`.
    Sprite {
        texture: TextureId,
        src: Option<Rect>,
        dest: Rect,
    },
    /// Rasterize and draw one line of text with its top-left at (x, y).
    Text {
        font: FontId,
        text: String,
        x: i32,
        y: i32,
    },
}

/// One frame's draw list, in paint order.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn text(&mut self, font: FontId, text: String, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text { font, text, x, y });
    }

    fn sprite(&mut self, texture: TextureId, src: Option<Rect>, dest: Rect) {
        self.commands.push(DrawCommand::Sprite { texture, src, dest });
    }
}

/// Translate the current state into a draw list: HUD text, then the player
/// with its animation frame, live bullets, live asteroids. In game over the
/// player and bullets vanish behind the message while the asteroid field
/// stays on screen. Inert zero-area slots are skipped.
pub fn compose_frame(state: &GameState) -> Frame {
    let mut frame = Frame::default();
    let font = state.assets.hud_font;

    match state.phase {
        GamePhase::Playing => {
            frame.text(
                font,
                format!("collision detected:  {}", state.collisions),
                100,
                100,
            );
            frame.text(font, format!("player lives:  {}", state.lives), 100, 125);

            frame.sprite(
                state.player.texture,
                Some(state.player.frame_src()),
                state.player.bounds(),
            );

            for bullet in state.player.bullets.live() {
                if bullet.is_inert() {
                    continue;
                }
                frame.sprite(bullet.texture, None, bullet.bounds());
            }
        }
        GamePhase::GameOver => {
            frame.text(
                font,
                "Game Over".to_string(),
                SCREEN_WIDTH / 2 - 50,
                (SCREEN_HEIGHT - 100) / 2,
            );
            frame.text(
                font,
                "Press Enter To Continue".to_string(),
                SCREEN_WIDTH / 2 - 110,
                (SCREEN_HEIGHT - 100) / 2 + 100,
            );
        }
    }

    for ast in state.asteroids.live() {
        if ast.is_inert() {
            continue;
        }
        frame.sprite(ast.texture, None, ast.bounds());
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Asteroid, Bullet};
    use glam::IVec2;

    fn test_state() -> GameState {
        GameState::new(
            3,
            Assets {
                player_sheet: TextureId(1),
                bullet: TextureId(2),
                asteroid: TextureId(3),
                hud_font: FontId(1),
            },
        )
    }

    fn texts(frame: &Frame) -> Vec<&str> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn playing_frame_has_hud_then_player() {
        let mut state = test_state();
        state.collisions = 4;
        let frame = compose_frame(&state);

        assert_eq!(
            texts(&frame),
            vec!["collision detected:  4", "player lives:  3"]
        );
        assert!(frame.commands.contains(&DrawCommand::Sprite {
            texture: TextureId(1),
            src: Some(Rect::new(0, 0, PLAYER_W, PLAYER_H)),
            dest: Rect::new(468, 375, PLAYER_W, PLAYER_H),
        }));
    }

    #[test]
    fn player_sprite_uses_the_current_animation_frame() {
        let mut state = test_state();
        state.player.frame_offset = 64;
        let frame = compose_frame(&state);

        assert!(frame.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Sprite {
                src: Some(Rect { x: 64, y: 0, .. }),
                ..
            }
        )));
    }

    #[test]
    fn live_entities_are_drawn_and_inert_slots_skipped() {
        let mut state = test_state();
        state
            .asteroids
            .insert(Asteroid::new(IVec2::new(10, 10), TextureId(3)));
        state.asteroids.insert(Asteroid::default());
        state
            .player
            .bullets
            .insert(Bullet::new(IVec2::new(20, 20), TextureId(2)));
        state.player.bullets.insert(Bullet::default());

        let frame = compose_frame(&state);
        let sprites: Vec<_> = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .collect();

        // Player + one bullet + one asteroid; the two inert slots draw nothing
        assert_eq!(sprites.len(), 3);
    }

    #[test]
    fn game_over_frame_drops_player_and_keeps_asteroids() {
        let mut state = test_state();
        state.phase = GamePhase::GameOver;
        state
            .asteroids
            .insert(Asteroid::new(IVec2::new(10, 10), TextureId(3)));

        let frame = compose_frame(&state);

        assert_eq!(texts(&frame), vec!["Game Over", "Press Enter To Continue"]);
        let sprites: Vec<_> = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .collect();
        assert_eq!(sprites.len(), 1);
        assert!(matches!(
            sprites[0],
            DrawCommand::Sprite {
                texture: TextureId(3),
                ..
            }
        ));
    }
}
