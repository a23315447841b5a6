//! Asterfall entry point
//!
//! Hosts the simulation: drains input events, runs the fixed tick, hands each
//! frame's draw list to the render collaborator, and paces with a constant
//! end-of-frame delay. This build ships the headless demo host; the core only
//! ever sees input flags and emits draw commands, so a windowed front end
//! swaps in without touching anything under `sim/`.

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use asterfall::consts::*;
use asterfall::platform::{InputEvent, Key, apply_event};
use asterfall::render::{Assets, FontId, Frame, TextureId, compose_frame};
use asterfall::settings::Settings;
use asterfall::sim::{GamePhase, GameState, TickInput, tick};

/// Why the loop stopped, returned to the caller instead of exiting the
/// process from inside input handling.
#[derive(Debug, PartialEq, Eq)]
enum LoopExit {
    /// The event source signalled quit
    Quit,
}

/// Host-side session state: the simulation plus the input flags being
/// accumulated for the next tick.
struct Game {
    state: GameState,
    input: TickInput,
}

impl Game {
    fn new(seed: u64, assets: Assets) -> Self {
        Self {
            state: GameState::new(seed, assets),
            input: TickInput::default(),
        }
    }
}

/// A scripted event source standing in for the window's event queue: it lines
/// the ship up under the lowest asteroid, fires every few ticks, restarts
/// after a game over, and quits once its run length is up.
struct DemoPilot {
    ticks_left: u64,
}

impl DemoPilot {
    fn new(run_ticks: u64) -> Self {
        Self {
            ticks_left: run_ticks,
        }
    }

    fn poll(&mut self, state: &GameState) -> Vec<InputEvent> {
        if self.ticks_left == 0 {
            return vec![InputEvent::Quit];
        }
        self.ticks_left -= 1;

        let mut events = Vec::new();
        match state.phase {
            GamePhase::GameOver => events.push(InputEvent::KeyDown(Key::Restart)),
            GamePhase::Playing => {
                let target = state
                    .asteroids
                    .live()
                    .iter()
                    .filter(|ast| !ast.is_inert())
                    .max_by_key(|ast| ast.pos.y)
                    .map(|ast| ast.pos.x);

                events.push(InputEvent::KeyUp(Key::Left));
                events.push(InputEvent::KeyUp(Key::Right));
                if let Some(x) = target {
                    let dx = x - state.player.pos.x;
                    if dx < -PLAYER_STEP {
                        events.push(InputEvent::KeyDown(Key::Left));
                    } else if dx > PLAYER_STEP {
                        events.push(InputEvent::KeyDown(Key::Right));
                    }
                }
                if state.ticks % 5 == 0 {
                    events.push(InputEvent::KeyDown(Key::Fire));
                }
            }
        }
        events
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Asterfall starting...");

    let settings = Settings::load();
    let assets = load_assets();

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {seed}");

    let mut game = Game::new(seed, assets);
    let exit = run(&mut game, &settings);

    log::info!(
        "Session over ({exit:?}): {} ticks, {} collisions, {} lives left",
        game.state.ticks,
        game.state.collisions,
        game.state.lives
    );
    ExitCode::SUCCESS
}

/// Drive the loop until the event source quits: drain events, tick, compose
/// and present the frame, sleep the constant pacing delay.
fn run(game: &mut Game, settings: &Settings) -> LoopExit {
    let mut pilot = DemoPilot::new(settings.demo_ticks);
    let hud_period = settings.hud_log_period_ticks.max(1);

    loop {
        for event in pilot.poll(&game.state) {
            if apply_event(&mut game.input, event) {
                return LoopExit::Quit;
            }
        }

        tick(&mut game.state, &game.input);
        // One-shots only fire on the tick that consumed them
        game.input.fire = false;
        game.input.restart = false;

        let frame = compose_frame(&game.state);
        present(&frame);

        if game.state.ticks % hud_period == 0 {
            log::info!(
                "tick {}: {} draw commands, lives={} collisions={}",
                game.state.ticks,
                frame.commands.len(),
                game.state.lives,
                game.state.collisions
            );
        }

        thread::sleep(Duration::from_millis(settings.tick_delay_ms));
    }
}

/// The render collaborator seam. The headless host drops the commands after
/// logging; building them is what the demo exercises.
fn present(frame: &Frame) {
    log::trace!("frame with {} draw commands", frame.commands.len());
}

/// The asset collaborator. The demo host has no loader, so the handles are
/// plain table slots; a windowed host fills the same struct from disk and
/// must exit non-zero if any asset fails to load.
fn load_assets() -> Assets {
    Assets {
        player_sheet: TextureId(1),
        bullet: TextureId(2),
        asteroid: TextureId(3),
        hud_font: FontId(1),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
