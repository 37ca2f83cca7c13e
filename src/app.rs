use color_eyre::Result;
use rand_pcg::Pcg32;
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};

use crate::assets::AssetStore;
use crate::config::{GameConfig, TICKS_PER_SECOND};
use crate::game::{Flow, Game};
use crate::input::InputManager;
use crate::renderer::{GameRenderer, RenderView};

/// The main application: owns the game and drives it against a terminal.
pub struct App {
    game: Game<Pcg32>,
    assets: AssetStore,
    /// Frames info
    tick_budget: Duration,
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    pub fn new(config: GameConfig, rng: Pcg32, assets: AssetStore) -> Self {
        Self {
            game: Game::new(config, rng),
            assets,
            tick_budget: Duration::from_secs(1) / TICKS_PER_SECOND,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop until the player quits.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            let frame_start = Instant::now();
            let frame_time = frame_start.duration_since(self.last_frame_time);
            self.last_frame_time = frame_start;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            self.input_manager.poll_events()?;
            let controls = self.input_manager.take_controls(self.game.phase());

            if self.game.step(&controls) == Flow::Quit {
                break;
            }

            terminal.draw(|frame| {
                let view = RenderView {
                    phase: self.game.phase(),
                    state: self.game.state(),
                    world: self.game.world(),
                    config: self.game.config(),
                    assets: &self.assets,
                    area: frame.area(),
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            // Sleep off whatever is left of this tick
            if let Some(remaining) = self.tick_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        Ok(())
    }
}
