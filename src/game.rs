use rand::Rng;

use crate::collision::{self, Resolution};
use crate::config::GameConfig;
use crate::entities::{Entity, GamePhase, GameState, TickContext, advance_all};
use crate::input::Controls;
use crate::spawner;
use crate::world::World;

/// Whether the caller should keep ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs the simulation one tick per [`Game::step`]. Terminals and timing are
/// left to the caller.
pub struct Game<R> {
    config: GameConfig,
    phase: GamePhase,
    state: GameState,
    world: World,
    rng: R,
    /// Ticks simulated in the current run
    tick_count: u64,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let state = GameState::new(&config);
        let world = World::new(&config);
        Self {
            config,
            phase: GamePhase::Running,
            state,
            world,
            rng,
            tick_count: 0,
        }
    }

    /// Advances one tick in whatever phase the game is in.
    pub fn step(&mut self, controls: &Controls) -> Flow {
        if controls.quit {
            log::info!("quit requested");
            return Flow::Quit;
        }

        match self.phase {
            GamePhase::Running => self.tick(controls),
            GamePhase::GameOver => {
                if controls.restart {
                    self.restart();
                }
            }
        }
        Flow::Continue
    }

    fn tick(&mut self, controls: &Controls) {
        self.tick_count += 1;

        if controls.fire {
            let shot = self.world.player.fire(&self.config);
            self.world.projectiles.push(shot);
        }

        let ctx = TickContext {
            controls: *controls,
            level: self.state.current_level,
            config: &self.config,
        };

        self.world.player.advance(&ctx);

        // Neither projectile set fires anything of its own
        let mut fired = Vec::new();
        advance_all(&mut self.world.projectiles, &ctx, &mut fired);
        advance_all(&mut self.world.boss_projectiles, &ctx, &mut fired);

        spawner::spawn(
            &mut self.rng,
            &mut self.state,
            &mut self.world,
            &self.config,
        );

        advance_all(&mut self.world.enemies, &ctx, &mut fired);
        let bosses_before = self.world.bosses.len();
        advance_all(&mut self.world.bosses, &ctx, &mut fired);
        if self.world.bosses.len() < bosses_before && self.world.bosses.is_empty() {
            // A boss that walked off screen frees the gate for the next one
            log::info!("boss escaped off screen");
            self.state.boss_spawned = false;
        }
        self.world.boss_projectiles.extend(fired);

        if collision::resolve(&mut self.state, &mut self.world, &self.config)
            == Resolution::GameOver
        {
            log::info!(
                "game over after {} ticks: score {}, level {}",
                self.tick_count,
                self.state.score,
                self.state.current_level
            );
            self.phase = GamePhase::GameOver;
        }
    }

    /// Throws away the run and starts a new one. The random stream carries on.
    pub fn restart(&mut self) {
        log::info!("restarting");
        self.state = GameState::new(&self.config);
        self.world = World::new(&self.config);
        self.phase = GamePhase::Running;
        self.tick_count = 0;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
