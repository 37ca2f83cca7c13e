use crate::config::GameConfig;

/// Top-level mode of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Simulation advances every tick
    Running,
    /// Terminal; only restart and quit are read
    GameOver,
}

/// Player progress for one run. Rebuilt from scratch on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    /// Zero means the run is over
    pub lives: u32,
    /// Kills since the last level reset
    pub enemy_kill_count: u32,
    /// 1-based
    pub current_level: u32,
    /// Gate that keeps a second boss from appearing
    pub boss_spawned: bool,
    /// Remaining hits on the current (or next) boss
    pub boss_health: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            enemy_kill_count: 0,
            current_level: 1,
            boss_spawned: false,
            boss_health: config.boss_health.health_for(1),
        }
    }

    /// Removes up to `amount` lives, stopping at zero. Returns true if any remain.
    pub fn lose_lives(&mut self, amount: u32) -> bool {
        self.lives = self.lives.saturating_sub(amount);
        self.lives > 0
    }

    /// Records a projectile kill and hands out the bonus life on every
    /// `bonus_life_kills`-th kill. Returns true if a life was granted.
    pub fn record_kill(&mut self, config: &GameConfig) -> bool {
        self.score += config.enemy_points;
        self.enemy_kill_count += 1;
        if config.bonus_life_kills > 0 && self.enemy_kill_count % config.bonus_life_kills == 0 {
            self.lives += 1;
            return true;
        }
        false
    }
}
