use crate::config::GameConfig;
use crate::entities::{Boss, Enemy, Player, Projectile};

/// The player plus every transient entity on screen
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bosses: Vec<Boss>,
    /// Player shots
    pub projectiles: Vec<Projectile>,
    pub boss_projectiles: Vec<Projectile>,
}

impl World {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config),
            enemies: Vec::new(),
            bosses: Vec::new(),
            projectiles: Vec::new(),
            boss_projectiles: Vec::new(),
        }
    }

    /// Drops enemies, bosses and both projectile sets. The player stays.
    pub fn clear_transients(&mut self) {
        self.enemies.clear();
        self.bosses.clear();
        self.projectiles.clear();
        self.boss_projectiles.clear();
    }

    pub fn has_transients(&self) -> bool {
        !(self.enemies.is_empty()
            && self.bosses.is_empty()
            && self.projectiles.is_empty()
            && self.boss_projectiles.is_empty())
    }
}
