use super::bounds::Bounds;
use super::projectile::{Projectile, ProjectileOwner};
use super::{Advance, Entity, TickContext};
use crate::config::{GameConfig, PLAYER_SIZE};

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in world units
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Positive is downward
    pub velocity_y: f32,
    pub on_ground: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let mut player = Self {
            x: 0.0,
            y: 0.0,
            speed: config.player_speed,
            velocity_y: 0.0,
            on_ground: false,
        };
        player.recenter(config);
        player
    }

    /// Moves the player back to the spawn point. Velocity is left alone.
    pub fn recenter(&mut self, config: &GameConfig) {
        let (center_x, center_y) = config.player_spawn_center();
        let spawn = Bounds::from_center(center_x, center_y, self.get_width(), self.get_height());
        self.x = spawn.x;
        self.y = spawn.y;
    }

    /// No edge stops the player; it can walk out of the play area.
    pub fn move_left(&mut self) {
        self.x -= self.speed;
    }

    pub fn move_right(&mut self) {
        self.x += self.speed;
    }

    /// Only leaves the ground if standing on it.
    pub fn try_jump(&mut self, impulse: f32) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity_y = -impulse;
        self.on_ground = false;
        true
    }

    /// A shot leaving the player's leading edge at mid height
    pub fn fire(&self, config: &GameConfig) -> Projectile {
        let bounds = self.bounds();
        Projectile::new(
            bounds.right(),
            bounds.center_y(),
            ProjectileOwner::Player,
            config.projectile_speed,
        )
    }

    pub fn get_width(&self) -> f32 {
        PLAYER_SIZE.0
    }

    pub fn get_height(&self) -> f32 {
        PLAYER_SIZE.1
    }
}

impl Entity for Player {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.get_width(), self.get_height())
    }

    fn advance(&mut self, ctx: &TickContext) -> Advance {
        let config = ctx.config;
        self.velocity_y += config.gravity;

        if ctx.controls.left {
            self.move_left();
        }
        if ctx.controls.right {
            self.move_right();
        }
        if ctx.controls.jump {
            self.try_jump(config.jump_impulse);
        }

        self.y += self.velocity_y;

        if self.y + self.get_height() >= config.ground_line {
            self.y = config.ground_line - self.get_height();
            self.on_ground = true;
        }

        Advance::alive()
    }
}
