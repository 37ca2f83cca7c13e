use super::bounds::Bounds;
use super::{Advance, Entity, TickContext};
use crate::config::ENEMY_SIZE;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Drawn once at spawn; the current level is added on top every tick
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self { x, y, speed }
    }

    /// Horizontal distance covered per tick at `level`
    pub fn speed_at_level(&self, level: u32) -> f32 {
        self.speed + level as f32
    }

    pub fn get_width(&self) -> f32 {
        ENEMY_SIZE.0
    }

    pub fn get_height(&self) -> f32 {
        ENEMY_SIZE.1
    }
}

impl Entity for Enemy {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.get_width(), self.get_height())
    }

    fn advance(&mut self, ctx: &TickContext) -> Advance {
        self.x -= self.speed_at_level(ctx.level);
        if self.bounds().right() < 0.0 {
            return Advance::expired();
        }
        Advance::alive()
    }
}
