use super::bounds::Bounds;
use super::{Advance, Entity, TickContext};
use crate::config::PROJECTILE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileOwner {
    Player,
    Boss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub owner: ProjectileOwner,
    /// Positive travels toward the leading edge, negative toward the player side
    pub velocity_x: f32,
}

impl Projectile {
    /// Builds a projectile centred on (`center_x`, `center_y`).
    pub fn new(center_x: f32, center_y: f32, owner: ProjectileOwner, velocity_x: f32) -> Self {
        let bounds = Bounds::from_center(center_x, center_y, PROJECTILE_SIZE.0, PROJECTILE_SIZE.1);
        Self {
            x: bounds.x,
            y: bounds.y,
            owner,
            velocity_x,
        }
    }

    /// True once the projectile has fully left the play area in its direction of travel
    pub fn is_out_of_bounds(&self, play_width: f32) -> bool {
        let bounds = self.bounds();
        if self.velocity_x >= 0.0 {
            bounds.left() > play_width
        } else {
            bounds.right() < 0.0
        }
    }

    pub fn get_width(&self) -> f32 {
        PROJECTILE_SIZE.0
    }

    pub fn get_height(&self) -> f32 {
        PROJECTILE_SIZE.1
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.get_width(), self.get_height())
    }

    fn advance(&mut self, ctx: &TickContext) -> Advance {
        self.x += self.velocity_x;
        if self.is_out_of_bounds(ctx.config.play_width) {
            return Advance::expired();
        }
        Advance::alive()
    }
}
