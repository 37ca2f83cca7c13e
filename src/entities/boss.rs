use super::bounds::Bounds;
use super::projectile::{Projectile, ProjectileOwner};
use super::{Advance, Entity, TickContext};
use crate::config::BOSS_SIZE;

#[derive(Debug, Clone)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Hits left before the boss goes down
    pub health: u32,
    /// Ticks since the last shot
    pub shoot_timer: u32,
}

impl Boss {
    pub fn new(x: f32, y: f32, speed: f32, health: u32) -> Self {
        Self {
            x,
            y,
            speed,
            health,
            shoot_timer: 0,
        }
    }

    pub fn speed_at_level(&self, level: u32) -> f32 {
        self.speed + level as f32
    }

    /// Takes one hit. Returns true once health is gone.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.is_defeated()
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn get_width(&self) -> f32 {
        BOSS_SIZE.0
    }

    pub fn get_height(&self) -> f32 {
        BOSS_SIZE.1
    }
}

impl Entity for Boss {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.get_width(), self.get_height())
    }

    fn advance(&mut self, ctx: &TickContext) -> Advance {
        self.x -= self.speed_at_level(ctx.level);
        let expired = self.bounds().right() < 0.0;

        // The shot still goes out on the tick the boss leaves the screen
        self.shoot_timer += 1;
        let fired = if self.shoot_timer >= ctx.config.boss_shoot_interval {
            self.shoot_timer = 0;
            let bounds = self.bounds();
            Some(Projectile::new(
                bounds.left(),
                bounds.center_y(),
                ProjectileOwner::Boss,
                ctx.config.boss_projectile_speed,
            ))
        } else {
            None
        };

        Advance { expired, fired }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::Controls;

    fn ctx(config: &GameConfig, level: u32) -> TickContext<'_> {
        TickContext {
            controls: Controls::default(),
            level,
            config,
        }
    }

    #[test]
    fn test_boss_moves_by_base_speed_plus_level() {
        let config = GameConfig::default();
        let mut boss = Boss::new(1080.0, 700.0, config.boss_base_speed, 10);
        boss.advance(&ctx(&config, 1));
        assert_eq!(boss.x, 1077.0);
        boss.advance(&ctx(&config, 2));
        assert_eq!(boss.x, 1073.0);
    }

    #[test]
    fn test_boss_fires_every_sixty_ticks() {
        let config = GameConfig::default();
        let mut boss = Boss::new(1080.0, 700.0, 0.0, 10);
        let level = 0;

        let mut shots = Vec::new();
        for tick in 1..=180 {
            if let Some(shot) = boss.advance(&ctx(&config, level)).fired {
                shots.push((tick, shot));
            }
        }

        let ticks: Vec<u32> = shots.iter().map(|(tick, _)| *tick).collect();
        assert_eq!(ticks, vec![60, 120, 180]);
        assert_eq!(boss.shoot_timer, 0);

        let (_, shot) = &shots[0];
        assert_eq!(shot.owner, ProjectileOwner::Boss);
        assert_eq!(shot.velocity_x, -10.0);
        assert_eq!(shot.bounds().center_y(), boss.bounds().center_y());
        assert_eq!(shot.bounds().left() + shot.bounds().width / 2.0, boss.x);
    }

    #[test]
    fn test_boss_expires_off_trailing_edge() {
        let config = GameConfig::default();
        let mut boss = Boss::new(-60.0, 700.0, 2.0, 10);
        assert!(boss.advance(&ctx(&config, 1)).expired);
    }

    #[test]
    fn test_boss_take_hit() {
        let mut boss = Boss::new(0.0, 0.0, 2.0, 2);
        assert!(!boss.take_hit());
        assert_eq!(boss.health, 1);
        assert!(boss.take_hit());
        assert!(boss.is_defeated());
        // No underflow past zero
        assert!(boss.take_hit());
        assert_eq!(boss.health, 0);
    }
}
