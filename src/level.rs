use crate::config::GameConfig;
use crate::entities::GameState;
use crate::world::World;

/// Clears every transient entity, recentres the player and reseeds boss
/// health for the current level. Score, lives and level are untouched.
pub fn reset_level(state: &mut GameState, world: &mut World, config: &GameConfig) {
    world.clear_transients();
    world.player.recenter(config);

    state.enemy_kill_count = 0;
    state.boss_spawned = false;
    state.boss_health = config.boss_health.health_for(state.current_level);

    log::debug!(
        "level {} reset, boss health {}",
        state.current_level,
        state.boss_health
    );
}

/// Moves on to the next level and resets it.
pub fn advance_level(state: &mut GameState, world: &mut World, config: &GameConfig) {
    state.current_level += 1;
    log::info!("advancing to level {}", state.current_level);
    reset_level(state, world, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Boss, Enemy, Projectile, ProjectileOwner};

    fn busy_world(config: &GameConfig) -> World {
        let mut world = World::new(config);
        world.enemies.push(Enemy::new(300.0, 700.0, 2.0));
        world.bosses.push(Boss::new(800.0, 700.0, 2.0, 10));
        world
            .projectiles
            .push(Projectile::new(100.0, 700.0, ProjectileOwner::Player, 10.0));
        world
            .boss_projectiles
            .push(Projectile::new(700.0, 700.0, ProjectileOwner::Boss, -10.0));
        world.player.x = 12.0;
        world.player.y = 400.0;
        world
    }

    #[test]
    fn test_reset_clears_transients_and_recentres() {
        let config = GameConfig::default();
        let mut world = busy_world(&config);
        let mut state = GameState::new(&config);
        state.score = 120;
        state.lives = 2;
        state.enemy_kill_count = 7;
        state.boss_spawned = true;
        state.boss_health = 3;

        reset_level(&mut state, &mut world, &config);

        assert!(!world.has_transients());
        assert_eq!(world.player.x, 500.0);
        assert_eq!(world.player.y, 665.0);
        assert_eq!(state.score, 120);
        assert_eq!(state.lives, 2);
        assert_eq!(state.current_level, 1);
        assert_eq!(state.enemy_kill_count, 0);
        assert!(!state.boss_spawned);
        assert_eq!(state.boss_health, 10);
    }

    #[test]
    fn test_advance_reseeds_from_table() {
        let config = GameConfig::default();
        let mut world = busy_world(&config);
        let mut state = GameState::new(&config);

        advance_level(&mut state, &mut world, &config);
        assert_eq!(state.current_level, 2);
        assert_eq!(state.boss_health, 20);

        advance_level(&mut state, &mut world, &config);
        assert_eq!(state.current_level, 3);
        assert_eq!(state.boss_health, 25);
        assert!(!world.has_transients());
    }
}
