use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Boss, Enemy, GameState};
use crate::world::World;

/// What a spawn pass created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spawned {
    pub enemy: bool,
    pub boss: bool,
}

/// Runs one spawn pass: a 1-in-N enemy roll, then the boss threshold check.
/// Nothing rolls while a boss is on the field.
pub fn spawn<R: Rng>(
    rng: &mut R,
    state: &mut GameState,
    world: &mut World,
    config: &GameConfig,
) -> Spawned {
    let mut spawned = Spawned::default();

    if !state.boss_spawned && rng.random_range(1..=config.enemy_spawn_odds) == 1 {
        let (min_speed, max_speed) = config.enemy_speed_range;
        let speed = rng.random_range(min_speed..=max_speed) as f32;
        world
            .enemies
            .push(Enemy::new(config.play_width, config.spawn_y, speed));
        spawned.enemy = true;
        log::trace!("enemy spawned with speed {speed}");
    }

    if !state.boss_spawned && state.enemy_kill_count >= config.boss_spawn_kills {
        let health = config.boss_health.health_for(state.current_level);
        state.boss_health = health;
        state.boss_spawned = true;
        world.bosses.push(Boss::new(
            config.play_width,
            config.spawn_y,
            config.boss_base_speed,
            health,
        ));
        spawned.boss = true;
        log::info!(
            "boss spawned on level {} with {} health",
            state.current_level,
            health
        );
    }

    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (GameConfig, GameState, World) {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        let world = World::new(&config);
        (config, state, world)
    }

    #[test]
    fn test_enemy_spawn_rate_is_about_one_percent() {
        let (config, mut state, mut world) = setup();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..20_000 {
            spawn(&mut rng, &mut state, &mut world, &config);
        }
        // 200 expected
        let count = world.enemies.len();
        assert!((140..=260).contains(&count), "spawned {count}");
    }

    #[test]
    fn test_enemy_spawns_at_leading_edge_with_bounded_speed() {
        let (config, mut state, mut world) = setup();
        let mut rng = Pcg32::seed_from_u64(11);
        while world.enemies.len() < 50 {
            spawn(&mut rng, &mut state, &mut world, &config);
        }
        for enemy in &world.enemies {
            assert_eq!(enemy.x, 1080.0);
            assert_eq!(enemy.y, 700.0);
            assert!((1.0..=3.0).contains(&enemy.speed));
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let schedule = |seed: u64| {
            let (config, mut state, mut world) = setup();
            let mut rng = Pcg32::seed_from_u64(seed);
            (0..2_000)
                .map(|_| spawn(&mut rng, &mut state, &mut world, &config).enemy)
                .collect::<Vec<_>>()
        };
        assert_eq!(schedule(99), schedule(99));
    }

    #[test]
    fn test_no_enemies_while_boss_alive() {
        let (config, mut state, mut world) = setup();
        state.boss_spawned = true;
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..5_000 {
            let spawned = spawn(&mut rng, &mut state, &mut world, &config);
            assert_eq!(spawned, Spawned::default());
        }
        assert!(world.enemies.is_empty());
        assert!(world.bosses.is_empty());
    }

    #[test]
    fn test_boss_spawns_at_kill_threshold() {
        let (config, mut state, mut world) = setup();
        let mut rng = Pcg32::seed_from_u64(5);

        state.enemy_kill_count = 19;
        assert!(!spawn(&mut rng, &mut state, &mut world, &config).boss);

        state.enemy_kill_count = 20;
        assert!(spawn(&mut rng, &mut state, &mut world, &config).boss);
        assert!(state.boss_spawned);
        assert_eq!(world.bosses.len(), 1);
        assert_eq!(world.bosses[0].health, 10);
        assert_eq!(world.bosses[0].x, 1080.0);

        // Gate holds for later ticks
        for _ in 0..100 {
            spawn(&mut rng, &mut state, &mut world, &config);
        }
        assert_eq!(world.bosses.len(), 1);
    }

    #[test]
    fn test_boss_health_follows_level() {
        for (level, expected) in [(1, 10), (2, 20), (3, 25)] {
            let (config, mut state, mut world) = setup();
            let mut rng = Pcg32::seed_from_u64(1);
            state.current_level = level;
            state.enemy_kill_count = 20;
            spawn(&mut rng, &mut state, &mut world, &config);
            assert_eq!(world.bosses[0].health, expected);
            assert_eq!(state.boss_health, expected);
        }
    }
}
