use crate::config::GameConfig;
use crate::entities::{Bounds, Entity, GameState, Projectile};
use crate::level;
use crate::world::World;

/// How the tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Continue,
    GameOver,
}

/// Removes every projectile overlapping `target`. Returns true if any did.
fn remove_overlapping(projectiles: &mut Vec<Projectile>, target: &Bounds) -> bool {
    let before = projectiles.len();
    projectiles.retain(|projectile| !projectile.bounds().overlaps(target));
    projectiles.len() != before
}

/// Resolves one tick of contacts: enemies, then bosses, then boss shots
/// against the player. Losing the last life stops resolution for the tick.
pub fn resolve(state: &mut GameState, world: &mut World, config: &GameConfig) -> Resolution {
    if resolve_enemies(state, world, config) == Resolution::GameOver {
        return Resolution::GameOver;
    }
    if resolve_bosses(state, world, config) == Resolution::GameOver {
        return Resolution::GameOver;
    }
    resolve_boss_projectiles(state, world)
}

fn resolve_enemies(state: &mut GameState, world: &mut World, config: &GameConfig) -> Resolution {
    let mut idx = 0;
    while idx < world.enemies.len() {
        let enemy_bounds = world.enemies[idx].bounds();

        let shot_down = remove_overlapping(&mut world.projectiles, &enemy_bounds);
        if shot_down && state.record_kill(config) {
            log::info!(
                "bonus life at {} kills, lives now {}",
                state.enemy_kill_count,
                state.lives
            );
        }

        // An enemy shot down this tick still hits a player it overlaps
        if enemy_bounds.overlaps(&world.player.bounds()) {
            world.enemies.remove(idx);
            if !state.lose_lives(1) {
                log::info!("player caught by enemy, no lives left");
                return Resolution::GameOver;
            }
            log::info!("player caught by enemy, {} lives left", state.lives);
            level::reset_level(state, world, config);
            continue;
        }

        if shot_down {
            world.enemies.remove(idx);
        } else {
            idx += 1;
        }
    }
    Resolution::Continue
}

fn resolve_bosses(state: &mut GameState, world: &mut World, config: &GameConfig) -> Resolution {
    let mut idx = 0;
    while idx < world.bosses.len() {
        let boss_bounds = world.bosses[idx].bounds();

        if remove_overlapping(&mut world.projectiles, &boss_bounds) {
            let boss = &mut world.bosses[idx];
            let defeated = boss.take_hit();
            state.boss_health = boss.health;

            if defeated {
                world.bosses.remove(idx);
                state.score += config.boss_points;
                state.boss_spawned = false;
                log::info!(
                    "boss defeated on level {}, score {}",
                    state.current_level,
                    state.score
                );
                level::advance_level(state, world, config);
                continue;
            }
        }

        // Contact hurts the player; the boss itself takes no damage from it
        if boss_bounds.overlaps(&world.player.bounds()) {
            if !state.lose_lives(config.boss_contact_damage) {
                log::info!("player crushed by boss, no lives left");
                return Resolution::GameOver;
            }
            log::info!("player crushed by boss, {} lives left", state.lives);
            level::reset_level(state, world, config);
            continue;
        }

        idx += 1;
    }
    Resolution::Continue
}

fn resolve_boss_projectiles(state: &mut GameState, world: &mut World) -> Resolution {
    let player_bounds = world.player.bounds();
    if remove_overlapping(&mut world.boss_projectiles, &player_bounds) {
        if !state.lose_lives(1) {
            log::info!("player shot by boss, no lives left");
            return Resolution::GameOver;
        }
        log::info!("player shot by boss, {} lives left", state.lives);
    }
    Resolution::Continue
}
