mod boss;
mod bounds;
mod enemy;
mod game_state;
mod player;
mod projectile;

use crate::config::GameConfig;
use crate::input::Controls;

// Re-export all public types
pub use boss::Boss;
pub use bounds::Bounds;
pub use enemy::Enemy;
pub use game_state::{GamePhase, GameState};
pub use player::Player;
pub use projectile::{Projectile, ProjectileOwner};

/// Everything an entity may read while advancing one tick
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    /// Controls held this tick; only the player looks at them
    pub controls: Controls,
    pub level: u32,
    pub config: &'a GameConfig,
}

/// What happened to an entity during one `advance`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Advance {
    /// Left the play area and should be dropped
    pub expired: bool,
    /// Shot emitted this tick
    pub fired: Option<Projectile>,
}

impl Advance {
    pub fn alive() -> Self {
        Self::default()
    }

    pub fn expired() -> Self {
        Self {
            expired: true,
            fired: None,
        }
    }
}

/// Shared per-tick behaviour of every simulated thing
pub trait Entity {
    fn bounds(&self) -> Bounds;

    fn advance(&mut self, ctx: &TickContext) -> Advance;
}

/// Advances every entity in `items`, drops the expired ones and collects
/// anything they fired into `fired`.
pub fn advance_all<E: Entity>(items: &mut Vec<E>, ctx: &TickContext, fired: &mut Vec<Projectile>) {
    items.retain_mut(|item| {
        let step = item.advance(ctx);
        fired.extend(step.fired);
        !step.expired
    });
}
