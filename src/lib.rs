// Library exports for testing
pub use collision::Resolution;
pub use config::{BossHealthTable, GameConfig};
pub use entities::{
    Advance, Boss, Bounds, Enemy, Entity, GamePhase, GameState, Player, Projectile,
    ProjectileOwner, TickContext,
};
pub use game::{Flow, Game};
pub use input::Controls;
pub use spawner::Spawned;
pub use world::World;

pub mod app;
pub mod assets;
pub mod collision;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod level;
pub mod renderer;
pub mod spawner;
pub mod world;
