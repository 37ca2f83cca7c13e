/// Fixed simulation rate
pub const TICKS_PER_SECOND: u32 = 60;

/// Play area dimensions in world units
pub const PLAY_AREA_WIDTH: f32 = 1080.0;
pub const PLAY_AREA_HEIGHT: f32 = 800.0;

/// Entity sprite sizes (width, height)
pub const PLAYER_SIZE: (f32, f32) = (80.0, 70.0);
pub const ENEMY_SIZE: (f32, f32) = (40.0, 60.0);
pub const BOSS_SIZE: (f32, f32) = (60.0, 80.0);
pub const PROJECTILE_SIZE: (f32, f32) = (10.0, 5.0);

/// Boss health per level, indexed by `level - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossHealthTable {
    entries: Vec<u32>,
}

impl Default for BossHealthTable {
    fn default() -> Self {
        Self::new(vec![10, 20, 25])
    }
}

impl BossHealthTable {
    /// Panics on an empty table; a level with no boss health is meaningless.
    pub fn new(entries: Vec<u32>) -> Self {
        assert!(!entries.is_empty(), "boss health table needs at least one level");
        Self { entries }
    }

    /// Health for `level` (1-based).
    ///
    /// Levels past the end of the table keep growing by the step between the
    /// last two entries, so 1→10, 2→20, 3→25 continues 4→30, 5→35.
    pub fn health_for(&self, level: u32) -> u32 {
        let index = level.max(1) as usize - 1;
        if let Some(&health) = self.entries.get(index) {
            return health;
        }

        let last = *self.entries.last().unwrap_or(&0);
        let step = match self.entries.len() {
            0 | 1 => 0,
            n => last.saturating_sub(self.entries[n - 2]),
        };
        let extra_levels = (index - (self.entries.len() - 1)) as u32;
        last.saturating_add(step.saturating_mul(extra_levels))
    }
}

/// All gameplay numbers in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub play_width: f32,
    pub play_height: f32,
    /// y coordinate the player's feet rest on
    pub ground_line: f32,

    pub player_speed: f32,
    pub jump_impulse: f32,
    pub gravity: f32,

    /// Enemy speed is drawn from this inclusive range once per enemy
    pub enemy_speed_range: (u32, u32),
    pub boss_base_speed: f32,
    pub boss_shoot_interval: u32,
    pub projectile_speed: f32,
    pub boss_projectile_speed: f32,

    /// One enemy spawns when a 1..=N draw comes up 1
    pub enemy_spawn_odds: u32,
    /// Enemies and bosses enter with this top-left y
    pub spawn_y: f32,

    pub starting_lives: u32,
    pub enemy_points: u32,
    pub boss_points: u32,
    /// One extra life per this many kills
    pub bonus_life_kills: u32,
    /// Kills needed before the boss appears
    pub boss_spawn_kills: u32,
    pub boss_contact_damage: u32,

    pub boss_health: BossHealthTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_width: PLAY_AREA_WIDTH,
            play_height: PLAY_AREA_HEIGHT,
            ground_line: PLAY_AREA_HEIGHT - 50.0,

            player_speed: 5.0,
            jump_impulse: 15.0,
            gravity: 0.5,

            enemy_speed_range: (1, 3),
            boss_base_speed: 2.0,
            boss_shoot_interval: TICKS_PER_SECOND,
            projectile_speed: 10.0,
            boss_projectile_speed: -10.0,

            enemy_spawn_odds: 100,
            spawn_y: PLAY_AREA_HEIGHT - 100.0,

            starting_lives: 3,
            enemy_points: 10,
            boss_points: 50,
            bonus_life_kills: 10,
            boss_spawn_kills: 20,
            boss_contact_damage: 2,

            boss_health: BossHealthTable::default(),
        }
    }
}

impl GameConfig {
    /// Where the player starts and where a level reset puts them back.
    pub fn player_spawn_center(&self) -> (f32, f32) {
        (self.play_width / 2.0, self.play_height - 100.0)
    }
}
