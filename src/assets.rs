use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

use crate::config::{BOSS_SIZE, ENEMY_SIZE, PLAY_AREA_HEIGHT, PLAY_AREA_WIDTH, PLAYER_SIZE};

/// Environment variable that overrides the asset directory
pub const ASSET_DIR_ENV: &str = "SIDE_SCROLLER_ASSETS";

/// Logical sprite names the renderer asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Enemy,
    Boss,
    Background,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 4] = [
        SpriteKind::Player,
        SpriteKind::Enemy,
        SpriteKind::Boss,
        SpriteKind::Background,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteKind::Player => "main_player.png",
            SpriteKind::Enemy => "Enemy.png",
            SpriteKind::Boss => "Boss.png",
            SpriteKind::Background => "background.png",
        }
    }

    /// Pixel size the image is scaled to, equal to its size in world units
    pub fn size(&self) -> (u32, u32) {
        let (width, height) = match self {
            SpriteKind::Player => PLAYER_SIZE,
            SpriteKind::Enemy => ENEMY_SIZE,
            SpriteKind::Boss => BOSS_SIZE,
            SpriteKind::Background => (PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT),
        };
        (width as u32, height as u32)
    }
}

/// Sprite images, loaded once at startup
#[derive(Debug, Clone)]
pub struct AssetStore {
    player: RgbaImage,
    enemy: RgbaImage,
    boss: RgbaImage,
    background: RgbaImage,
}

impl AssetStore {
    /// `$SIDE_SCROLLER_ASSETS` if set, otherwise `./assets`
    pub fn default_dir() -> PathBuf {
        std::env::var_os(ASSET_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"))
    }

    /// Loads and scales every sprite. Any missing or broken file is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            player: load_sprite(dir, SpriteKind::Player)?,
            enemy: load_sprite(dir, SpriteKind::Enemy)?,
            boss: load_sprite(dir, SpriteKind::Boss)?,
            background: load_sprite(dir, SpriteKind::Background)?,
        })
    }

    /// Builds a store from images already in memory, scaling them like `load` does
    pub fn from_images(
        player: RgbaImage,
        enemy: RgbaImage,
        boss: RgbaImage,
        background: RgbaImage,
    ) -> Self {
        Self {
            player: fit(player, SpriteKind::Player),
            enemy: fit(enemy, SpriteKind::Enemy),
            boss: fit(boss, SpriteKind::Boss),
            background: fit(background, SpriteKind::Background),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> &RgbaImage {
        match kind {
            SpriteKind::Player => &self.player,
            SpriteKind::Enemy => &self.enemy,
            SpriteKind::Boss => &self.boss,
            SpriteKind::Background => &self.background,
        }
    }
}

fn load_sprite(dir: &Path, kind: SpriteKind) -> Result<RgbaImage> {
    let path = dir.join(kind.file_name());
    let image = image::open(&path)
        .wrap_err_with(|| format!("failed to load {:?} sprite from {}", kind, path.display()))?;
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(fit(image.to_rgba8(), kind))
}

fn fit(image: RgbaImage, kind: SpriteKind) -> RgbaImage {
    let (width, height) = kind.size();
    if image.dimensions() == (width, height) {
        return image;
    }
    image::imageops::resize(&image, width, height, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "side-scroller-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = AssetStore::load(Path::new("/definitely/not/here")).unwrap_err();
        assert!(format!("{err}").contains("Player"));
    }

    #[test]
    fn test_load_scales_to_entity_sizes() {
        let dir = scratch_dir("load");
        for kind in SpriteKind::ALL {
            RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255]))
                .save(dir.join(kind.file_name()))
                .unwrap();
        }

        let store = AssetStore::load(&dir).unwrap();
        for kind in SpriteKind::ALL {
            assert_eq!(store.get(kind).dimensions(), kind.size());
        }
        assert_eq!(store.get(SpriteKind::Boss).dimensions(), (60, 80));
        assert_eq!(*store.get(SpriteKind::Enemy).get_pixel(3, 3), Rgba([10, 20, 30, 255]));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_one_missing_sprite_fails_the_load() {
        let dir = scratch_dir("partial");
        for kind in [SpriteKind::Player, SpriteKind::Enemy, SpriteKind::Background] {
            RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]))
                .save(dir.join(kind.file_name()))
                .unwrap();
        }
        std::fs::remove_file(dir.join(SpriteKind::Boss.file_name())).ok();

        let err = AssetStore::load(&dir).unwrap_err();
        assert!(format!("{err}").contains("Boss.png"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_from_images_fits_sizes() {
        let pixel = Rgba([255, 0, 0, 255]);
        let store = AssetStore::from_images(
            RgbaImage::from_pixel(1, 1, pixel),
            RgbaImage::from_pixel(1, 1, pixel),
            RgbaImage::from_pixel(1, 1, pixel),
            RgbaImage::from_pixel(1, 1, pixel),
        );
        assert_eq!(store.get(SpriteKind::Player).dimensions(), (80, 70));
        assert_eq!(store.get(SpriteKind::Background).dimensions(), (1080, 800));
    }
}
