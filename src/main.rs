use color_eyre::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;

use side_scroller::app::App;
use side_scroller::assets::AssetStore;
use side_scroller::config::GameConfig;

/// Environment variable that pins the random seed for a reproducible run
const SEED_ENV: &str = "SIDE_SCROLLER_SEED";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let seed = match std::env::var(SEED_ENV) {
        Ok(value) => value.parse::<u64>()?,
        Err(_) => rand::rng().random(),
    };
    log::info!("rng seed {seed}");

    // Fail before touching the terminal if sprites are missing
    let assets = AssetStore::load(&AssetStore::default_dir())?;

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::debug!("keyboard enhancement supported: {supports_keyboard_enhancement}");

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(GameConfig::default(), Pcg32::seed_from_u64(seed), assets)
        .run(&mut terminal);

    // Cleanup runs whatever the game loop returned
    if supports_keyboard_enhancement {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("game loop failed: {err}");
    }
    result
}

/// Logs go to `debug.log` since stdout belongs to the terminal UI.
fn init_logging() -> Result<()> {
    let file = File::create("debug.log")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
