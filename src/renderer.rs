use image::RgbaImage;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::assets::{AssetStore, SpriteKind};
use crate::config::GameConfig;
use crate::entities::{Bounds, Entity, GamePhase, GameState, Projectile, ProjectileOwner};
use crate::world::World;

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: &str = "▀";

/// Pixels with less alpha than this are treated as see-through
const ALPHA_CUTOFF: u8 = 128;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub phase: GamePhase,
    pub state: &'a GameState,
    pub world: &'a World,
    pub config: &'a GameConfig,
    pub assets: &'a AssetStore,
    pub area: Rect,
    pub fps: u32,
}

/// Score, lives and level overlay text, top to bottom
pub fn hud_lines(state: &GameState) -> [String; 3] {
    [
        format!("Score: {}", state.score),
        format!("Lives: {}", state.lives),
        format!("Level: {}", state.current_level),
    ]
}

/// Maps world units onto terminal cells, two pixel rows per cell
#[derive(Debug, Clone, Copy)]
struct Viewport {
    area: Rect,
    /// World units per cell column
    unit_x: f32,
    /// World units per half-cell row
    unit_y: f32,
}

impl Viewport {
    fn new(area: Rect, config: &GameConfig) -> Self {
        let columns = area.width.max(1) as f32;
        let rows = (area.height.max(1) as f32) * 2.0;
        Self {
            area,
            unit_x: config.play_width / columns,
            unit_y: config.play_height / rows,
        }
    }

    /// World-space centre of the top and bottom half of a cell
    fn sample_points(&self, column: u16, row: u16) -> (f32, [f32; 2]) {
        let x = (column as f32 + 0.5) * self.unit_x;
        let top = (row as f32 * 2.0 + 0.5) * self.unit_y;
        let bottom = (row as f32 * 2.0 + 1.5) * self.unit_y;
        (x, [top, bottom])
    }

    /// Cells covered by `bounds`, clipped to the viewport
    fn cells(&self, bounds: &Bounds) -> Option<(u16, u16, u16, u16)> {
        let to_col = |x: f32| (x / self.unit_x).clamp(0.0, self.area.width as f32);
        let to_row = |y: f32| (y / (self.unit_y * 2.0)).clamp(0.0, self.area.height as f32);

        let col_start = to_col(bounds.left()).floor() as u16;
        let col_end = to_col(bounds.right()).ceil() as u16;
        let row_start = to_row(bounds.top()).floor() as u16;
        let row_end = to_row(bounds.bottom()).ceil() as u16;

        if col_start >= col_end || row_start >= row_end {
            return None;
        }
        Some((col_start, col_end, row_start, row_end))
    }

    fn cell_of(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let column = (x / self.unit_x) as u16;
        let row = (y / (self.unit_y * 2.0)) as u16;
        (column < self.area.width && row < self.area.height).then_some((column, row))
    }
}

fn pixel_color(image: &RgbaImage, x: f32, y: f32) -> Option<Color> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (px, py) = (x as u32, y as u32);
    if px >= image.width() || py >= image.height() {
        return None;
    }
    let [r, g, b, a] = image.get_pixel(px, py).0;
    (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.phase {
            GamePhase::Running => self.render_game(frame, view),
            GamePhase::GameOver => self.render_game_over(frame, view),
        }
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let viewport = Viewport::new(area, view.config);
        let world = view.world;

        let buffer = frame.buffer_mut();
        self.draw_background(buffer, &viewport, view.assets.get(SpriteKind::Background));

        let player = view.assets.get(SpriteKind::Player);
        self.draw_sprite(buffer, &viewport, &world.player.bounds(), player);
        for enemy in &world.enemies {
            let sprite = view.assets.get(SpriteKind::Enemy);
            self.draw_sprite(buffer, &viewport, &enemy.bounds(), sprite);
        }
        for boss in &world.bosses {
            let sprite = view.assets.get(SpriteKind::Boss);
            self.draw_sprite(buffer, &viewport, &boss.bounds(), sprite);
        }
        for projectile in world.projectiles.iter().chain(&world.boss_projectiles) {
            self.draw_projectile(buffer, &viewport, projectile);
        }

        // Score, lives and level in the top left corner
        let hud: Vec<Line> = hud_lines(view.state)
            .into_iter()
            .map(|text| {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        let hud_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: 20.min(area.width.saturating_sub(1)),
            height: 3.min(area.height),
        };
        frame.render_widget(Paragraph::new(hud), hud_area);

        // Boss health gets the row under the HUD
        if view.state.boss_spawned && !world.bosses.is_empty() && area.height > 3 {
            let boss_line = Line::from(vec![
                Span::styled("Boss: ", Style::default().fg(Color::White)),
                Span::styled(
                    "█".repeat(view.state.boss_health as usize),
                    Style::default().fg(Color::Red),
                ),
            ]);
            let boss_area = Rect {
                x: area.x,
                y: area.y + 3,
                width: area.width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(boss_line).centered(), boss_area);
        }

        // Controls hint and FPS at bottom
        let controls = Line::from(vec![Span::styled(
            format!(
                "[A/D: Move] [Space: Jump] [X: Fire] [Q: Quit]  FPS: {}",
                view.fps
            ),
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn draw_background(&self, buffer: &mut Buffer, viewport: &Viewport, image: &RgbaImage) {
        let area = viewport.area;
        for row in 0..area.height {
            for column in 0..area.width {
                let (x, [top, bottom]) = viewport.sample_points(column, row);
                let top = pixel_color(image, x, top).unwrap_or(Color::Black);
                let bottom = pixel_color(image, x, bottom).unwrap_or(Color::Black);
                if let Some(cell) = buffer.cell_mut((area.x + column, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }

    /// Paints the opaque pixels of `image` over the cells `bounds` covers
    fn draw_sprite(
        &self,
        buffer: &mut Buffer,
        viewport: &Viewport,
        bounds: &Bounds,
        image: &RgbaImage,
    ) {
        let Some((col_start, col_end, row_start, row_end)) = viewport.cells(bounds) else {
            return;
        };
        let area = viewport.area;

        for row in row_start..row_end {
            for column in col_start..col_end {
                let (x, [top, bottom]) = viewport.sample_points(column, row);
                let Some(cell) = buffer.cell_mut((area.x + column, area.y + row)) else {
                    continue;
                };

                if bounds.contains_point(x, top)
                    && let Some(color) = pixel_color(image, x - bounds.x, top - bounds.y)
                {
                    cell.set_fg(color);
                }
                if bounds.contains_point(x, bottom)
                    && let Some(color) = pixel_color(image, x - bounds.x, bottom - bounds.y)
                {
                    cell.set_bg(color);
                }
            }
        }
    }

    fn draw_projectile(&self, buffer: &mut Buffer, viewport: &Viewport, projectile: &Projectile) {
        let bounds = projectile.bounds();
        let Some((column, row)) = viewport.cell_of(bounds.x + bounds.width / 2.0, bounds.center_y())
        else {
            return;
        };
        let (symbol, color) = match projectile.owner {
            ProjectileOwner::Player => ("━", Color::White),
            ProjectileOwner::Boss => ("═", Color::Red),
        };
        let area = viewport.area;
        if let Some(cell) = buffer.cell_mut((area.x + column, area.y + row)) {
            cell.set_symbol(symbol)
                .set_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        }
    }

    /// Renders the game over screen
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║         GAME OVER         ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.state.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Reached Level: {}", view.state.current_level))
                .centered()
                .cyan()
                .bold(),
            Line::from(""),
            Line::from("Press R to Restart or Q to Quit")
                .centered()
                .white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}
