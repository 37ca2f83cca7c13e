use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GamePhase;

/// Frames a held key stays down without a repeat, for terminals that never
/// report key releases
const HOLD_FRAMES: u8 = 10;

/// Logical controls for one tick. The simulation never sees raw keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Held
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Pressed since the previous tick
    pub fire: bool,
    pub quit: bool,
    pub restart: bool,
}

/// Frames left on each held key
#[derive(Debug, Default)]
struct KeyState {
    left: u8,
    right: u8,
    jump: u8,
}

/// Manages input polling and translates raw key events into [`Controls`]
pub struct InputManager {
    key_state: KeyState,
    fire_pressed: bool,
    quit_pressed: bool,
    restart_pressed: bool,
    /// Set once the terminal sends a release event; held keys stop decaying
    reports_release: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            fire_pressed: false,
            quit_pressed: false,
            restart_pressed: false,
            reports_release: false,
        }
    }

    /// Drains all pending terminal events without blocking.
    /// Call once per frame before [`InputManager::take_controls`].
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event);
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key_event),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.quit_pressed = true;
            return;
        }

        match key_event.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = HOLD_FRAMES;
                self.key_state.right = 0;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = HOLD_FRAMES;
                self.key_state.left = 0;
            }
            KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.jump = HOLD_FRAMES;
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                // Repeats from a held key do not count as new shots
                if key_event.kind == KeyEventKind::Press {
                    self.fire_pressed = true;
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart_pressed = true;
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        self.reports_release = true;
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = 0;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = 0;
            }
            KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.jump = 0;
            }
            _ => {}
        }
    }

    /// Returns this frame's controls and clears the one-shot presses.
    ///
    /// During game over only quit and restart come through.
    pub fn take_controls(&mut self, phase: GamePhase) -> Controls {
        let controls = match phase {
            GamePhase::Running => Controls {
                left: self.key_state.left > 0,
                right: self.key_state.right > 0,
                jump: self.key_state.jump > 0,
                fire: self.fire_pressed,
                quit: self.quit_pressed,
                restart: false,
            },
            GamePhase::GameOver => Controls {
                quit: self.quit_pressed,
                restart: self.restart_pressed,
                ..Controls::default()
            },
        };

        self.fire_pressed = false;
        self.quit_pressed = false;
        self.restart_pressed = false;
        if !self.reports_release {
            let state = &mut self.key_state;
            state.left = state.left.saturating_sub(1);
            state.right = state.right.saturating_sub(1);
            state.jump = state.jump.saturating_sub(1);
        }

        controls
    }
}
