//! Display/input boundary
//!
//! The simulation performs no I/O. Frontends implement `DisplaySurface` and
//! `InputSource`; `InputCollector` folds raw events into the per-tick
//! `TickInput`; `render_frame` draws the whole scene through the trait.

use std::collections::VecDeque;

use glam::Vec2;

use crate::hud::{Button, Scoreboard};
use crate::sim::{GamePhase, GameState, Rect, TickInput};

pub type Color = [u8; 3];

/// Logical keys the core cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Quit,
    /// Anything unmapped
    Other,
}

/// Discrete events produced by an input device
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close / process quit signal
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerDown(Vec2),
}

/// A fixed-size 2D drawing surface
pub trait DisplaySurface {
    fn clear(&mut self, bg: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, pos: Vec2, text: &str);
    /// Flip the finished frame to the screen
    fn present(&mut self);
}

/// A source of discrete input events, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Folds input events into held movement flags and one-shot signals
#[derive(Debug, Default)]
pub struct InputCollector {
    held_left: bool,
    held_right: bool,
    fire_queued: bool,
    start_queued: bool,
    quit_requested: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event. The Play button only registers while Inactive.
    pub fn handle(&mut self, event: &InputEvent, play_button: &Button, phase: GamePhase) {
        match event {
            InputEvent::Quit => self.quit_requested = true,
            InputEvent::KeyDown(Key::Left) => self.held_left = true,
            InputEvent::KeyDown(Key::Right) => self.held_right = true,
            InputEvent::KeyDown(Key::Fire) => self.fire_queued = true,
            InputEvent::KeyDown(Key::Quit) => self.quit_requested = true,
            InputEvent::KeyDown(Key::Other) => {}
            InputEvent::KeyUp(Key::Left) => self.held_left = false,
            InputEvent::KeyUp(Key::Right) => self.held_right = false,
            InputEvent::KeyUp(_) => {}
            InputEvent::PointerDown(pos) => {
                if phase == GamePhase::Inactive && play_button.hit(*pos) {
                    self.start_queued = true;
                }
            }
        }
    }

    /// Quit is unconditional; the driver exits as soon as it sees this
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The input for this tick; one-shot signals are consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            move_left: self.held_left,
            move_right: self.held_right,
            fire: self.fire_queued,
            start: self.start_queued,
        };
        self.fire_queued = false;
        self.start_queued = false;
        input
    }
}

/// Entity colors for frontends without sprite assets
const SHIP_COLOR: Color = [40, 40, 60];
const ALIEN_COLOR: Color = [90, 140, 90];

/// Draw one frame: backdrop, entities, HUD, and the Play control when idle
pub fn render_frame(
    state: &GameState,
    scoreboard: &Scoreboard,
    play_button: &Button,
    surface: &mut dyn DisplaySurface,
) {
    surface.clear(state.base.bg_color);

    surface.fill_rect(state.ship.rect, SHIP_COLOR);
    for bullet in &state.bullets {
        surface.fill_rect(bullet.rect, state.base.bullet_color);
    }
    for alien in &state.aliens {
        surface.fill_rect(alien.rect, ALIEN_COLOR);
    }

    // HUD along the top edge: score right, level under it, ships left
    let right = state.base.screen_width;
    surface.draw_text(Vec2::new(right - 160.0, 20.0), &scoreboard.score_text);
    surface.draw_text(
        Vec2::new(right / 2.0 - 60.0, 20.0),
        &scoreboard.high_score_text,
    );
    surface.draw_text(Vec2::new(right - 160.0, 50.0), &scoreboard.level_text);
    for i in 0..scoreboard.ships_left {
        let icon = Rect::new(10.0 + 30.0 * i as f32, 10.0, 24.0, 24.0);
        surface.fill_rect(icon, SHIP_COLOR);
    }

    if state.phase == GamePhase::Inactive {
        surface.fill_rect(play_button.rect, play_button.button_color);
        surface.draw_text(play_button.rect.center(), &play_button.label);
    }

    surface.present();
}

/// Display surface that only counts draw calls; backs the demo and tests
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub frames_presented: u64,
    pub rects_drawn: u64,
    pub texts_drawn: u64,
}

impl DisplaySurface for HeadlessSurface {
    fn clear(&mut self, _bg: Color) {}

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.rects_drawn += 1;
    }

    fn draw_text(&mut self, _pos: Vec2, _text: &str) {
        self.texts_drawn += 1;
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

/// Pre-scripted event source for the demo driver and tests
#[derive(Debug, Default)]
pub struct QueuedInput {
    queue: VecDeque<Vec<InputEvent>>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events for one future frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.queue.push_back(events);
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.queue.pop_front().unwrap_or_default()
    }
}
