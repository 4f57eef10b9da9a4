//! Scoreboard text preparation and the Play button
//!
//! The scoreboard owns no game data: it caches display strings and refreshes
//! them when the simulation reports a change. Frontends draw the cached text.

use glam::Vec2;

use crate::settings::BaseSettings;
use crate::sim::{GameEvent, GameStats, Rect};

/// Cached HUD strings for the current stats
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// Ship icons to draw
    pub ships_left: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Self {
            score_text: String::new(),
            high_score_text: String::new(),
            level_text: String::new(),
            ships_left: 0,
        };
        sb.prep_score(stats);
        sb.prep_high_score(stats);
        sb.prep_level(stats);
        sb.prep_ships(stats);
        sb
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships_left = stats.ships_left;
    }

    /// Refresh the high-score text if the stats have moved past it
    pub fn check_high_score(&mut self, stats: &GameStats) {
        if self.high_score_text != format_score(stats.high_score) {
            self.prep_high_score(stats);
            log::debug!("new high score: {}", self.high_score_text);
        }
    }

    /// Map one tick's events to the matching refreshes
    pub fn apply_events(&mut self, stats: &GameStats, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::GameStarted => {
                    self.prep_score(stats);
                    self.prep_level(stats);
                    self.prep_ships(stats);
                }
                GameEvent::ScoreChanged => self.prep_score(stats),
                GameEvent::HighScoreChanged => self.check_high_score(stats),
                GameEvent::LevelChanged => self.prep_level(stats),
                GameEvent::ShipsChanged => self.prep_ships(stats),
                GameEvent::ShipHit | GameEvent::GameOver => {}
            }
        }
    }
}

/// Score display: rounded to the nearest 10, comma-grouped
fn format_score(score: u32) -> String {
    let rounded = (score + 5) / 10 * 10;
    group_digits(rounded)
}

fn group_digits(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The Play control: a labeled rect centered on screen
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    /// Fill and text colors (RGB)
    pub button_color: [u8; 3],
    pub text_color: [u8; 3],
}

impl Button {
    pub const WIDTH: f32 = 200.0;
    pub const HEIGHT: f32 = 50.0;

    pub fn play(base: &BaseSettings) -> Self {
        let center = Vec2::new(base.screen_width / 2.0, base.screen_height / 2.0);
        Self {
            rect: Rect::from_center(center, Self::WIDTH, Self::HEIGHT),
            label: "Play".to_string(),
            button_color: [0, 135, 0],
            text_color: [255, 255, 255],
        }
    }

    /// Pointer-down hit test
    pub fn hit(&self, pos: Vec2) -> bool {
        self.rect.contains_point(pos)
    }
}
