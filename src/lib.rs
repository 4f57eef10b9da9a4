//! Space Swarm - a grid-fleet arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fleet formation, collisions, game state)
//! - `hud`: Scoreboard text preparation and the Play button
//! - `platform`: Display/input boundary traits for frontends
//! - `settings`: Static base tuning and per-run derived tuning
//! - `highscores`: In-memory session leaderboard

pub mod highscores;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{BaseSettings, DynamicSettings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate. All speeds are in pixels per tick.
    pub const TICK_HZ: u32 = 60;
    /// Ticks the simulation stays frozen after a life loss (~0.5 s)
    pub const HIT_PAUSE_TICKS: u32 = TICK_HZ / 2;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 60.0;
    pub const SHIP_HEIGHT: f32 = 60.0;
    pub const SHIP_SPEED: f32 = 1.5;
    /// Ships granted per run
    pub const SHIP_LIMIT: u32 = 3;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 3.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 3.0;
    /// Maximum bullets alive at once
    pub const BULLETS_ALLOWED: usize = 3;

    /// Alien defaults
    pub const ALIEN_WIDTH: f32 = 40.0;
    pub const ALIEN_HEIGHT: f32 = 40.0;
    pub const ALIEN_SPEED: f32 = 1.0;
    /// Vertical drop applied to the whole fleet when it reaches an edge
    pub const FLEET_DROP_SPEED: f32 = 10.0;
    /// Points for one destroyed alien at level 1
    pub const ALIEN_POINTS: u32 = 50;

    /// Difficulty scaling per level-up
    pub const SPEEDUP_SCALE: f32 = 1.1;
    pub const SCORE_SCALE: f32 = 1.5;
}
