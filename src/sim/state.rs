//! Game state and entity types
//!
//! The complete simulation state lives in one serializable `GameState` value;
//! update functions mutate only the slice they own.

use serde::{Deserialize, Serialize};

use super::fleet::build_fleet;
use super::rect::Rect;
use crate::settings::{BaseSettings, DynamicSettings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-game or post-game-over: entities render frozen, Play control visible
    Inactive,
    /// Full simulation running
    Active,
    /// Brief fixed-duration freeze after a life loss; input is ignored
    HitPause,
}

/// One-tick notifications for the HUD/frontend
///
/// Drained by the caller after each tick; they are refresh signals, not data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    ScoreChanged,
    HighScoreChanged,
    LevelChanged,
    ShipsChanged,
    ShipHit,
    GameOver,
}

/// Mutable session statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score this process lifetime; survives resets
    pub high_score: u32,
}

impl GameStats {
    pub fn new(base: &BaseSettings) -> Self {
        Self {
            ships_left: base.ship_limit,
            score: 0,
            level: 1,
            high_score: 0,
        }
    }

    /// Reinitialize the per-run counters. Never touches `high_score`.
    pub fn reset(&mut self, base: &BaseSettings) {
        self.ships_left = base.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(base: &BaseSettings) -> Self {
        let mut ship = Self {
            rect: Rect::new(0.0, 0.0, base.ship_width, base.ship_height),
            moving_left: false,
            moving_right: false,
        };
        ship.center(base);
        ship
    }

    /// Advance one tick of horizontal motion, clamped to screen bounds.
    ///
    /// The right branch runs before the left branch, so holding both keys
    /// nets one step left per tick. Arbitrary but deterministic.
    pub fn update(&mut self, tuning: &DynamicSettings, base: &BaseSettings) {
        if self.moving_right && self.rect.right() < base.screen_width {
            self.rect.pos.x += tuning.ship_speed;
        }
        if self.moving_left && self.rect.left() > 0.0 {
            self.rect.pos.x -= tuning.ship_speed;
        }
    }

    /// Reset to bottom-center of the screen (new game, life loss)
    pub fn center(&mut self, base: &BaseSettings) {
        self.rect = Rect::from_bottom_center(
            base.screen_width / 2.0,
            base.screen_height,
            base.ship_width,
            base.ship_height,
        );
    }
}

/// An upward-moving projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    /// Spawn at the ship's top, centered on its current x
    pub fn fired_from(ship: &Ship, base: &BaseSettings) -> Self {
        Self {
            rect: Rect::from_bottom_center(
                ship.rect.center_x(),
                ship.rect.top(),
                base.bullet_width,
                base.bullet_height,
            ),
        }
    }

    /// Move up one tick
    pub fn update(&mut self, bullet_speed: f32) {
        self.rect.pos.y -= bullet_speed;
    }

    /// Fully above the top of the screen
    pub fn offscreen(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

/// One fleet member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub rect: Rect,
}

impl Alien {
    pub fn new(x: f32, y: f32, base: &BaseSettings) -> Self {
        Self {
            rect: Rect::new(x, y, base.alien_width, base.alien_height),
        }
    }

    /// Move one tick in the shared fleet direction
    pub fn update(&mut self, alien_speed: f32, fleet_direction: f32) {
        self.rect.pos.x += alien_speed * fleet_direction;
    }

    /// True when this alien's own rect touches a horizontal screen edge
    pub fn at_edge(&self, screen_width: f32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0.0
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub base: BaseSettings,
    pub tuning: DynamicSettings,
    pub stats: GameStats,
    pub phase: GamePhase,
    /// Remaining ticks of the post-hit freeze; meaningful only in HitPause
    pub hit_pause_ticks: u32,
    pub ship: Ship,
    /// Live bullets in fire order
    pub bullets: Vec<Bullet>,
    /// The fleet, built row-major
    pub aliens: Vec<Alien>,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Notifications from the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Initial state: Inactive, with a fleet built for the frozen backdrop
    pub fn new(base: BaseSettings) -> Self {
        let tuning = DynamicSettings::from_base(&base);
        let stats = GameStats::new(&base);
        let ship = Ship::new(&base);
        let aliens = build_fleet(&base);
        Self {
            base,
            tuning,
            stats,
            phase: GamePhase::Inactive,
            hit_pause_ticks: 0,
            ship,
            bullets: Vec::new(),
            aliens,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Whether the simulation advances entities this tick
    pub fn game_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Full new-run transition: reset tuning and stats, rebuild the fleet,
    /// recenter the ship, enter Active.
    pub fn begin_run(&mut self) {
        self.tuning = DynamicSettings::from_base(&self.base);
        self.stats.reset(&self.base);
        self.time_ticks = 0;

        self.aliens.clear();
        self.bullets.clear();
        self.aliens = build_fleet(&self.base);
        self.ship.center(&self.base);
        self.ship.moving_left = false;
        self.ship.moving_right = false;

        self.phase = GamePhase::Active;
        self.push_event(GameEvent::GameStarted);
        self.push_event(GameEvent::ScoreChanged);
        self.push_event(GameEvent::LevelChanged);
        self.push_event(GameEvent::ShipsChanged);
        log::info!(
            "new run: {} ships, fleet of {}",
            self.stats.ships_left,
            self.aliens.len()
        );
    }
}
