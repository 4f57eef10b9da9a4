//! Game tuning values
//!
//! `BaseSettings` never changes during a session. `DynamicSettings` holds the
//! values that scale with difficulty; it is re-derived from the base at every
//! new game and scaled up on each level-up, so the base is never lost.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Static per-session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseSettings {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Background color (RGB)
    pub bg_color: [u8; 3],

    // === Ship ===
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_speed: f32,
    /// Ships granted per run
    pub ship_limit: u32,

    // === Bullets ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    pub bullet_color: [u8; 3],
    /// Maximum bullets alive at once
    pub bullets_allowed: usize,

    // === Aliens ===
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_speed: f32,
    /// Vertical drop applied to the whole fleet at a screen edge
    pub fleet_drop_speed: f32,
    /// Points per destroyed alien at level 1
    pub alien_points: u32,

    // === Difficulty scaling ===
    /// Speed multiplier applied on each level-up
    pub speedup_scale: f32,
    /// Alien point multiplier applied on each level-up
    pub score_scale: f32,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bg_color: [230, 230, 230],

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_speed: SHIP_SPEED,
            ship_limit: SHIP_LIMIT,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,
            bullet_color: [60, 60, 60],
            bullets_allowed: BULLETS_ALLOWED,

            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            alien_speed: ALIEN_SPEED,
            fleet_drop_speed: FLEET_DROP_SPEED,
            alien_points: ALIEN_POINTS,

            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
        }
    }
}

impl BaseSettings {
    /// Settings for a playfield of the given size (the windowing layer
    /// supplies the real screen dimensions at startup)
    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }
}

/// Per-run tuning derived from [`BaseSettings`]
///
/// Re-derived at every new game; never mutated in a way that loses the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// Current points per destroyed alien
    pub alien_points: u32,
    /// Horizontal fleet direction: +1.0 right, -1.0 left
    pub fleet_direction: f32,
}

impl DynamicSettings {
    /// Reset all dynamic values to their base (new-game transition)
    pub fn from_base(base: &BaseSettings) -> Self {
        Self {
            ship_speed: base.ship_speed,
            bullet_speed: base.bullet_speed,
            alien_speed: base.alien_speed,
            alien_points: base.alien_points,
            fleet_direction: 1.0,
        }
    }

    /// Scale speeds and alien value for the next level
    pub fn increase_speed(&mut self, base: &BaseSettings) {
        self.ship_speed *= base.speedup_scale;
        self.bullet_speed *= base.speedup_scale;
        self.alien_speed *= base.speedup_scale;
        self.alien_points = (self.alien_points as f32 * base.score_scale) as u32;
        log::debug!(
            "speed up: alien_speed={:.2} alien_points={}",
            self.alien_speed,
            self.alien_points
        );
    }

    /// Flip the horizontal fleet direction
    pub fn reverse_fleet(&mut self) {
        self.fleet_direction = -self.fleet_direction;
    }
}
