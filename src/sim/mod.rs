//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (speeds are pixels per tick)
//! - Stable iteration order (fleet is built row-major, bullets in fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod fleet;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{fleet_hits_ship, fleet_reached_bottom};
pub use fleet::{build_fleet, fleet_grid};
pub use rect::Rect;
pub use state::{Alien, Bullet, GameEvent, GamePhase, GameState, GameStats, Ship};
pub use tick::{TickInput, tick};
