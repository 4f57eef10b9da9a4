//! Fleet formation layout
//!
//! Computes a row-major grid of aliens from the screen and entity dimensions,
//! leaving a one-alien gutter between neighbors and the screen edges, and
//! reserving vertical room above the ship.

use super::state::Alien;
use crate::settings::BaseSettings;

/// Grid dimensions (columns, rows) for the current screen
///
/// Degenerate screens clamp to zero rather than erroring; an empty fleet is a
/// valid formation.
pub fn fleet_grid(base: &BaseSettings) -> (u32, u32) {
    let available_x = base.screen_width - 2.0 * base.alien_width;
    let columns = (available_x / (2.0 * base.alien_width)).floor().max(0.0) as u32;

    let available_y = base.screen_height - 3.0 * base.alien_height - base.ship_height;
    let rows = (available_y / (2.0 * base.alien_height)).floor().max(0.0) as u32;

    (columns, rows)
}

/// Build a full fleet, row-major from the top-left
pub fn build_fleet(base: &BaseSettings) -> Vec<Alien> {
    let (columns, rows) = fleet_grid(base);
    let mut fleet = Vec::with_capacity((columns * rows) as usize);

    for row in 0..rows {
        for col in 0..columns {
            let x = base.alien_width + 2.0 * base.alien_width * col as f32;
            let y = base.alien_height + 2.0 * base.alien_height * row as f32;
            fleet.push(Alien::new(x, y, base));
        }
    }

    log::debug!("built fleet: {} columns x {} rows", columns, rows);
    fleet
}
