//! Collision resolution and scoring
//!
//! All intersection tests are rect overlaps. Bullet-alien resolution is
//! destructive and pairwise: a bullet is consumed by the first alien it
//! touches, so one bullet destroys at most one alien per tick.

use super::state::{Alien, Bullet, GameStats, Ship};

/// Resolve bullet-alien hits, removing both members of each pair.
///
/// Bullets are processed in fire order, aliens in fleet order. Returns the
/// number of aliens destroyed this tick.
pub fn bullet_alien_collisions(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> u32 {
    let mut destroyed = 0u32;

    let mut i = 0;
    while i < bullets.len() {
        let hit = aliens
            .iter()
            .position(|alien| bullets[i].rect.intersects(&alien.rect));

        match hit {
            Some(j) => {
                aliens.remove(j);
                bullets.remove(i);
                destroyed += 1;
                // Bullet is gone; do not advance i
            }
            None => i += 1,
        }
    }

    destroyed
}

/// Apply the score for destroyed aliens; returns true if the high score rose
pub fn award_points(stats: &mut GameStats, alien_points: u32, destroyed: u32) -> bool {
    stats.score += alien_points * destroyed;
    if stats.score > stats.high_score {
        stats.high_score = stats.score;
        return true;
    }
    false
}

/// Any alien overlapping the ship
pub fn fleet_hits_ship(aliens: &[Alien], ship: &Ship) -> bool {
    aliens.iter().any(|alien| alien.rect.intersects(&ship.rect))
}

/// Any alien reaching the bottom of the screen
pub fn fleet_reached_bottom(aliens: &[Alien], screen_height: f32) -> bool {
    aliens.iter().any(|alien| alien.rect.bottom() >= screen_height)
}
