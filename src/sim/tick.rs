//! Fixed timestep simulation tick
//!
//! The per-frame orchestrator: applies input intent, advances entities,
//! resolves collisions and drives the Inactive/Active/HitPause state machine.
//! Frame order is fixed: ship, bullets (movement, culling, hits, exhaustion),
//! then fleet (edges, movement, ship collision, bottom breach).

use super::collision;
use super::fleet::build_fleet;
use super::state::{Bullet, GameEvent, GamePhase, GameState};
use crate::consts::HIT_PAUSE_TICKS;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub move_left: bool,
    pub move_right: bool,
    /// Fire a bullet (one-shot, cleared by the driver after each tick)
    pub fire: bool,
    /// Start a new game (Play control, only honored while Inactive)
    pub start: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::Inactive => {
            if input.start {
                state.begin_run();
            }
            return;
        }
        // Post-hit freeze: no input, no movement, just the countdown
        GamePhase::HitPause => {
            state.hit_pause_ticks = state.hit_pause_ticks.saturating_sub(1);
            if state.hit_pause_ticks == 0 {
                state.phase = GamePhase::Active;
                log::debug!("hit pause over, resuming");
            }
            return;
        }
        GamePhase::Active => {}
    }

    state.time_ticks += 1;

    state.ship.moving_left = input.move_left;
    state.ship.moving_right = input.move_right;
    state.ship.update(&state.tuning, &state.base);

    if input.fire {
        fire_bullet(state);
    }
    update_bullets(state);
    update_fleet(state);
}

/// Spawn a bullet at the ship unless the live limit is reached
fn fire_bullet(state: &mut GameState) {
    if state.bullets.len() < state.base.bullets_allowed {
        state
            .bullets
            .push(Bullet::fired_from(&state.ship, &state.base));
        log::trace!("fired bullet ({} live)", state.bullets.len());
    }
}

/// Move bullets, cull off-screen ones, resolve hits and fleet exhaustion
fn update_bullets(state: &mut GameState) {
    let speed = state.tuning.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.update(speed);
    }
    state.bullets.retain(|bullet| !bullet.offscreen());

    let destroyed = collision::bullet_alien_collisions(&mut state.bullets, &mut state.aliens);
    if destroyed > 0 {
        let new_high =
            collision::award_points(&mut state.stats, state.tuning.alien_points, destroyed);
        state.push_event(GameEvent::ScoreChanged);
        if new_high {
            state.push_event(GameEvent::HighScoreChanged);
        }
    }

    if state.aliens.is_empty() {
        start_next_level(state);
    }
}

/// Fleet exhausted: clear bullets, rebuild denser-feeling (faster) fleet
fn start_next_level(state: &mut GameState) {
    state.bullets.clear();
    state.aliens = build_fleet(&state.base);
    state.tuning.increase_speed(&state.base);
    state.stats.level += 1;
    state.push_event(GameEvent::LevelChanged);
    log::info!("fleet cleared, level {}", state.stats.level);
}

/// Edge handling, lockstep movement, ship collision and bottom breach
fn update_fleet(state: &mut GameState) {
    // One shared edge event per tick: any alien at an edge drops the whole
    // fleet and flips the direction
    if state
        .aliens
        .iter()
        .any(|alien| alien.at_edge(state.base.screen_width))
    {
        for alien in &mut state.aliens {
            alien.rect.pos.y += state.base.fleet_drop_speed;
        }
        state.tuning.reverse_fleet();
    }

    let speed = state.tuning.alien_speed;
    let direction = state.tuning.fleet_direction;
    for alien in &mut state.aliens {
        alien.update(speed, direction);
    }

    if collision::fleet_hits_ship(&state.aliens, &state.ship) {
        ship_hit(state);
    }
    // Phase guard keeps life loss idempotent when both triggers fire in one tick
    if state.phase == GamePhase::Active
        && collision::fleet_reached_bottom(&state.aliens, state.base.screen_height)
    {
        ship_hit(state);
    }
}

/// Life-loss handler: respawn into the timed freeze, or end the run
fn ship_hit(state: &mut GameState) {
    state.push_event(GameEvent::ShipHit);
    if state.stats.ships_left > 0 {
        state.stats.ships_left -= 1;
        state.push_event(GameEvent::ShipsChanged);

        state.aliens.clear();
        state.bullets.clear();
        state.aliens = build_fleet(&state.base);
        state.ship.center(&state.base);

        state.phase = GamePhase::HitPause;
        state.hit_pause_ticks = HIT_PAUSE_TICKS;
        log::info!("ship hit, {} left", state.stats.ships_left);
    } else {
        state.phase = GamePhase::Inactive;
        state.push_event(GameEvent::GameOver);
        log::info!(
            "game over: score {} (high {})",
            state.stats.score,
            state.stats.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::BaseSettings;
    use crate::sim::state::Alien;

    fn started_state() -> GameState {
        let mut state = GameState::new(BaseSettings::default());
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        state
    }

    /// An alien sitting directly on the ship
    fn alien_on_ship(state: &GameState) -> Alien {
        Alien::new(state.ship.rect.pos.x, state.ship.rect.pos.y, &state.base)
    }

    #[test]
    fn test_start_transitions_to_active() {
        let mut state = GameState::new(BaseSettings::default());
        assert_eq!(state.phase, GamePhase::Inactive);

        // Without the start signal nothing happens
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Inactive);

        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.events.contains(&GameEvent::GameStarted));
        assert_eq!(state.stats.score, 0);
        assert_eq!(state.stats.level, 1);
        assert!(!state.aliens.is_empty());
    }

    #[test]
    fn test_fire_respects_bullet_limit() {
        let mut state = started_state();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &fire);
        }
        assert_eq!(state.bullets.len(), state.base.bullets_allowed);
    }

    #[test]
    fn test_bullet_kill_scores_and_tracks_high() {
        let mut state = started_state();
        // One alien just above the ship, in the bullet's path
        let x = state.ship.rect.pos.x;
        state.aliens = vec![
            Alien::new(x, 700.0, &state.base),
            Alien::new(x + 500.0, 40.0, &state.base),
        ];

        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        let mut guard = 0;
        while state.stats.score == 0 {
            tick(&mut state, &TickInput::default());
            guard += 1;
            assert!(guard < 2000, "bullet never reached the alien");
        }

        assert_eq!(state.stats.score, state.tuning.alien_points);
        assert_eq!(state.stats.high_score, state.stats.score);
        assert_eq!(state.aliens.len(), 1);
        assert!(state.events.contains(&GameEvent::ScoreChanged));
        assert!(state.events.contains(&GameEvent::HighScoreChanged));
    }

    #[test]
    fn test_fleet_exhaustion_levels_up() {
        let mut state = started_state();
        let base_speed = state.tuning.alien_speed;
        let base_points = state.tuning.alien_points;

        // Last alien just above the ship
        let x = state.ship.rect.pos.x;
        state.aliens = vec![Alien::new(x, 700.0, &state.base)];

        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        let mut guard = 0;
        while state.stats.level == 1 {
            tick(&mut state, &TickInput::default());
            guard += 1;
            assert!(guard < 2000, "fleet never cleared");
        }

        assert_eq!(state.stats.level, 2);
        assert!(state.bullets.is_empty());
        assert!(!state.aliens.is_empty());
        assert!(state.tuning.alien_speed > base_speed);
        assert!(state.tuning.alien_points > base_points);
        assert_eq!(state.phase, GamePhase::Active);
    }

    #[test]
    fn test_ship_collision_costs_a_life() {
        let mut state = started_state();
        let ships_before = state.stats.ships_left;
        state.aliens = vec![alien_on_ship(&state)];

        tick(&mut state, &TickInput::default());

        assert_eq!(state.stats.ships_left, ships_before - 1);
        assert_eq!(state.phase, GamePhase::HitPause);
        assert_eq!(state.hit_pause_ticks, HIT_PAUSE_TICKS);
        assert!(state.bullets.is_empty());
        // Fleet rebuilt at the top, ship recentered
        assert!(!state.aliens.is_empty());
        assert_eq!(state.ship.rect.center_x(), state.base.screen_width / 2.0);
    }

    #[test]
    fn test_hit_pause_ignores_input_then_resumes() {
        let mut state = started_state();
        state.aliens = vec![alien_on_ship(&state)];
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::HitPause);

        let ship_x = state.ship.rect.pos.x;
        let push = TickInput {
            move_right: true,
            fire: true,
            ..Default::default()
        };
        for _ in 0..HIT_PAUSE_TICKS {
            tick(&mut state, &push);
        }
        // Nothing moved or fired during the freeze
        assert_eq!(state.ship.rect.pos.x, ship_x);
        assert!(state.bullets.is_empty());
        assert_eq!(state.phase, GamePhase::Active);
    }

    #[test]
    fn test_double_trigger_costs_one_life() {
        let mut state = started_state();
        let ships_before = state.stats.ships_left;

        // Alien overlapping the ship AND touching the screen bottom
        let alien_y = state.base.screen_height - state.base.alien_height;
        state.aliens = vec![Alien::new(state.ship.rect.pos.x, alien_y, &state.base)];

        tick(&mut state, &TickInput::default());
        assert_eq!(state.stats.ships_left, ships_before - 1);
    }

    #[test]
    fn test_bottom_breach_costs_a_life() {
        let mut state = started_state();
        let ships_before = state.stats.ships_left;

        // Alien at the bottom but far from the ship
        let alien_y = state.base.screen_height - state.base.alien_height;
        state.aliens = vec![Alien::new(40.0, alien_y, &state.base)];

        tick(&mut state, &TickInput::default());
        assert_eq!(state.stats.ships_left, ships_before - 1);
        assert_eq!(state.phase, GamePhase::HitPause);
    }

    #[test]
    fn test_game_over_and_restart_keeps_high_score() {
        let mut state = started_state();
        state.stats.score = 1200;
        state.stats.high_score = 1200;
        state.stats.ships_left = 0;
        state.aliens = vec![alien_on_ship(&state)];

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Inactive);
        assert!(state.events.contains(&GameEvent::GameOver));

        // Frozen while inactive: entities stay put
        let alien_x = state.aliens[0].rect.pos.x;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.aliens[0].rect.pos.x, alien_x);

        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        assert_eq!(state.stats.score, 0);
        assert_eq!(state.stats.level, 1);
        assert_eq!(state.stats.ships_left, state.base.ship_limit);
        assert_eq!(state.stats.high_score, 1200);
    }

    #[test]
    fn test_edge_reverses_and_drops_fleet() {
        let mut state = started_state();
        let alien_x = state.base.screen_width - state.base.alien_width;
        state.aliens = vec![
            Alien::new(alien_x, 40.0, &state.base),
            Alien::new(100.0, 40.0, &state.base),
        ];
        assert_eq!(state.tuning.fleet_direction, 1.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.tuning.fleet_direction, -1.0);
        // Whole fleet dropped once, then moved left
        for alien in &state.aliens {
            assert_eq!(alien.rect.pos.y, 40.0 + state.base.fleet_drop_speed);
        }
        assert_eq!(
            state.aliens[1].rect.pos.x,
            100.0 - state.tuning.alien_speed
        );
    }

    #[test]
    fn test_snapshot_roundtrip_preserves_determinism() {
        let mut live = started_state();
        let fire_every = 7u64;
        for i in 0..200u64 {
            tick(
                &mut live,
                &TickInput {
                    move_left: i % 3 == 0,
                    fire: i % fire_every == 0,
                    ..Default::default()
                },
            );
        }

        let json = serde_json::to_string(&live).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();

        for i in 0..200u64 {
            let input = TickInput {
                move_right: i % 2 == 0,
                fire: i % fire_every == 0,
                ..Default::default()
            };
            tick(&mut live, &input);
            tick(&mut restored, &input);
        }

        assert_eq!(live.time_ticks, restored.time_ticks);
        assert_eq!(live.stats.score, restored.stats.score);
        assert_eq!(live.ship.rect, restored.ship.rect);
        assert_eq!(live.aliens.len(), restored.aliens.len());
        for (a, b) in live.aliens.iter().zip(restored.aliens.iter()) {
            assert_eq!(a.rect, b.rect);
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// ships_left never increases while a run is live, never underflows
            #[test]
            fn prop_ships_left_monotonic(
                inputs in proptest::collection::vec(
                    (any::<bool>(), any::<bool>(), any::<bool>()),
                    0..300,
                )
            ) {
                let mut state = started_state();
                let mut prev = state.stats.ships_left;
                for (left, right, fire) in inputs {
                    tick(
                        &mut state,
                        &TickInput {
                            move_left: left,
                            move_right: right,
                            fire,
                            ..Default::default()
                        },
                    );
                    prop_assert!(state.stats.ships_left <= prev);
                    prev = state.stats.ships_left;
                }
            }

            /// high_score never decreases, across game over and restart
            #[test]
            fn prop_high_score_monotonic(
                inputs in proptest::collection::vec(
                    (any::<bool>(), any::<bool>()),
                    0..300,
                )
            ) {
                let mut state = started_state();
                let mut prev = state.stats.high_score;
                for (fire, restart) in inputs {
                    tick(
                        &mut state,
                        &TickInput {
                            fire,
                            start: restart,
                            ..Default::default()
                        },
                    );
                    prop_assert!(state.stats.high_score >= prev);
                    prev = state.stats.high_score;
                }
            }
        }
    }
}
