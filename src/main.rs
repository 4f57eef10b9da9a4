//! Space Swarm entry point
//!
//! Native builds are headless: there is no GUI frontend yet, so the binary
//! runs a scripted demo game through the platform boundary and logs the
//! outcome. A windowed frontend only needs to implement `DisplaySurface` and
//! `InputSource` and reuse this loop shape.

use std::cmp::Ordering;

use space_swarm::BaseSettings;
use space_swarm::HighScores;
use space_swarm::consts::TICK_HZ;
use space_swarm::hud::{Button, Scoreboard};
use space_swarm::platform::{
    HeadlessSurface, InputCollector, InputEvent, InputSource, Key, QueuedInput, render_frame,
};
use space_swarm::sim::{GameEvent, GamePhase, GameState, tick};

fn main() {
    env_logger::init();
    log::info!("Space Swarm (native) starting...");
    log::info!("No GUI frontend wired up - running the scripted headless demo");

    let mut state = GameState::new(BaseSettings::default());
    let mut scoreboard = Scoreboard::new(&state.stats);
    let play_button = Button::play(&state.base);
    let mut board = HighScores::new();
    let mut surface = HeadlessSurface::default();
    let mut collector = InputCollector::new();

    // Click Play on the first frame
    let mut source = QueuedInput::new();
    source.push_frame(vec![InputEvent::PointerDown(play_button.rect.center())]);

    // Cap at two minutes of simulated play
    let max_frames = 120 * TICK_HZ as u64;
    let mut game_over = false;

    for _ in 0..max_frames {
        for event in source.poll() {
            collector.handle(&event, &play_button, state.phase);
        }
        for event in autopilot(&state) {
            collector.handle(&event, &play_button, state.phase);
        }
        if collector.quit_requested() {
            log::info!("quit requested, exiting");
            return;
        }

        let input = collector.take_tick_input();
        tick(&mut state, &input);

        scoreboard.apply_events(&state.stats, &state.events);
        if state.events.contains(&GameEvent::GameOver) {
            board.add_run(state.stats.score, state.stats.level, state.time_ticks);
            game_over = true;
        }
        render_frame(&state, &scoreboard, &play_button, &mut surface);

        if game_over {
            break;
        }
    }

    log::info!(
        "demo finished: score {} (displayed {}), level {}, {} frames rendered",
        state.stats.score,
        scoreboard.score_text,
        state.stats.level,
        surface.frames_presented
    );
    if let Some(top) = board.top_score() {
        log::info!("session best: {}", top);
    }
    println!(
        "final score: {} at level {} after {} frames",
        state.stats.score, state.stats.level, surface.frames_presented
    );
}

/// Minimal demo pilot: chase the nearest alien column and keep firing
fn autopilot(state: &GameState) -> Vec<InputEvent> {
    if state.phase != GamePhase::Active {
        return Vec::new();
    }

    let ship_x = state.ship.rect.center_x();
    let target = state
        .aliens
        .iter()
        .map(|alien| alien.rect.center_x())
        .min_by(|a, b| {
            (a - ship_x)
                .abs()
                .partial_cmp(&(b - ship_x).abs())
                .unwrap_or(Ordering::Equal)
        });

    let mut events = vec![
        InputEvent::KeyUp(Key::Left),
        InputEvent::KeyUp(Key::Right),
        InputEvent::KeyDown(Key::Fire),
    ];
    if let Some(target_x) = target {
        // Dead zone so the pilot doesn't jitter over the target
        if target_x < ship_x - 4.0 {
            events.push(InputEvent::KeyDown(Key::Left));
        } else if target_x > ship_x + 4.0 {
            events.push(InputEvent::KeyDown(Key::Right));
        }
    }
    events
}
