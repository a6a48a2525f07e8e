//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;

use super::check_pipe_collision;
use super::cloud::Cloud;
use super::pipe::Pipe;
use super::state::{GamePhase, GameState};
use crate::consts::TICKS_SPEED_INCREASE;
use crate::tuning::Tuning;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    // Frozen on the crash screen: nothing moves, spawns or scores
    if state.phase != GamePhase::Playing {
        return;
    }

    state.elapsed_ticks += 1;

    if spawn_due(state) {
        spawn(state);
    }

    // Difficulty ramp, unbounded
    if state.elapsed_ticks % TICKS_SPEED_INCREASE == 0 {
        state.scroll_speed += 1;
        log::debug!(
            "Scroll speed {} at tick {}",
            state.scroll_speed,
            state.elapsed_ticks
        );
    }

    state.player.tick();

    let speed = state.scroll_speed;
    for pipe in &mut state.pipes {
        pipe.tick(speed);
    }
    for cloud in &mut state.clouds {
        cloud.tick();
    }

    check_collisions(state);
}

/// Enough screen distance has scrolled by since the last spawn
fn spawn_due(state: &GameState) -> bool {
    let ticks = (state.elapsed_ticks - state.last_spawn_tick) as i64;
    ticks * i64::from(state.scroll_speed) >= i64::from(state.tuning.dist_next_pipe)
}

/// Allowed range for the next opening's upper tip (inclusive)
pub fn next_gap_range(prev: Option<&Pipe>, tuning: &Tuning) -> (i32, i32) {
    match prev {
        Some(prev) => (
            (prev.gap_top - tuning.max_pipe_jump).max(tuning.pipe_margin),
            (prev.gap_top + tuning.max_pipe_jump)
                .min(tuning.playfield_height - tuning.pipe_margin - tuning.pipe_gap),
        ),
        None => (
            tuning.max_pipe_jump,
            tuning.playfield_height - tuning.max_pipe_jump - tuning.pipe_gap,
        ),
    }
}

/// Spawn one cloud and one pipe at the right edge, retiring the oldest of
/// each if it has left the screen
fn spawn(state: &mut GameState) {
    let speed_class = state.rng.random_range(1..=state.tuning.cloud_max_speed_class);
    let scale_class = state.rng.random_range(1..=state.tuning.cloud_max_scale_class);
    state
        .clouds
        .push_back(Cloud::new(speed_class, scale_class, &state.tuning));
    if state.clouds.front().is_some_and(Cloud::is_off_screen) {
        state.clouds.pop_front();
    }

    let (min, max) = next_gap_range(state.pipes.back(), &state.tuning);
    let gap_top = if min <= max {
        state.rng.random_range(min..=max)
    } else {
        let t = &state.tuning;
        let pinned = min
            .min(t.playfield_height - t.pipe_margin - t.pipe_gap)
            .max(t.pipe_margin);
        log::warn!("Empty opening range {min}..={max}, pinning to {pinned}");
        pinned
    };

    let id = state.next_entity_id();
    let pipe = Pipe::new(id, state.tuning.playfield_width, gap_top, &state.tuning);
    log::debug!(
        "Pipe {} spawned at tick {} with opening {}..{}",
        id,
        state.elapsed_ticks,
        pipe.gap_top,
        pipe.gap_bottom()
    );
    state.pipes.push_back(pipe);
    state.last_spawn_tick = state.elapsed_ticks;

    if state.pipes.front().is_some_and(Pipe::is_off_screen) {
        state.pipes.pop_front();
    }
}

/// Scan pipes in spawn order; the first hit ends the run
fn check_collisions(state: &mut GameState) {
    let center = state.player.center();
    let radius = state.player.radius();

    let hit = state.pipes.iter().find_map(|pipe| {
        check_pipe_collision(center, radius, &pipe.bounds()).map(|hit| (pipe.id, hit))
    });

    if let Some((id, hit)) = hit {
        log::debug!("Hit pipe {id} ({hit:?})");
        state.enter_game_over();
    }
}
