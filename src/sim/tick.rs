//! Per-frame simulation step
//!
//! Advances the session by one host frame. Only the Playing phase changes
//! anything; every other phase is render-only.

use super::collision;
use super::rng::RandomSource;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, rng: &mut dyn RandomSource, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.timer -= dt;
    state.spawn_timer += dt;

    state.player.update(dt, &state.sheets);
    for ghost in &mut state.ghosts {
        ghost.update(dt, rng, &state.sheets);
    }

    spawn::spawn_potions(state, rng);

    let report = collision::resolve(state);
    if report.lethal {
        return;
    }

    if state.timer <= 0.0 {
        state.phase = GamePhase::Win;
        state.emit(GameEvent::Won);
        log::info!("Round survived with score {}", state.score);
    }
}
