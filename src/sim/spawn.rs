//! Arena layout and potion spawning
//!
//! Ghost homes and start positions are fixed; only per-ghost speed, heading
//! and retarget timers are random. Potions drop on a fixed cadence.

use glam::Vec2;

use super::rect::Rect;
use super::rng::RandomSource;
use super::state::{GameState, Ghost, Potion};
use crate::consts::POTION_SPAWN_INTERVAL;

/// Left half of the castle hall
pub const LEFT_AREA: Rect = Rect::new(50.0, 50.0, 300.0, 500.0);
/// Right half of the castle hall
pub const RIGHT_AREA: Rect = Rect::new(450.0, 50.0, 300.0, 500.0);

/// Start position and home region for each ghost, in spawn order
pub const GHOST_LAYOUT: [(Vec2, Rect); 4] = [
    (Vec2::new(120.0, 150.0), LEFT_AREA),
    (Vec2::new(250.0, 300.0), LEFT_AREA),
    (Vec2::new(500.0, 150.0), RIGHT_AREA),
    (Vec2::new(650.0, 350.0), RIGHT_AREA),
];

/// Fill the session with the fixed ghost layout
pub fn populate_ghosts(state: &mut GameState, rng: &mut dyn RandomSource) {
    for (pos, area) in GHOST_LAYOUT {
        let id = state.next_entity_id();
        state.ghosts.push(Ghost::new(id, pos, area, rng));
    }
}

/// Drop a potion once enough time has built up.
///
/// The caller advances `spawn_timer` at the start of the tick. Returns the
/// new potion's id when one spawns.
pub fn spawn_potions(state: &mut GameState, rng: &mut dyn RandomSource) -> Option<u32> {
    if state.spawn_timer < POTION_SPAWN_INTERVAL {
        return None;
    }
    state.spawn_timer = 0.0;

    let id = state.next_entity_id();
    let potion = Potion::spawn(id, rng);
    log::debug!("Potion {} spawned at x={}", id, potion.pos.x);
    state.potions.push(potion);
    Some(id)
}
