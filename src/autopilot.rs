//! Demo AI that plays the game
//!
//! Chases the potion it can reach soonest and swings at any ghost that drifts
//! into range. Used by the headless runner and for attract-mode style demos.

use std::cmp::Ordering;

use crate::sim::{GameState, Potion};

/// Horizontal distance (centre to centre) at which a ghost gets swatted
const STRIKE_RANGE_X: f32 = 72.0;
/// Vertical distance at which a ghost gets swatted
const STRIKE_RANGE_Y: f32 = 60.0;
/// Close enough to the target column to stand still
const DEAD_ZONE: f32 = 4.0;

/// Input the autopilot wants applied this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub direction: i32,
    pub attack: bool,
}

/// Ticks the player needs to line up under `potion`, and ticks until it lands
fn race(state: &GameState, potion: &Potion) -> (f32, f32) {
    let player = &state.player;
    let walk = (potion.pos.x - player.pos.x).abs() / player.speed;
    let fall = (player.pos.y - potion.pos.y) / potion.speed.max(f32::EPSILON);
    (walk, fall)
}

/// Choose input for the current state
pub fn steer(state: &GameState) -> Steering {
    let player = &state.player;

    let threatened = state.ghosts.iter().any(|ghost| {
        (ghost.pos.x - player.pos.x).abs() < STRIKE_RANGE_X
            && (ghost.pos.y - player.pos.y).abs() < STRIKE_RANGE_Y
    });

    // Prefer potions we can get under in time, soonest landing first
    let target = state
        .potions
        .iter()
        .filter(|p| {
            let (walk, fall) = race(state, p);
            fall >= 0.0 && walk <= fall
        })
        .min_by(|a, b| {
            race(state, a)
                .1
                .partial_cmp(&race(state, b).1)
                .unwrap_or(Ordering::Equal)
        });

    let direction = match target {
        Some(potion) => {
            let dx = potion.pos.x - player.pos.x;
            if dx.abs() <= DEAD_ZONE { 0 } else { dx.signum() as i32 }
        }
        None => 0,
    };

    Steering {
        direction,
        attack: threatened && !player.attacking,
    }
}
