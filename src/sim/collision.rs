//! Collision resolution and scoring
//!
//! Runs once per Playing tick: potions first, then ghosts. Entities are
//! marked during the pass and compacted afterwards, so iteration order is
//! the live order and nothing is skipped.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{GHOST_SCORE, POTION_SCORE};

/// What a collision pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Potions picked up by the player
    pub collected: u32,
    /// Potions that fell past the bottom edge
    pub missed: u32,
    /// Ghosts defeated by an attack
    pub defeated: u32,
    /// The player touched a ghost without attacking
    pub lethal: bool,
}

/// Run the full pass in its fixed order
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_potions(state, &mut report);
    resolve_ghosts(state, &mut report);
    report
}

/// Drop each potion one step, then collect or discard it
pub fn resolve_potions(state: &mut GameState, report: &mut CollisionReport) {
    let player_box = state.player.hitbox();
    let mut keep = Vec::with_capacity(state.potions.len());
    let mut collected = Vec::new();

    for potion in &mut state.potions {
        potion.update();
        if potion.hitbox().overlaps(&player_box) {
            collected.push(potion.id);
            keep.push(false);
        } else if potion.below_arena() {
            report.missed += 1;
            keep.push(false);
        } else {
            keep.push(true);
        }
    }

    compact(&mut state.potions, &keep);

    for id in collected {
        state.score += POTION_SCORE;
        report.collected += 1;
        state.emit(GameEvent::PotionCollected { id });
    }
}

/// Check ghosts in live order. The first ghost touched without an attack
/// ends the round and stops the pass.
pub fn resolve_ghosts(state: &mut GameState, report: &mut CollisionReport) {
    let player_box = state.player.hitbox();
    let attacking = state.player.attacking;
    let mut keep = vec![true; state.ghosts.len()];
    let mut defeated = Vec::new();

    for (i, ghost) in state.ghosts.iter().enumerate() {
        if !ghost.hitbox().overlaps(&player_box) {
            continue;
        }
        if attacking {
            keep[i] = false;
            defeated.push(ghost.id);
        } else {
            report.lethal = true;
            break;
        }
    }

    compact(&mut state.ghosts, &keep);

    for id in defeated {
        state.score += GHOST_SCORE;
        report.defeated += 1;
        log::debug!("Ghost {} defeated", id);
        state.emit(GameEvent::GhostDefeated { id });
    }

    if report.lethal {
        state.phase = GamePhase::Lose;
        state.emit(GameEvent::PlayerHit);
        log::info!("Player caught by a ghost (score {})", state.score);
    }
}

/// Remove entries whose mark is false, keeping the rest in order
fn compact<T>(items: &mut Vec<T>, keep: &[bool]) {
    let mut marks = keep.iter();
    items.retain(|_| marks.next().copied().unwrap_or(true));
}
