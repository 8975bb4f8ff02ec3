//! Read-only views of the session for the renderer and for tooling

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::SheetId;
use super::rect::Rect;
use super::state::{GamePhase, GameState, Ghost, Player, Potion};
use crate::consts::{FRAME_HEIGHT, FRAME_WIDTH, HITBOX_SIZE, PLAYER_DRAW_LIFT};

/// One blit: which sheet, which part of it, and where its top-left lands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub sheet: SheetId,
    pub source: Rect,
    pub dest: Vec2,
}

/// Anything drawn as a single sprite
pub trait Sprite {
    fn sprite(&self) -> SpriteFrame;
}

/// Top-left of an animation frame centred on `center`, raised by `lift`
fn frame_origin(center: Vec2, lift: f32) -> Vec2 {
    Vec2::new(
        center.x - (FRAME_WIDTH / 2) as f32,
        center.y - (FRAME_HEIGHT / 2) as f32 - lift,
    )
}

impl Sprite for Player {
    fn sprite(&self) -> SpriteFrame {
        SpriteFrame {
            sheet: self.sheet,
            source: self.anim.source_rect(),
            dest: frame_origin(self.pos, PLAYER_DRAW_LIFT),
        }
    }
}

impl Sprite for Ghost {
    fn sprite(&self) -> SpriteFrame {
        SpriteFrame {
            sheet: self.sheet,
            source: self.anim.source_rect(),
            dest: frame_origin(self.pos, 0.0),
        }
    }
}

impl Sprite for Potion {
    fn sprite(&self) -> SpriteFrame {
        // Potions are a single still image the size of their hitbox
        SpriteFrame {
            sheet: SheetId::Potion,
            source: Rect::new(0.0, 0.0, HITBOX_SIZE, HITBOX_SIZE),
            dest: self.hitbox().center() - Vec2::splat(HITBOX_SIZE / 2.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub facing_left: bool,
    pub attacking: bool,
    pub sheet: SheetId,
    pub frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostView {
    pub id: u32,
    pub pos: Vec2,
    pub sheet: SheetId,
    pub frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotionView {
    pub id: u32,
    pub pos: Vec2,
}

/// Everything a frontend needs to present one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub time_left: u32,
    pub player: PlayerView,
    pub ghosts: Vec<GhostView>,
    pub potions: Vec<PotionView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            phase: state.phase,
            score: state.score,
            time_left: state.time_left(),
            player: PlayerView {
                pos: player.pos,
                facing_left: player.facing_left,
                attacking: player.attacking,
                sheet: player.sheet,
                frame: player.anim.frame(),
            },
            ghosts: state
                .ghosts
                .iter()
                .map(|g| GhostView {
                    id: g.id,
                    pos: g.pos,
                    sheet: g.sheet,
                    frame: g.anim.frame(),
                })
                .collect(),
            potions: state
                .potions
                .iter()
                .map(|p| PotionView { id: p.id, pos: p.pos })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::PcgSource;

    #[test]
    fn test_player_sprite_is_lifted() {
        let player = Player::new(Vec2::new(400.0, 550.0));
        let frame = player.sprite();
        assert_eq!(frame.dest, Vec2::new(336.0, 466.0));
        assert_eq!(frame.source, Rect::new(0.0, 0.0, 128.0, 128.0));
        assert_eq!(frame.sheet, SheetId::PlayerIdle);
    }

    #[test]
    fn test_potion_sprite_covers_hitbox() {
        let potion = Potion {
            id: 1,
            pos: Vec2::new(100.0, 40.0),
            speed: 2.0,
        };
        let frame = potion.sprite();
        assert_eq!(frame.dest, Vec2::new(76.0, 16.0));
        assert_eq!(frame.sheet, SheetId::Potion);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut state = GameState::default();
        state.start(&mut PcgSource::new(8));
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.ghosts.len(), 4);
        assert_eq!(snap.time_left, 30);

        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
