//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Randomness only through `RandomSource`
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod collision;
pub mod rect;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use anim::{Animator, SheetId, SheetTable, ghost_sheet, player_sheet};
pub use collision::CollisionReport;
pub use rect::Rect;
pub use rng::{PcgSource, RandomSource, ScriptedRng};
pub use state::{GameEvent, GamePhase, GameState, Ghost, Player, Potion};
pub use tick::tick;
pub use view::{Snapshot, Sprite, SpriteFrame};
