//! Sprite sheets and frame animation timing
//!
//! Sheets are horizontal strips of fixed-size frames. The simulation only
//! needs to know how wide each strip is; the host resolves `SheetId` values
//! into real images when it loads assets.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{ANIM_FRAME_TIME, FRAME_HEIGHT, FRAME_WIDTH};

const SHEET_COUNT: usize = 10;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetId {
    Background,
    PlayerIdle,
    PlayerIdleFlipped,
    PlayerWalk,
    PlayerWalkFlipped,
    PlayerAttack,
    PlayerAttackFlipped,
    GhostIdle,
    GhostWalk,
    Potion,
}

impl SheetId {
    pub const ALL: [SheetId; SHEET_COUNT] = [
        SheetId::Background,
        SheetId::PlayerIdle,
        SheetId::PlayerIdleFlipped,
        SheetId::PlayerWalk,
        SheetId::PlayerWalkFlipped,
        SheetId::PlayerAttack,
        SheetId::PlayerAttackFlipped,
        SheetId::GhostIdle,
        SheetId::GhostWalk,
        SheetId::Potion,
    ];

    /// Asset name the host loads for this sheet
    pub fn asset_name(&self) -> &'static str {
        match self {
            SheetId::Background => "bg_castle",
            SheetId::PlayerIdle => "player_idle",
            SheetId::PlayerIdleFlipped => "player_idle_flipped",
            SheetId::PlayerWalk => "player_walk",
            SheetId::PlayerWalkFlipped => "player_walk_flipped",
            SheetId::PlayerAttack => "player_attack",
            SheetId::PlayerAttackFlipped => "player_attack_flipped",
            SheetId::GhostIdle => "ghost_idle",
            SheetId::GhostWalk => "ghost_walk",
            SheetId::Potion => "potion",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Pixel width of every sheet, filled in once assets are loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    widths: [u32; SHEET_COUNT],
}

impl Default for SheetTable {
    fn default() -> Self {
        let mut table = Self {
            widths: [FRAME_WIDTH; SHEET_COUNT],
        };
        table.set_width(SheetId::Background, 800);
        table.set_width(SheetId::PlayerIdle, 4 * FRAME_WIDTH);
        table.set_width(SheetId::PlayerIdleFlipped, 4 * FRAME_WIDTH);
        table.set_width(SheetId::PlayerWalk, 6 * FRAME_WIDTH);
        table.set_width(SheetId::PlayerWalkFlipped, 6 * FRAME_WIDTH);
        table.set_width(SheetId::PlayerAttack, 4 * FRAME_WIDTH);
        table.set_width(SheetId::PlayerAttackFlipped, 4 * FRAME_WIDTH);
        table.set_width(SheetId::GhostIdle, 4 * FRAME_WIDTH);
        table.set_width(SheetId::GhostWalk, 4 * FRAME_WIDTH);
        table.set_width(SheetId::Potion, 48);
        table
    }
}

impl SheetTable {
    /// Record the loaded width of a sheet
    pub fn set_width(&mut self, sheet: SheetId, width: u32) {
        self.widths[sheet.index()] = width;
    }

    pub fn width(&self, sheet: SheetId) -> u32 {
        self.widths[sheet.index()]
    }

    /// Number of animation frames in a sheet
    pub fn frame_count(&self, sheet: SheetId) -> u32 {
        frame_count(FRAME_WIDTH, self.width(sheet))
    }
}

/// Frames in a strip; degenerate geometry collapses to a single static frame
pub fn frame_count(frame_width: u32, sheet_width: u32) -> u32 {
    if frame_width == 0 {
        return 1;
    }
    (sheet_width / frame_width).max(1)
}

/// Pick the player's sheet from its state
pub fn player_sheet(attacking: bool, facing_left: bool, moving: bool) -> SheetId {
    match (attacking, facing_left, moving) {
        (true, false, _) => SheetId::PlayerAttack,
        (true, true, _) => SheetId::PlayerAttackFlipped,
        (false, false, true) => SheetId::PlayerWalk,
        (false, true, true) => SheetId::PlayerWalkFlipped,
        (false, false, false) => SheetId::PlayerIdle,
        (false, true, false) => SheetId::PlayerIdleFlipped,
    }
}

/// Pick a ghost's sheet from whether it is moving
pub fn ghost_sheet(moving: bool) -> SheetId {
    if moving {
        SheetId::GhostWalk
    } else {
        SheetId::GhostIdle
    }
}

/// Cyclic frame counter driven by elapsed time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    frame_index: u32,
    frame_count: u32,
    /// Time accumulated toward the next frame step
    elapsed: f32,
    /// Seconds per frame
    frame_time: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(ANIM_FRAME_TIME)
    }
}

impl Animator {
    pub fn new(frame_time: f32) -> Self {
        Self {
            frame_index: 0,
            frame_count: 1,
            elapsed: 0.0,
            frame_time,
        }
    }

    /// Accumulate `dt` and step at most one frame once the threshold is reached.
    ///
    /// The frame count is recomputed from the sheet geometry on every call, so
    /// switching to a shorter sheet wraps the index back into range.
    pub fn advance(&mut self, dt: f32, frame_width: u32, sheet_width: u32) {
        self.frame_count = frame_count(frame_width, sheet_width);
        if self.frame_index >= self.frame_count {
            self.frame_index %= self.frame_count;
        }

        self.elapsed += dt;
        if self.elapsed >= self.frame_time {
            self.elapsed -= self.frame_time;
            self.frame_index = (self.frame_index + 1) % self.frame_count;
        }
    }

    /// Advance using the geometry of a known sheet
    pub fn advance_sheet(&mut self, dt: f32, sheet: SheetId, sheets: &SheetTable) {
        self.advance(dt, FRAME_WIDTH, sheets.width(sheet));
    }

    /// Restart from the first frame (keeps the accumulated time)
    pub fn rewind(&mut self) {
        self.frame_index = 0;
    }

    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame_index
    }

    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Source rectangle of the current frame within its sheet
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            (self.frame_index * FRAME_WIDTH) as f32,
            0.0,
            FRAME_WIDTH as f32,
            FRAME_HEIGHT as f32,
        )
    }
}
