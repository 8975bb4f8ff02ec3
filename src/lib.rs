//! Ghostly Potion Chase - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, animation, collisions, game state)
//! - `game`: Host facade (input, menu, audio routing, drawing)
//! - `audio`: Sound effect mapping and the audio capability
//! - `settings`: Player preferences (music / sound toggles)
//! - `autopilot`: Demo AI that plays the game

pub mod audio;
pub mod autopilot;
pub mod game;
pub mod settings;
pub mod sim;

pub use game::{Command, Game, InputEvent, Key, MenuAction};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (screen space, pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Sprite sheet frame size
    pub const FRAME_WIDTH: u32 = 128;
    pub const FRAME_HEIGHT: u32 = 128;

    /// Seconds per animation frame
    pub const ANIM_FRAME_TIME: f32 = 0.12;

    /// Collision box size shared by player, ghosts and potions
    pub const HITBOX_SIZE: f32 = 48.0;

    /// Distance kept between a sprite centre and the edge of its allowed area
    pub const EDGE_MARGIN: f32 = 32.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 6.0; // px per tick
    pub const PLAYER_GROUND_OFFSET: f32 = 50.0; // above the bottom edge
    pub const PLAYER_DRAW_LIFT: f32 = 20.0;
    pub const ATTACK_DURATION: f32 = 0.28;

    /// Ghost defaults
    pub const GHOST_SPEEDS: [f32; 2] = [2.0, 3.0];
    pub const GHOST_RETARGET_MIN: f32 = 0.8;
    pub const GHOST_RETARGET_MAX: f32 = 2.0;

    /// Potion defaults
    pub const POTION_SPAWN_INTERVAL: f32 = 1.0;
    pub const POTION_SPAWN_MARGIN: i32 = 50;
    pub const POTION_SPAWN_Y: f32 = -50.0;
    pub const POTION_MIN_SPEED: f32 = 2.0;
    pub const POTION_MAX_SPEED: f32 = 4.0;

    /// Session defaults
    pub const ROUND_TIME: f32 = 30.0;
    pub const POTION_SCORE: u32 = 1;
    pub const GHOST_SCORE: u32 = 5;
}

/// Clamp both axes of `pos` into the box `[min, max]`
#[inline]
pub fn clamp_to(pos: glam::Vec2, min: glam::Vec2, max: glam::Vec2) -> glam::Vec2 {
    glam::Vec2::new(pos.x.min(max.x).max(min.x), pos.y.min(max.y).max(min.y))
}
