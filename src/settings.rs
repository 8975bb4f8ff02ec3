//! Game settings and preferences
//!
//! Toggled from the title menu. Kept in memory only.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Background music
    pub music_on: bool,
    /// One-shot sound effects
    pub sounds_on: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_on: true,
            sounds_on: true,
        }
    }
}

impl Settings {
    /// Flip music; returns the new value
    pub fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        self.music_on
    }

    /// Flip sound effects; returns the new value
    pub fn toggle_sounds(&mut self) -> bool {
        self.sounds_on = !self.sounds_on;
        self.sounds_on
    }

    /// Menu label text for a toggle
    pub fn on_off(value: bool) -> &'static str {
        if value { "On" } else { "Off" }
    }
}
