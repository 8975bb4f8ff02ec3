//! Audio routing
//!
//! The simulation raises `GameEvent`s; this module turns them into named
//! sound effects and hands them to whatever `AudioBackend` the host provides.
//! Playback failures are the backend's business and never reach the game.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Name of the looping background track
pub const BACKGROUND_TRACK: &str = "bg_music";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player swings
    Attack,
    /// Potion collected
    Pickup,
    /// Ghost banished
    GhostDefeated,
    /// Player caught by a ghost
    Hit,
}

impl SoundEffect {
    /// Asset name of the effect
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Attack => "attack",
            SoundEffect::Pickup => "pickup",
            SoundEffect::GhostDefeated => "ghosts",
            SoundEffect::Hit => "hit",
        }
    }

    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::AttackStarted => Some(SoundEffect::Attack),
            GameEvent::PotionCollected { .. } => Some(SoundEffect::Pickup),
            GameEvent::GhostDefeated { .. } => Some(SoundEffect::GhostDefeated),
            GameEvent::PlayerHit => Some(SoundEffect::Hit),
            GameEvent::GameStarted | GameEvent::Won | GameEvent::ReturnedToMenu => None,
        }
    }
}

/// Playback capability supplied by the host
pub trait AudioBackend {
    fn play_sound(&mut self, name: &str);
    fn play_music(&mut self, track: &str);
    fn stop_music(&mut self);
}

/// Backend that plays nothing (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioBackend for Silent {
    fn play_sound(&mut self, _name: &str) {}
    fn play_music(&mut self, _track: &str) {}
    fn stop_music(&mut self) {}
}

/// Backend that only logs what it would play
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn play_sound(&mut self, name: &str) {
        log::debug!("sfx: {}", name);
    }

    fn play_music(&mut self, track: &str) {
        log::debug!("music: {}", track);
    }

    fn stop_music(&mut self) {
        log::debug!("music stopped");
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(Silent))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self { backend }
    }

    /// Play a sound effect if effects are enabled
    pub fn play(&mut self, effect: SoundEffect, settings: &Settings) {
        if settings.sounds_on {
            self.backend.play_sound(effect.name());
        }
    }

    /// Play the sounds for a batch of events, in order
    pub fn dispatch(&mut self, events: &[GameEvent], settings: &Settings) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect, settings);
        }
    }

    /// Stop the track, then start it again if music is enabled
    pub fn restart_music(&mut self, settings: &Settings) {
        self.backend.stop_music();
        if settings.music_on {
            self.backend.play_music(BACKGROUND_TRACK);
        }
    }
}
