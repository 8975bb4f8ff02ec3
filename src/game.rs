//! Host-facing game facade
//!
//! `Game` owns the session, the random source, the settings and the audio
//! manager. The host runtime feeds it input events and frame deltas and asks
//! it to draw through a `Renderer` once per frame.

use glam::Vec2;

use crate::audio::AudioManager;
use crate::consts::{ARENA_WIDTH, ARENA_HEIGHT};
use crate::settings::Settings;
use crate::sim::{
    GamePhase, GameState, Ghost, PcgSource, Player, Potion, RandomSource, Rect, SheetId,
    SheetTable, Snapshot, Sprite, tick,
};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Return,
    Other,
}

/// Raw input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Mouse button pressed at a screen position
    MouseDown(Vec2),
}

/// Title menu buttons, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    ToggleMusic,
    ToggleSounds,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Start,
        MenuAction::ToggleMusic,
        MenuAction::ToggleSounds,
        MenuAction::Exit,
    ];

    /// Screen rectangle of the button in slot `index`
    pub fn button(index: usize) -> Rect {
        Rect::new(
            ARENA_WIDTH / 2.0 - 140.0,
            200.0 + index as f32 * 80.0,
            280.0,
            60.0,
        )
    }

    /// Button under a screen point, if any
    pub fn at(point: Vec2) -> Option<Self> {
        Self::ALL
            .iter()
            .enumerate()
            .find(|(i, _)| Self::button(*i).contains_point(point))
            .map(|(_, action)| *action)
    }

    pub fn label(&self, settings: &Settings) -> String {
        match self {
            MenuAction::Start => "Start Game".to_string(),
            MenuAction::ToggleMusic => format!("Music: {}", Settings::on_off(settings.music_on)),
            MenuAction::ToggleSounds => {
                format!("Sounds: {}", Settings::on_off(settings.sounds_on))
            }
            MenuAction::Exit => "Exit".to_string(),
        }
    }
}

/// What the host should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Continue,
    Quit,
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const YELLOW: Color = Color(255, 255, 0);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const RED: Color = Color(255, 0, 0);
    pub const BUTTON: Color = Color(60, 60, 120);
}

/// How a text position is interpreted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    TopLeft(Vec2),
    Center(Vec2),
}

/// Drawing capability supplied by the host
pub trait Renderer {
    /// Blit `source` from a sheet with its top-left corner at `dest`
    fn draw_image(&mut self, sheet: SheetId, source: Rect, dest: Vec2);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, size: f32, color: Color);
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    rng: Box<dyn RandomSource>,
    settings: Settings,
    audio: AudioManager,
}

impl Game {
    /// Seeded game with default sheets and silent audio
    pub fn new(seed: u64) -> Self {
        Self::with_parts(
            SheetTable::default(),
            Box::new(PcgSource::new(seed)),
            AudioManager::default(),
        )
    }

    pub fn with_parts(
        sheets: SheetTable,
        rng: Box<dyn RandomSource>,
        audio: AudioManager,
    ) -> Self {
        Self {
            state: GameState::new(sheets),
            rng,
            settings: Settings::default(),
            audio,
        }
    }

    /// Reinitialize the session and its entities
    pub fn reset_game(&mut self) {
        self.state.reset(self.rng.as_mut());
    }

    /// Advance the simulation by `dt` seconds and play what happened
    pub fn update(&mut self, dt: f32) {
        tick(&mut self.state, self.rng.as_mut(), dt);
        self.flush_events();
    }

    pub fn set_player_direction(&mut self, direction: i32) {
        self.state.player.set_direction(direction);
    }

    /// Attack, if a round is running and no attack is in progress
    pub fn start_attack(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        let started = self.state.start_attack();
        self.flush_events();
        started
    }

    /// Win/Lose -> Menu
    pub fn confirm(&mut self) -> bool {
        let changed = self.state.confirm();
        self.flush_events();
        changed
    }

    /// Run a title menu action
    pub fn menu_action(&mut self, action: MenuAction) -> Command {
        match action {
            MenuAction::Start => {
                if self.state.start(self.rng.as_mut()) {
                    self.audio.restart_music(&self.settings);
                }
            }
            MenuAction::ToggleMusic => {
                let on = self.settings.toggle_music();
                log::info!("Music {}", Settings::on_off(on));
                self.audio.restart_music(&self.settings);
            }
            MenuAction::ToggleSounds => {
                let on = self.settings.toggle_sounds();
                log::info!("Sounds {}", Settings::on_off(on));
            }
            MenuAction::Exit => {
                log::info!("Exit requested");
                return Command::Quit;
            }
        }
        self.flush_events();
        Command::Continue
    }

    /// Translate a raw input event into game actions
    pub fn handle_input(&mut self, event: InputEvent) -> Command {
        match (event, self.state.phase) {
            (InputEvent::KeyDown(Key::Left), GamePhase::Playing) => self.set_player_direction(-1),
            (InputEvent::KeyDown(Key::Right), GamePhase::Playing) => self.set_player_direction(1),
            (InputEvent::KeyDown(Key::Space), GamePhase::Playing) => {
                self.start_attack();
            }
            (InputEvent::KeyDown(Key::Return), GamePhase::Win | GamePhase::Lose) => {
                self.confirm();
            }
            // Releasing any key stops the player
            (InputEvent::KeyUp(_), _) => self.set_player_direction(0),
            (InputEvent::MouseDown(point), GamePhase::Menu) => {
                if let Some(action) = MenuAction::at(point) {
                    return self.menu_action(action);
                }
            }
            _ => {}
        }
        Command::Continue
    }

    fn flush_events(&mut self) {
        let events = self.state.drain_events();
        self.audio.dispatch(&events, &self.settings);
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Whole seconds left on the countdown
    pub fn time_left(&self) -> u32 {
        self.state.time_left()
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.state.ghosts
    }

    pub fn potions(&self) -> &[Potion] {
        &self.state.potions
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable session access for hosts that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Draw the current frame
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_image(
            SheetId::Background,
            Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT),
            Vec2::ZERO,
        );

        if self.state.phase == GamePhase::Menu {
            self.draw_menu(renderer);
            return;
        }

        let frames = std::iter::once(self.state.player.sprite())
            .chain(self.state.ghosts.iter().map(Sprite::sprite))
            .chain(self.state.potions.iter().map(Sprite::sprite));
        for frame in frames {
            renderer.draw_image(frame.sheet, frame.source, frame.dest);
        }

        renderer.draw_text(
            &format!("Score: {}", self.state.score),
            TextAnchor::TopLeft(Vec2::new(20.0, 20.0)),
            28.0,
            Color::YELLOW,
        );
        renderer.draw_text(
            &format!("Time: {}", self.state.time_left()),
            TextAnchor::TopLeft(Vec2::new(ARENA_WIDTH - 140.0, 20.0)),
            28.0,
            Color::WHITE,
        );

        let center = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
        match self.state.phase {
            GamePhase::Win => {
                renderer.draw_text("YOU WIN!", TextAnchor::Center(center), 72.0, Color::GREEN)
            }
            GamePhase::Lose => {
                renderer.draw_text("GAME OVER", TextAnchor::Center(center), 72.0, Color::RED)
            }
            _ => {}
        }
    }

    fn draw_menu(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text(
            "Ghostly Potion Chase!",
            TextAnchor::Center(Vec2::new(ARENA_WIDTH / 2.0, 100.0)),
            56.0,
            Color::WHITE,
        );
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            let rect = MenuAction::button(i);
            renderer.fill_rect(rect, Color::BUTTON);
            renderer.draw_text(
                &action.label(&self.settings),
                TextAnchor::Center(rect.center()),
                34.0,
                Color::WHITE,
            );
        }
    }
}
