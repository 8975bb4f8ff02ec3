//! Game state and core simulation types
//!
//! The session owns the player, the live ghosts and potions, and the
//! pending events the host drains after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{Animator, SheetId, SheetTable, ghost_sheet, player_sheet};
use super::rect::Rect;
use super::rng::RandomSource;
use super::spawn;
use crate::clamp_to;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with the start/music/sounds/exit buttons
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Survived until the countdown ran out
    Win,
    /// Touched a ghost without attacking
    Lose,
}

impl GamePhase {
    /// Whether entities are on screen in this phase
    pub fn shows_arena(&self) -> bool {
        !matches!(self, GamePhase::Menu)
    }
}

/// Things that happened during a tick, consumed by audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    AttackStarted,
    PotionCollected { id: u32 },
    GhostDefeated { id: u32 },
    PlayerHit,
    Won,
    ReturnedToMenu,
}

/// The player character (moves along the ground line only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Horizontal input direction: -1, 0 or 1
    pub direction: i8,
    /// Pixels per tick
    pub speed: f32,
    pub facing_left: bool,
    pub attacking: bool,
    /// Seconds of attack remaining
    pub attack_time: f32,
    pub sheet: SheetId,
    pub anim: Animator,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - PLAYER_GROUND_OFFSET))
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            direction: 0,
            speed: PLAYER_SPEED,
            facing_left: false,
            attacking: false,
            attack_time: 0.0,
            sheet: SheetId::PlayerIdle,
            anim: Animator::default(),
        }
    }

    /// Set horizontal direction from input; only the sign is kept
    pub fn set_direction(&mut self, direction: i32) {
        self.direction = direction.signum() as i8;
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.direction != 0
    }

    /// Begin an attack. Returns false (and changes nothing) if one is running.
    pub fn start_attack(&mut self) -> bool {
        if self.attacking {
            return false;
        }
        self.attacking = true;
        self.attack_time = ATTACK_DURATION;
        self.anim.rewind();
        true
    }

    /// Move, pick the sheet, run the attack timer and animate
    pub fn update(&mut self, dt: f32, sheets: &SheetTable) {
        let x = self.pos.x + f32::from(self.direction) * self.speed;
        self.pos.x = x.min(ARENA_WIDTH - EDGE_MARGIN).max(EDGE_MARGIN);

        // Facing sticks while idle
        if self.direction < 0 {
            self.facing_left = true;
        } else if self.direction > 0 {
            self.facing_left = false;
        }

        self.sheet = player_sheet(self.attacking, self.facing_left, self.is_moving());

        if self.attacking {
            self.attack_time -= dt;
            if self.attack_time <= 0.0 {
                self.attacking = false;
            }
        }

        self.anim.advance_sheet(dt, self.sheet, sheets);
    }

    pub fn hitbox(&self) -> Rect {
        Rect::hitbox(self.pos)
    }
}

/// A ghost wandering inside its home region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ghost {
    pub id: u32,
    pub pos: Vec2,
    /// Unit cardinal vector, or zero when hovering in place
    pub direction: Vec2,
    /// Pixels per tick
    pub speed: f32,
    /// Region the ghost may never leave
    pub area: Rect,
    /// Seconds until the next change of direction
    pub retarget_time: f32,
    pub sheet: SheetId,
    pub anim: Animator,
}

impl Ghost {
    /// Directions a ghost starts with
    pub const HEADINGS: [Vec2; 4] = [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y];
    /// Directions picked on retarget (hovering allowed)
    pub const WANDER: [Vec2; 5] = [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y, Vec2::ZERO];

    pub fn new(id: u32, pos: Vec2, area: Rect, rng: &mut dyn RandomSource) -> Self {
        let speed = GHOST_SPEEDS[rng.pick_index(GHOST_SPEEDS.len())];
        let direction = Self::HEADINGS[rng.pick_index(Self::HEADINGS.len())];
        let retarget_time = rng.uniform(GHOST_RETARGET_MIN, GHOST_RETARGET_MAX);
        Self {
            id,
            pos,
            direction,
            speed,
            area,
            retarget_time,
            sheet: SheetId::GhostIdle,
            anim: Animator::default(),
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.direction != Vec2::ZERO
    }

    /// Wander: retarget on a timer, move, stay inside the home region
    pub fn update(&mut self, dt: f32, rng: &mut dyn RandomSource, sheets: &SheetTable) {
        self.retarget_time -= dt;
        if self.retarget_time <= 0.0 {
            self.direction = Self::WANDER[rng.pick_index(Self::WANDER.len())];
            self.retarget_time = rng.uniform(GHOST_RETARGET_MIN, GHOST_RETARGET_MAX);
        }

        let (min, max) = self.area.wander_bounds();
        self.pos = clamp_to(self.pos + self.direction * self.speed, min, max);

        self.sheet = ghost_sheet(self.is_moving());
        self.anim.advance_sheet(dt, self.sheet, sheets);
    }

    pub fn hitbox(&self) -> Rect {
        Rect::hitbox(self.pos)
    }
}

/// A potion falling from above the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Potion {
    pub id: u32,
    pub pos: Vec2,
    /// Pixels per tick
    pub speed: f32,
}

impl Potion {
    /// New potion at a random column just above the top edge
    pub fn spawn(id: u32, rng: &mut dyn RandomSource) -> Self {
        let x = rng.int_inclusive(
            POTION_SPAWN_MARGIN,
            ARENA_WIDTH as i32 - POTION_SPAWN_MARGIN,
        );
        let speed = rng.uniform(POTION_MIN_SPEED, POTION_MAX_SPEED);
        Self {
            id,
            pos: Vec2::new(x as f32, POTION_SPAWN_Y),
            speed,
        }
    }

    /// Fall by one tick's worth; x never changes
    pub fn update(&mut self) {
        self.pos.y += self.speed;
    }

    pub fn hitbox(&self) -> Rect {
        Rect::hitbox(self.pos)
    }

    pub fn below_arena(&self) -> bool {
        self.pos.y > ARENA_HEIGHT
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    /// Countdown in seconds (may dip below zero on the final tick)
    pub timer: f32,
    /// Seconds since the last potion spawn
    pub spawn_timer: f32,
    pub player: Player,
    /// Live ghosts in stable spawn order
    pub ghosts: Vec<Ghost>,
    /// Live potions in stable spawn order
    pub potions: Vec<Potion>,
    /// Sheet geometry used for animation
    pub sheets: SheetTable,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SheetTable::default())
    }
}

impl GameState {
    /// A session sitting on the menu with an empty arena
    pub fn new(sheets: SheetTable) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            timer: ROUND_TIME,
            spawn_timer: 0.0,
            player: Player::default(),
            ghosts: Vec::new(),
            potions: Vec::new(),
            sheets,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reinitialize the player, ghosts, potions, score and timers.
    /// The phase is left alone.
    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        self.next_id = 1;
        self.player = Player::default();
        self.ghosts.clear();
        self.potions.clear();
        self.events.clear();
        spawn::populate_ghosts(self, rng);
        self.score = 0;
        self.timer = ROUND_TIME;
        self.spawn_timer = 0.0;
        log::info!("Session reset: {} ghosts", self.ghosts.len());
    }

    /// Menu -> Playing with a fresh session. Ignored outside the menu.
    pub fn start(&mut self, rng: &mut dyn RandomSource) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.reset(rng);
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::GameStarted);
        log::info!("Game started");
        true
    }

    /// Win/Lose -> Menu. Ignored in other phases.
    pub fn confirm(&mut self) -> bool {
        match self.phase {
            GamePhase::Win | GamePhase::Lose => {
                log::info!("Returning to menu (final score {})", self.score);
                self.phase = GamePhase::Menu;
                self.emit(GameEvent::ReturnedToMenu);
                true
            }
            _ => false,
        }
    }

    /// Begin a player attack, raising an event when it actually starts
    pub fn start_attack(&mut self) -> bool {
        let started = self.player.start_attack();
        if started {
            self.emit(GameEvent::AttackStarted);
        }
        started
    }

    /// Whole seconds remaining, truncated and never negative
    pub fn time_left(&self) -> u32 {
        self.timer.max(0.0) as u32
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{PcgSource, ScriptedRng};

    #[test]
    fn test_player_clamps_to_arena() {
        let sheets = SheetTable::default();
        let mut player = Player::new(Vec2::new(35.0, 550.0));
        player.set_direction(-1);
        player.update(1.0 / 60.0, &sheets);
        assert_eq!(player.pos.x, EDGE_MARGIN);

        player.pos.x = ARENA_WIDTH - 34.0;
        player.set_direction(1);
        player.update(1.0 / 60.0, &sheets);
        assert_eq!(player.pos.x, ARENA_WIDTH - EDGE_MARGIN);
        assert_eq!(player.pos.y, 550.0);
    }

    #[test]
    fn test_player_facing_is_sticky() {
        let sheets = SheetTable::default();
        let mut player = Player::default();
        player.set_direction(-5);
        assert_eq!(player.direction, -1);
        player.update(0.01, &sheets);
        assert!(player.facing_left);
        assert_eq!(player.sheet, SheetId::PlayerWalkFlipped);

        player.set_direction(0);
        player.update(0.01, &sheets);
        assert!(player.facing_left);
        assert_eq!(player.sheet, SheetId::PlayerIdleFlipped);
    }

    #[test]
    fn test_attack_cannot_be_chained() {
        let sheets = SheetTable::default();
        let mut player = Player::default();
        assert!(player.start_attack());
        player.update(0.13, &sheets);
        let time = player.attack_time;
        let frame = player.anim.frame();
        assert_eq!(frame, 1);

        assert!(!player.start_attack());
        assert_eq!(player.attack_time, time);
        assert_eq!(player.anim.frame(), frame);
    }

    #[test]
    fn test_attack_expires() {
        let sheets = SheetTable::default();
        let mut player = Player::default();
        player.start_attack();
        player.update(0.2, &sheets);
        assert!(player.attacking);
        assert_eq!(player.sheet, SheetId::PlayerAttack);
        player.update(0.1, &sheets);
        assert!(!player.attacking);
        // Attack can start again once finished
        assert!(player.start_attack());
    }

    #[test]
    fn test_ghost_retargets_from_script() {
        let sheets = SheetTable::default();
        let area = Rect::new(50.0, 50.0, 300.0, 500.0);
        // speed idx 0 (2 px), heading idx 0 (+x), retarget 0.8 s
        let mut rng = ScriptedRng::new([0.0, 0.0, 0.0]);
        let mut ghost = Ghost::new(1, Vec2::new(120.0, 150.0), area, &mut rng);
        assert_eq!(ghost.speed, 2.0);
        assert_eq!(ghost.direction, Vec2::X);
        assert!((ghost.retarget_time - 0.8).abs() < 1e-6);

        ghost.update(0.1, &mut rng, &sheets);
        assert_eq!(ghost.pos, Vec2::new(122.0, 150.0));
        assert_eq!(ghost.sheet, SheetId::GhostWalk);

        // Expire the timer and pick "hover" (last of five choices)
        let mut hover = ScriptedRng::new([0.99, 0.0]);
        ghost.update(1.0, &mut hover, &sheets);
        assert_eq!(ghost.direction, Vec2::ZERO);
        assert_eq!(ghost.pos, Vec2::new(122.0, 150.0));
        assert_eq!(ghost.sheet, SheetId::GhostIdle);
    }

    #[test]
    fn test_ghost_stays_in_region() {
        let sheets = SheetTable::default();
        let area = Rect::new(450.0, 50.0, 300.0, 500.0);
        let mut rng = PcgSource::new(99);
        let mut ghost = Ghost::new(1, Vec2::new(650.0, 350.0), area, &mut rng);
        for _ in 0..5000 {
            ghost.update(1.0 / 60.0, &mut rng, &sheets);
            assert!(ghost.pos.x >= 482.0 && ghost.pos.x <= 718.0);
            assert!(ghost.pos.y >= 82.0 && ghost.pos.y <= 518.0);
        }
    }

    #[test]
    fn test_potion_spawn_and_fall() {
        let mut rng = ScriptedRng::new([0.0, 0.5]);
        let mut potion = Potion::spawn(3, &mut rng);
        assert_eq!(potion.pos, Vec2::new(50.0, -50.0));
        assert_eq!(potion.speed, 3.0);
        potion.update();
        assert_eq!(potion.pos, Vec2::new(50.0, -47.0));
        assert!(!potion.below_arena());
    }

    #[test]
    fn test_reset_layout() {
        let mut state = GameState::default();
        let mut rng = PcgSource::new(1);
        assert!(state.start(&mut rng));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.timer, 30.0);
        assert_eq!(state.ghosts.len(), 4);
        assert!(state.potions.is_empty());
        assert_eq!(state.player.pos, Vec2::new(400.0, 550.0));
        assert_eq!(state.drain_events(), vec![GameEvent::GameStarted]);

        // Already playing: start is ignored
        assert!(!state.start(&mut rng));
    }

    #[test]
    fn test_confirm_only_after_round() {
        let mut state = GameState::default();
        assert!(!state.confirm());
        state.phase = GamePhase::Lose;
        assert!(state.confirm());
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_time_left_truncates() {
        let mut state = GameState::default();
        state.timer = 12.9;
        assert_eq!(state.time_left(), 12);
        state.timer = -0.3;
        assert_eq!(state.time_left(), 0);
    }
}
