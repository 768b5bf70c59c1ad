//! Minigame base and dispatch
//!
//! Every minigame runs against the same 60 second countdown and keeps its
//! own score. `Minigame` is the tagged union the session schedules; each
//! variant owns its entities and timers outright.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::catcher::StarCatcher;
use super::frame::Frame;
use super::input::InputSnapshot;
use super::player::Player;
use super::queue::BoundedQueue;
use super::runner::SpaceRun;
use super::shooter::AlienShooter;
use super::timer::Timer;
use super::whacker::WhackAnAsteroid;
use crate::audio::SoundEffect;
use crate::consts::GAME_LENGTH_MS;
use crate::{GameType, ScreenSize, deduct};

/// State shared by all minigames: score, countdown and sound outbox
#[derive(Debug, Clone)]
pub struct MinigameBase {
    score: u32,
    game_timer: Timer,
    screen: ScreenSize,
    sounds: Vec<SoundEffect>,
}

impl MinigameBase {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            score: 0,
            game_timer: Timer::new(GAME_LENGTH_MS, true),
            screen,
            sounds: Vec::new(),
        }
    }

    /// Advance the countdown
    pub fn tick(&mut self, dt_ms: f32) {
        self.game_timer.update(dt_ms);
    }

    /// Still counting down
    pub fn is_active(&self) -> bool {
        !self.game_timer.is_finished()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Subtract points, flooring at zero
    pub fn deduct(&mut self, penalty: u32) {
        self.score = deduct(self.score, penalty);
    }

    /// Milliseconds into the round
    pub fn elapsed(&self) -> f32 {
        self.game_timer.elapsed()
    }

    /// Milliseconds left in the round
    pub fn remaining(&self) -> f32 {
        self.game_timer.remaining()
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn frame(&self, dt_ms: f32) -> Frame {
        Frame::new(dt_ms, self.screen)
    }

    /// HUD countdown, "Time Left: SS.mm"
    pub fn time_label(&self) -> String {
        if !self.is_active() {
            return "Time Left: 00.00".to_string();
        }
        let remaining = self.remaining().max(0.0) as u32;
        format!("Time Left: {:02}.{:02}", remaining / 1000, (remaining % 1000) / 10)
    }

    /// HUD score line
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    pub fn extend_sounds(&mut self, effects: impl IntoIterator<Item = SoundEffect>) {
        self.sounds.extend(effects);
    }

    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub(crate) fn fast_forward(&mut self, ms: f32) {
        self.game_timer.update(ms);
    }
}

/// One playable round of any minigame
#[derive(Debug, Clone)]
pub enum Minigame {
    Shooter(AlienShooter),
    Runner(SpaceRun),
    Catcher(StarCatcher),
    Whacker(WhackAnAsteroid),
}

/// Pending minigames of a pack
pub type GameQueue = BoundedQueue<Minigame>;

impl Minigame {
    /// Build a fresh round. Returns None for the aggregate game types.
    pub fn new(game_type: GameType, screen: ScreenSize, seed: u64) -> Option<Self> {
        let rng = Pcg32::seed_from_u64(seed);
        let game = match game_type {
            GameType::Shooter => Minigame::Shooter(AlienShooter::new(screen, rng)),
            GameType::Runner => Minigame::Runner(SpaceRun::new(screen, rng)),
            GameType::Catcher => Minigame::Catcher(StarCatcher::new(screen, rng)),
            GameType::Whacker => Minigame::Whacker(WhackAnAsteroid::new(screen, rng)),
            GameType::Tri | GameType::Quad => return None,
        };
        log::debug!("built {} round (seed {})", game_type.display_name(), seed);
        Some(game)
    }

    pub fn game_type(&self) -> GameType {
        match self {
            Minigame::Shooter(_) => GameType::Shooter,
            Minigame::Runner(_) => GameType::Runner,
            Minigame::Catcher(_) => GameType::Catcher,
            Minigame::Whacker(_) => GameType::Whacker,
        }
    }

    fn base(&self) -> &MinigameBase {
        match self {
            Minigame::Shooter(g) => g.base(),
            Minigame::Runner(g) => g.base(),
            Minigame::Catcher(g) => g.base(),
            Minigame::Whacker(g) => g.base(),
        }
    }

    fn base_mut(&mut self) -> &mut MinigameBase {
        match self {
            Minigame::Shooter(g) => g.base_mut(),
            Minigame::Runner(g) => g.base_mut(),
            Minigame::Catcher(g) => g.base_mut(),
            Minigame::Whacker(g) => g.base_mut(),
        }
    }

    /// Advance one frame. Does nothing once the countdown has finished.
    pub fn update(&mut self, dt_ms: f32, player: &mut Player, input: &InputSnapshot) {
        if !self.is_active() {
            return;
        }
        match self {
            Minigame::Shooter(g) => g.update(dt_ms, player, input),
            Minigame::Runner(g) => g.update(dt_ms, player, input),
            Minigame::Catcher(g) => g.update(dt_ms, player, input),
            Minigame::Whacker(g) => g.update(dt_ms, player, input),
        }
        let cues = player.take_sounds();
        self.base_mut().extend_sounds(cues);
    }

    pub fn score(&self) -> u32 {
        self.base().score()
    }

    pub fn is_active(&self) -> bool {
        self.base().is_active()
    }

    pub fn time_label(&self) -> String {
        self.base().time_label()
    }

    pub fn score_label(&self) -> String {
        self.base().score_label()
    }

    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        self.base_mut().drain_sounds()
    }

    /// Rebuild as a fresh round of the same game
    pub fn reset(&mut self, seed: u64) {
        let screen = self.base().screen();
        if let Some(fresh) = Minigame::new(self.game_type(), screen, seed) {
            *self = fresh;
        }
    }
}
