//! Whack-an-asteroid board holes

use glam::IVec2;

use super::entity::{Entity, Lifecycle};
use super::frame::Frame;
use super::rect::Rect;
use super::sprites;
use super::timer::Timer;

/// Hit animation length (5 frames, 3 ticks each at 60 Hz)
pub const POOF_MS: f32 = 250.0;
/// Timeout explosion length (9 frames, 2 ticks each at 60 Hz)
pub const EXPLODE_MS: f32 = 300.0;

/// Hole state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleState {
    Inactive,
    /// Asteroid showing and clickable
    Active,
    /// Hit animation
    Poof,
    /// Timeout animation
    Explode,
}

/// One board position: a crater with an asteroid that pops up in it
#[derive(Debug, Clone)]
pub struct WhackerAsteroid {
    crater: Rect,
    rect: Rect,
    state: HoleState,
    anim_timer: Timer,
}

impl WhackerAsteroid {
    /// Hole whose crater's top-left corner is `corner`
    pub fn new(corner: IVec2) -> Self {
        let crater = Rect::new(corner.x, corner.y, sprites::WHACKER_CIRCLE.x, sprites::WHACKER_CIRCLE.y);
        let rect = Rect::centered_on(crater.center(), sprites::WHACKER_ASTEROID.x, sprites::WHACKER_ASTEROID.y);
        Self {
            crater,
            rect,
            state: HoleState::Inactive,
            anim_timer: Timer::new(POOF_MS, false),
        }
    }

    pub fn state(&self) -> HoleState {
        self.state
    }

    pub fn crater(&self) -> Rect {
        self.crater
    }

    pub fn activate(&mut self) {
        self.state = HoleState::Active;
    }

    /// Hit: play the poof
    pub fn kill(&mut self) {
        self.state = HoleState::Poof;
        self.anim_timer.restart_with(POOF_MS);
    }

    /// Timed out: play the explosion
    pub fn explode(&mut self) {
        self.state = HoleState::Explode;
        self.anim_timer.restart_with(EXPLODE_MS);
    }

    /// Run the one-shot animation back to inactive
    pub fn update(&mut self, frame: &Frame) {
        if matches!(self.state, HoleState::Poof | HoleState::Explode) {
            self.anim_timer.update(frame.dt_ms);
            if self.anim_timer.is_finished() {
                self.state = HoleState::Inactive;
            }
        }
    }
}

impl Entity for WhackerAsteroid {
    /// The asteroid's rectangle (the click target)
    fn rect(&self) -> Rect {
        self.rect
    }

    fn lifecycle(&self) -> Lifecycle {
        match self.state {
            HoleState::Active => Lifecycle::Active,
            HoleState::Poof | HoleState::Explode => Lifecycle::Transitioning,
            HoleState::Inactive => Lifecycle::Dead,
        }
    }
}
