//! Runner obstacles and pickups
//!
//! Everything scrolls in from the right (fireballs drop in from above). The
//! hitbox is the sprite rectangle inset by a per-kind tolerance so that
//! transparent padding does not count as a touch.

use glam::{IVec2, Vec2};
use rand::Rng;

use super::entity::{Entity, Lifecycle};
use super::frame::Frame;
use super::rect::Rect;
use super::sprites;
use crate::{ScreenSize, random_between};

/// Space left clear at the bottom of the runner screen
pub const BOTTOM_TOLERANCE: i32 = 120;

/// Runner object kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceObjectKind {
    /// Straight leftward hazard
    Asteroid,
    /// Diagonal leftward and downward hazard
    Fireball,
    /// Looks like a coin, costs points on touch
    FakeCoin,
    /// Grants a dodge-bonus window on touch
    Coin,
}

impl SpaceObjectKind {
    /// Roll a kind using the 30/30/30/10 weights
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let roll = random_between(rng, 1, 100);
        if roll <= 30 {
            SpaceObjectKind::Asteroid
        } else if roll <= 60 {
            SpaceObjectKind::Fireball
        } else if roll <= 90 {
            SpaceObjectKind::FakeCoin
        } else {
            SpaceObjectKind::Coin
        }
    }

    /// Pixels per frame
    pub fn speed(self) -> f32 {
        match self {
            SpaceObjectKind::Asteroid => 8.0,
            SpaceObjectKind::Fireball => 6.0,
            SpaceObjectKind::FakeCoin => 7.5,
            SpaceObjectKind::Coin => 10.0,
        }
    }

    pub fn size(self) -> IVec2 {
        match self {
            SpaceObjectKind::Asteroid => sprites::RUNNER_ASTEROID,
            SpaceObjectKind::Fireball => sprites::FIREBALL,
            SpaceObjectKind::FakeCoin => sprites::FAKE_COIN,
            SpaceObjectKind::Coin => sprites::COIN,
        }
    }

    /// Hitbox inset per side (x, y)
    pub fn tolerance(self) -> IVec2 {
        match self {
            SpaceObjectKind::Asteroid => IVec2::new(40, 40),
            SpaceObjectKind::Fireball => IVec2::new(42, 22),
            SpaceObjectKind::FakeCoin | SpaceObjectKind::Coin => IVec2::new(12, 2),
        }
    }

    pub fn is_coin(self) -> bool {
        self == SpaceObjectKind::Coin
    }

    /// Spawn position for this kind
    pub fn spawn_pos<R: Rng + ?Sized>(self, screen: ScreenSize, rng: &mut R) -> Vec2 {
        let size = self.size();
        let (w, h) = (screen.width, screen.height);
        match self {
            SpaceObjectKind::Asteroid => {
                let y = random_between(rng, h / 2 - size.y, h - BOTTOM_TOLERANCE - size.y);
                Vec2::new(w as f32, y as f32)
            }
            SpaceObjectKind::Fireball => {
                let max_x = (w as f32 - size.x as f32 * 1.2) as i32;
                let x = random_between(rng, (w + size.x) / 2, max_x);
                Vec2::new(x as f32, -size.y as f32)
            }
            SpaceObjectKind::FakeCoin => {
                let y = random_between(rng, 0, h / 2 - size.y);
                Vec2::new(w as f32, y as f32)
            }
            SpaceObjectKind::Coin => {
                let y = random_between(rng, 0, h - BOTTOM_TOLERANCE - size.y);
                Vec2::new(w as f32, y as f32)
            }
        }
    }
}

/// A scrolling runner object
#[derive(Debug, Clone)]
pub struct SpaceObject {
    kind: SpaceObjectKind,
    pos: Vec2,
    rect: Rect,
    hitbox: Rect,
}

impl SpaceObject {
    pub fn new(kind: SpaceObjectKind, pos: Vec2) -> Self {
        let mut obj = Self {
            kind,
            pos,
            rect: Rect::default(),
            hitbox: Rect::default(),
        };
        obj.refresh();
        obj
    }

    /// Roll a kind and place it at its spawn position
    pub fn random<R: Rng + ?Sized>(screen: ScreenSize, rng: &mut R) -> Self {
        let kind = SpaceObjectKind::roll(rng);
        let pos = kind.spawn_pos(screen, rng);
        Self::new(kind, pos)
    }

    fn refresh(&mut self) {
        let size = self.kind.size();
        let tol = self.kind.tolerance();
        self.rect = Rect::at(self.pos, size.x, size.y);
        self.hitbox = self.rect.inset(tol.x, tol.y);
    }

    pub fn update(&mut self, frame: &Frame) {
        let step = self.kind.speed() * frame.scale();
        match self.kind {
            SpaceObjectKind::Fireball => {
                self.pos.x -= step * 0.8;
                self.pos.y += step * 1.15;
            }
            _ => self.pos.x -= step,
        }
        self.refresh();
    }

    pub fn kind(&self) -> SpaceObjectKind {
        self.kind
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    /// Fully past the left edge
    pub fn has_exited(&self) -> bool {
        self.rect.right() <= 0
    }
}

impl Entity for SpaceObject {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::Active
    }
}
