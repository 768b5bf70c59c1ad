//! Catcher stars
//!
//! Three stars per wave, each with an independent per-axis speed and
//! direction that is re-rolled on a fixed interval. Caught or lost stars go
//! inactive until the next wave puts them back at their start points.

use glam::{IVec2, Vec2};
use rand::Rng;

use super::collision::{Axis, Dir};
use super::entity::{Entity, Lifecycle};
use super::frame::Frame;
use super::rect::Rect;
use super::sprites;
use super::timer::Timer;
use crate::ScreenSize;
use crate::consts::TITLE_OFFSET;

/// Direction re-roll interval (ms)
pub const CHANGE_MS: f32 = 2250.0;
const SPEED_MIN: i32 = 3;
const SPEED_MAX: i32 = 7;

/// Star sizes, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarSize {
    Big,
    Medium,
    Small,
}

impl StarSize {
    pub const ALL: [StarSize; 3] = [StarSize::Big, StarSize::Medium, StarSize::Small];

    pub fn size(self) -> IVec2 {
        match self {
            StarSize::Big => sprites::BIG_STAR,
            StarSize::Medium => sprites::MEDIUM_STAR,
            StarSize::Small => sprites::SMALL_STAR,
        }
    }

    /// Smaller stars are worth more
    pub fn points(self) -> u32 {
        match self {
            StarSize::Big => 30,
            StarSize::Medium => 40,
            StarSize::Small => 50,
        }
    }

    /// Wave start point, just above the top edge
    pub fn start_pos(self, screen: ScreenSize) -> Vec2 {
        let size = self.size();
        let x = match self {
            StarSize::Big => screen.width / 2 - TITLE_OFFSET,
            StarSize::Medium => TITLE_OFFSET,
            StarSize::Small => screen.width - TITLE_OFFSET * 2,
        };
        Vec2::new(x as f32, -size.y as f32)
    }
}

/// A catchable star
#[derive(Debug, Clone)]
pub struct Star {
    size: StarSize,
    pos: Vec2,
    rect: Rect,
    speed: Vec2,
    dir: [Dir; 2],
    active: bool,
    change_timer: Timer,
}

impl Star {
    pub fn new<R: Rng + ?Sized>(size: StarSize, screen: ScreenSize, rng: &mut R) -> Self {
        let mut star = Self {
            size,
            pos: Vec2::ZERO,
            rect: Rect::default(),
            speed: Vec2::ZERO,
            dir: [Dir::Pos, Dir::Pos],
            active: false,
            change_timer: Timer::new(CHANGE_MS, true),
        };
        star.reactivate(screen, rng);
        star
    }

    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.speed = Vec2::new(
            rng.random_range(SPEED_MIN..=SPEED_MAX) as f32,
            rng.random_range(SPEED_MIN..=SPEED_MAX) as f32,
        );
        for dir in self.dir.iter_mut() {
            *dir = if rng.random_bool(0.5) { Dir::Pos } else { Dir::Neg };
        }
        self.change_timer.reset(true);
    }

    fn refresh_rect(&mut self) {
        let size = self.size.size();
        self.rect = Rect::at(self.pos, size.x, size.y);
    }

    /// Back to the start point, heading down into the screen
    pub fn reactivate<R: Rng + ?Sized>(&mut self, screen: ScreenSize, rng: &mut R) {
        self.pos = self.size.start_pos(screen);
        self.refresh_rect();
        self.randomize(rng);
        self.dir[1] = Dir::Pos;
        self.active = true;
    }

    /// Caught or lost: park off-screen
    pub fn deactivate(&mut self) {
        self.pos.x = -200.0;
        self.refresh_rect();
        self.active = false;
        self.change_timer.reset(false);
    }

    pub fn update<R: Rng + ?Sized>(&mut self, frame: &Frame, rng: &mut R) {
        if !self.active {
            return;
        }
        self.change_timer.update(frame.dt_ms);
        let scale = frame.scale();
        self.pos.x += self.speed.x * self.dir[0].sign() * scale;
        self.pos.y += self.speed.y * self.dir[1].sign() * scale;
        self.refresh_rect();
        if !self.change_timer.is_active() {
            self.randomize(rng);
        }
    }

    pub fn change_dir(&mut self, axis: Axis, dir: Dir) {
        match axis {
            Axis::X => self.dir[0] = dir,
            Axis::Y => self.dir[1] = dir,
        }
    }

    pub fn add_to_pos(&mut self, delta: Vec2) {
        self.pos += delta;
        self.refresh_rect();
    }

    pub fn dir(&self, axis: Axis) -> Dir {
        match axis {
            Axis::X => self.dir[0],
            Axis::Y => self.dir[1],
        }
    }

    pub fn star_size(&self) -> StarSize {
        self.size
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn speed(&self) -> Vec2 {
        self.speed
    }

    pub fn points(&self) -> u32 {
        self.size.points()
    }

    pub fn radius(&self) -> f32 {
        (self.rect.w.min(self.rect.h) as f32) / 2.0
    }
}

impl Entity for Star {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn lifecycle(&self) -> Lifecycle {
        if self.active { Lifecycle::Active } else { Lifecycle::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_star_starts_above_screen_heading_down() {
        let mut rng = Pcg32::seed_from_u64(21);
        let screen = ScreenSize::default();
        for size in StarSize::ALL {
            let star = Star::new(size, screen, &mut rng);
            assert!(star.is_active());
            assert_eq!(star.rect().bottom(), 0);
            assert_eq!(star.dir(Axis::Y), Dir::Pos);
            assert!((3.0..=7.0).contains(&star.speed().x));
            assert!((3.0..=7.0).contains(&star.speed().y));
        }
    }

    #[test]
    fn test_points_and_radius() {
        let mut rng = Pcg32::seed_from_u64(22);
        let star = Star::new(StarSize::Small, ScreenSize::default(), &mut rng);
        assert_eq!(star.points(), 50);
        assert_eq!(star.radius(), 18.0);
    }

    #[test]
    fn test_moves_along_direction_flags() {
        let mut rng = Pcg32::seed_from_u64(23);
        let frame = Frame::nominal(ScreenSize::default());
        let mut star = Star::new(StarSize::Big, ScreenSize::default(), &mut rng);
        star.change_dir(Axis::X, Dir::Neg);
        let before = star.pos();
        star.update(&frame, &mut rng);
        assert!(star.pos().x < before.x);
        assert!(star.pos().y > before.y);
    }

    #[test]
    fn test_deactivate_and_reactivate() {
        let mut rng = Pcg32::seed_from_u64(24);
        let screen = ScreenSize::default();
        let mut star = Star::new(StarSize::Medium, screen, &mut rng);
        star.deactivate();
        assert!(!star.is_active());
        let frozen = star.pos();
        star.update(&Frame::nominal(screen), &mut rng);
        assert_eq!(star.pos(), frozen);
        star.reactivate(screen, &mut rng);
        assert!(star.is_active());
        assert_eq!(star.pos(), StarSize::Medium.start_pos(screen));
    }
}
