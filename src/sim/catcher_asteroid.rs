//! Catcher asteroids: horizontal drifters that shove the net and stars

use glam::Vec2;
use rand::Rng;

use super::collision::Dir;
use super::entity::{Entity, Lifecycle};
use super::frame::Frame;
use super::rect::Rect;
use super::sprites;
use crate::{ScreenSize, random_between};

/// Pixels per frame
pub const SPEED: f32 = 4.0;
/// Hitbox inset per side
const TOLERANCE: i32 = 35;

/// An asteroid crossing the catcher screen
#[derive(Debug, Clone)]
pub struct CatcherAsteroid {
    pos: Vec2,
    dir: Dir,
    rect: Rect,
    hitbox: Rect,
}

impl CatcherAsteroid {
    pub fn new(pos: Vec2, dir: Dir) -> Self {
        let mut asteroid = Self {
            pos,
            dir,
            rect: Rect::default(),
            hitbox: Rect::default(),
        };
        asteroid.refresh();
        asteroid
    }

    /// Enter from a random side, somewhere above `ceiling`
    pub fn spawn<R: Rng + ?Sized>(screen: ScreenSize, ceiling: i32, rng: &mut R) -> Self {
        let size = sprites::CATCHER_ASTEROID;
        let (x, dir) = if rng.random_bool(0.5) {
            (-size.x, Dir::Pos)
        } else {
            (screen.width, Dir::Neg)
        };
        let y = random_between(rng, 0, ceiling - size.y);
        Self::new(Vec2::new(x as f32, y as f32), dir)
    }

    fn refresh(&mut self) {
        let size = sprites::CATCHER_ASTEROID;
        self.rect = Rect::at(self.pos, size.x, size.y);
        self.hitbox = self.rect.inset(TOLERANCE, TOLERANCE);
    }

    pub fn update(&mut self, frame: &Frame) {
        self.pos.x += self.dir.sign() * SPEED * frame.scale();
        self.refresh();
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    /// Collision circle center (hitbox center)
    pub fn center(&self) -> Vec2 {
        self.hitbox.center().as_vec2()
    }

    pub fn radius(&self) -> f32 {
        (self.hitbox.w / 2) as f32
    }

    /// Past the far edge of its travel
    pub fn has_crossed(&self, screen_width: i32) -> bool {
        match self.dir {
            Dir::Pos => self.rect.left() >= screen_width,
            Dir::Neg => self.rect.right() <= 0,
        }
    }
}

impl Entity for CatcherAsteroid {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_hitbox_and_radius() {
        let a = CatcherAsteroid::new(Vec2::new(0.0, 0.0), Dir::Pos);
        assert_eq!(a.hitbox(), Rect::new(35, 35, 58, 58));
        assert_eq!(a.radius(), 29.0);
        assert_eq!(a.center(), Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_spawn_sides() {
        let mut rng = Pcg32::seed_from_u64(31);
        let screen = ScreenSize::default();
        for _ in 0..100 {
            let a = CatcherAsteroid::spawn(screen, 581, &mut rng);
            assert!(!a.has_crossed(screen.width));
            assert!(a.rect().bottom() <= 581);
            match a.dir() {
                Dir::Pos => assert_eq!(a.rect().right(), 0),
                Dir::Neg => assert_eq!(a.rect().left(), screen.width),
            }
        }
    }

    #[test]
    fn test_crosses_screen() {
        let screen = ScreenSize::default();
        let frame = Frame::nominal(screen);
        let mut a = CatcherAsteroid::new(Vec2::new(screen.width as f32, 100.0), Dir::Neg);
        let mut frames = 0;
        while !a.has_crossed(screen.width) {
            a.update(&frame);
            frames += 1;
        }
        assert_eq!(frames, (1024 + 128) / 4);
    }
}
