//! Shooter aliens
//!
//! All three kinds share the hp / splat / death lifecycle; each carries its
//! own movement state:
//! - Ship: three-leg patrol (left, down, right) then exits upward, firing
//!   on a fixed interval
//! - Splash: crosses the screen left to right along a downward-opening parabola
//! - Poison: homes in on the player; after touching the player it falls off
//!   the bottom of the screen

use glam::{IVec2, Vec2};
use rand::Rng;

use super::bullet::{Bullet, BulletOwner};
use super::entity::{Entity, Lifecycle};
use super::frame::Frame;
use super::rect::Rect;
use super::sprites;
use super::timer::Timer;
use crate::audio::SoundEffect;
use crate::{ScreenSize, random_between};

/// Time the splat stays on screen (ms)
pub const SPLAT_MS: f32 = 500.0;
/// Ship alien fire interval (ms)
pub const SHIP_FIRE_MS: f32 = 1500.0;
/// Splash alien parabola curvature
pub const SPLASH_CURVE: f32 = 0.0005;

/// Alien variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienKind {
    Ship,
    Splash,
    Poison,
}

impl AlienKind {
    /// Pixels per frame
    pub fn speed(self) -> f32 {
        match self {
            AlienKind::Ship => 3.65,
            AlienKind::Splash => 4.25,
            AlienKind::Poison => 3.5,
        }
    }

    pub fn max_hp(self) -> u32 {
        match self {
            AlienKind::Ship => 4,
            AlienKind::Splash => 2,
            AlienKind::Poison => 3,
        }
    }

    /// Points for a kill
    pub fn points(self) -> u32 {
        match self {
            AlienKind::Ship => 30,
            AlienKind::Splash => 20,
            AlienKind::Poison => 25,
        }
    }

    pub fn size(self) -> IVec2 {
        match self {
            AlienKind::Ship => sprites::SHIP_ALIEN,
            AlienKind::Splash => sprites::SPLASH_ALIEN,
            AlienKind::Poison => sprites::POISON_ALIEN,
        }
    }

    /// Cue played when a player bullet lands
    pub fn hit_sound(self) -> SoundEffect {
        match self {
            AlienKind::Ship => SoundEffect::ShipAlienHit,
            AlienKind::Splash => SoundEffect::SplashAlienHit,
            AlienKind::Poison => SoundEffect::PoisonAlienHit,
        }
    }

    /// Spawn position for this kind
    pub fn spawn_pos<R: Rng + ?Sized>(self, screen: ScreenSize, rng: &mut R) -> Vec2 {
        let size = self.size();
        let ship_h = sprites::SHIP_ALIEN.y;
        match self {
            AlienKind::Ship => Vec2::new(screen.width as f32, random_between(rng, 0, ship_h) as f32),
            AlienKind::Splash => {
                let mid = screen.height / 2;
                let y = random_between(rng, mid - size.y * 2, mid + size.y);
                Vec2::new(-size.x as f32, y as f32)
            }
            AlienKind::Poison => {
                let x = random_between(rng, 0, screen.width - size.x);
                Vec2::new(x as f32, -ship_h as f32)
            }
        }
    }
}

/// Alien state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienState {
    Active,
    /// Poison alien after touching the player: falls off the bottom
    Poisoned,
    /// Shot down, splat showing
    Splat,
    Dead,
}

/// Ship patrol legs, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatrolLeg {
    Left,
    Down,
    Right,
    Exit,
}

#[derive(Debug, Clone)]
struct ShipPatrol {
    leg: PatrolLeg,
    left_x: i32,
    down_y: i32,
    right_x: i32,
    fire_timer: Timer,
}

#[derive(Debug, Clone)]
enum Behavior {
    Ship(ShipPatrol),
    Splash { start_y: f32, max_y: f32 },
    Poison,
}

/// A shooter alien
#[derive(Debug, Clone)]
pub struct Alien {
    kind: AlienKind,
    pos: Vec2,
    rect: Rect,
    splat_rect: Rect,
    hp: u32,
    state: AlienState,
    splat_timer: Timer,
    behavior: Behavior,
}

impl Alien {
    /// Create an alien at `pos`; ship patrol thresholds are rolled here
    pub fn new<R: Rng + ?Sized>(kind: AlienKind, pos: Vec2, screen: ScreenSize, rng: &mut R) -> Self {
        let size = kind.size();
        let behavior = match kind {
            AlienKind::Ship => {
                let mid = screen.height / 2;
                Behavior::Ship(ShipPatrol {
                    leg: PatrolLeg::Left,
                    left_x: random_between(rng, 0, size.x * 2),
                    down_y: random_between(rng, mid - size.y * 2, mid + size.y * 2),
                    right_x: random_between(rng, screen.width - size.x * 2, screen.width - size.x),
                    fire_timer: Timer::new(SHIP_FIRE_MS, true),
                })
            }
            AlienKind::Splash => Behavior::Splash {
                start_y: pos.y,
                max_y: ((pos.y as i32) / 2) as f32,
            },
            AlienKind::Poison => Behavior::Poison,
        };
        let rect = Rect::at(pos, size.x, size.y);
        Self {
            kind,
            pos,
            rect,
            splat_rect: Rect::at(pos, sprites::SPLAT.x, sprites::SPLAT.y),
            hp: kind.max_hp(),
            state: AlienState::Active,
            splat_timer: Timer::new(SPLAT_MS, false),
            behavior,
        }
    }

    /// Create an alien at its kind's spawn position
    pub fn spawn<R: Rng + ?Sized>(kind: AlienKind, screen: ScreenSize, rng: &mut R) -> Self {
        let pos = kind.spawn_pos(screen, rng);
        Self::new(kind, pos, screen, rng)
    }

    pub fn kind(&self) -> AlienKind {
        self.kind
    }

    pub fn state(&self) -> AlienState {
        self.state
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn points(&self) -> u32 {
        self.kind.points()
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn splat_rect(&self) -> Rect {
        self.splat_rect
    }

    pub fn lower_hp(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    /// Shot down: show the splat where the alien was and start its timer
    pub fn deactivate(&mut self) {
        self.splat_rect = Rect::centered_on(self.rect.center(), sprites::SPLAT.x, sprites::SPLAT.y);
        self.pos.x = -200.0;
        self.refresh_rect();
        self.state = AlienState::Splat;
        self.splat_timer.reset(true);
    }

    /// Poison alien touched the player
    pub fn poison(&mut self) {
        if self.state == AlienState::Active {
            self.state = AlienState::Poisoned;
        }
    }

    fn refresh_rect(&mut self) {
        let size = self.kind.size();
        self.rect = Rect::at(self.pos, size.x, size.y);
    }

    /// Advance one frame. Returns a bullet when a ship alien fires.
    pub fn update(&mut self, frame: &Frame, player_pos: Vec2) -> Option<Bullet> {
        self.splat_timer.update(frame.dt_ms);
        let step = self.kind.speed() * frame.scale();

        match self.state {
            AlienState::Active => self.step_active(frame, step, player_pos),
            AlienState::Poisoned => {
                self.pos.y += step;
                self.refresh_rect();
                if self.rect.top() >= frame.height() {
                    self.state = AlienState::Dead;
                }
                None
            }
            AlienState::Splat => {
                if self.splat_timer.is_finished() {
                    self.state = AlienState::Dead;
                }
                None
            }
            AlienState::Dead => None,
        }
    }

    fn step_active(&mut self, frame: &Frame, step: f32, player_pos: Vec2) -> Option<Bullet> {
        let size = self.kind.size();
        match &mut self.behavior {
            Behavior::Ship(patrol) => {
                patrol.fire_timer.update(frame.dt_ms);
                match patrol.leg {
                    PatrolLeg::Left => self.pos.x -= step,
                    PatrolLeg::Down => self.pos.y += step,
                    PatrolLeg::Right => self.pos.x += step,
                    PatrolLeg::Exit => self.pos.y -= step,
                }
                let rect = Rect::at(self.pos, size.x, size.y);
                match patrol.leg {
                    PatrolLeg::Left if rect.left() <= patrol.left_x => patrol.leg = PatrolLeg::Down,
                    PatrolLeg::Down if rect.bottom() >= patrol.down_y => patrol.leg = PatrolLeg::Right,
                    PatrolLeg::Right if rect.right() >= patrol.right_x => patrol.leg = PatrolLeg::Exit,
                    PatrolLeg::Exit if rect.bottom() <= 0 => self.state = AlienState::Dead,
                    _ => {}
                }
                self.rect = rect;

                if self.state == AlienState::Active && !patrol.fire_timer.is_active() {
                    patrol.fire_timer.reset(true);
                    return Some(Bullet::fire(BulletOwner::Enemy, &self.rect));
                }
                None
            }
            Behavior::Splash { start_y, max_y } => {
                self.pos.x += step;
                let center_x = ((frame.width() + size.x) / 2) as f32;
                let dx = self.pos.x - center_x;
                self.pos.y = *start_y - (-(dx * dx) * SPLASH_CURVE + *max_y);
                self.rect = Rect::at(self.pos, size.x, size.y);
                if self.rect.left() >= frame.width() {
                    self.state = AlienState::Dead;
                }
                None
            }
            Behavior::Poison => {
                let heading = (player_pos - self.pos).try_normalize().unwrap_or(Vec2::ZERO);
                self.pos += heading * step;
                self.rect = Rect::at(self.pos, size.x, size.y);
                None
            }
        }
    }
}

impl Entity for Alien {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn lifecycle(&self) -> Lifecycle {
        match self.state {
            AlienState::Active => Lifecycle::Active,
            AlienState::Poisoned | AlienState::Splat => Lifecycle::Transitioning,
            AlienState::Dead => Lifecycle::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn frame() -> Frame {
        Frame::nominal(ScreenSize::default())
    }

    #[test]
    fn test_hp_hits_until_splat() {
        let mut rng = Pcg32::seed_from_u64(1);
        for kind in [AlienKind::Ship, AlienKind::Splash, AlienKind::Poison] {
            let mut alien = Alien::spawn(kind, ScreenSize::default(), &mut rng);
            for _ in 0..kind.max_hp() - 1 {
                alien.lower_hp();
                assert!(alien.hp() > 0);
                assert_eq!(alien.state(), AlienState::Active);
            }
            alien.lower_hp();
            assert_eq!(alien.hp(), 0);
            alien.deactivate();
            assert_eq!(alien.state(), AlienState::Splat);
        }
    }

    #[test]
    fn test_splat_lasts_full_window() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut alien = Alien::spawn(AlienKind::Splash, ScreenSize::default(), &mut rng);
        let center = alien.rect().center();
        alien.deactivate();
        assert_eq!(alien.splat_rect().center(), center);
        assert!(alien.rect().right() < 0);

        let f = Frame::new(100.0, ScreenSize::default());
        for _ in 0..4 {
            alien.update(&f, Vec2::ZERO);
            assert_eq!(alien.state(), AlienState::Splat);
        }
        // 499 ms
        alien.update(&Frame::new(99.0, ScreenSize::default()), Vec2::ZERO);
        assert_eq!(alien.state(), AlienState::Splat);
        alien.update(&Frame::new(1.0, ScreenSize::default()), Vec2::ZERO);
        assert_eq!(alien.state(), AlienState::Dead);
        assert!(alien.is_dead());
    }

    #[test]
    fn test_ship_patrol_legs() {
        let mut rng = Pcg32::seed_from_u64(3);
        let screen = ScreenSize::default();
        let mut alien = Alien::spawn(AlienKind::Ship, screen, &mut rng);
        let start = alien.pos();
        assert_eq!(start.x, screen.width as f32);

        // First leg heads left
        alien.update(&frame(), Vec2::ZERO);
        assert!(alien.pos().x < start.x);

        // Eventually reaches the exit and dies off the top
        let mut fired = 0;
        for _ in 0..5000 {
            if alien.update(&frame(), Vec2::ZERO).is_some() {
                fired += 1;
            }
            if alien.is_dead() {
                break;
            }
        }
        assert!(alien.is_dead());
        assert!(alien.rect().bottom() <= 0);
        assert!(fired > 0);
    }

    #[test]
    fn test_ship_fires_on_interval() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut alien = Alien::spawn(AlienKind::Ship, ScreenSize::default(), &mut rng);
        let f = Frame::new(500.0, ScreenSize::default());
        assert!(alien.update(&f, Vec2::ZERO).is_none());
        assert!(alien.update(&f, Vec2::ZERO).is_none());
        let bullet = alien.update(&f, Vec2::ZERO);
        let bullet = bullet.expect("fires after 1500 ms");
        assert_eq!(bullet.owner(), BulletOwner::Enemy);
        assert_eq!(bullet.rect().top(), alien.rect().bottom());
    }

    #[test]
    fn test_splash_follows_parabola_and_exits_right() {
        let mut rng = Pcg32::seed_from_u64(5);
        let screen = ScreenSize::default();
        let mut alien = Alien::new(AlienKind::Splash, Vec2::new(-56.0, 400.0), screen, &mut rng);
        let mut lowest = f32::MAX;
        while !alien.is_dead() {
            alien.update(&frame(), Vec2::ZERO);
            lowest = lowest.min(alien.pos().y);
        }
        // Apex sits max_y above the start height
        assert!((lowest - 200.0).abs() < 2.0);
        assert!(alien.rect().left() >= screen.width);
    }

    #[test]
    fn test_poison_seeks_then_falls() {
        let mut rng = Pcg32::seed_from_u64(6);
        let screen = ScreenSize::default();
        let mut alien = Alien::new(AlienKind::Poison, Vec2::new(100.0, 0.0), screen, &mut rng);
        let target = Vec2::new(100.0, 500.0);
        alien.update(&frame(), target);
        assert!((alien.pos() - Vec2::new(100.0, 3.5)).length() < 1e-4);

        alien.poison();
        assert_eq!(alien.state(), AlienState::Poisoned);
        let x = alien.pos().x;
        while !alien.is_dead() {
            alien.update(&frame(), target);
        }
        assert_eq!(alien.pos().x, x);
        assert!(alien.rect().top() >= screen.height);
    }

    #[test]
    fn test_poison_on_target_does_not_nan() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut alien = Alien::new(AlienKind::Poison, Vec2::new(10.0, 10.0), ScreenSize::default(), &mut rng);
        alien.update(&frame(), Vec2::new(10.0, 10.0));
        assert!(alien.pos().is_finite());
    }
}
