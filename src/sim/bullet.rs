//! Shooter projectiles

use glam::Vec2;

use super::entity::{Entity, Lifecycle};
use super::frame::Frame;
use super::rect::Rect;
use super::sprites;

/// Who fired a bullet; decides direction and spawn offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    /// Pixels per frame
    pub fn speed(self) -> f32 {
        match self {
            BulletOwner::Player => 6.25,
            BulletOwner::Enemy => 4.75,
        }
    }

    fn size(self) -> glam::IVec2 {
        match self {
            BulletOwner::Player => sprites::PLAYER_BULLET,
            BulletOwner::Enemy => sprites::ENEMY_BULLET,
        }
    }
}

/// A bullet travelling straight up (player) or down (enemy)
#[derive(Debug, Clone)]
pub struct Bullet {
    pos: Vec2,
    owner: BulletOwner,
    rect: Rect,
}

impl Bullet {
    /// Spawn a bullet from the shooter's rectangle
    ///
    /// Horizontally centered on the shooter; player bullets appear just above
    /// it, enemy bullets at its bottom edge.
    pub fn fire(owner: BulletOwner, shooter: &Rect) -> Self {
        let size = owner.size();
        let x = shooter.center().x - size.x / 2;
        let y = match owner {
            BulletOwner::Player => shooter.top() - size.y,
            BulletOwner::Enemy => shooter.bottom(),
        };
        let pos = Vec2::new(x as f32, y as f32);
        Self {
            pos,
            owner,
            rect: Rect::at(pos, size.x, size.y),
        }
    }

    pub fn update(&mut self, frame: &Frame) {
        let step = self.owner.speed() * frame.scale();
        match self.owner {
            BulletOwner::Player => self.pos.y -= step,
            BulletOwner::Enemy => self.pos.y += step,
        }
        let size = self.owner.size();
        self.rect = Rect::at(self.pos, size.x, size.y);
    }

    /// Past the edge it is travelling toward
    pub fn is_off_screen(&self, screen_height: i32) -> bool {
        match self.owner {
            BulletOwner::Player => self.rect.bottom() <= 0,
            BulletOwner::Enemy => self.rect.top() >= screen_height,
        }
    }

    pub fn owner(&self) -> BulletOwner {
        self.owner
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }
}

impl Entity for Bullet {
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
    use crate::ScreenSize;

    #[test]
    fn test_player_bullet_spawns_above_ship() {
        let ship = Rect::new(100, 700, 64, 64);
        let b = Bullet::fire(BulletOwner::Player, &ship);
        assert_eq!(b.rect().x, 132 - sprites::PLAYER_BULLET.x / 2);
        assert_eq!(b.rect().bottom(), 700);
    }

    #[test]
    fn test_enemy_bullet_spawns_below_alien() {
        let alien = Rect::new(300, 40, 64, 48);
        let b = Bullet::fire(BulletOwner::Enemy, &alien);
        assert_eq!(b.rect().top(), 88);
    }

    #[test]
    fn test_directions() {
        let frame = Frame::nominal(ScreenSize::default());
        let mut up = Bullet::fire(BulletOwner::Player, &Rect::new(0, 400, 64, 64));
        let mut down = Bullet::fire(BulletOwner::Enemy, &Rect::new(0, 100, 64, 48));
        let (y_up, y_down) = (up.pos().y, down.pos().y);
        up.update(&frame);
        down.update(&frame);
        assert!((y_up - up.pos().y - 6.25).abs() < 1e-4);
        assert!((down.pos().y - y_down - 4.75).abs() < 1e-4);
    }

    #[test]
    fn test_off_screen() {
        let frame = Frame::new(1000.0, ScreenSize::default());
        let mut b = Bullet::fire(BulletOwner::Player, &Rect::new(0, 40, 64, 64));
        assert!(!b.is_off_screen(768));
        b.update(&frame);
        assert!(b.is_off_screen(768));
    }
}
