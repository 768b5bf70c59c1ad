//! Sprite frame sizes
//!
//! Rectangles are derived from these dimensions, so they stand in for the
//! loaded images.

use glam::IVec2;

use crate::GameType;

// Player avatars
pub const SHOOTER_SHIP: IVec2 = IVec2::new(64, 64);
pub const RUNNER_ASTRONAUT: IVec2 = IVec2::new(48, 64);
pub const CATCHER_NET: IVec2 = IVec2::new(96, 64);
pub const WHACKER_HAMMER: IVec2 = IVec2::new(48, 48);

// Shooter
pub const PLAYER_BULLET: IVec2 = IVec2::new(8, 24);
pub const ENEMY_BULLET: IVec2 = IVec2::new(12, 24);
pub const SHIP_ALIEN: IVec2 = IVec2::new(64, 48);
pub const SPLASH_ALIEN: IVec2 = IVec2::new(56, 56);
pub const POISON_ALIEN: IVec2 = IVec2::new(48, 48);
pub const SPLAT: IVec2 = IVec2::new(64, 64);

// Runner (one animation frame each)
pub const RUNNER_ASTEROID: IVec2 = IVec2::new(128, 128);
pub const FIREBALL: IVec2 = IVec2::new(128, 96);
pub const FAKE_COIN: IVec2 = IVec2::new(48, 48);
pub const COIN: IVec2 = IVec2::new(48, 48);

// Catcher
pub const BIG_STAR: IVec2 = IVec2::new(55, 55);
pub const MEDIUM_STAR: IVec2 = IVec2::new(47, 47);
pub const SMALL_STAR: IVec2 = IVec2::new(36, 36);
pub const CATCHER_ASTEROID: IVec2 = RUNNER_ASTEROID;
pub const STOP_BUTTON: IVec2 = IVec2::new(128, 48);

// Whacker
pub const WHACKER_CIRCLE: IVec2 = IVec2::new(96, 96);
pub const WHACKER_ASTEROID: IVec2 = IVec2::new(64, 64);

/// Avatar size for a minigame (aggregate types have no avatar)
pub fn player_size(game_type: GameType) -> IVec2 {
    match game_type {
        GameType::Shooter => SHOOTER_SHIP,
        GameType::Runner => RUNNER_ASTRONAUT,
        GameType::Catcher => CATCHER_NET,
        GameType::Whacker => WHACKER_HAMMER,
        GameType::Tri | GameType::Quad => IVec2::ZERO,
    }
}
