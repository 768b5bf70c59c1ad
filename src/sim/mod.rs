//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed-time deltas supplied by the caller, nothing read from a clock
//! - Seeded RNG only, owned by each minigame
//! - Entities owned by the minigame (or player) that spawned them
//! - No rendering, audio or platform dependencies; sound cues are queued

pub mod alien;
pub mod bullet;
pub mod catcher;
pub mod catcher_asteroid;
pub mod collision;
pub mod entity;
pub mod frame;
pub mod input;
pub mod minigame;
pub mod player;
pub mod queue;
pub mod rect;
pub mod runner;
pub mod selector;
pub mod shooter;
pub mod space_object;
pub mod sprites;
pub mod star;
pub mod timer;
pub mod whacker;
pub mod whacker_asteroid;

pub use alien::{Alien, AlienKind, AlienState};
pub use bullet::{Bullet, BulletOwner};
pub use catcher::StarCatcher;
pub use catcher_asteroid::CatcherAsteroid;
pub use collision::{Axis, CollisionResult, Dir, circle_push_apart};
pub use entity::{Entity, Lifecycle, sweep_dead};
pub use frame::Frame;
pub use input::{InputSnapshot, Key, MouseState};
pub use minigame::{GameQueue, Minigame, MinigameBase};
pub use player::{HeldDir, Player};
pub use queue::{BoundedQueue, PackKind};
pub use rect::Rect;
pub use runner::SpaceRun;
pub use selector::Selector;
pub use shooter::AlienShooter;
pub use space_object::{SpaceObject, SpaceObjectKind};
pub use star::{Star, StarSize};
pub use timer::Timer;
pub use whacker::{Band, WhackAnAsteroid};
pub use whacker_asteroid::{HoleState, WhackerAsteroid};
