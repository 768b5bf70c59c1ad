//! The player's avatar
//!
//! One avatar is shared by all four minigames. `setup` picks the mode for
//! the minigame about to start; `update` then dispatches on that mode:
//! - Shooter: left/right movement, fires on Space with a reload delay
//! - Runner: Space thrusts up, otherwise falls; tracks how long each
//!   direction has been held
//! - Catcher: flies on its own, bouncing; speed boosts decay after a window
//! - Whacker: a hammer glued to the mouse
//!
//! The avatar also carries the player's identity and score bookkeeping.

use glam::{IVec2, Vec2};

use super::bullet::{Bullet, BulletOwner};
use super::collision::{Axis, Dir};
use super::frame::Frame;
use super::input::{InputSnapshot, Key};
use super::rect::Rect;
use super::space_object::BOTTOM_TOLERANCE;
use super::sprites;
use super::timer::Timer;
use crate::audio::SoundEffect;
use crate::consts::TITLE_OFFSET;
use crate::highscores::PlayerProfile;
use crate::{GameType, ScoreTable, ScreenSize};

/// Shooter reload delay (ms)
pub const FIRE_MS: f32 = 333.0;
/// Interval between jetpack sound cues (ms)
pub const THRUST_SOUND_MS: f32 = 200.0;
/// Extra catcher speed per bounce
pub const SPEED_BOOST: f32 = 0.5;
/// Catcher bounce boost lifetime (ms)
pub const BOOST_MS: f32 = 750.0;
/// Runner falls this much faster than it climbs
const FALL_FACTOR: f32 = 1.2;

/// Which direction-held timer to query in the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldDir {
    /// Thrusting up
    Thrust,
    /// Falling
    Fall,
}

#[derive(Debug, Clone)]
struct ShooterMode {
    fire_timer: Timer,
}

#[derive(Debug, Clone)]
struct RunnerMode {
    thrust_sound: Timer,
    thrust_held: Timer,
    fall_held: Timer,
    thrusting: bool,
}

#[derive(Debug, Clone)]
struct CatcherMode {
    x_speed: f32,
    dir: [Dir; 2],
    boosts: Vec2,
    boost_timer: Timer,
}

/// Per-minigame transient state
#[derive(Debug, Clone)]
enum PlayerMode {
    Idle,
    Shooter(ShooterMode),
    Runner(RunnerMode),
    Catcher(CatcherMode),
    Whacker,
}

/// The player: identity, scores and the avatar
#[derive(Debug, Clone)]
pub struct Player {
    profile: PlayerProfile,
    current: ScoreTable,
    game_type: Option<GameType>,
    pos: Vec2,
    rect: Rect,
    speed: f32,
    bullets: Vec<Bullet>,
    mode: PlayerMode,
    sounds: Vec<SoundEffect>,
}

impl Player {
    pub fn new(profile: PlayerProfile) -> Self {
        Self {
            profile,
            current: ScoreTable::default(),
            game_type: None,
            pos: Vec2::ZERO,
            rect: Rect::default(),
            speed: 0.0,
            bullets: Vec::new(),
            mode: PlayerMode::Idle,
            sounds: Vec::new(),
        }
    }

    /// Base movement speed per minigame (pixels per frame)
    pub fn base_speed(game_type: GameType) -> f32 {
        match game_type {
            GameType::Shooter => 5.25,
            GameType::Runner => 4.15,
            GameType::Catcher => 5.0,
            _ => 0.0,
        }
    }

    /// Place the avatar and reset mode state for a minigame
    pub fn setup(&mut self, game_type: GameType, screen: ScreenSize) {
        let size = sprites::player_size(game_type);
        self.speed = Self::base_speed(game_type);
        self.game_type = Some(game_type);
        self.sounds.clear();

        let corner = match game_type {
            GameType::Shooter => {
                self.bullets.clear();
                self.mode = PlayerMode::Shooter(ShooterMode {
                    fire_timer: Timer::new(FIRE_MS, false),
                });
                IVec2::new(screen.width / 2 - size.x / 2, screen.height - size.y)
            }
            GameType::Runner => {
                self.mode = PlayerMode::Runner(RunnerMode {
                    thrust_sound: Timer::new(THRUST_SOUND_MS, false),
                    thrust_held: Timer::infinite(false),
                    fall_held: Timer::infinite(false),
                    thrusting: false,
                });
                IVec2::new(size.x, screen.height - size.y * 2)
            }
            GameType::Catcher => {
                self.mode = PlayerMode::Catcher(CatcherMode {
                    x_speed: 0.0,
                    dir: [Dir::Pos, Dir::Neg],
                    boosts: Vec2::ZERO,
                    boost_timer: Timer::new(BOOST_MS, false),
                });
                IVec2::new((screen.width - size.x) / 2, screen.height - size.y - TITLE_OFFSET / 2)
            }
            GameType::Whacker => {
                self.mode = PlayerMode::Whacker;
                IVec2::ZERO
            }
            GameType::Tri | GameType::Quad => {
                log::warn!("{:?} has no avatar; player left idle", game_type);
                self.mode = PlayerMode::Idle;
                IVec2::ZERO
            }
        };

        self.rect = Rect::new(corner.x, corner.y, size.x, size.y);
        self.pos = corner.as_vec2();
    }

    /// Advance the avatar one frame in the current mode
    pub fn update(&mut self, frame: &Frame, input: &InputSnapshot) {
        let size = self.rect.w;
        let scale = frame.scale();
        match &mut self.mode {
            PlayerMode::Idle => {}
            PlayerMode::Shooter(mode) => {
                mode.fire_timer.update(frame.dt_ms);
                if input.is_down(Key::Left) {
                    if self.pos.x > 0.0 {
                        self.pos.x -= self.speed * scale;
                    }
                } else if input.is_down(Key::Right) && self.pos.x + (size as f32) < frame.width() as f32 {
                    self.pos.x += self.speed * scale;
                }
                self.rect.x = self.pos.x as i32;

                if !mode.fire_timer.is_active() && input.pressed(Key::Space) {
                    self.bullets.push(Bullet::fire(BulletOwner::Player, &self.rect));
                    self.sounds.push(SoundEffect::PlayerShoot);
                    mode.fire_timer.reset(true);
                }
            }
            PlayerMode::Runner(mode) => {
                mode.thrust_sound.update(frame.dt_ms);
                mode.thrust_held.update(frame.dt_ms);
                mode.fall_held.update(frame.dt_ms);

                if input.is_down(Key::Space) {
                    if !mode.thrust_held.is_active() {
                        mode.fall_held.reset(false);
                        mode.thrust_held.reset(true);
                    }
                    if !mode.thrust_sound.is_active() {
                        self.sounds.push(SoundEffect::Thrust);
                        mode.thrust_sound.reset(true);
                    }
                    self.pos.y -= self.speed * scale;
                    mode.thrusting = true;
                } else {
                    if !mode.fall_held.is_active() {
                        mode.thrust_held.reset(false);
                        mode.fall_held.reset(true);
                    }
                    mode.thrust_sound.deactivate();
                    self.pos.y += self.speed * FALL_FACTOR * scale;
                    mode.thrusting = false;
                }

                let floor = (frame.height() - BOTTOM_TOLERANCE - self.rect.h).max(0) as f32;
                self.pos.y = self.pos.y.clamp(0.0, floor);
                self.rect.y = self.pos.y as i32;
            }
            PlayerMode::Catcher(mode) => {
                mode.boost_timer.update(frame.dt_ms);
                if !mode.boost_timer.is_active() {
                    mode.boosts = Vec2::ZERO;
                }
                self.pos.x += mode.dir[0].sign() * (mode.x_speed + mode.boosts.x) * scale;
                self.pos.y += mode.dir[1].sign() * (self.speed + mode.boosts.y) * scale;
                self.rect = Rect::at(self.pos, self.rect.w, self.rect.h);
            }
            PlayerMode::Whacker => {
                self.rect = Rect::centered_on(input.mouse_pos(), self.rect.w, self.rect.h);
                self.pos = IVec2::new(self.rect.x, self.rect.y).as_vec2();
            }
        }
    }

    /// Nudge the avatar (collision response)
    pub fn add_to_pos(&mut self, delta: Vec2) {
        self.pos += delta;
        self.rect = Rect::at(self.pos, self.rect.w, self.rect.h);
    }

    /// Catcher: set horizontal speed and direction from the selector
    pub fn change_x_speed(&mut self, speed: f32, dir: Dir) {
        if let PlayerMode::Catcher(mode) = &mut self.mode {
            mode.x_speed = speed;
            mode.dir[0] = dir;
        }
    }

    /// Catcher: bounce on one axis, stacking a short-lived speed boost
    pub fn change_dir(&mut self, axis: Axis, dir: Dir) {
        if let PlayerMode::Catcher(mode) = &mut self.mode {
            match axis {
                Axis::X => {
                    mode.dir[0] = dir;
                    mode.boosts.x += SPEED_BOOST;
                }
                Axis::Y => {
                    mode.dir[1] = dir;
                    mode.boosts.y += SPEED_BOOST;
                }
            }
            mode.boost_timer.reset(true);
        }
    }

    /// Catcher travel direction (None outside the catcher)
    pub fn dir(&self, axis: Axis) -> Option<Dir> {
        match &self.mode {
            PlayerMode::Catcher(mode) => Some(match axis {
                Axis::X => mode.dir[0],
                Axis::Y => mode.dir[1],
            }),
            _ => None,
        }
    }

    /// Catcher bounce boosts currently applied
    pub fn boosts(&self) -> Vec2 {
        match &self.mode {
            PlayerMode::Catcher(mode) => mode.boosts,
            _ => Vec2::ZERO,
        }
    }

    /// Runner: how long a direction has been held (ms)
    pub fn held_time(&self, which: HeldDir) -> f32 {
        match &self.mode {
            PlayerMode::Runner(mode) => match which {
                HeldDir::Thrust => mode.thrust_held.elapsed(),
                HeldDir::Fall => mode.fall_held.elapsed(),
            },
            _ => 0.0,
        }
    }

    /// Runner: jetpack flame showing
    pub fn is_thrusting(&self) -> bool {
        matches!(&self.mode, PlayerMode::Runner(mode) if mode.thrusting)
    }

    pub fn game_type(&self) -> Option<GameType> {
        self.game_type
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Collision circle center
    pub fn center(&self) -> Vec2 {
        self.rect.center().as_vec2()
    }

    /// Collision circle radius (half the smaller side)
    pub fn radius(&self) -> f32 {
        (self.rect.w.min(self.rect.h) as f32) / 2.0
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    /// Take queued sound cues
    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    // === Identity and scores ===

    pub fn username(&self) -> &str {
        &self.profile.username
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Best recorded score
    pub fn high_score(&self, game_type: GameType) -> u32 {
        self.profile.high_scores.get(game_type)
    }

    /// Score from the current session
    pub fn current_score(&self, game_type: GameType) -> u32 {
        self.current.get(game_type)
    }

    pub fn current_scores(&self) -> &ScoreTable {
        &self.current
    }

    pub fn set_points(&mut self, game_type: GameType, points: u32) {
        self.current.set(game_type, points);
    }

    pub fn clear_current(&mut self) {
        self.current = ScoreTable::default();
    }

    /// Promote session scores that match or beat the records
    pub fn save_points(&mut self) {
        for (game_type, score) in self.current.iter() {
            if score >= self.profile.high_scores.get(game_type) {
                self.profile.high_scores.set(game_type, score);
            }
        }
    }

    /// Triathlon total from three minigames
    pub fn save_tri(&mut self, a: GameType, b: GameType, c: GameType) {
        let total = self.current.get(a) + self.current.get(b) + self.current.get(c);
        self.current.set(GameType::Tri, total);
    }

    /// Quadrathlon total from all four minigames
    pub fn save_quad(&mut self) {
        let total = GameType::MINIGAMES.iter().map(|&g| self.current.get(g)).sum();
        self.current.set(GameType::Quad, total);
    }
}
