//! Space Run
//!
//! The astronaut holds a column on the left while objects stream in from the
//! right. The whole round's worth of objects is rolled up front into a
//! bounded queue and released one per second.
//!
//! Scoring:
//! - dodging a hazard or fake coin earns points (more while a coin boost runs)
//! - letting a real coin go costs points
//! - touching anything but a coin costs points, doubled inside the nerf window
//! - holding one vertical direction too long bleeds points on a tick

use rand_pcg::Pcg32;

use super::entity::Entity;
use super::input::InputSnapshot;
use super::minigame::MinigameBase;
use super::player::{HeldDir, Player};
use super::queue::BoundedQueue;
use super::space_object::{SpaceObject, SpaceObjectKind};
use super::timer::Timer;
use crate::ScreenSize;
use crate::audio::SoundEffect;

/// Objects rolled for one round
pub const OBJECT_COUNT: usize = 58;
/// Delay between releases from the queue (ms)
pub const SPAWN_MS: f32 = 1000.0;
/// Coin bonus window (ms)
pub const BOOST_MS: f32 = 2250.0;
/// Doubled-damage window after a hit (ms)
pub const NERF_MS: f32 = 1750.0;
/// Holding one direction longer than this starts the tick (ms)
pub const MAX_DIR_MS: f32 = 2000.0;
/// Interval between tick penalties (ms)
pub const TICK_MS: f32 = 1000.0;
/// Points for a dodge, and the fake coin penalty
pub const DODGE_POINTS: u32 = 10;
/// Hazard penalty and tick penalty
pub const HIT_POINTS: u32 = 5;
/// Extra dodge points while boosted
pub const COIN_BOOST: u32 = 10;
/// Background scroll speed (px/s)
const SCROLL_SPEED: f32 = 200.0;

#[derive(Debug, Clone)]
pub struct SpaceRun {
    base: MinigameBase,
    queue: BoundedQueue<SpaceObject>,
    objects: Vec<SpaceObject>,
    spawn_timer: Timer,
    boost_timer: Timer,
    nerf_timer: Timer,
    tick_timer: Timer,
    damage_mult: u32,
    backgrounds: [f32; 2],
}

impl SpaceRun {
    pub fn new(screen: ScreenSize, mut rng: Pcg32) -> Self {
        let mut queue = BoundedQueue::new(OBJECT_COUNT);
        for _ in 0..OBJECT_COUNT {
            queue.enqueue(SpaceObject::random(screen, &mut rng));
        }
        Self {
            base: MinigameBase::new(screen),
            queue,
            objects: Vec::new(),
            spawn_timer: Timer::new(SPAWN_MS, true),
            boost_timer: Timer::new(BOOST_MS, false),
            nerf_timer: Timer::new(NERF_MS, false),
            tick_timer: Timer::infinite(false),
            damage_mult: 1,
            backgrounds: [0.0, screen.width as f32],
        }
    }

    pub fn base(&self) -> &MinigameBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MinigameBase {
        &mut self.base
    }

    pub fn objects(&self) -> &[SpaceObject] {
        &self.objects
    }

    /// Objects still waiting to be released
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn is_boosted(&self) -> bool {
        self.boost_timer.is_active()
    }

    pub fn damage_multiplier(&self) -> u32 {
        self.damage_mult
    }

    /// X offsets of the two tiled backgrounds
    pub fn background_offsets(&self) -> [f32; 2] {
        self.backgrounds
    }

    pub fn update(&mut self, dt_ms: f32, player: &mut Player, input: &InputSnapshot) {
        let frame = self.base.frame(dt_ms);
        self.base.tick(dt_ms);
        self.spawn_timer.update(dt_ms);
        self.boost_timer.update(dt_ms);
        self.nerf_timer.update(dt_ms);
        self.tick_timer.update(dt_ms);

        self.scroll(frame.dt_secs());
        player.update(&frame, input);
        self.camping_tick(player);

        if !self.spawn_timer.is_active() {
            if let Some(obj) = self.queue.dequeue() {
                self.objects.push(obj);
            }
            self.spawn_timer.reset(true);
        }

        if !self.nerf_timer.is_active() {
            self.damage_mult = 1;
        }

        for obj in self.objects.iter_mut() {
            obj.update(&frame);
        }
        self.collide(player);
    }

    fn scroll(&mut self, dt_secs: f32) {
        let width = self.base.screen().width as f32;
        for x in self.backgrounds.iter_mut() {
            *x -= SCROLL_SPEED * dt_secs;
            if *x <= -width {
                *x += width * 2.0;
            }
        }
    }

    fn camping_tick(&mut self, player: &Player) {
        let camping = player.held_time(HeldDir::Thrust) >= MAX_DIR_MS || player.held_time(HeldDir::Fall) >= MAX_DIR_MS;
        if camping {
            if !self.tick_timer.is_active() {
                self.tick_timer.reset(true);
            }
        } else {
            self.tick_timer.reset(false);
        }

        if self.tick_timer.elapsed() >= TICK_MS {
            self.base.play(SoundEffect::Tick);
            self.base.deduct(HIT_POINTS);
            self.tick_timer.reset(false);
        }
    }

    fn collide(&mut self, player: &Player) {
        let player_rect = player.rect();
        let mut i = 0;
        while i < self.objects.len() {
            let obj = &self.objects[i];
            let kind = obj.kind();
            if obj.hitbox().intersects(&player_rect) {
                self.touch(kind);
                self.objects.remove(i);
            } else if obj.rect().right() <= 0 {
                self.dodge(kind);
                self.objects.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn touch(&mut self, kind: SpaceObjectKind) {
        if kind.is_coin() {
            if !self.boost_timer.is_active() {
                self.base.play(SoundEffect::Boost);
                self.boost_timer.reset(true);
            }
            return;
        }

        self.base.play(SoundEffect::Scream);
        let penalty = match kind {
            SpaceObjectKind::FakeCoin => DODGE_POINTS,
            _ => HIT_POINTS,
        };
        self.base.deduct(penalty * self.damage_mult);
        if !self.nerf_timer.is_active() {
            self.damage_mult = 2;
            self.nerf_timer.reset(true);
        }
    }

    fn dodge(&mut self, kind: SpaceObjectKind) {
        self.base.play(SoundEffect::Dodge);
        if kind.is_coin() {
            self.base.deduct(DODGE_POINTS);
        } else if self.boost_timer.is_active() {
            self.base.add_points(DODGE_POINTS + COIN_BOOST);
        } else {
            self.base.add_points(DODGE_POINTS);
        }
    }
}
