//! Whack-an-Asteroid
//!
//! A 5x5 board of craters. One asteroid at a time pops up in a random
//! crater (never the same one twice in a row) and stays clickable for a
//! short window. Two timers pace the round:
//! - change: cooldown after an asteroid is resolved before the next spawns
//! - stay: how long a live asteroid waits before exploding
//!
//! Both windows shrink as the clock runs down.

use glam::IVec2;
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::input::InputSnapshot;
use super::minigame::MinigameBase;
use super::player::Player;
use super::timer::Timer;
use super::whacker_asteroid::{HoleState, WhackerAsteroid};
use crate::audio::SoundEffect;
use crate::{ScreenSize, random_between};

/// Board is GRID_SIZE x GRID_SIZE
pub const GRID_SIZE: usize = 5;
pub const HOLE_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Crater column x positions
const COLUMNS: [i32; GRID_SIZE] = [128, 296, 464, 632, 800];
/// First row y and row spacing
const FIRST_ROW: i32 = 72;
const ROW_SPACING: i32 = 136;

pub const HIT_POINTS: u32 = 15;
pub const TIMEOUT_PENALTY: u32 = 10;
pub const MISS_PENALTY: u32 = 5;

/// Difficulty band keyed to time remaining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// 40 s or more left
    Early,
    /// 20 s or more left
    Mid,
    /// Final 20 s
    Late,
}

impl Band {
    pub fn for_remaining(remaining_ms: f32) -> Self {
        if remaining_ms >= 40_000.0 {
            Band::Early
        } else if remaining_ms >= 20_000.0 {
            Band::Mid
        } else {
            Band::Late
        }
    }

    /// Change window bounds (ms)
    pub fn change_range(self) -> (i32, i32) {
        match self {
            Band::Early => (825, 950),
            Band::Mid => (700, 825),
            Band::Late => (575, 700),
        }
    }

    /// Stay window bounds (ms)
    pub fn stay_range(self) -> (i32, i32) {
        match self {
            Band::Early => (750, 825),
            Band::Mid => (675, 750),
            Band::Late => (600, 675),
        }
    }
}

/// Crater corner for a board index (row-major)
pub fn board_corner(index: usize) -> IVec2 {
    let row = (index / GRID_SIZE) as i32;
    IVec2::new(COLUMNS[index % GRID_SIZE], FIRST_ROW + ROW_SPACING * row)
}

#[derive(Debug, Clone)]
pub struct WhackAnAsteroid {
    base: MinigameBase,
    rng: Pcg32,
    holes: Vec<WhackerAsteroid>,
    current: Option<usize>,
    change_timer: Timer,
    stay_timer: Timer,
    band: Band,
}

impl WhackAnAsteroid {
    pub fn new(screen: ScreenSize, mut rng: Pcg32) -> Self {
        let holes = (0..HOLE_COUNT).map(|i| WhackerAsteroid::new(board_corner(i))).collect();
        let band = Band::Early;
        let (lo, hi) = band.change_range();
        let change = random_between(&mut rng, lo, hi) as f32;
        Self {
            base: MinigameBase::new(screen),
            rng,
            holes,
            current: None,
            change_timer: Timer::new(change, true),
            stay_timer: Timer::new(0.0, false),
            band,
        }
    }

    pub fn base(&self) -> &MinigameBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MinigameBase {
        &mut self.base
    }

    pub fn holes(&self) -> &[WhackerAsteroid] {
        &self.holes
    }

    /// Index of the most recently spawned hole
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn update(&mut self, dt_ms: f32, player: &mut Player, input: &InputSnapshot) {
        let frame = self.base.frame(dt_ms);
        self.base.tick(dt_ms);
        self.change_timer.update(dt_ms);
        self.stay_timer.update(dt_ms);
        self.band = Band::for_remaining(self.base.remaining());

        player.update(&frame, input);
        self.spawn();
        for hole in self.holes.iter_mut() {
            hole.update(&frame);
        }

        if !self.change_timer.is_active() {
            self.collide(input);
        }
    }

    fn roll(&mut self, (lo, hi): (i32, i32)) -> f32 {
        random_between(&mut self.rng, lo, hi) as f32
    }

    fn spawn(&mut self) {
        if self.stay_timer.is_active() || self.change_timer.is_active() {
            return;
        }
        let idle = self.current.is_none_or(|i| self.holes[i].state() == HoleState::Inactive);
        if !idle {
            return;
        }

        let next = match self.current {
            Some(prev) => {
                let pick = random_between(&mut self.rng, 0, HOLE_COUNT as i32 - 2) as usize;
                if pick >= prev { pick + 1 } else { pick }
            }
            None => random_between(&mut self.rng, 0, HOLE_COUNT as i32 - 1) as usize,
        };
        self.holes[next].activate();
        self.current = Some(next);
        self.base.play(SoundEffect::Spawn);
        let stay = self.roll(self.band.stay_range());
        self.stay_timer.restart_with(stay);
        log::debug!("asteroid up in hole {} for {}ms", next, stay);
    }

    fn collide(&mut self, input: &InputSnapshot) {
        if input.left_clicked() {
            let mouse = input.mouse_pos();
            for i in 0..self.holes.len() {
                if !self.holes[i].rect().contains(mouse) {
                    continue;
                }
                if self.current == Some(i) && self.holes[i].state() == HoleState::Active {
                    self.holes[i].kill();
                    self.base.play(SoundEffect::Poof);
                    self.base.add_points(HIT_POINTS);
                    let change = self.roll(self.band.change_range());
                    self.change_timer.restart_with(change);
                } else {
                    self.base.play(SoundEffect::MissClick);
                    self.base.deduct(MISS_PENALTY);
                }
            }
        }

        if self.stay_timer.is_active() {
            return;
        }
        if let Some(i) = self.current {
            if self.holes[i].state() == HoleState::Active {
                self.holes[i].explode();
                self.base.play(SoundEffect::Explode);
                self.base.deduct(TIMEOUT_PENALTY);
                let change = self.roll(self.band.change_range());
                self.change_timer.restart_with(change);
            }
        }
    }
}
