//! Space Arcade - four space minigames sharing one timer/entity/collision vocabulary
//!
//! Core modules:
//! - `sim`: Deterministic minigame simulation (entities, timers, collisions, scoring)
//! - `session`: Pack scheduling and the arcade session state machine
//! - `highscores`: Player roster, login and leaderboards
//! - `persistence`: Score store contract and the flat score file
//! - `settings`: JSON-backed configuration
//! - `audio`: Sound cue sink

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::{LoginOutcome, PlayerProfile, Roster};
pub use session::{Arcade, SessionError, SessionPhase};
pub use settings::ArcadeSettings;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: i32 = 1024;
    pub const SCREEN_HEIGHT: i32 = 768;

    /// Layout offsets shared by the HUD and board layouts
    pub const TITLE_OFFSET: i32 = 48;
    pub const SIDE_OFFSET: i32 = 32;

    /// Length of every minigame round (ms)
    pub const GAME_LENGTH_MS: f32 = 60_000.0;

    /// Speeds are tuned in pixels per frame at this rate
    pub const NOMINAL_FRAME_MS: f32 = 1000.0 / 60.0;

    /// Longest accepted username
    pub const MAX_USERNAME_LEN: usize = 16;
}

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: consts::SCREEN_WIDTH,
            height: consts::SCREEN_HEIGHT,
        }
    }
}

impl ScreenSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Every game type the arcade tracks, in score-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Shooter,
    Runner,
    Catcher,
    Whacker,
    /// Sum of a three-game pack
    Tri,
    /// Sum of a four-game pack
    Quad,
}

impl GameType {
    /// All game types in score-table order
    pub const ALL: [GameType; 6] = [
        GameType::Shooter,
        GameType::Runner,
        GameType::Catcher,
        GameType::Whacker,
        GameType::Tri,
        GameType::Quad,
    ];

    /// The four playable minigames
    pub const MINIGAMES: [GameType; 4] = [
        GameType::Shooter,
        GameType::Runner,
        GameType::Catcher,
        GameType::Whacker,
    ];

    /// Slot in a score table
    pub fn index(self) -> usize {
        match self {
            GameType::Shooter => 0,
            GameType::Runner => 1,
            GameType::Catcher => 2,
            GameType::Whacker => 3,
            GameType::Tri => 4,
            GameType::Quad => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_minigame(self) -> bool {
        !matches!(self, GameType::Tri | GameType::Quad)
    }

    /// Menu title
    pub fn display_name(self) -> &'static str {
        match self {
            GameType::Shooter => "ALIEN SHOOTER",
            GameType::Runner => "SPACE RUN",
            GameType::Catcher => "STAR CATCHER",
            GameType::Whacker => "WHACK-A-'ROID",
            GameType::Tri => "TRIATHLON",
            GameType::Quad => "QUADRATHLON",
        }
    }
}

/// Parses CLI-style names ("shooter", "run", ...)
impl std::str::FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shooter" | "shoot" => Ok(GameType::Shooter),
            "runner" | "run" => Ok(GameType::Runner),
            "catcher" | "catch" => Ok(GameType::Catcher),
            "whacker" | "whack" => Ok(GameType::Whacker),
            "tri" | "triathlon" => Ok(GameType::Tri),
            "quad" | "quadrathlon" => Ok(GameType::Quad),
            _ => Err(format!("unknown game {:?}", s)),
        }
    }
}

/// One score per game type, indexed by [`GameType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTable([u32; 6]);

impl ScoreTable {
    pub fn new(scores: [u32; 6]) -> Self {
        Self(scores)
    }

    pub fn get(&self, game_type: GameType) -> u32 {
        self.0[game_type.index()]
    }

    pub fn set(&mut self, game_type: GameType, score: u32) {
        self.0[game_type.index()] = score;
    }

    pub fn as_array(&self) -> &[u32; 6] {
        &self.0
    }

    /// (game type, score) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (GameType, u32)> + '_ {
        GameType::ALL.iter().map(move |&g| (g, self.get(g)))
    }
}

/// Uniform integer in `[lo, hi]`; collapses to `lo` when the range is empty
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        lo
    } else {
        rng.random_range(lo..=hi)
    }
}

/// Subtract a penalty from a score, flooring at zero
#[inline]
pub fn deduct(score: u32, penalty: u32) -> u32 {
    score.saturating_sub(penalty)
}
