//! Sound cues and the audio sink
//!
//! The simulation never plays audio itself. Minigames and the player push
//! [`SoundEffect`] cues into an outbox; the shell drains them each frame and
//! hands them to an [`AudioPlayer`].

use crate::settings::ArcadeSettings;

/// Sound effect cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fires a bullet
    PlayerShoot,
    /// Ship alien fires a bullet
    EnemyShoot,
    /// Enemy bullet strikes the player
    PlayerHit,
    /// Ship alien takes a hit
    ShipAlienHit,
    /// Splash alien takes a hit
    SplashAlienHit,
    /// Poison alien takes a hit
    PoisonAlienHit,
    /// Poison alien touches the player
    Poisoned,
    /// Runner jetpack flame
    Thrust,
    /// Runner hit by an obstacle or fake coin
    Scream,
    /// Runner collects a coin
    Boost,
    /// Obstacle leaves the screen untouched
    Dodge,
    /// Camping penalty tick
    Tick,
    /// Catcher selector stop button
    Button,
    /// Star caught in the net
    Catch,
    /// Wall or asteroid bounce
    Bounce,
    /// Whacker asteroid appears
    Spawn,
    /// Whacker asteroid hit
    Poof,
    /// Whacker asteroid timed out
    Explode,
    /// Click on the wrong hole
    MissClick,
}

impl SoundEffect {
    /// Per-cue base volume (0.0 - 1.0)
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::PlayerShoot | SoundEffect::EnemyShoot => 0.4,
            _ => 1.0,
        }
    }
}

/// Fire-and-forget sound sink
pub trait AudioPlayer {
    fn play_once(&mut self, effect: SoundEffect);
}

/// Audio manager that applies volume settings and logs each cue
///
/// Actual playback is left to whatever backend the shell wires in; this
/// keeps the mixing rules and a record of what was played.
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            played: 0,
        }
    }

    /// Build from persisted settings
    pub fn from_settings(settings: &ArcadeSettings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of cues actually played
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Effective volume for a cue
    pub fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume * effect.base_volume()
        }
    }
}

impl AudioPlayer for AudioManager {
    fn play_once(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume(effect);
        if volume <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("sfx {:?} at volume {:.2}", effect, volume);
    }
}
