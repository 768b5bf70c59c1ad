//! Countdown timer driving every spawn, cooldown and status window
//!
//! A timer accumulates elapsed milliseconds only while active. When elapsed
//! reaches the duration it freezes at full, deactivates and latches
//! `is_finished` until the next reset. It never repeats on its own.

/// Millisecond countdown timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    duration: f32,
    elapsed: f32,
    active: bool,
    finished: bool,
}

impl Timer {
    /// Sentinel duration for timers that never finish
    pub const INFINITE: f32 = f32::INFINITY;

    /// Create a timer with the given duration (ms)
    pub fn new(duration_ms: f32, active: bool) -> Self {
        Self {
            duration: duration_ms.max(0.0),
            elapsed: 0.0,
            active,
            finished: false,
        }
    }

    /// Free-running timer used to measure how long something has lasted
    pub fn infinite(active: bool) -> Self {
        Self::new(Self::INFINITE, active)
    }

    /// Advance by `dt_ms` if active
    pub fn update(&mut self, dt_ms: f32) {
        if !self.active || !(dt_ms > 0.0) {
            return;
        }
        self.elapsed = (self.elapsed + dt_ms).min(self.duration);
        if self.elapsed >= self.duration {
            self.active = false;
            self.finished = true;
        }
    }

    /// Zero elapsed time and clear the finished latch
    pub fn reset(&mut self, start_active: bool) {
        self.elapsed = 0.0;
        self.active = start_active;
        self.finished = false;
    }

    /// Start a fresh window with a new duration
    pub fn restart_with(&mut self, duration_ms: f32) {
        self.duration = duration_ms.max(0.0);
        self.reset(true);
    }

    /// Resume counting (no-op once finished)
    pub fn activate(&mut self) {
        if !self.finished {
            self.active = true;
        }
    }

    /// Pause without finishing
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_infinite(&self) -> bool {
        self.duration.is_infinite()
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time left before finishing (infinite timers report infinity)
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }
}
