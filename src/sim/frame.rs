//! Per-frame update context

use crate::ScreenSize;
use crate::consts::NOMINAL_FRAME_MS;

/// Elapsed time and screen bounds handed to every update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Milliseconds since the previous frame
    pub dt_ms: f32,
    pub screen: ScreenSize,
}

impl Frame {
    pub fn new(dt_ms: f32, screen: ScreenSize) -> Self {
        Self {
            dt_ms: dt_ms.max(0.0),
            screen,
        }
    }

    /// One nominal 60 Hz frame
    pub fn nominal(screen: ScreenSize) -> Self {
        Self::new(NOMINAL_FRAME_MS, screen)
    }

    /// Multiplier converting per-frame speeds to this frame's distance
    #[inline]
    pub fn scale(&self) -> f32 {
        self.dt_ms / NOMINAL_FRAME_MS
    }

    /// Elapsed seconds
    #[inline]
    pub fn dt_secs(&self) -> f32 {
        self.dt_ms / 1000.0
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.screen.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.screen.height
    }
}
