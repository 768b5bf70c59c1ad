//! Catcher launch selector
//!
//! A marker ping-pongs along a short track; clicking STOP freezes it. The
//! marker's offset from the track center becomes the net's horizontal speed
//! and its side picks the direction.

use super::collision::Dir;
use super::frame::Frame;
use super::input::InputSnapshot;
use super::rect::Rect;
use super::sprites;
use crate::ScreenSize;
use crate::consts::TITLE_OFFSET;

const WIDTH: i32 = 128;
const HEIGHT: i32 = 64;
/// Marker offset (px) to net speed divisor
const SPEED_DIVIDER: f32 = 8.0;
/// Marker pixels per frame
const MARKER_SPEED: f32 = 4.0;

/// Speed/direction picker shown before each catcher wave
#[derive(Debug, Clone)]
pub struct Selector {
    track: Rect,
    left_cap: Rect,
    right_cap: Rect,
    marker: Rect,
    marker_x: f32,
    button: Rect,
    moving_right: bool,
    clicked: bool,
    speed: f32,
    dir: Dir,
}

impl Selector {
    pub fn new(screen: ScreenSize) -> Self {
        let track = Rect::new(
            (screen.width - WIDTH) / 2,
            screen.height - (HEIGHT as f32 * 2.5) as i32,
            WIDTH,
            HEIGHT / 6,
        );
        let left_cap = Rect::new(track.left() - WIDTH / 10, track.center().y - HEIGHT / 2, WIDTH / 10, HEIGHT);
        let right_cap = Rect::new(track.right(), left_cap.y, left_cap.w, left_cap.h);
        let marker = Rect::new(left_cap.x, left_cap.y, left_cap.w / 2, left_cap.h);
        let button = Rect::new(
            track.center().x - sprites::STOP_BUTTON.x / 2,
            left_cap.bottom() + TITLE_OFFSET / 4,
            sprites::STOP_BUTTON.x,
            sprites::STOP_BUTTON.y,
        );
        Self {
            track,
            left_cap,
            right_cap,
            marker,
            marker_x: marker.x as f32,
            button,
            moving_right: true,
            clicked: false,
            speed: 0.0,
            dir: Dir::Pos,
        }
    }

    /// Slide the marker and watch for a STOP click
    pub fn update(&mut self, frame: &Frame, input: &InputSnapshot) {
        if self.clicked {
            return;
        }

        let step = MARKER_SPEED * frame.scale();
        let min_x = self.left_cap.left() as f32;
        let max_x = (self.right_cap.right() - self.marker.w) as f32;
        if self.moving_right {
            self.marker_x = (self.marker_x + step).min(max_x);
            if self.marker_x >= max_x {
                self.moving_right = false;
            }
        } else {
            self.marker_x = (self.marker_x - step).max(min_x);
            if self.marker_x <= min_x {
                self.moving_right = true;
            }
        }
        self.marker.x = self.marker_x as i32;

        if input.left_clicked() && self.button.contains(input.mouse_pos()) {
            self.lock_in();
        }
    }

    fn lock_in(&mut self) {
        let center = self.track.center().x;
        let offset = if self.marker.left() >= center {
            self.dir = Dir::Pos;
            self.marker.x - center
        } else {
            self.dir = Dir::Neg;
            (self.marker.right() - center).abs()
        };
        self.speed = offset as f32 / SPEED_DIVIDER;
        self.clicked = true;
    }

    /// Ready for the next wave (the marker keeps its place)
    pub fn reset_click(&mut self) {
        self.clicked = false;
    }

    pub fn has_clicked(&self) -> bool {
        self.clicked
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Top of the selector; asteroids stay above it
    pub fn top(&self) -> i32 {
        self.left_cap.y
    }

    pub fn button(&self) -> Rect {
        self.button
    }

    pub fn marker(&self) -> Rect {
        self.marker
    }

    pub fn track(&self) -> Rect {
        self.track
    }
}
