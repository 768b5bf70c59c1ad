//! Read-only input snapshot
//!
//! The shell polls devices once per frame and hands the core the current and
//! previous states. Edge queries ("pressed this frame") compare the two.

use std::collections::HashSet;

use glam::IVec2;

/// Keys the minigames listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Escape,
}

/// Mouse position and left button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseState {
    pub position: IVec2,
    pub left_down: bool,
}

impl MouseState {
    pub fn at(x: i32, y: i32, left_down: bool) -> Self {
        Self {
            position: IVec2::new(x, y),
            left_down,
        }
    }
}

/// Keyboard and mouse state for this frame and the previous one
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub keys: HashSet<Key>,
    pub prev_keys: HashSet<Key>,
    pub mouse: MouseState,
    pub prev_mouse: MouseState,
}

impl InputSnapshot {
    /// Snapshot with nothing held last frame
    pub fn fresh(keys: &[Key], mouse: MouseState) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            prev_keys: HashSet::new(),
            mouse,
            prev_mouse: MouseState {
                position: mouse.position,
                left_down: false,
            },
        }
    }

    /// Roll this snapshot forward: current state becomes previous
    pub fn advance(&self, keys: &[Key], mouse: MouseState) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            prev_keys: self.keys.clone(),
            mouse,
            prev_mouse: self.mouse,
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Down now, up last frame
    pub fn pressed(&self, key: Key) -> bool {
        self.keys.contains(&key) && !self.prev_keys.contains(&key)
    }

    /// Left button went down this frame
    pub fn left_clicked(&self) -> bool {
        self.mouse.left_down && !self.prev_mouse.left_down
    }

    pub fn mouse_pos(&self) -> IVec2 {
        self.mouse.position
    }
}
