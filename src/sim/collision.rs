//! Collision detection and response for circular bodies
//!
//! The catcher game treats the net, the stars and the asteroids as circles.
//! When two overlap, the pushed body is moved straight out along the line
//! between centers until the circles just touch, and its travel direction is
//! re-derived from the push. There is no velocity solve: this is a discrete
//! positional correction.

use glam::Vec2;

/// Travel direction along one screen axis (Pos = right or down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Neg,
    Pos,
}

impl Dir {
    /// Direction matching the sign of `v` (zero counts as positive)
    #[inline]
    pub fn from_sign(v: f32) -> Self {
        if v < 0.0 { Dir::Neg } else { Dir::Pos }
    }

    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Dir::Neg => -1.0,
            Dir::Pos => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Dir::Neg => Dir::Pos,
            Dir::Pos => Dir::Neg,
        }
    }
}

/// Screen axis selector for direction changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Result of a circle-circle check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circles overlap or touch
    pub hit: bool,
    /// Unit vector from the obstacle's center toward the pushed body's center
    pub normal: Vec2,
    /// Overlap depth (distance the pushed body must move along `normal`)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Translation that removes the overlap
    pub fn push(&self) -> Vec2 {
        self.normal * self.penetration
    }

    /// Direction flags the pushed body should take afterwards
    pub fn dirs(&self) -> (Dir, Dir) {
        let v = if self.penetration > 0.0 { self.push() } else { self.normal };
        (Dir::from_sign(v.x), Dir::from_sign(v.y))
    }
}

/// Check whether `body` (center, radius) is touching `obstacle` and compute the push
/// that separates them
///
/// Contact counts when the center distance is at most the sum of radii. If
/// the centers coincide the body is pushed straight up.
pub fn circle_push_apart(
    body_center: Vec2,
    body_radius: f32,
    obstacle_center: Vec2,
    obstacle_radius: f32,
) -> CollisionResult {
    let delta = body_center - obstacle_center;
    let dist = delta.length();
    let reach = body_radius + obstacle_radius;

    if dist > reach {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        normal: delta.try_normalize().unwrap_or(Vec2::NEG_Y),
        penetration: reach - dist,
    }
}
