//! Shared entity vocabulary
//!
//! Every moving object owns its position and derives its rectangle from it.
//! Owners keep entities in plain `Vec`s and sweep the dead ones after the
//! update pass instead of removing mid-iteration.

use super::rect::Rect;

/// Coarse lifecycle shared by all entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Moving and collidable
    Active,
    /// Playing a terminal animation (splat, poof, explode, falling)
    Transitioning,
    /// Ready to be removed by its owner
    Dead,
}

/// Capability common to every game object
pub trait Entity {
    /// Current bounding rectangle
    fn rect(&self) -> Rect;

    fn lifecycle(&self) -> Lifecycle;

    fn is_active(&self) -> bool {
        self.lifecycle() == Lifecycle::Active
    }

    fn is_dead(&self) -> bool {
        self.lifecycle() == Lifecycle::Dead
    }
}

/// Drop dead entities, keeping order. Returns how many were removed.
pub fn sweep_dead<E: Entity>(entities: &mut Vec<E>) -> usize {
    let before = entities.len();
    entities.retain(|e| !e.is_dead());
    before - entities.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(Lifecycle);

    impl Entity for Dummy {
        fn rect(&self) -> Rect {
            Rect::default()
        }

        fn lifecycle(&self) -> Lifecycle {
            self.0
        }
    }

    #[test]
    fn test_sweep_removes_adjacent_dead() {
        // Two dead entities next to each other must both go
        let mut list = vec![
            Dummy(Lifecycle::Active),
            Dummy(Lifecycle::Dead),
            Dummy(Lifecycle::Dead),
            Dummy(Lifecycle::Transitioning),
        ];
        assert_eq!(sweep_dead(&mut list), 2);
        assert_eq!(list.len(), 2);
        assert!(list[0].is_active());
        assert_eq!(list[1].lifecycle(), Lifecycle::Transitioning);
    }
}
