//! Fixed-capacity FIFO queues
//!
//! Used twice: the pre-generated stream of runner obstacles and the list of
//! minigames remaining in a pack. Storage is a flat vector with no
//! wraparound; dequeue shifts the remaining items down by one.

use log::debug;

use crate::GameType;

/// Non-circular bounded FIFO
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item; silently dropped when full
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() < self.capacity {
            self.items.push(item);
        } else {
            debug!("queue full ({}), dropping item", self.capacity);
        }
    }

    /// Remove the oldest item, `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// How many minigames a pack chains together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackKind {
    Single,
    Triple,
    Quad,
}

impl PackKind {
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(PackKind::Single),
            3 => Some(PackKind::Triple),
            4 => Some(PackKind::Quad),
            _ => None,
        }
    }

    pub fn capacity(self) -> usize {
        match self {
            PackKind::Single => 1,
            PackKind::Triple => 3,
            PackKind::Quad => 4,
        }
    }

    /// Score slot credited with the pack total, if any
    pub fn aggregate(self) -> Option<GameType> {
        match self {
            PackKind::Single => None,
            PackKind::Triple => Some(GameType::Tri),
            PackKind::Quad => Some(GameType::Quad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fifo_order() {
        let mut q = BoundedQueue::new(3);
        q.enqueue(GameType::Runner);
        q.enqueue(GameType::Shooter);
        q.enqueue(GameType::Whacker);
        assert_eq!(q.peek(), Some(&GameType::Runner));
        assert_eq!(q.dequeue(), Some(GameType::Runner));
        assert_eq!(q.dequeue(), Some(GameType::Shooter));
        assert_eq!(q.dequeue(), Some(GameType::Whacker));
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn test_overflow_is_dropped() {
        let mut q = BoundedQueue::new(1);
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.len(), 1);
        assert_eq!(q.dequeue(), Some(1));
        assert!(q.is_empty());
    }

    #[test]
    fn test_pack_kind() {
        assert_eq!(PackKind::from_len(3), Some(PackKind::Triple));
        assert_eq!(PackKind::from_len(2), None);
        assert_eq!(PackKind::Quad.capacity(), 4);
        assert_eq!(PackKind::Single.aggregate(), None);
        assert_eq!(PackKind::Triple.aggregate(), Some(GameType::Tri));
    }

    proptest! {
        #[test]
        fn test_size_never_exceeds_capacity(capacity in 0usize..8, items in prop::collection::vec(any::<u8>(), 0..20)) {
            let mut q = BoundedQueue::new(capacity);
            for item in &items {
                q.enqueue(*item);
                prop_assert!(q.len() <= capacity);
            }
            let kept: Vec<u8> = items.iter().copied().take(capacity).collect();
            let mut drained = Vec::new();
            while let Some(item) = q.dequeue() {
                drained.push(item);
            }
            prop_assert_eq!(drained, kept);
            prop_assert_eq!(q.dequeue(), None);
        }
    }
}
