use std::collections::VecDeque;

use crate::game::Direction;

/// Buffered steering keys, consumed one per tick.
///
/// Reversals are judged against the most recently *accepted* key rather than
/// the direction the snake is moving in, so a quick Up-then-Left while heading
/// Right queues both turns instead of letting Left through as a reversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
    last_accepted: Direction,
}

impl InputQueue {
    pub fn new(initial: Direction) -> Self {
        Self {
            pending: VecDeque::new(),
            last_accepted: initial,
        }
    }

    /// Queues `direction` unless it reverses the last accepted key.
    /// Returns whether the key was accepted.
    pub fn on_key_press(&mut self, direction: Direction) -> bool {
        if self.last_accepted.is_opposite(direction) {
            return false;
        }
        self.last_accepted = direction;
        self.pending.push_back(direction);
        true
    }

    /// Oldest pending key, if any
    pub fn dequeue(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn last_accepted(&self) -> Direction {
        self.last_accepted
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = InputQueue::new(Direction::Right);
        assert!(queue.on_key_press(Direction::Up));
        assert!(queue.on_key_press(Direction::Left));
        assert!(queue.on_key_press(Direction::Down));

        assert_eq!(queue.dequeue(), Some(Direction::Up));
        assert_eq!(queue.dequeue(), Some(Direction::Left));
        assert_eq!(queue.dequeue(), Some(Direction::Down));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_rejects_reversal_of_last_accepted() {
        let mut queue = InputQueue::new(Direction::Right);
        assert!(!queue.on_key_press(Direction::Left));
        assert!(queue.is_empty());

        assert!(queue.on_key_press(Direction::Up));
        assert!(!queue.on_key_press(Direction::Down));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.last_accepted(), Direction::Up);
    }

    #[test]
    fn test_reversal_judged_against_queue_not_movement() {
        // Snake still moving right; Up was accepted but not yet enacted.
        let mut queue = InputQueue::new(Direction::Right);
        assert!(queue.on_key_press(Direction::Up));
        assert!(queue.on_key_press(Direction::Left));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_repeated_key_is_queued() {
        let mut queue = InputQueue::new(Direction::Right);
        assert!(queue.on_key_press(Direction::Right));
        assert!(queue.on_key_press(Direction::Right));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_never_accepts_recorded_opposite() {
        let sequence = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Right,
            Direction::Down,
            Direction::Up,
            Direction::Right,
        ];
        let mut queue = InputQueue::new(Direction::Right);
        for key in sequence {
            let before = queue.last_accepted();
            let accepted = queue.on_key_press(key);
            assert_eq!(accepted, !before.is_opposite(key));
        }
    }
}
