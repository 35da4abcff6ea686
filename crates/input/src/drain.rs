//! Per-tick input queue drain.
//!
//! The firmware keyboard queue can hold several keys by the time a tick
//! starts. Each tick reads it down (up to a fixed number of reads) and keeps
//! only the most recent arrow key, so steering always reflects the latest
//! press instead of one queued a tick earlier.

use tracing::trace;

use crate::map::{direction_for, should_quit};
use crate::types::{Direction, KeyEvent};

/// Non-blocking access to the firmware key queue.
pub trait KeySource {
    /// Next queued key, or `None` when the queue is empty.
    fn read_key(&mut self) -> Option<KeyEvent>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> Option<KeyEvent> {
        (**self).read_key()
    }
}

/// What one drain of the queue produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    /// Escape was pressed; the rest of the queue is left unread.
    Quit,
    /// Most recent arrow key seen.
    Steer(Direction),
    /// No arrow key in the queue.
    Idle,
}

/// Read at most `limit` keys and reduce them to a single [`Polled`] value.
pub fn drain_latest<K: KeySource + ?Sized>(source: &mut K, limit: usize) -> Polled {
    let mut latest = None;

    for _ in 0..limit {
        let Some(key) = source.read_key() else {
            break;
        };
        trace!(?key, "key read");

        if should_quit(key) {
            return Polled::Quit;
        }
        if let Some(direction) = direction_for(key) {
            latest = Some(direction);
        }
    }

    match latest {
        Some(direction) => Polled::Steer(direction),
        None => Polled::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanCode;
    use std::collections::VecDeque;

    struct Queue(VecDeque<KeyEvent>);

    impl Queue {
        fn of(keys: &[KeyEvent]) -> Self {
            Self(keys.iter().copied().collect())
        }
    }

    impl KeySource for Queue {
        fn read_key(&mut self) -> Option<KeyEvent> {
            self.0.pop_front()
        }
    }

    #[test]
    fn empty_queue_is_idle() {
        assert_eq!(drain_latest(&mut Queue::of(&[]), 8), Polled::Idle);
    }

    #[test]
    fn keeps_the_most_recent_arrow() {
        let mut q = Queue::of(&[
            ScanCode::Up.into(),
            KeyEvent::printable('x'),
            ScanCode::Left.into(),
            KeyEvent::printable('y'),
        ]);
        assert_eq!(drain_latest(&mut q, 8), Polled::Steer(Direction::Left));
        assert!(q.0.is_empty());
    }

    #[test]
    fn escape_wins_immediately() {
        let mut q = Queue::of(&[
            ScanCode::Up.into(),
            ScanCode::Escape.into(),
            ScanCode::Down.into(),
        ]);
        assert_eq!(drain_latest(&mut q, 8), Polled::Quit);
        assert_eq!(q.0.len(), 1);
    }

    #[test]
    fn stops_after_limit_reads() {
        let mut q = Queue::of(&[
            ScanCode::Up.into(),
            ScanCode::Right.into(),
            ScanCode::Down.into(),
        ]);
        assert_eq!(drain_latest(&mut q, 2), Polled::Steer(Direction::Right));
        assert_eq!(q.0.len(), 1);
    }

    #[test]
    fn non_arrow_keys_only_is_idle() {
        let mut q = Queue::of(&[KeyEvent::printable('a'), ScanCode::Other(0x17).into()]);
        assert_eq!(drain_latest(&mut q, 8), Polled::Idle);
    }
}
