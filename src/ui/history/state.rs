use crate::nav::{Direction, NavKey};
use crate::ui::mvi::UiState;

/// Ordered history of visited keys, oldest first.
///
/// Always holds at least one entry; the last entry is the current screen.
/// Lives for one session only and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryState {
    entries: Vec<NavKey>,
    direction: Direction,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            entries: vec![NavKey::home()],
            direction: Direction::Forward,
        }
    }
}

impl UiState for HistoryState {}

impl HistoryState {
    /// Current screen key.
    pub fn current(&self) -> &NavKey {
        // `entries` is never empty: every constructor and transition keeps one.
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[NavKey] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn can_pop(&self) -> bool {
        self.entries.len() > 1
    }

    pub(super) fn pushed(mut self, key: NavKey) -> Self {
        self.entries.push(key);
        self.direction = Direction::Forward;
        self
    }

    pub(super) fn popped(mut self) -> Self {
        if self.entries.len() > 1 {
            self.entries.pop();
            self.direction = Direction::Backward;
        }
        self
    }

    pub(super) fn reset() -> Self {
        Self {
            entries: vec![NavKey::home()],
            direction: Direction::Backward,
        }
    }
}
