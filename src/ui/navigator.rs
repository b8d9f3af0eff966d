//! Navigation controller.
//!
//! Screens never touch the history stack directly. They call
//! [`Navigator::navigate`], [`Navigator::go_back`] or [`Navigator::go_home`],
//! and the navigator feeds the matching intent through [`HistoryReducer`].

use crate::nav::{Direction, NavKey};
use crate::ui::history::{HistoryIntent, HistoryReducer, HistoryState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Answer of the mounted screen to a back request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackResult {
    /// The screen consumed the request (e.g. it cleared a selection).
    Handled,
    /// The screen has nothing to collapse; leave it.
    Unhandled,
}

/// Hook a mounted screen supplies to intercept "back".
pub trait BackHandler {
    fn handle_back(&mut self) -> BackResult;
}

impl<F> BackHandler for F
where
    F: FnMut() -> BackResult,
{
    fn handle_back(&mut self) -> BackResult {
        self()
    }
}

/// What a back request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The screen handled it; the stack and direction are untouched.
    Intercepted,
    /// The current screen was popped.
    Popped,
    /// Already at the root; nothing to pop. The app boundary decides what
    /// to do (usually nothing).
    AtRoot,
}

#[derive(Debug, Default)]
pub struct Navigator {
    history: HistoryState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `key` and mark the transition as forward.
    pub fn navigate(&mut self, key: NavKey) {
        tracing::debug!(key = %key, depth = self.history.len() + 1, "navigate");
        dispatch_mvi!(self, history, HistoryReducer, HistoryIntent::Push(key));
    }

    /// Request to leave the current screen.
    ///
    /// `handler` is the mounted screen's interceptor, if it registered one.
    /// It is consulted first; if it reports [`BackResult::Handled`] the
    /// history is not mutated at all.
    pub fn go_back(&mut self, handler: Option<&mut dyn BackHandler>) -> BackOutcome {
        if let Some(handler) = handler {
            if handler.handle_back() == BackResult::Handled {
                tracing::debug!(key = %self.history.current(), "back intercepted by screen");
                return BackOutcome::Intercepted;
            }
        }

        if !self.history.can_pop() {
            tracing::debug!("back requested at root");
            return BackOutcome::AtRoot;
        }

        dispatch_mvi!(self, history, HistoryReducer, HistoryIntent::Pop);
        tracing::debug!(key = %self.history.current(), depth = self.history.len(), "popped");
        BackOutcome::Popped
    }

    /// Reset the stack to `[home]`.
    pub fn go_home(&mut self) {
        dispatch_mvi!(self, history, HistoryReducer, HistoryIntent::ResetToRoot);
        tracing::debug!("reset to root");
    }

    /// Current screen key.
    pub fn current(&self) -> &NavKey {
        self.history.current()
    }

    pub fn direction(&self) -> Direction {
        self.history.direction()
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }
}
