use crate::nav::NavKey;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryIntent {
    /// Append a key. Never deduplicates.
    Push(NavKey),
    /// Drop the current screen. No-op at the root.
    Pop,
    /// Truncate to `[home]`.
    ResetToRoot,
}

impl Intent for HistoryIntent {}
