use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    /// Add `delta` (may be negative) to an item. Collections treat any
    /// positive delta as "add once" and any negative delta as "remove".
    Adjust { id: String, delta: i64 },
    /// Add the id with quantity 1 if absent, remove it if present.
    Toggle { id: String },
    Remove { id: String },
    Clear,
}

impl Intent for CartIntent {}
