use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cart::id::CartId;
use crate::ui::mvi::UiState;

/// Sample cart: item identifier → quantity.
///
/// Present keys always have a quantity of at least 1; a quantity of zero is
/// represented by the key being absent. Serialized as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: BTreeMap<String, u32>,
}

impl UiState for CartState {}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity of `id`, 0 if absent.
    pub fn quantity(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_units(&self) -> u64 {
        self.items.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Drop zero entries and collapse collections to 1. Applied to values
    /// hydrated from storage written by older builds.
    pub fn pruned(mut self) -> Self {
        self.items.retain(|_, qty| *qty > 0);
        for (id, qty) in self.items.iter_mut() {
            if CartId::classify(id).is_collection() {
                *qty = 1;
            }
        }
        self
    }

    pub(super) fn adjusted(mut self, id: &str, delta: i64) -> Self {
        if delta == 0 {
            return self;
        }
        let current = self.quantity(id);

        if CartId::classify(id).is_collection() {
            if delta > 0 {
                self.items.insert(id.to_string(), 1);
            } else {
                self.items.remove(id);
            }
            return self;
        }

        let next = i64::from(current)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX)) as u32;
        if next == 0 {
            self.items.remove(id);
        } else {
            self.items.insert(id.to_string(), next);
        }
        self
    }

    pub(super) fn toggled(mut self, id: &str) -> Self {
        if self.items.remove(id).is_none() {
            self.items.insert(id.to_string(), 1);
        }
        self
    }

    pub(super) fn without(mut self, id: &str) -> Self {
        self.items.remove(id);
        self
    }
}
