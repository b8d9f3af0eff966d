//! Typed persistent slots.
//!
//! A [`PersistentValue`] is hydrated once from durable storage when it is
//! created, then kept in memory. Every change writes through synchronously.
//! Storage failures are logged and swallowed: the in-memory value stays
//! authoritative for the rest of the session.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::persist::storage::{DurableStorage, StorageError};

/// A named durable slot holding a `T`.
pub struct PersistentValue<T> {
    key: String,
    default: T,
    value: T,
    storage: Arc<dyn DurableStorage>,
}

impl<T: fmt::Debug> fmt::Debug for PersistentValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

/// Builds a migration that keeps the stored value when `is_current` accepts
/// it and falls back to the default otherwise.
pub fn reset_unless<T, P>(is_current: P) -> impl FnOnce(T, &T) -> T
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |stored: T, default: &T| -> T {
        if is_current(&stored) {
            stored
        } else {
            default.clone()
        }
    }
}

impl<T> PersistentValue<T>
where
    T: Serialize + DeserializeOwned + Clone + PartialEq,
{
    /// Hydrate `key` from `storage`, or use `default` if it is absent,
    /// unreadable or not valid JSON for `T`.
    pub fn hydrate(storage: Arc<dyn DurableStorage>, key: impl Into<String>, default: T) -> Self {
        Self::hydrate_with(storage, key, default, |stored, _| stored)
    }

    /// Like [`hydrate`](Self::hydrate), then run `migrate(stored, default)`
    /// once. If it changes the value, the corrected value is persisted
    /// immediately so nothing later in the session sees the stale shape.
    pub fn hydrate_with<M>(
        storage: Arc<dyn DurableStorage>,
        key: impl Into<String>,
        default: T,
        migrate: M,
    ) -> Self
    where
        M: FnOnce(T, &T) -> T,
    {
        let key = key.into();
        let stored = read_json::<T>(storage.as_ref(), &key);

        let mut slot = Self {
            value: default.clone(),
            key,
            default,
            storage,
        };

        if let Some(stored) = stored {
            let corrected = migrate(stored.clone(), &slot.default);
            let changed = corrected != stored;
            slot.value = corrected;
            if changed {
                tracing::info!(key = %slot.key, "migrated stale persisted value");
                slot.persist();
            }
        }
        slot
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Replace the value and write it through.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Derive the new value from the current one and write it through.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next);
    }

    /// Restore the default and write it through.
    pub fn reset(&mut self) {
        self.set(self.default.clone());
    }

    fn persist(&self) {
        if let Err(e) = write_json(self.storage.as_ref(), &self.key, &self.value) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist value; keeping in-memory copy");
        }
    }
}

fn read_json<T: DeserializeOwned>(storage: &dyn DurableStorage, key: &str) -> Option<T> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "failed to read persisted value; using default");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(source) => {
            let e = StorageError::Json {
                key: key.to_string(),
                source,
            };
            tracing::warn!(key = %key, error = %e, "corrupt persisted value; using default");
            None
        }
    }
}

fn write_json<T: Serialize>(
    storage: &dyn DurableStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|source| StorageError::Json {
        key: key.to_string(),
        source,
    })?;
    storage.write(key, &json)
}
