//! Durable session state: storage backends, typed slots, and the slots the
//! app keeps across sessions.

pub mod keys;
pub mod storage;
pub mod value;

pub use keys::{default_home_apps, HomeAppsError, SessionSlots, SlotId, DEFAULT_HOME_APPS, HOME_APP_SLOTS};
pub use storage::{DurableStorage, FileStorage, MemoryStorage, StorageError};
pub use value::{reset_unless, PersistentValue};
