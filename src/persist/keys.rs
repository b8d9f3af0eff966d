//! The session's persistent slots.
//!
//! Adding a slot: add a variant to [`SlotId`] and a field to [`SessionSlots`].
//! The `as_str()` value becomes part of the storage key; once shipped, do not
//! rename it.

use std::sync::Arc;

use thiserror::Error;

use crate::cart::CartState;
use crate::persist::storage::DurableStorage;
use crate::persist::value::{reset_unless, PersistentValue};

/// Number of apps on the home screen.
pub const HOME_APP_SLOTS: usize = 8;

/// Home-screen app selection shipped with a fresh install.
pub const DEFAULT_HOME_APPS: [&str; HOME_APP_SLOTS] = [
    "orders",
    "sales",
    "products",
    "resources",
    "projects",
    "samples",
    "community",
    "resources/lead-times",
];

pub fn default_home_apps() -> Vec<String> {
    DEFAULT_HOME_APPS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Theme,
    Cart,
    HomeApps,
    Draft,
}

impl SlotId {
    /// Stable storage suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Cart => "cart",
            Self::HomeApps => "home-apps",
            Self::Draft => "draft",
        }
    }

    pub fn all() -> &'static [SlotId] {
        &[Self::Theme, Self::Cart, Self::HomeApps, Self::Draft]
    }

    /// Full storage key under `namespace`.
    pub fn key(&self, namespace: &str) -> String {
        format!("{namespace}.{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeAppsError {
    #[error("home app slot {slot} out of range (0..{HOME_APP_SLOTS})")]
    SlotOutOfRange { slot: usize },

    #[error("'{route}' is already on the home screen")]
    Duplicate { route: String },
}

/// All persistent state of a session, hydrated together at startup.
#[derive(Debug)]
pub struct SessionSlots {
    pub theme: PersistentValue<bool>,
    pub cart: PersistentValue<CartState>,
    pub home_apps: PersistentValue<Vec<String>>,
    pub draft: PersistentValue<serde_json::Value>,
}

impl SessionSlots {
    pub fn hydrate(storage: Arc<dyn DurableStorage>, namespace: &str, dark_by_default: bool) -> Self {
        let theme = PersistentValue::hydrate(
            Arc::clone(&storage),
            SlotId::Theme.key(namespace),
            dark_by_default,
        );
        let cart = PersistentValue::hydrate_with(
            Arc::clone(&storage),
            SlotId::Cart.key(namespace),
            CartState::default(),
            |stored: CartState, _| stored.pruned(),
        );
        // Older builds stored six apps; anything but eight resets.
        let home_apps = PersistentValue::hydrate_with(
            Arc::clone(&storage),
            SlotId::HomeApps.key(namespace),
            default_home_apps(),
            reset_unless(|apps: &Vec<String>| apps.len() == HOME_APP_SLOTS),
        );
        let draft = PersistentValue::hydrate(
            storage,
            SlotId::Draft.key(namespace),
            serde_json::Value::Null,
        );

        tracing::info!(
            namespace = %namespace,
            dark = *theme.get(),
            cart_entries = cart.get().len(),
            "session state hydrated"
        );

        Self {
            theme,
            cart,
            home_apps,
            draft,
        }
    }

    /// Put `route` into home-screen slot `slot`.
    pub fn replace_home_app(&mut self, slot: usize, route: &str) -> Result<(), HomeAppsError> {
        let apps = self.home_apps.get();
        if slot >= apps.len() {
            return Err(HomeAppsError::SlotOutOfRange { slot });
        }
        if apps
            .iter()
            .enumerate()
            .any(|(i, app)| i != slot && app == route)
        {
            return Err(HomeAppsError::Duplicate {
                route: route.to_string(),
            });
        }
        self.home_apps.update(|apps| {
            let mut apps = apps.clone();
            apps[slot] = route.to_string();
            apps
        });
        Ok(())
    }

    pub fn clear_draft(&mut self) {
        self.draft.reset();
    }
}
