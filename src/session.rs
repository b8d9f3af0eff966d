//! The session surface screens talk to.
//!
//! A [`Session`] owns the navigator, the screen registry, the deferred
//! loading boundary and the persisted slots. Screens receive
//! [`ScreenProps`] and request changes through the session's methods; they
//! never mutate the history or storage directly.

use std::sync::Arc;

use crate::cart::{derive_line_items, CartIntent, CartReducer, CartState, CatalogLookup, LineItem};
use crate::config::Config;
use crate::nav::{Direction, NavKey};
use crate::persist::{DurableStorage, HomeAppsError, SessionSlots};
use crate::routes::{resolve_key, Boundary, DeferredScreens, ResolvedScreen, ScreenRegistry};
use crate::ui::mvi::Reducer;
use crate::ui::navigator::{BackHandler, BackOutcome, Navigator};

/// Everything a screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenProps {
    pub key: NavKey,
    pub screen: ResolvedScreen,
    pub direction: Direction,
    pub dark_theme: bool,
}

pub struct Session<M> {
    navigator: Navigator,
    registry: ScreenRegistry,
    deferred: DeferredScreens<M>,
    slots: SessionSlots,
    resolved: ResolvedScreen,
}

impl<M> Session<M>
where
    M: Send + Sync + 'static,
{
    pub fn new(registry: ScreenRegistry, deferred: DeferredScreens<M>, slots: SessionSlots) -> Self {
        let navigator = Navigator::new();
        let resolved = resolve_key(navigator.current(), &registry);
        tracing::info!(screen = %resolved.screen, "session started");
        Self {
            navigator,
            registry,
            deferred,
            slots,
            resolved,
        }
    }

    /// Builtin registry with the configured fallback, slots hydrated from
    /// `storage`.
    pub fn from_config(
        config: &Config,
        storage: Arc<dyn DurableStorage>,
        deferred: DeferredScreens<M>,
    ) -> Self {
        let mut registry = ScreenRegistry::builtin();
        if let Some(entry) = registry.screen(&config.routes.fallback) {
            let fallback = entry.screen.clone();
            registry = registry.with_fallback(fallback);
        }
        let slots = SessionSlots::hydrate(
            storage,
            &config.storage.namespace,
            config.theme.dark_by_default,
        );
        Self::new(registry, deferred, slots)
    }

    pub fn navigate(&mut self, key: NavKey) {
        self.navigator.navigate(key);
        self.refresh();
    }

    /// Back request; `handler` is the mounted screen's interceptor.
    pub fn go_back(&mut self, handler: Option<&mut dyn BackHandler>) -> BackOutcome {
        let outcome = self.navigator.go_back(handler);
        if outcome == BackOutcome::Popped {
            self.refresh();
        }
        outcome
    }

    pub fn go_home(&mut self) {
        self.navigator.go_home();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.resolved = resolve_key(self.navigator.current(), &self.registry);
        if self.resolved.is_deferred() {
            // Kick off the load now; the view polls `boundary()`.
            let _ = self.deferred.boundary(&self.resolved.screen);
        }
    }

    pub fn current(&self) -> ScreenProps {
        ScreenProps {
            key: self.navigator.current().clone(),
            screen: self.resolved.clone(),
            direction: self.navigator.direction(),
            dark_theme: *self.slots.theme.get(),
        }
    }

    /// Loading boundary of the current screen, `None` when it is bundled.
    pub fn boundary(&self) -> Option<Boundary<M>> {
        self.resolved
            .is_deferred()
            .then(|| self.deferred.boundary(&self.resolved.screen))
    }

    /// Wait for the current screen's module, if it is deferred.
    pub async fn load_current(&self) -> Option<Arc<M>> {
        if !self.resolved.is_deferred() {
            return None;
        }
        Some(self.deferred.load(&self.resolved.screen).await)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.slots.theme.update(|dark| !dark);
        *self.slots.theme.get()
    }

    pub fn cart(&self) -> &CartState {
        self.slots.cart.get()
    }

    fn dispatch_cart(&mut self, intent: CartIntent) {
        tracing::debug!(?intent, "cart");
        self.slots
            .cart
            .update(|cart| CartReducer::reduce(cart.clone(), intent));
    }

    pub fn adjust_cart(&mut self, id: &str, delta: i64) {
        self.dispatch_cart(CartIntent::Adjust {
            id: id.to_string(),
            delta,
        });
    }

    pub fn toggle_collection(&mut self, id: &str) {
        self.dispatch_cart(CartIntent::Toggle { id: id.to_string() });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch_cart(CartIntent::Clear);
    }

    pub fn line_items(&self, catalog: &dyn CatalogLookup) -> Vec<LineItem> {
        derive_line_items(self.slots.cart.get(), catalog)
    }

    pub fn home_apps(&self) -> &[String] {
        self.slots.home_apps.get()
    }

    pub fn replace_home_app(&mut self, slot: usize, route: &str) -> Result<(), HomeAppsError> {
        self.slots.replace_home_app(slot, route)
    }

    pub fn draft(&self) -> &serde_json::Value {
        self.slots.draft.get()
    }

    pub fn set_draft(&mut self, draft: serde_json::Value) {
        self.slots.draft.set(draft);
    }

    pub fn clear_draft(&mut self) {
        self.slots.clear_draft();
    }
}
