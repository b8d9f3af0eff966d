//! Asynchronous loading boundary for deferred screens.
//!
//! Each deferred screen is loaded at most once per session. The first
//! request starts the load; every later request, concurrent or not, shares
//! its result. Loads are fire-and-forget: there is no cancellation and no
//! timeout, and a load whose screen was navigated away from still completes
//! and is cached.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;

use crate::routes::registry::ScreenId;

/// Boxed future produced by a screen loader.
pub type LoadFuture<M> = Pin<Box<dyn Future<Output = M> + Send>>;

/// Loads the code/module for one screen.
pub type LoaderFn<M> = Arc<dyn Fn(ScreenId) -> LoadFuture<M> + Send + Sync>;

/// What the view layer should mount for a deferred screen right now.
#[derive(Debug)]
pub enum Boundary<M> {
    /// Show the placeholder; the load is in flight.
    Placeholder,
    Ready(Arc<M>),
}

impl<M> Boundary<M> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

struct Inner<M> {
    loader: LoaderFn<M>,
    cells: Mutex<HashMap<ScreenId, Arc<OnceCell<Arc<M>>>>>,
    spawned: Mutex<HashSet<ScreenId>>,
}

/// Per-screen cache of loaded modules.
pub struct DeferredScreens<M> {
    inner: Arc<Inner<M>>,
}

impl<M> Clone for DeferredScreens<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M> DeferredScreens<M>
where
    M: Send + Sync + 'static,
{
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn(ScreenId) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = M> + Send + 'static,
    {
        let loader: LoaderFn<M> = Arc::new(move |id| -> LoadFuture<M> { Box::pin(loader(id)) });
        Self {
            inner: Arc::new(Inner {
                loader,
                cells: Mutex::new(HashMap::new()),
                spawned: Mutex::new(HashSet::new()),
            }),
        }
    }

    fn cell(&self, id: &ScreenId) -> Arc<OnceCell<Arc<M>>> {
        let mut cells = self.inner.cells.lock();
        Arc::clone(cells.entry(id.clone()).or_default())
    }

    /// Load `id`, or wait for the load already in flight, or return the
    /// cached module.
    pub async fn load(&self, id: &ScreenId) -> Arc<M> {
        let cell = self.cell(id);
        let loader = Arc::clone(&self.inner.loader);
        let screen = id.clone();
        let module = cell
            .get_or_init(|| async move {
                tracing::debug!(screen = %screen, "loading deferred screen");
                let module = loader(screen.clone()).await;
                tracing::debug!(screen = %screen, "deferred screen loaded");
                Arc::new(module)
            })
            .await;
        Arc::clone(module)
    }

    /// The module if it has finished loading.
    pub fn get(&self, id: &ScreenId) -> Option<Arc<M>> {
        self.inner
            .cells
            .lock()
            .get(id)
            .and_then(|cell| cell.get().cloned())
    }

    /// Non-blocking view for rendering. Starts the load on the current tokio
    /// runtime the first time it is asked for and returns the placeholder
    /// until it completes.
    pub fn boundary(&self, id: &ScreenId) -> Boundary<M> {
        if let Some(module) = self.get(id) {
            return Boundary::Ready(module);
        }

        if self.inner.spawned.lock().insert(id.clone()) {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let this = self.clone();
                    let id = id.clone();
                    handle.spawn(async move {
                        this.load(&id).await;
                    });
                }
                Err(_) => {
                    tracing::warn!(screen = %id, "no async runtime; deferred screen not started");
                    self.inner.spawned.lock().remove(id);
                }
            }
        }
        Boundary::Placeholder
    }

    pub fn is_loaded(&self, id: &ScreenId) -> bool {
        self.get(id).is_some()
    }
}
