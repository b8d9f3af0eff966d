//! Route resolution: alias normalization, the screen registry, the ordered
//! matcher list and the deferred-screen loading boundary.

pub mod alias;
pub mod deferred;
pub mod registry;
pub mod resolver;

pub use alias::normalize;
pub use deferred::{Boundary, DeferredScreens, LoadFuture, LoaderFn};
pub use registry::{patterns, screens, FeatureEntry, LoadMode, ScreenEntry, ScreenId, ScreenRegistry};
pub use resolver::{resolve, resolve_key, ResolvedScreen, RouteParams};
