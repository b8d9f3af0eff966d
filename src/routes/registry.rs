//! Screen registry: what each base segment (or composite pattern) renders.
//!
//! The registry is supplied by the view layer; the resolver only reads it.
//! [`ScreenRegistry::builtin`] describes the dealer app's own screens.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Opaque identifier of a renderable screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenId(Cow<'static, str>);

impl ScreenId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Screen identifiers the resolver knows by name.
pub mod screens {
    use super::ScreenId;

    pub const HOME: ScreenId = ScreenId::from_static("home");
    pub const ORDERS: ScreenId = ScreenId::from_static("orders");
    pub const ORDER_DETAIL: ScreenId = ScreenId::from_static("order-detail");
    pub const SALES: ScreenId = ScreenId::from_static("sales");
    pub const PRODUCTS: ScreenId = ScreenId::from_static("products");
    pub const PRODUCT_COMPARISON: ScreenId = ScreenId::from_static("product-comparison");
    pub const COMPETITIVE_ANALYSIS: ScreenId = ScreenId::from_static("competitive-analysis");
    pub const PROJECTS: ScreenId = ScreenId::from_static("projects");
    pub const SAMPLES: ScreenId = ScreenId::from_static("samples");
    pub const RESOURCES: ScreenId = ScreenId::from_static("resources");
    pub const RESOURCE_DETAIL: ScreenId = ScreenId::from_static("resource-detail");
    pub const COMMUNITY: ScreenId = ScreenId::from_static("community");
    pub const SETTINGS: ScreenId = ScreenId::from_static("settings");
    pub const PROFILE: ScreenId = ScreenId::from_static("profile");
}

/// Composite registry keys for multi-segment routes.
pub mod patterns {
    pub const PRODUCT_COMPARISON: &str = "products/category/:categoryId";
    pub const COMPETITIVE_ANALYSIS: &str = "products/category/:categoryId/competition/:productId";
    pub const ORDER_DETAIL: &str = "orders/:orderId";
    pub const RESOURCE_DETAIL: &str = "resources/:path";
}

/// How a screen's code becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Bundled; renders immediately.
    Eager,
    /// Loaded on first use behind an asynchronous boundary.
    Deferred,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenEntry {
    pub screen: ScreenId,
    pub mode: LoadMode,
}

/// A deferred resources feature (`resources/<feature>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureEntry {
    pub screen: ScreenId,
    /// Whether `resources/<feature>/<more...>` is routed to this screen with
    /// the trailing path as its payload.
    pub accepts_detail: bool,
}

#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    screens: HashMap<String, ScreenEntry>,
    features: HashMap<String, FeatureEntry>,
    reserved: HashSet<String>,
    fallback: ScreenId,
}

impl ScreenRegistry {
    /// Empty registry that degrades every key to `fallback`.
    pub fn new(fallback: ScreenId) -> Self {
        Self {
            screens: HashMap::new(),
            features: HashMap::new(),
            reserved: HashSet::new(),
            fallback,
        }
    }

    /// Register `key` (a base segment or one of [`patterns`]).
    pub fn with_screen(mut self, key: &str, screen: ScreenId, mode: LoadMode) -> Self {
        self.screens
            .insert(key.to_string(), ScreenEntry { screen, mode });
        self
    }

    /// Register a deferred resources feature under its canonical slug path.
    pub fn with_feature(mut self, path: &str, screen: ScreenId, accepts_detail: bool) -> Self {
        self.features.insert(
            path.to_string(),
            FeatureEntry {
                screen,
                accepts_detail,
            },
        );
        self
    }

    /// Mark `base` as handling all of its nested routes internally.
    pub fn reserve(mut self, base: &str) -> Self {
        self.reserved.insert(base.to_string());
        self
    }

    pub fn with_fallback(mut self, fallback: ScreenId) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn screen(&self, key: &str) -> Option<&ScreenEntry> {
        self.screens.get(key)
    }

    pub fn feature(&self, path: &str) -> Option<&FeatureEntry> {
        self.features.get(path)
    }

    /// Feature paths, for prefix matching.
    pub fn features(&self) -> impl Iterator<Item = (&str, &FeatureEntry)> {
        self.features.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_reserved(&self, base: &str) -> bool {
        self.reserved.contains(base)
    }

    pub fn fallback(&self) -> &ScreenId {
        &self.fallback
    }

    /// Whether `base` is registered as a bundled screen.
    pub fn has_eager(&self, base: &str) -> bool {
        matches!(
            self.screens.get(base),
            Some(ScreenEntry {
                mode: LoadMode::Eager,
                ..
            })
        )
    }

    /// The dealer app's screen set.
    pub fn builtin() -> Self {
        let mut registry = Self::new(screens::HOME)
            .with_screen("home", screens::HOME, LoadMode::Eager)
            .with_screen("orders", screens::ORDERS, LoadMode::Eager)
            .with_screen("sales", screens::SALES, LoadMode::Eager)
            .with_screen("products", screens::PRODUCTS, LoadMode::Eager)
            .with_screen("projects", screens::PROJECTS, LoadMode::Eager)
            .with_screen("samples", screens::SAMPLES, LoadMode::Eager)
            .with_screen("resources", screens::RESOURCES, LoadMode::Eager)
            .with_screen("community", screens::COMMUNITY, LoadMode::Deferred)
            .with_screen("settings", screens::SETTINGS, LoadMode::Eager)
            .with_screen("profile", screens::PROFILE, LoadMode::Eager)
            .with_screen(
                patterns::PRODUCT_COMPARISON,
                screens::PRODUCT_COMPARISON,
                LoadMode::Eager,
            )
            .with_screen(
                patterns::COMPETITIVE_ANALYSIS,
                screens::COMPETITIVE_ANALYSIS,
                LoadMode::Deferred,
            )
            .with_screen(patterns::ORDER_DETAIL, screens::ORDER_DETAIL, LoadMode::Eager)
            .with_screen(
                patterns::RESOURCE_DETAIL,
                screens::RESOURCE_DETAIL,
                LoadMode::Eager,
            )
            .reserve("projects")
            .reserve("community");

        for &(slug, accepts_detail) in BUILTIN_FEATURES {
            registry = registry.with_feature(slug, ScreenId::from_static(slug), accepts_detail);
        }
        registry
    }
}

/// Resources features shipped with the app: `(slug, accepts_detail)`.
const BUILTIN_FEATURES: &[(&str, bool)] = &[
    ("customer-directory", true),
    ("lead-times", false),
    ("design-days", false),
    ("comcol-request", false),
    ("loaner-pool", false),
    ("discontinued-finishes", false),
    ("install-instructions", true),
    ("sample-discounts", false),
    ("contracts-pricing", false),
    ("social-media", false),
    ("dealer-signup", false),
    ("fabric-search", false),
    ("presentations", true),
    ("replacement-request", false),
    ("commission-rates", false),
    ("request-field-visit", false),
];
