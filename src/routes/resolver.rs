//! Route resolution: navigation key → screen.
//!
//! Resolution runs an ordered list of matchers, most specific first. The
//! first matcher that returns `Some` wins; when none does, the registry's
//! fallback screen is used. Resolution is total: any string resolves.
//!
//! Order matters. Reserved bases (`projects`, ...) and `samples` swallow all
//! of their nested routes before any segment-counting rule sees them.

use crate::nav::NavKey;
use crate::routes::alias::{normalize, normalize_leading};
use crate::routes::registry::{patterns, LoadMode, ScreenId, ScreenRegistry};

/// Parameters extracted from the key for the resolved screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteParams {
    #[default]
    None,
    /// `samples/...`; `open_cart` is set for exactly `samples/cart`.
    Samples { open_cart: bool },
    /// `products/category/{id}`.
    Comparison { category_id: String },
    /// `products/category/{id}/competition[/{productId}]`.
    Competition {
        category_id: String,
        product_id: Option<String>,
    },
    /// A deferred resources feature; `detail` is the path below the feature.
    Feature { detail: Option<String> },
    /// Generic detail screen (`orders/...`, `resources/...`) with the
    /// residual path below the base.
    Detail { residual: String },
}

impl RouteParams {
    /// Identifier a detail screen reads out of its residual path.
    pub fn detail_id(&self) -> Option<&str> {
        match self {
            Self::Detail { residual } => residual.split('/').next(),
            _ => None,
        }
    }
}

/// Result of resolving a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScreen {
    pub screen: ScreenId,
    pub mode: LoadMode,
    pub params: RouteParams,
    /// Name of the matcher that produced this result (`"fallback"` if none).
    pub matched_by: &'static str,
}

impl ResolvedScreen {
    pub fn is_fallback(&self) -> bool {
        self.matched_by == FALLBACK
    }

    pub fn is_deferred(&self) -> bool {
        self.mode == LoadMode::Deferred
    }
}

/// A key split into its normalized base and remaining segments.
#[derive(Debug)]
struct RouteRequest<'a> {
    base: &'a str,
    rest: Vec<&'a str>,
}

impl<'a> RouteRequest<'a> {
    fn parse(key: &'a str) -> Self {
        let mut segments = key.split('/').map(str::trim).filter(|s| !s.is_empty());
        let base = segments.next().map(normalize).unwrap_or("");
        Self {
            base,
            rest: segments.collect(),
        }
    }
}

type Matcher = fn(&RouteRequest<'_>, &ScreenRegistry) -> Option<ResolvedScreen>;

const FALLBACK: &str = "fallback";

/// Matchers in priority order.
const MATCHERS: &[(&str, Matcher)] = &[
    ("reserved", match_reserved),
    ("samples", match_samples),
    ("resource-feature", match_resource_feature),
    ("product-category", match_product_category),
    ("detail", match_detail),
    ("direct", match_direct),
];

/// Resolve `key` against `registry`. Never fails.
pub fn resolve(key: &str, registry: &ScreenRegistry) -> ResolvedScreen {
    let request = RouteRequest::parse(key);

    for &(name, matcher) in MATCHERS {
        if let Some(mut resolved) = matcher(&request, registry) {
            resolved.matched_by = name;
            tracing::debug!(
                key = %key,
                screen = %resolved.screen,
                matcher = name,
                deferred = resolved.is_deferred(),
                "route resolved"
            );
            return resolved;
        }
        tracing::trace!(key = %key, matcher = name, "no match");
    }

    tracing::debug!(key = %key, fallback = %registry.fallback(), "unresolved route, using fallback");
    ResolvedScreen {
        screen: registry.fallback().clone(),
        mode: registry
            .screen(registry.fallback().as_str())
            .map(|entry| entry.mode)
            .unwrap_or(LoadMode::Eager),
        params: RouteParams::None,
        matched_by: FALLBACK,
    }
}

/// Resolve a validated key.
pub fn resolve_key(key: &NavKey, registry: &ScreenRegistry) -> ResolvedScreen {
    resolve(key.as_str(), registry)
}

fn entry(registry: &ScreenRegistry, key: &str, params: RouteParams) -> Option<ResolvedScreen> {
    registry.screen(key).map(|entry| ResolvedScreen {
        screen: entry.screen.clone(),
        mode: entry.mode,
        params,
        matched_by: "",
    })
}

fn match_reserved(req: &RouteRequest<'_>, registry: &ScreenRegistry) -> Option<ResolvedScreen> {
    if !registry.is_reserved(req.base) {
        return None;
    }
    entry(registry, req.base, RouteParams::None)
}

fn match_samples(req: &RouteRequest<'_>, registry: &ScreenRegistry) -> Option<ResolvedScreen> {
    if req.base != "samples" {
        return None;
    }
    let open_cart = matches!(req.rest.as_slice(), ["cart"]);
    entry(registry, "samples", RouteParams::Samples { open_cart })
}

fn match_resource_feature(
    req: &RouteRequest<'_>,
    registry: &ScreenRegistry,
) -> Option<ResolvedScreen> {
    if req.base != "resources" || req.rest.is_empty() {
        return None;
    }
    let residual = normalize_leading(&req.rest.join("/"));

    if let Some(feature) = registry.feature(&residual) {
        return Some(ResolvedScreen {
            screen: feature.screen.clone(),
            mode: LoadMode::Deferred,
            params: RouteParams::Feature { detail: None },
            matched_by: "",
        });
    }

    // Longest feature path that prefixes the residual on a segment boundary.
    let (path, feature) = registry
        .features()
        .filter(|(_, feature)| feature.accepts_detail)
        .filter(|(path, _)| {
            residual
                .strip_prefix(path)
                .is_some_and(|tail| tail.starts_with('/'))
        })
        .max_by_key(|(path, _)| path.len())?;

    let detail = residual[path.len() + 1..].to_string();
    Some(ResolvedScreen {
        screen: feature.screen.clone(),
        mode: LoadMode::Deferred,
        params: RouteParams::Feature {
            detail: Some(detail),
        },
        matched_by: "",
    })
}

fn match_product_category(
    req: &RouteRequest<'_>,
    registry: &ScreenRegistry,
) -> Option<ResolvedScreen> {
    if req.base != "products" || req.rest.first() != Some(&"category") {
        return None;
    }
    let tail = &req.rest[1..];

    match tail {
        // A bare `competition` names no category; left to the products screen.
        [category_id] if *category_id != "competition" => entry(
            registry,
            patterns::PRODUCT_COMPARISON,
            RouteParams::Comparison {
                category_id: category_id.to_string(),
            },
        ),
        // products/category/{id}/competition[/{productId}]
        [category_id, "competition", rest @ ..] if rest.len() <= 1 => entry(
            registry,
            patterns::COMPETITIVE_ANALYSIS,
            RouteParams::Competition {
                category_id: category_id.to_string(),
                product_id: rest.first().map(|id| id.to_string()),
            },
        ),
        // products/category/competition/{id}[/{productId}]
        ["competition", category_id, rest @ ..] if rest.len() <= 1 => entry(
            registry,
            patterns::COMPETITIVE_ANALYSIS,
            RouteParams::Competition {
                category_id: category_id.to_string(),
                product_id: rest.first().map(|id| id.to_string()),
            },
        ),
        _ => None,
    }
}

fn match_detail(req: &RouteRequest<'_>, registry: &ScreenRegistry) -> Option<ResolvedScreen> {
    let pattern = match req.base {
        "orders" => patterns::ORDER_DETAIL,
        "resources" => patterns::RESOURCE_DETAIL,
        _ => return None,
    };
    if req.rest.is_empty() {
        return None;
    }
    entry(
        registry,
        pattern,
        RouteParams::Detail {
            residual: req.rest.join("/"),
        },
    )
}

fn match_direct(req: &RouteRequest<'_>, registry: &ScreenRegistry) -> Option<ResolvedScreen> {
    if req.base.is_empty() {
        return None;
    }
    entry(registry, req.base, RouteParams::None)
}
