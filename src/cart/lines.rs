//! Display line items derived from the cart.

use std::collections::HashMap;

use crate::cart::id::CartId;
use crate::cart::state::CartState;

/// A product as the catalog describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// Read access to the sample catalog, supplied by the data layer.
pub trait CatalogLookup {
    fn product(&self, id: &str) -> Option<CatalogProduct>;

    /// Display name of a category, or `None` if it no longer exists.
    fn category_name(&self, category_id: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Product { category: String },
    CategorySet { category: String },
    FullSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub kind: LineKind,
}

/// Map every cart entry to a display record, in identifier order.
///
/// Entries whose product or category is missing from the catalog are
/// dropped, so stale identifiers from an older catalog never reach the UI.
pub fn derive_line_items(cart: &CartState, catalog: &dyn CatalogLookup) -> Vec<LineItem> {
    cart.iter()
        .filter_map(|(id, quantity)| {
            let line = match CartId::classify(id) {
                CartId::FullSet => LineItem {
                    id: id.to_string(),
                    name: "Full Sample Set".to_string(),
                    quantity,
                    kind: LineKind::FullSet,
                },
                CartId::CategorySet { category } => {
                    let name = catalog.category_name(category)?;
                    LineItem {
                        id: id.to_string(),
                        name: format!("Complete {name} Set"),
                        quantity,
                        kind: LineKind::CategorySet {
                            category: category.to_string(),
                        },
                    }
                }
                CartId::Item(item) => {
                    let product = catalog.product(item)?;
                    LineItem {
                        id: product.id,
                        name: product.name,
                        quantity,
                        kind: LineKind::Product {
                            category: product.category,
                        },
                    }
                }
            };
            Some(line)
        })
        .inspect(|line| tracing::trace!(id = %line.id, qty = line.quantity, "line item"))
        .collect()
}

/// Catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, CatalogProduct>,
    categories: HashMap<String, String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, id: &str, name: &str) -> Self {
        self.categories.insert(id.to_string(), name.to_string());
        self
    }

    pub fn with_product(mut self, id: &str, name: &str, category: &str) -> Self {
        self.products.insert(
            id.to_string(),
            CatalogProduct {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
            },
        );
        self
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn product(&self, id: &str) -> Option<CatalogProduct> {
        self.products.get(id).cloned()
    }

    fn category_name(&self, category_id: &str) -> Option<String> {
        self.categories.get(category_id).cloned()
    }
}
