//! Sample cart: quantity aggregation and line-item derivation.

mod id;
mod intent;
mod lines;
mod reducer;
mod state;

pub use id::{category_set_id, CartId, CATEGORY_SET_PREFIX, FULL_SET_ID};
pub use intent::CartIntent;
pub use lines::{derive_line_items, CatalogLookup, CatalogProduct, InMemoryCatalog, LineItem, LineKind};
pub use reducer::CartReducer;
pub use state::CartState;
