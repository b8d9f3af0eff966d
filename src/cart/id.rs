//! Cart identifier classification.
//!
//! Besides plain product ids, two synthetic identifier families exist: one
//! "full set" id covering every sample, and one "category set" id per
//! category (`set-<category>`). Collections toggle as a unit; plain items
//! accumulate.

/// Identifier of the every-sample collection.
pub const FULL_SET_ID: &str = "full-set";

/// Prefix of per-category collection identifiers.
pub const CATEGORY_SET_PREFIX: &str = "set-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartId<'a> {
    Item(&'a str),
    CategorySet { category: &'a str },
    FullSet,
}

impl<'a> CartId<'a> {
    pub fn classify(id: &'a str) -> Self {
        if id == FULL_SET_ID {
            return Self::FullSet;
        }
        match id.strip_prefix(CATEGORY_SET_PREFIX) {
            Some(category) if !category.is_empty() => Self::CategorySet { category },
            _ => Self::Item(id),
        }
    }

    pub fn is_collection(&self) -> bool {
        !matches!(self, Self::Item(_))
    }
}

/// Collection identifier for every sample in `category`.
pub fn category_set_id(category: &str) -> String {
    format!("{CATEGORY_SET_PREFIX}{category}")
}
