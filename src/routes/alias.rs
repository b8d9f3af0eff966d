//! Legacy route-segment aliases.
//!
//! Older builds and deep links used underscore slugs and a few feature names
//! that have since been renamed. Only a single leading segment is ever
//! rewritten; nested parameters pass through untouched.

/// Legacy slug → canonical slug. No canonical value may appear as a key.
const ALIASES: &[(&str, &str)] = &[
    ("dealer_directory", "customer-directory"),
    ("dealer-directory", "customer-directory"),
    ("customer_directory", "customer-directory"),
    ("lead_times", "lead-times"),
    ("leadtimes", "lead-times"),
    ("design_days", "design-days"),
    ("comcol_request", "comcol-request"),
    ("com_col_request", "comcol-request"),
    ("loaner_pool", "loaner-pool"),
    ("discontinued_finishes", "discontinued-finishes"),
    ("install_instructions", "install-instructions"),
    ("sample_discounts", "sample-discounts"),
    ("contracts", "contracts-pricing"),
    ("social_media", "social-media"),
    ("new_dealer_signup", "dealer-signup"),
    ("search_fabrics", "fabric-search"),
    ("fabrics", "fabric-search"),
    ("presentation", "presentations"),
    ("sample", "samples"),
    ("order", "orders"),
    ("replacements", "replacement-request"),
];

/// Canonical spelling of `segment`; unknown segments are returned as-is.
pub fn normalize(segment: &str) -> &str {
    ALIASES
        .iter()
        .find(|(legacy, _)| *legacy == segment)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(segment)
}

/// Normalize the first segment of a `/`-delimited path, keeping the rest.
pub fn normalize_leading(path: &str) -> String {
    match path.split_once('/') {
        Some((head, rest)) => format!("{}/{}", normalize(head), rest),
        None => normalize(path).to_string(),
    }
}
