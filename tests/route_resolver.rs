mod common;

use common::Sequence;
use dealerdesk::routes::{
    normalize, resolve, screens, LoadMode, RouteParams, ScreenId, ScreenRegistry,
};

fn builtin() -> ScreenRegistry {
    ScreenRegistry::builtin()
}

#[test]
fn dealer_directory_aliases_converge() {
    let registry = builtin();
    let canonical = resolve("resources/customer-directory", &registry);
    assert_eq!(canonical.screen, ScreenId::from_static("customer-directory"));
    assert_eq!(canonical.mode, LoadMode::Deferred);

    for alias in ["resources/dealer_directory", "resources/dealer-directory"] {
        let resolved = resolve(alias, &registry);
        assert_eq!(resolved.screen, canonical.screen, "{alias}");
        assert_eq!(resolved.params, canonical.params, "{alias}");
    }
}

#[test]
fn category_comparison_is_parametrized() {
    let resolved = resolve("products/category/casegoods", &builtin());
    assert_eq!(resolved.screen, screens::PRODUCT_COMPARISON);
    assert_eq!(
        resolved.params,
        RouteParams::Comparison {
            category_id: "casegoods".to_string()
        }
    );
}

#[test]
fn competition_route_carries_category_and_product() {
    let resolved = resolve("products/category/casegoods/competition/42", &builtin());
    assert_eq!(resolved.screen, screens::COMPETITIVE_ANALYSIS);
    assert_eq!(
        resolved.params,
        RouteParams::Competition {
            category_id: "casegoods".to_string(),
            product_id: Some("42".to_string()),
        }
    );
}

#[test]
fn competition_route_without_product() {
    let resolved = resolve("products/category/seating/competition", &builtin());
    assert_eq!(
        resolved.params,
        RouteParams::Competition {
            category_id: "seating".to_string(),
            product_id: None,
        }
    );
}

#[test]
fn competition_as_third_segment() {
    let resolved = resolve("products/category/competition/tables/7", &builtin());
    assert_eq!(resolved.screen, screens::COMPETITIVE_ANALYSIS);
    assert_eq!(
        resolved.params,
        RouteParams::Competition {
            category_id: "tables".to_string(),
            product_id: Some("7".to_string()),
        }
    );
}

#[test]
fn bare_competition_segment_is_not_a_category() {
    let resolved = resolve("products/category/competition", &builtin());
    assert_ne!(resolved.screen, screens::PRODUCT_COMPARISON);
    assert_eq!(resolved.screen, screens::PRODUCTS);
    assert_eq!(resolved.params, RouteParams::None);
}

#[test]
fn reserved_bases_swallow_nested_routes() {
    let registry = builtin();
    for key in ["projects", "projects/lead-42", "projects/lead-42/notes/3"] {
        let resolved = resolve(key, &registry);
        assert_eq!(resolved.screen, screens::PROJECTS, "{key}");
        assert_eq!(resolved.params, RouteParams::None, "{key}");
    }
}

#[test]
fn samples_cart_opens_cart_expanded() {
    let registry = builtin();
    let cart = resolve("samples/cart", &registry);
    assert_eq!(cart.screen, screens::SAMPLES);
    assert_eq!(cart.params, RouteParams::Samples { open_cart: true });

    for key in ["samples", "samples/casegoods", "samples/cart/extra"] {
        let resolved = resolve(key, &registry);
        assert_eq!(resolved.screen, screens::SAMPLES, "{key}");
        assert_eq!(
            resolved.params,
            RouteParams::Samples { open_cart: false },
            "{key}"
        );
    }
}

#[test]
fn order_detail_parses_identifier() {
    let resolved = resolve("orders/450080", &builtin());
    assert_eq!(resolved.screen, screens::ORDER_DETAIL);
    assert_eq!(resolved.params.detail_id(), Some("450080"));
}

#[test]
fn feature_detail_takes_remaining_payload() {
    let resolved = resolve("resources/customer-directory/dealer/88/contacts", &builtin());
    assert_eq!(resolved.screen, ScreenId::from_static("customer-directory"));
    assert_eq!(
        resolved.params,
        RouteParams::Feature {
            detail: Some("dealer/88/contacts".to_string())
        }
    );
}

#[test]
fn unknown_resource_goes_to_generic_detail() {
    let resolved = resolve("resources/warranty-cards/17", &builtin());
    assert_eq!(resolved.screen, screens::RESOURCE_DETAIL);
    assert_eq!(
        resolved.params,
        RouteParams::Detail {
            residual: "warranty-cards/17".to_string()
        }
    );
}

#[test]
fn feature_without_detail_support_falls_to_generic_detail() {
    let resolved = resolve("resources/lead-times/casegoods", &builtin());
    assert_eq!(resolved.screen, screens::RESOURCE_DETAIL);
}

#[test]
fn bare_bases_resolve_directly() {
    let registry = builtin();
    assert_eq!(resolve("orders", &registry).screen, screens::ORDERS);
    assert_eq!(resolve("resources", &registry).screen, screens::RESOURCES);
    assert_eq!(resolve("home", &registry).screen, screens::HOME);
    assert!(resolve("community", &registry).is_deferred());
}

#[test]
fn legacy_base_spelling_is_normalized() {
    let resolved = resolve("order/1001", &builtin());
    assert_eq!(resolved.screen, screens::ORDER_DETAIL);
}

#[test]
fn unknown_key_falls_back() {
    let resolved = resolve("warehouse/12", &builtin());
    assert!(resolved.is_fallback());
    assert_eq!(resolved.screen, screens::HOME);
}

#[test]
fn custom_fallback_is_honored() {
    let registry = builtin().with_fallback(screens::PRODUCTS);
    assert_eq!(resolve("nope", &registry).screen, screens::PRODUCTS);
}

#[test]
fn empty_registry_still_resolves() {
    let registry = ScreenRegistry::new(ScreenId::from_static("blank"));
    let resolved = resolve("orders/1", &registry);
    assert_eq!(resolved.screen, ScreenId::from_static("blank"));
    assert_eq!(resolved.mode, LoadMode::Eager);
}

#[test]
fn arbitrary_strings_always_resolve() {
    let alphabet: Vec<char> = "ab/-_ .ç\u{0}rscedomtpl".chars().collect();
    let registry = builtin();
    for seed in 1..=300 {
        let mut seq = Sequence::new(seed);
        let len = seq.below(24) as usize;
        let key: String = (0..len)
            .map(|_| alphabet[seq.below(alphabet.len() as u64) as usize])
            .collect();
        // Must not panic, and must produce a screen.
        let resolved = resolve(&key, &registry);
        assert!(!resolved.screen.as_str().is_empty());
    }
}

#[test]
fn normalize_is_idempotent_for_arbitrary_segments() {
    for raw in [
        "dealer_directory",
        "lead_times",
        "sample",
        "contracts",
        "unknown",
        "",
        "customer-directory",
    ] {
        assert_eq!(normalize(normalize(raw)), normalize(raw));
    }
}
