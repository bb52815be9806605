//! Integration tests for filtering products by specification.

use proptest::prelude::*;
use rstest::{fixture, rstest};
use solid::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

#[fixture]
fn products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

fn names<'a>(matched: &[&'a Product]) -> Vec<&'a str> {
    matched.iter().map(|product| product.name()).collect()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[rstest]
fn green_products(products: Vec<Product>) {
    let green = ColorSpecification::new(Color::Green);

    let matched = BetterFilter.filter(&products, &green);

    assert_eq!(names(&matched), vec!["Apple", "Tree"]);
}

#[rstest]
fn green_and_large_products(products: Vec<Product>) {
    let green_and_large =
        ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));

    let matched = BetterFilter.filter(&products, &green_and_large);

    assert_eq!(names(&matched), vec!["Tree"]);
}

#[rstest]
fn blue_and_large_products(products: Vec<Product>) {
    let blue_and_large =
        ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));

    let matched = BetterFilter.filter(&products, &blue_and_large);

    assert_eq!(names(&matched), vec!["House"]);
}

#[rstest]
fn explicit_constructor_matches_method(products: Vec<Product>) {
    let constructed = AndSpecification::new(
        ColorSpecification::new(Color::Green),
        SizeSpecification::new(Size::Large),
    );
    let chained = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));

    assert_eq!(
        BetterFilter.filter(&products, &constructed),
        BetterFilter.filter(&products, &chained)
    );
}

#[rstest]
fn new_criteria_need_no_filter_changes(products: Vec<Product>) {
    let short_name = from_fn(|product: &Product| product.name().len() <= 4);
    let green_short = ColorSpecification::new(Color::Green).and(short_name);

    let matched = BetterFilter.filter(&products, &green_short);

    assert_eq!(names(&matched), vec!["Tree"]);
}

#[rstest]
fn folded_rules_match_all_of_them(products: Vec<Product>) {
    let rules = vec![
        ColorSpecification::new(Color::Green).shared(),
        SizeSpecification::new(Size::Small).shared(),
    ];

    let matched = BetterFilter.filter(&products, &SharedSpecification::combine_all(rules));

    assert_eq!(names(&matched), vec!["Apple"]);
}

#[rstest]
fn filtering_leaves_products_untouched(products: Vec<Product>) {
    let before = products.clone();

    let _ = BetterFilter.filter(&products, &ColorSpecification::new(Color::Red));

    assert_eq!(products, before);
}

// =============================================================================
// Legacy Filter Agreement
// =============================================================================

#[rstest]
fn legacy_filter_agrees_for_every_attribute_pair(products: Vec<Product>) {
    for color in Color::ALL {
        for size in Size::ALL {
            let specification =
                ColorSpecification::new(color).and(SizeSpecification::new(size));

            assert_eq!(
                ProductFilter.by_size_and_color(&products, color, size),
                BetterFilter.filter(&products, &specification),
                "disagreement for {color} {size}"
            );
        }
    }
}

fn product() -> impl Strategy<Value = Product> {
    (
        "[A-Z][a-z]{0,8}",
        prop::sample::select(Color::ALL.to_vec()),
        prop::sample::select(Size::ALL.to_vec()),
    )
        .prop_map(|(name, color, size)| Product::new(name, color, size))
}

proptest! {
    #[test]
    fn prop_legacy_by_color_agrees(
        products in prop::collection::vec(product(), 0..20),
        color in prop::sample::select(Color::ALL.to_vec())
    ) {
        prop_assert_eq!(
            ProductFilter.by_color(&products, color),
            BetterFilter.filter(&products, &ColorSpecification::new(color))
        );
    }

    #[test]
    fn prop_legacy_by_size_agrees(
        products in prop::collection::vec(product(), 0..20),
        size in prop::sample::select(Size::ALL.to_vec())
    ) {
        prop_assert_eq!(
            ProductFilter.by_size(&products, size),
            BetterFilter.filter(&products, &SizeSpecification::new(size))
        );
    }
}
