use storefront_core::RawProduct;

use super::*;

fn raw(id: u64, title: &str, category: &str, price: &str) -> RawProduct {
    RawProduct {
        id,
        title: title.to_owned(),
        description: "A product.".to_owned(),
        price: price.parse().unwrap(),
        image: format!("https://img.example/{id}.jpg"),
        category: category.to_owned(),
    }
}

/// Products 1..=3 in stock, product 4 out of stock.
fn store() -> CatalogStore {
    let mut store = CatalogStore::new();
    let mut draws = [true, true, true, false].into_iter();
    let mut stock = move || draws.next().unwrap_or(true);
    store.load(
        vec![
            raw(1, "Backpack", "men's clothing", "109.95"),
            raw(2, "Dragon Bracelet", "jewelery", "695"),
            raw(3, "Hard Drive", "electronics", "64"),
            raw(4, "Rain Jacket", "women's clothing", "39.99"),
        ],
        &mut stock,
    );
    store
}

#[test]
fn list_shows_every_product_under_all() {
    let lines = render_list(store(), None).unwrap();
    assert_eq!(lines[0], "== All Products ==");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].contains("/product/1"));
    assert!(lines[1].contains("$109.95"));
    assert!(lines[4].contains("[Out of Stock]"));
}

#[test]
fn list_filters_by_category() {
    let lines = render_list(store(), Some("jewelery")).unwrap();
    assert_eq!(lines, vec![
        "== Jewelery ==".to_owned(),
        format!("{:<12} {:>10}  Dragon Bracelet", "/product/2", "$695.00"),
    ]);
}

#[test]
fn list_rejects_unknown_category() {
    let result = render_list(store(), Some("furniture"));
    assert!(result.is_err(), "expected Err, got: {result:?}");
}

#[test]
fn categories_mark_all_as_active() {
    let lines = render_categories(&store());
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("* All Products"));
    assert!(lines[1].starts_with("  Men's clothing"));
    assert!(lines[1].ends_with("men's clothing"));
}

#[test]
fn price_shows_upcharge_badge() {
    let lines = render_price(&store(), 3, Some("L"), Some("Gray")).unwrap();
    assert_eq!(lines[0], "Hard Drive");
    assert_eq!(lines[1], "  size L (+10%), color Gray (+8%)");
    assert_eq!(lines[2], "  $76.03 (was $64.00) +$12.03");
}

#[test]
fn price_defaults_to_base_variant() {
    let lines = render_price(&store(), 2, None, None).unwrap();
    assert_eq!(lines[2], "  $695.00");
}

#[test]
fn price_rejects_unknown_size() {
    let result = render_price(&store(), 1, Some("XXL"), None);
    assert!(result.is_err());
}

#[test]
fn price_rejects_missing_product() {
    let result = render_price(&store(), 99, None, None);
    assert!(result.is_err());
}

#[test]
fn add_emits_one_json_line_per_unit() {
    let lines = render_add(&store(), 1, None, Some("white"), 2).unwrap();
    assert_eq!(lines.len(), 2);

    let line: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(line["productId"], 1);
    assert_eq!(line["resolvedPrice"], "115.45");
    assert_eq!(line["basePrice"], "109.95");
    assert_eq!(line["quantityDelta"], 1);
    assert_eq!(line["selection"]["color"], "White");
}

#[test]
fn add_out_of_stock_emits_nothing() {
    let lines = render_add(&store(), 4, None, None, 3).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn selection_for_applies_overrides() {
    let store = store();
    let product = store.product(1).unwrap();
    let selection = selection_for(product, Some("xs"), None).unwrap();
    assert_eq!(selection, VariantSelection::new(Size::ExtraSmall, Color::Black));
}
