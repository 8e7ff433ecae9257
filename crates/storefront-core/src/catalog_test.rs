use super::*;

fn raw(id: u64, category: &str) -> RawProduct {
    RawProduct {
        id,
        title: format!("Product {id}"),
        description: format!("Description of product {id}"),
        price: "19.99".parse().unwrap(),
        image: format!("https://img.example/{id}.jpg"),
        category: category.to_owned(),
    }
}

/// Deliberate mix of four categories, interleaved.
fn mixed_records() -> Vec<RawProduct> {
    vec![
        raw(1, "men's clothing"),
        raw(2, "electronics"),
        raw(3, "jewelery"),
        raw(4, "electronics"),
        raw(5, "women's clothing"),
        raw(6, "men's clothing"),
        raw(7, "electronics"),
    ]
}

fn always_stocked() -> impl FnMut() -> bool {
    || true
}

fn loaded_store() -> CatalogStore {
    let mut store = CatalogStore::new();
    store.load(mixed_records(), &mut always_stocked());
    store
}

fn ids(products: &[&Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

// -----------------------------------------------------------------------
// load
// -----------------------------------------------------------------------

#[test]
fn new_store_is_empty_and_unfiltered() {
    let store = CatalogStore::new();
    assert!(store.is_empty());
    assert_eq!(store.active_filter(), &CategoryFilter::All);
    assert!(store.visible_products().is_empty());
}

#[test]
fn load_keeps_record_order() {
    let store = loaded_store();
    let loaded: Vec<u64> = store.all_products().iter().map(|p| p.id).collect();
    assert_eq!(loaded, [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn load_draws_stock_once_per_product_in_order() {
    let mut script = [true, false, true, true, false, true, true].into_iter();
    let mut draw = move || script.next().expect("one draw per product");
    let mut store = CatalogStore::new();
    store.load(mixed_records(), &mut draw);

    let stocked: Vec<bool> = store.all_products().iter().map(|p| p.in_stock).collect();
    assert_eq!(stocked, [true, false, true, true, false, true, true]);
}

#[test]
fn second_load_replaces_instead_of_merging() {
    let mut store = loaded_store();
    let count = store.load(vec![raw(10, "electronics")], &mut always_stocked());
    assert_eq!(count, 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.all_products()[0].id, 10);
}

#[test]
fn load_after_set_filter_resets_to_all() {
    let mut store = loaded_store();
    assert!(store.set_filter(CategoryFilter::category("electronics")));

    store.load(mixed_records(), &mut always_stocked());

    assert_eq!(store.active_filter(), &CategoryFilter::All);
    assert_eq!(store.visible_products().len(), 7);
}

#[test]
fn load_skips_duplicate_ids() {
    let mut store = CatalogStore::new();
    let mut draws = 0;
    let mut counting = || {
        draws += 1;
        true
    };
    let count = store.load(
        vec![raw(1, "electronics"), raw(1, "jewelery"), raw(2, "jewelery")],
        &mut counting,
    );
    assert_eq!(count, 2);
    assert_eq!(draws, 2);
    assert_eq!(store.product(1).unwrap().category, "electronics");
}

#[test]
fn load_skips_negative_prices() {
    let mut store = CatalogStore::new();
    let mut bad = raw(3, "electronics");
    bad.price = "-1.00".parse().unwrap();
    let count = store.load(vec![raw(1, "electronics"), bad], &mut always_stocked());
    assert_eq!(count, 1);
    assert!(store.product(3).is_none());
}

#[test]
fn load_skips_zero_prices_without_drawing() {
    let mut store = CatalogStore::new();
    let mut free = raw(4, "jewelery");
    free.price = "0.00".parse().unwrap();
    let mut draws = 0;
    let mut counting = || {
        draws += 1;
        true
    };
    let count = store.load(vec![free, raw(5, "jewelery")], &mut counting);
    assert_eq!(count, 1);
    assert_eq!(draws, 1);
    assert!(store.product(4).is_none());
    assert!(store.product(5).is_some());
}

// -----------------------------------------------------------------------
// filtering
// -----------------------------------------------------------------------

#[test]
fn all_filter_returns_every_product_in_order() {
    let store = loaded_store();
    assert_eq!(ids(&store.visible_products()), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn category_filter_returns_exact_matches_in_order() {
    let mut store = loaded_store();
    assert!(store.set_filter(CategoryFilter::category("electronics")));

    let visible = store.visible_products();
    assert_eq!(ids(&visible), [2, 4, 7]);
    assert!(visible.iter().all(|p| p.category == "electronics"));
}

#[test]
fn switching_back_to_all_restores_full_view() {
    let mut store = loaded_store();
    store.set_filter(CategoryFilter::category("jewelery"));
    assert_eq!(ids(&store.visible_products()), [3]);

    assert!(store.set_filter(CategoryFilter::All));
    assert_eq!(ids(&store.visible_products()), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn unknown_category_is_ignored() {
    let mut store = loaded_store();
    store.set_filter(CategoryFilter::category("electronics"));

    assert!(!store.set_filter(CategoryFilter::category("garden")));
    assert_eq!(
        store.active_filter(),
        &CategoryFilter::category("electronics")
    );
}

#[test]
fn visible_products_track_the_full_set() {
    let mut store = loaded_store();
    store.set_filter(CategoryFilter::category("electronics"));
    let before = store.visible_products().len();
    assert_eq!(before, 3);

    // A reload with fewer electronics must be reflected without any
    // separate refresh step.
    store.load(vec![raw(20, "electronics")], &mut always_stocked());
    store.set_filter(CategoryFilter::category("electronics"));
    assert_eq!(ids(&store.visible_products()), [20]);
}

// -----------------------------------------------------------------------
// categories and captions
// -----------------------------------------------------------------------

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let store = loaded_store();
    assert_eq!(
        store.categories(),
        ["men's clothing", "electronics", "jewelery", "women's clothing"]
    );
}

#[test]
fn filters_start_with_all() {
    let store = loaded_store();
    let filters = store.filters();
    assert_eq!(filters.len(), 5);
    assert_eq!(filters[0], CategoryFilter::All);
    assert_eq!(filters[2], CategoryFilter::category("electronics"));
}

#[test]
fn active_button_follows_filter() {
    let mut store = loaded_store();
    assert!(store.is_active(&CategoryFilter::All));
    store.set_filter(CategoryFilter::category("jewelery"));
    assert!(store.is_active(&CategoryFilter::category("jewelery")));
    assert!(!store.is_active(&CategoryFilter::All));
}

#[test]
fn captions_match_filter_buttons() {
    assert_eq!(CategoryFilter::All.caption(), "All Products");
    assert_eq!(
        CategoryFilter::category("men's clothing").caption(),
        "Men's clothing"
    );
    assert_eq!(CategoryFilter::category("").caption(), "");
}

#[test]
fn filter_parses_all_case_insensitively() {
    assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!(
        "electronics".parse::<CategoryFilter>().unwrap(),
        CategoryFilter::category("electronics")
    );
}
