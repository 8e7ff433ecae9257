//! Loaded product set plus the active category filter.
//!
//! The visible subset is never stored: [`CatalogStore::visible_products`]
//! projects it from the full set on every call.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::products::{Product, RawProduct, StockDraw};

/// Which slice of the catalog is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn category(name: impl Into<String>) -> Self {
        CategoryFilter::Category(name.into())
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => product.category == *name,
        }
    }

    /// Filter button caption: `"All Products"`, or the category with its
    /// first letter upper-cased (`"men's clothing"` -> `"Men's clothing"`).
    #[must_use]
    pub fn caption(&self) -> String {
        match self {
            CategoryFilter::All => "All Products".to_string(),
            CategoryFilter::Category(name) => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Category(name) => f.write_str(name),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `"all"` (any case) selects everything; anything else names a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Category(trimmed.to_owned()))
        }
    }
}

/// Owns the loaded products and the active filter.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    filter: CategoryFilter,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog with `records` and resets the filter to
    /// [`CategoryFilter::All`]. Returns the number of products kept.
    ///
    /// Each kept record draws its stock state from `stock` once, in record
    /// order. Records repeating an earlier id, or without a positive price,
    /// are skipped with a warning and do not consume a draw.
    pub fn load<S>(&mut self, records: Vec<RawProduct>, stock: &mut S) -> usize
    where
        S: StockDraw + ?Sized,
    {
        let mut seen = HashSet::with_capacity(records.len());
        let mut products = Vec::with_capacity(records.len());

        for raw in records {
            if raw.price <= Decimal::ZERO {
                tracing::warn!(
                    product_id = raw.id,
                    price = %raw.price,
                    "skipping product without a positive price"
                );
                continue;
            }
            if !seen.insert(raw.id) {
                tracing::warn!(product_id = raw.id, "skipping duplicate product id");
                continue;
            }
            let in_stock = stock.draw_in_stock();
            products.push(Product::from_raw(raw, in_stock));
        }

        self.products = products;
        self.filter = CategoryFilter::All;
        tracing::debug!(count = self.products.len(), "catalog loaded");
        self.products.len()
    }

    /// Activates `filter`. Returns `false` (and leaves the filter unchanged)
    /// when it names a category absent from the loaded products.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> bool {
        if let CategoryFilter::Category(name) = &filter {
            if !self.products.iter().any(|p| p.category == *name) {
                tracing::warn!(category = %name, "ignoring filter for unknown category");
                return false;
            }
        }
        self.filter = filter;
        true
    }

    #[must_use]
    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Whether a filter button for `filter` renders as active.
    #[must_use]
    pub fn is_active(&self, filter: &CategoryFilter) -> bool {
        self.filter == *filter
    }

    /// All products in load order.
    #[must_use]
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the active filter, in load order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// `All` followed by one filter per observed category.
    #[must_use]
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories().into_iter().map(CategoryFilter::category))
            .collect()
    }

    #[must_use]
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
