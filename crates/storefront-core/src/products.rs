use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::options::{VariantOptions, VariantSelection, STANDARD_OPTIONS};
use crate::pricing::ResolvedPrice;

/// Probability that a freshly loaded product is marked in stock.
pub const DEFAULT_STOCK_PROBABILITY: f64 = 0.8;

/// A product record exactly as the catalog endpoint returns it.
///
/// Extra fields (e.g. `rating`) are ignored. `price` is accepted either as a
/// JSON number (`109.95`) or a decimal string (`"109.95"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    pub category: String,
}

/// A catalog product after load-time enhancement.
///
/// Products are handed out by [`crate::CatalogStore`] as shared references
/// only, so `base_price` and `in_stock` stay fixed for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Image URI.
    pub image: String,
    pub category: String,
    /// Price as received from the data source; every displayed price is
    /// derived from it.
    pub base_price: Decimal,
    pub in_stock: bool,
    pub variant_options: VariantOptions,
}

impl Product {
    /// Attaches stock state and the standard options to a raw record.
    #[must_use]
    pub fn from_raw(raw: RawProduct, in_stock: bool) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            image: raw.image,
            category: raw.category,
            base_price: raw.price,
            in_stock,
            variant_options: STANDARD_OPTIONS,
        }
    }

    /// Link target for the product detail page, e.g. `/product/7`.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id)
    }

    #[must_use]
    pub fn default_selection(&self) -> VariantSelection {
        self.variant_options.default_selection()
    }

    /// Resolves the displayed price for `selection`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvariantBreach`] when the base price is corrupt.
    pub fn resolve_price(&self, selection: VariantSelection) -> Result<ResolvedPrice, PricingError> {
        ResolvedPrice::resolve(self.base_price, selection)
    }
}

/// Source of the per-product in-stock decision made at load time.
///
/// Any `FnMut() -> bool` is a `StockDraw`, which lets tests script an exact
/// stocked/unstocked sequence.
pub trait StockDraw {
    fn draw_in_stock(&mut self) -> bool;
}

impl<F> StockDraw for F
where
    F: FnMut() -> bool,
{
    fn draw_in_stock(&mut self) -> bool {
        self()
    }
}

/// Independent Bernoulli draws backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomStock<R = ThreadRng> {
    rng: R,
    probability: f64,
}

impl RandomStock<ThreadRng> {
    /// Draws from the thread-local generator. `probability` is clamped to
    /// `[0, 1]`; a NaN probability falls back to the default.
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self::with_rng(rand::rng(), probability)
    }
}

impl RandomStock<StdRng> {
    /// Reproducible draws for a given seed.
    #[must_use]
    pub fn seeded(seed: u64, probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), probability)
    }
}

impl<R: Rng> RandomStock<R> {
    #[must_use]
    pub fn with_rng(rng: R, probability: f64) -> Self {
        let probability = if probability.is_nan() {
            DEFAULT_STOCK_PROBABILITY
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { rng, probability }
    }

    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomStock<ThreadRng> {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK_PROBABILITY)
    }
}

impl<R: Rng> StockDraw for RandomStock<R> {
    fn draw_in_stock(&mut self) -> bool {
        self.rng.random_bool(self.probability)
    }
}
