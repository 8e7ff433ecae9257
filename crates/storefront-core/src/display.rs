//! Text shown on a product card.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::PricingError;
use crate::pricing::{round_price, PriceAdjustment, ResolvedPrice};
use crate::products::Product;
use crate::variant::VariantState;

pub const TITLE_MAX_CHARS: usize = 50;
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// `$` followed by exactly two decimals, e.g. `$49.88`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", round_price(amount))
}

/// Cuts `title` to [`TITLE_MAX_CHARS`] characters, appending `...` only when
/// something was cut.
#[must_use]
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let head: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        title.to_owned()
    }
}

/// First [`DESCRIPTION_PREVIEW_CHARS`] characters, always followed by `...`.
#[must_use]
pub fn description_preview(description: &str) -> String {
    let head: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Badge shown next to a non-neutral price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBadge {
    Save(Decimal),
    Upcharge(Decimal),
}

impl PriceBadge {
    #[must_use]
    pub fn for_price(resolved: &ResolvedPrice) -> Option<Self> {
        match resolved.adjustment() {
            PriceAdjustment::Discounted(amount) => Some(PriceBadge::Save(amount)),
            PriceAdjustment::Upcharged(amount) => Some(PriceBadge::Upcharge(amount)),
            PriceAdjustment::Neutral => None,
        }
    }
}

impl fmt::Display for PriceBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceBadge::Save(amount) => write!(f, "Save {}", format_price(*amount)),
            PriceBadge::Upcharge(amount) => write!(f, "+{}", format_price(*amount)),
        }
    }
}

/// What the card's action area offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    AddToCart,
    Stepper { quantity: u32 },
    OutOfStock,
}

/// Everything a product card displays for one product and its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    /// Untruncated title, for hover text.
    pub full_title: String,
    pub description: String,
    pub image: String,
    pub price: String,
    /// Struck-through base price; only set when a badge is shown.
    pub original_price: Option<String>,
    pub badge: Option<PriceBadge>,
    pub out_of_stock: bool,
    pub action: CardAction,
    pub detail_path: String,
}

impl CardView {
    /// # Errors
    ///
    /// Returns [`PricingError`] if the selection's price cannot be resolved.
    pub fn build(product: &Product, state: &VariantState) -> Result<Self, PricingError> {
        let resolved = state.resolved_price(product)?;
        let badge = PriceBadge::for_price(&resolved);
        let action = if !product.in_stock {
            CardAction::OutOfStock
        } else if state.shows_stepper() {
            CardAction::Stepper {
                quantity: state.pending_quantity(),
            }
        } else {
            CardAction::AddToCart
        };

        Ok(Self {
            title: truncate_title(&product.title),
            full_title: product.title.clone(),
            description: description_preview(&product.description),
            image: product.image.clone(),
            price: format_price(resolved.price),
            original_price: badge.map(|_| format_price(product.base_price)),
            badge,
            out_of_stock: !product.in_stock,
            action,
            detail_path: product.detail_path(),
        })
    }
}
