//! Variant pricing.
//!
//! A displayed price is always derived: `base x size factor x color factor`,
//! rounded once to cents with half-away-from-zero. All arithmetic is exact
//! decimal, so ties such as `49.875` round deterministically to `49.88`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::PricingError;
use crate::options::{Color, Size, VariantSelection};

/// Fractional digits kept on every displayed price.
pub const PRICE_SCALE: u32 = 2;

#[must_use]
pub fn size_factor(size: Size) -> Decimal {
    match size {
        Size::ExtraSmall => Decimal::new(90, 2),
        Size::Small => Decimal::new(95, 2),
        Size::Medium => Decimal::ONE,
        Size::Large => Decimal::new(110, 2),
        Size::ExtraLarge => Decimal::new(120, 2),
    }
}

#[must_use]
pub fn color_factor(color: Color) -> Decimal {
    match color {
        Color::Black => Decimal::ONE,
        Color::White => Decimal::new(105, 2),
        Color::Navy => Decimal::new(110, 2),
        Color::Gray => Decimal::new(108, 2),
    }
}

/// Rounds to cents, ties away from zero. The result always carries exactly
/// [`PRICE_SCALE`] fractional digits, so `100` becomes `100.00`.
#[must_use]
pub fn round_price(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded
}

/// Computes the displayed price for `base_price` under a size and color.
///
/// # Errors
///
/// Returns [`PricingError::InvariantBreach`] if the product overflows the
/// decimal range or the result is negative. Both mean the base price is
/// corrupt; the breach is logged at error level before returning.
pub fn compute_price(base_price: Decimal, size: Size, color: Color) -> Result<Decimal, PricingError> {
    let raw = base_price
        .checked_mul(size_factor(size))
        .and_then(|p| p.checked_mul(color_factor(color)))
        .ok_or_else(|| breach(base_price, "price computation overflowed"))?;

    let price = round_price(raw);
    if price < Decimal::ZERO {
        return Err(breach(base_price, format!("computed price {price} is negative")));
    }
    Ok(price)
}

fn breach(base_price: Decimal, reason: impl Into<String>) -> PricingError {
    let reason = reason.into();
    tracing::error!(%base_price, %reason, "price invariant breach");
    PricingError::InvariantBreach { base_price, reason }
}

/// How a resolved price relates to its base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceAdjustment {
    /// Below base; carries the savings.
    Discounted(Decimal),
    /// Above base; carries the surcharge.
    Upcharged(Decimal),
    Neutral,
}

/// A base price paired with the price derived from a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPrice {
    pub base_price: Decimal,
    pub price: Decimal,
}

impl ResolvedPrice {
    /// Resolves `selection` against `base_price`.
    ///
    /// # Errors
    ///
    /// Propagates [`PricingError`] from [`compute_price`].
    pub fn resolve(base_price: Decimal, selection: VariantSelection) -> Result<Self, PricingError> {
        let price = compute_price(base_price, selection.size, selection.color)?;
        Ok(Self { base_price, price })
    }

    /// Compares against the base price as displayed (in cents), so an
    /// unmodified selection is neutral whatever the base price's precision.
    #[must_use]
    pub fn adjustment(&self) -> PriceAdjustment {
        let base = round_price(self.base_price);
        let difference = round_price((self.price - base).abs());
        match self.price.cmp(&base) {
            std::cmp::Ordering::Less => PriceAdjustment::Discounted(difference),
            std::cmp::Ordering::Greater => PriceAdjustment::Upcharged(difference),
            std::cmp::Ordering::Equal => PriceAdjustment::Neutral,
        }
    }

    #[must_use]
    pub fn is_discounted(&self) -> bool {
        matches!(self.adjustment(), PriceAdjustment::Discounted(_))
    }

    #[must_use]
    pub fn is_upcharged(&self) -> bool {
        matches!(self.adjustment(), PriceAdjustment::Upcharged(_))
    }
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
