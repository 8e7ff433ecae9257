//! Per-card selection state.

use crate::cart::{CartBridge, CartSink, Notifier};
use crate::error::PricingError;
use crate::options::{Color, Size, VariantSelection};
use crate::pricing::ResolvedPrice;
use crate::products::Product;

/// Size, color and pending quantity for one displayed product.
///
/// Out-of-stock products get a disabled state: setters and
/// [`increment`](Self::increment) do nothing, while
/// [`decrement`](Self::decrement) still works on a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantState {
    product_id: u64,
    selection: VariantSelection,
    pending_quantity: u32,
    enabled: bool,
}

impl VariantState {
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            selection: product.default_selection(),
            pending_quantity: 0,
            enabled: product.in_stock,
        }
    }

    #[must_use]
    pub fn product_id(&self) -> u64 {
        self.product_id
    }

    #[must_use]
    pub fn selection(&self) -> VariantSelection {
        self.selection
    }

    #[must_use]
    pub fn pending_quantity(&self) -> u32 {
        self.pending_quantity
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `true` once something was added: the card swaps its "Add to Cart"
    /// button for a `- n +` stepper.
    #[must_use]
    pub fn shows_stepper(&self) -> bool {
        self.enabled && self.pending_quantity > 0
    }

    pub fn set_size(&mut self, size: Size) {
        if self.enabled {
            self.selection.size = size;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        if self.enabled {
            self.selection.color = color;
        }
    }

    /// Sets the size from its dropdown code. Returns `false` for an unknown
    /// code or a disabled card, leaving the selection untouched.
    pub fn select_size(&mut self, code: &str) -> bool {
        match code.parse::<Size>() {
            Ok(size) if self.enabled => {
                self.selection.size = size;
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::debug!(product_id = self.product_id, error = %e, "ignoring size selection");
                false
            }
        }
    }

    /// Sets the color from its name; same rules as [`select_size`](Self::select_size).
    pub fn select_color(&mut self, name: &str) -> bool {
        match name.parse::<Color>() {
            Ok(color) if self.enabled => {
                self.selection.color = color;
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::debug!(product_id = self.product_id, error = %e, "ignoring color selection");
                false
            }
        }
    }

    /// Price for the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvariantBreach`] when the base price is corrupt.
    pub fn resolved_price(&self, product: &Product) -> Result<ResolvedPrice, PricingError> {
        product.resolve_price(self.selection)
    }

    /// Adds one unit of the current variant to the cart and bumps the
    /// pending quantity. Returns `Ok(false)` without side effects when the
    /// card is disabled, `product` is not the card's product, or the bridge
    /// refuses the line.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if the current price cannot be resolved; the
    /// quantity is left unchanged in that case.
    pub fn increment<C, N>(
        &mut self,
        product: &Product,
        bridge: &mut CartBridge<C, N>,
    ) -> Result<bool, PricingError>
    where
        C: CartSink,
        N: Notifier,
    {
        if !self.enabled {
            return Ok(false);
        }
        if product.id != self.product_id {
            tracing::warn!(
                card_product_id = self.product_id,
                product_id = product.id,
                "increment called with a different product"
            );
            return Ok(false);
        }

        let resolved = self.resolved_price(product)?;
        if !bridge.compose_and_emit(product, self.selection, resolved.price) {
            return Ok(false);
        }
        self.pending_quantity = self.pending_quantity.saturating_add(1);
        Ok(true)
    }

    /// Local only: the cart keeps whatever was already added.
    pub fn decrement(&mut self) {
        self.pending_quantity = self.pending_quantity.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "variant_test.rs"]
mod tests;
