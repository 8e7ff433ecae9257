//! Composition of the outbound cart-add record.
//!
//! The cart's own storage and aggregation live outside this crate; the
//! bridge only decides *what* is sent and *when*.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::options::VariantSelection;
use crate::pricing::round_price;
use crate::products::Product;

/// Notification text sent after every successful add.
pub const ADDED_TO_CART: &str = "Added to cart";

/// One add-action's worth of cart data. Built per action, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCandidate {
    pub product_id: u64,
    pub title: String,
    pub image: String,
    pub category: String,
    pub base_price: Decimal,
    pub resolved_price: Decimal,
    pub selection: VariantSelection,
    /// Always 1; accumulating units is the cart's job.
    pub quantity_delta: u32,
}

impl CartLineCandidate {
    #[must_use]
    pub fn compose(product: &Product, selection: VariantSelection, resolved_price: Decimal) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            base_price: round_price(product.base_price),
            resolved_price,
            selection,
            quantity_delta: 1,
        }
    }
}

/// Receives cart-add events.
pub trait CartSink {
    fn add_line(&mut self, line: CartLineCandidate);
}

impl CartSink for Vec<CartLineCandidate> {
    fn add_line(&mut self, line: CartLineCandidate) {
        self.push(line);
    }
}

/// Fire-and-forget user notifications (toasts).
pub trait Notifier {
    fn success(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn success(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Emits notifications as `info` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&mut self, message: &str) {
        tracing::info!(text = message, "notification");
    }
}

/// Sends composed lines to the cart and confirms each one to the shopper.
#[derive(Debug, Default)]
pub struct CartBridge<C, N = TracingNotifier> {
    cart: C,
    notifier: N,
}

impl<C: CartSink> CartBridge<C, TracingNotifier> {
    #[must_use]
    pub fn new(cart: C) -> Self {
        Self::with_notifier(cart, TracingNotifier)
    }
}

impl<C: CartSink, N: Notifier> CartBridge<C, N> {
    #[must_use]
    pub fn with_notifier(cart: C, notifier: N) -> Self {
        Self { cart, notifier }
    }

    /// Emits one unit of `product` in `selection` at `resolved_price`.
    ///
    /// Returns `false` without touching either collaborator when the product
    /// is out of stock or the selection is not one of its options.
    pub fn compose_and_emit(
        &mut self,
        product: &Product,
        selection: VariantSelection,
        resolved_price: Decimal,
    ) -> bool {
        if !product.in_stock {
            tracing::debug!(product_id = product.id, "refusing cart add for out-of-stock product");
            return false;
        }
        if !product.variant_options.contains(selection) {
            tracing::debug!(product_id = product.id, %selection, "refusing cart add for unknown variant");
            return false;
        }

        let line = CartLineCandidate::compose(product, selection, resolved_price);
        tracing::debug!(
            product_id = line.product_id,
            %selection,
            price = %line.resolved_price,
            "cart add"
        );
        self.cart.add_line(line);
        self.notifier.success(ADDED_TO_CART);
        true
    }

    #[must_use]
    pub fn cart(&self) -> &C {
        &self.cart
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub fn into_parts(self) -> (C, N) {
        (self.cart, self.notifier)
    }
}
