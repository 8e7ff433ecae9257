pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod options;
pub mod pricing;
pub mod products;
pub mod variant;

pub use app_config::{AppConfig, Environment};
pub use cart::{CartBridge, CartLineCandidate, CartSink, Notifier, TracingNotifier, ADDED_TO_CART};
pub use catalog::{CatalogStore, CategoryFilter};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_CATALOG_URL};
pub use display::{CardAction, CardView, PriceBadge};
pub use error::{ConfigError, OptionParseError, PricingError};
pub use options::{Color, Size, VariantOptions, VariantSelection, STANDARD_OPTIONS};
pub use pricing::{compute_price, PriceAdjustment, ResolvedPrice};
pub use products::{Product, RandomStock, RawProduct, StockDraw, DEFAULT_STOCK_PROBABILITY};
pub use variant::VariantState;
