//! Command handlers for the CLI.
//!
//! Each handler renders its output as lines so `main` decides where they go.

use std::sync::RwLock;

use storefront_client::{CatalogClient, CatalogLoader, LoadOutcome, Mount};
use storefront_core::display::format_price;
use storefront_core::{
    AppConfig, CardAction, CardView, CartBridge, CartLineCandidate, CatalogStore, CategoryFilter,
    Color, PriceBadge, Product, RandomStock, Size, StockDraw, VariantSelection, VariantState,
};

/// Runs one catalog load against the configured endpoint.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the fetch fails.
pub(crate) async fn load_catalog(
    config: &AppConfig,
    seed: Option<u64>,
) -> anyhow::Result<RwLock<CatalogStore>> {
    let client = CatalogClient::new(
        &config.catalog_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let mut stock: Box<dyn StockDraw> = match seed {
        Some(seed) => Box::new(RandomStock::seeded(seed, config.stock_probability)),
        None => Box::new(RandomStock::new(config.stock_probability)),
    };

    let store = RwLock::new(CatalogStore::new());
    let mut loader = CatalogLoader::new(client);
    let mount = Mount::new();

    match loader
        .load_into(&store, stock.as_mut(), &mount.liveness())
        .await
    {
        LoadOutcome::Loaded { .. } => Ok(store),
        LoadOutcome::Failed(e) => Err(anyhow::Error::new(e).context("failed to load product catalog")),
        LoadOutcome::Cancelled => anyhow::bail!("catalog load was cancelled"),
    }
}

fn find_product(store: &CatalogStore, id: u64) -> anyhow::Result<&Product> {
    store
        .product(id)
        .ok_or_else(|| anyhow::anyhow!("product {id} not found"))
}

/// Default selection with optional size code and color name overrides.
pub(crate) fn selection_for(
    product: &Product,
    size: Option<&str>,
    color: Option<&str>,
) -> anyhow::Result<VariantSelection> {
    let mut selection = product.default_selection();
    if let Some(code) = size {
        selection.size = code.parse::<Size>()?;
    }
    if let Some(name) = color {
        selection.color = name.parse::<Color>()?;
    }
    Ok(selection)
}

fn card_line(card: &CardView) -> String {
    let price = match &card.original_price {
        Some(original) => format!("{} (was {original})", card.price),
        None => card.price.clone(),
    };
    let action = match card.action {
        CardAction::OutOfStock => "  [Out of Stock]",
        CardAction::AddToCart | CardAction::Stepper { .. } => "",
    };
    format!("{:<12} {:>10}  {}{action}", card.detail_path, price, card.title)
}

pub(crate) fn render_list(
    mut store: CatalogStore,
    category: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    if let Some(name) = category {
        let filter: CategoryFilter = name.parse()?;
        if !store.set_filter(filter) {
            anyhow::bail!("unknown category '{name}'");
        }
    }

    let mut lines = vec![format!("== {} ==", store.active_filter().caption())];
    for product in store.visible_products() {
        let state = VariantState::for_product(product);
        lines.push(card_line(&CardView::build(product, &state)?));
    }
    Ok(lines)
}

pub(crate) fn render_categories(store: &CatalogStore) -> Vec<String> {
    store
        .filters()
        .iter()
        .map(|filter| {
            let marker = if store.is_active(filter) { '*' } else { ' ' };
            format!("{marker} {:<20} {filter}", filter.caption())
        })
        .collect()
}

pub(crate) fn render_price(
    store: &CatalogStore,
    id: u64,
    size: Option<&str>,
    color: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    let product = find_product(store, id)?;
    let selection = selection_for(product, size, color)?;
    let resolved = product.resolve_price(selection)?;

    let mut lines = vec![
        product.title.clone(),
        format!(
            "  size {}, color {}",
            selection.size.option_label(),
            selection.color.option_label()
        ),
    ];
    let price = format_price(resolved.price);
    match PriceBadge::for_price(&resolved) {
        Some(badge) => lines.push(format!(
            "  {price} (was {}) {badge}",
            format_price(resolved.base_price)
        )),
        None => lines.push(format!("  {price}")),
    }
    if !product.in_stock {
        lines.push("  Out of Stock".to_owned());
    }
    Ok(lines)
}

pub(crate) fn render_add(
    store: &CatalogStore,
    id: u64,
    size: Option<&str>,
    color: Option<&str>,
    times: u32,
) -> anyhow::Result<Vec<String>> {
    let product = find_product(store, id)?;
    let selection = selection_for(product, size, color)?;

    let mut state = VariantState::for_product(product);
    state.set_size(selection.size);
    state.set_color(selection.color);

    let mut bridge = CartBridge::new(Vec::<CartLineCandidate>::new());
    for _ in 0..times {
        if !state.increment(product, &mut bridge)? {
            tracing::warn!(product_id = product.id, "product is out of stock, nothing added");
            break;
        }
    }

    let (lines, _notifier) = bridge.into_parts();
    lines
        .iter()
        .map(|line| serde_json::to_string(line).map_err(anyhow::Error::from))
        .collect()
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
