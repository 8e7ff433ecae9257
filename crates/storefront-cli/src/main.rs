mod commands;

use std::sync::PoisonError;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Browse the product catalog, price variants and compose cart lines")]
struct Cli {
    /// Seed for the in-stock draw, for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List visible products with their default-variant price.
    List {
        /// Only show this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the category filters in first-seen order.
    Categories,
    /// Show the price of one product variant.
    Price {
        id: u64,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Add a product variant to a cart and print the emitted lines as JSON.
    Add {
        id: u64,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, url = %config.catalog_url, "storefront-cli starting");

    let store = commands::load_catalog(&config, cli.seed).await?;
    let store = store.into_inner().unwrap_or_else(PoisonError::into_inner);

    let output = match cli.command {
        Commands::List { category } => commands::render_list(store, category.as_deref())?,
        Commands::Categories => commands::render_categories(&store),
        Commands::Price { id, size, color } => {
            commands::render_price(&store, id, size.as_deref(), color.as_deref())?
        }
        Commands::Add {
            id,
            size,
            color,
            times,
        } => commands::render_add(&store, id, size.as_deref(), color.as_deref(), times)?,
    };

    for line in output {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests;
