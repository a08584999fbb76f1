//! # Catalog Browser
//!
//! Drives a `PizzaStore` against a running catalog service and prints what
//! the product grid and cart would show.
//!
//! ## Usage
//! ```bash
//! # Full catalog, sorted by the configured default (rating)
//! cargo run -p pizzeria-store --bin browse
//!
//! # One category
//! cargo run -p pizzeria-store --bin browse -- --category 2
//!
//! # Explicit sort and config file
//! cargo run -p pizzeria-store --bin browse -- --sort price --config ./pizzeria.toml
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use pizzeria_store::{telemetry, CatalogClient, PizzaStore, StoreConfig, StoreResult};
use tracing::{error, info, warn};

struct Args {
    config: Option<PathBuf>,
    category: Option<u32>,
    sort: Option<String>,
}

fn print_help() {
    println!("Pizzeria Catalog Browser");
    println!();
    println!("Usage: browse [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>     Config file (default: platform config dir)");
    println!("  -k, --category <N>      Show one category instead of the sorted catalog");
    println!("  -s, --sort <FIELD>      rating | name | price (default: from config)");
    println!("  -h, --help              Show this help message");
}

/// Returns `Ok(None)` when `--help` was requested.
fn parse_args<I>(args: I) -> Result<Option<Args>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args {
        config: None,
        category: None,
        sort: None,
    };

    let mut args = args.into_iter().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" | "-c" => {
                let value = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--category" | "-k" => {
                let value = args.next().ok_or("--category needs a number")?;
                let category = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid category '{value}': expected a number"))?;
                parsed.category = Some(category);
            }
            "--sort" | "-s" => {
                parsed.sort = Some(args.next().ok_or("--sort needs a field")?);
            }
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            other => return Err(format!("Unknown option '{other}'")),
        }
    }

    Ok(Some(parsed))
}

async fn browse(args: Args, config: &StoreConfig) -> StoreResult<()> {
    let catalog = CatalogClient::from_config(config)?;
    let mut store = PizzaStore::new();

    match args.category {
        Some(category) => store.load_by_category(&catalog, category).await?,
        None => {
            let sort = args
                .sort
                .unwrap_or_else(|| config.default_sort().as_str().to_string());
            store.load_sorted(&catalog, &sort, 0).await?;
        }
    }

    let selection = store.selection();
    println!(
        "Catalog: {}  (category: {}, sort: {})",
        catalog.base_url(),
        selection
            .category
            .map_or_else(|| "all".to_string(), |c| c.to_string()),
        selection.sort_by.name
    );
    println!("{:>4}  {:<28} {:>8} {:>7}", "id", "name", "price", "rating");
    for product in store.products() {
        println!(
            "{:>4}  {:<28} {:>8} {:>7}",
            product.id, product.name, product.price, product.rating
        );
    }

    // Put one of each of the first two pizzas in the cart, plus a repeat.
    let picks: Vec<_> = store.products().iter().take(2).cloned().collect();
    for product in &picks {
        store.add_to_cart(product);
    }
    if let Some(first) = picks.first() {
        store.add_to_cart(first);
    }

    let totals = store.totals();
    info!(
        lines = totals.item_count,
        pizzas = totals.total_count,
        total = %totals.total_price,
        "Sample cart"
    );
    println!();
    for entry in store.line_items() {
        println!(
            "  {} × {:<24} {:>8}",
            entry.count,
            entry.product.name,
            store.line_total(&entry)
        );
    }
    println!(
        "  {} pizzas, total {}",
        totals.total_count, totals.total_price
    );

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args(env::args()) {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    // Logging comes from the config, so a load failure is reported only
    // after the subscriber is installed.
    let (config, load_failure) = StoreConfig::load_or_fallback(args.config.clone());
    if let Err(e) = telemetry::init_tracing(config.log_filter()) {
        eprintln!("{e}");
    }
    if let Some(e) = load_failure {
        warn!(error = %e, "Store config unusable, using defaults");
        eprintln!("warning: {e}; using default config");
    }

    info!(url = %config.catalog.base_url, "Starting catalog browser");

    match browse(args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Catalog load failed");
            ExitCode::FAILURE
        }
    }
}
