//! Storefront CLI - Browse the product catalog from the terminal.
//!
//! Commands:
//! - `storefront home` - Categories, featured products and new arrivals
//! - `storefront categories` - List categories
//! - `storefront category <slug>` - Show a category and its products
//! - `storefront products` - Filtered, paged product listing
//! - `storefront product <slug>` - Product details and related products
//! - `storefront search <query>` - Search visible products

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CategoryArgs, HomeArgs, ProductArgs, ProductsArgs, SearchArgs};
use context::StoreOverrides;

/// Storefront CLI - Browse the car accessories catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Store mode (mock or remote)
    #[arg(long, global = true)]
    mode: Option<String>,

    /// Catalog API base URL (remote mode)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Simulated mock latency in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page selection
    Home(HomeArgs),

    /// List all categories
    Categories,

    /// Show a category and its products
    Category(CategoryArgs),

    /// List products with filters
    Products(ProductsArgs),

    /// Show a product
    Product(ProductArgs),

    /// Search visible products
    Search(SearchArgs),
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "storefront=debug,storefront_data=debug"
    } else {
        "storefront=info,storefront_data=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let overrides = StoreOverrides {
        mode: cli.mode,
        base_url: cli.base_url,
        delay_ms: cli.delay_ms,
    };

    let ctx = match context::Context::load(cli.config.as_deref(), &overrides, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    tracing::debug!(store = ctx.service.store_name(), mode = %ctx.config.store.mode, "context ready");

    // Execute command
    let result = match cli.command {
        Commands::Home(args) => commands::home::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Category(args) => commands::category::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
