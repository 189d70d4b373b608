//! Angry Store CLI - Render storefront pages and manage catalog storage.
//!
//! # Usage
//!
//! ```bash
//! # Render the men's page from stored products
//! angry-store page /men.html --document site/men.html --out site/men.html
//!
//! # Render the catalog, filtered and sorted
//! angry-store catalog --category shoes --sort price-low
//!
//! # Render featured products only
//! angry-store catalog --featured --limit 4
//!
//! # Add an entry to the cart
//! angry-store cart add -n "Black Hoodie" -p 450 -i img/hoodie.jpg
//!
//! # Replace the stored product list
//! angry-store seed products.json
//! ```
//!
//! Configuration is read from the environment (see
//! `angry_store_storefront::config`). Logs go to stderr so rendered markup can
//! be piped from stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use angry_store_storefront::StorefrontConfig;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "angry-store")]
#[command(author, version, about = "Angry Store catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a storefront page from the stored product list
    Page {
        /// Page location, as a path or URL (e.g. `/men.html`)
        location: String,

        /// HTML document containing the product container
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Write the rendered document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Query the catalog resources and render catalog cards
    Catalog(commands::catalog::CatalogArgs),
    /// Manage the stored cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Replace the stored product list with the products in a JSON file
    Seed {
        /// JSON file holding a product array or `{ "products": [...] }`
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Append an entry to the cart
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,

        /// Product image path
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Print the cart as JSON
    List,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "angry_store_storefront=info,angry_store_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let sentry_guard = init_sentry(&config);
    init_tracing();

    let result = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        // Flush pending Sentry events before exiting
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Page {
            location,
            document,
            out,
        } => commands::page::render(config, &location, document.as_deref(), out.as_deref()).await?,
        Commands::Catalog(args) => commands::catalog::run(config, &args).await?,
        Commands::Cart { action } => match action {
            CartAction::Add { name, price, image } => {
                commands::cart::add(config, name, price, image)?;
            }
            CartAction::List => commands::cart::list(config).await?,
        },
        Commands::Seed { file } => commands::seed::products(config, &file).await?,
    }
    Ok(())
}
