//! # Seed / Reset Tool
//!
//! Puts a database back to the demo data.
//!
//! ## Usage
//! ```bash
//! # Reset the configured database
//! cargo run -p resto-store --bin seed
//!
//! # Specify database path
//! cargo run -p resto-store --bin seed -- --db ./data/restoflow.db
//!
//! # Use a specific config file
//! cargo run -p resto-store --bin seed -- --config ./store.toml
//! ```

use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use resto_store::{Database, Store, StoreConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,resto=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_help() {
    println!("RestoFlow Seed Tool");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -d, --db <PATH>       Database file path (overrides config)");
    println!("  -c, --config <PATH>   Config file path");
    println!("  -h, --help            Show this help message");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let mut db_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let mut config = StoreConfig::load(config_path)?;
    if let Some(path) = db_path {
        config.database_path = path;
    }

    println!("🌱 RestoFlow Seed Tool");
    println!("=====================");
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config.db_config()).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let mut store = Store::open_with(&db, config.clone()).await?;
    store.reset().await?;
    println!("✓ Reset to demo data");
    println!();

    for restaurant in store.restaurants().list() {
        let stats = store.stats(&restaurant.id)?;
        println!(
            "  {:<20} {:>2} dishes  {:>2} tables  {:>2} active orders  {}",
            restaurant.name,
            store.menu().for_restaurant(&restaurant.id).len(),
            stats.floor.total(),
            stats.active_orders,
            config.format_money(stats.revenue),
        );

        for order in &stats.recent_orders {
            println!("      {} {} {}", order.id, order.status, config.format_money(order.total_amount));
        }
    }

    db.close().await;
    info!("Seed complete");
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
