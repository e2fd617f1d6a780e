//! Grocer CLI - grocery order ledger
//!
//! Usage: grocer <COMMAND>
//!
//! Commands:
//!   list    List all orders in the orders file
//!   show    Show the products of one order
//!   total   Show the tax-inclusive total of one order

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use grocer::{load_or_default, OrderStore};

/// Grocer - grocery order ledger
#[derive(Parser, Debug)]
#[command(name = "grocer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    /// Path to the orders file (overrides grocer.toml and GROCER_ORDERS_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all orders in the orders file
    List,

    /// Show the products of one order
    Show {
        /// Order id to look up
        id: u64,
    },

    /// Show the tax-inclusive total of one order
    Total {
        /// Order id to look up
        id: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = open_store(cli.file)?;

    match cli.command {
        Commands::List => cmd_list(&store, cli.json),
        Commands::Show { id } => cmd_show(&store, id, cli.json),
        Commands::Total { id } => cmd_total(&store, id, cli.json),
    }
}

/// Resolve the orders file: --file flag, then GROCER_ORDERS_FILE, then
/// grocer.toml in the current directory, then the built-in default.
fn open_store(file: Option<PathBuf>) -> Result<OrderStore> {
    if let Some(path) = file {
        return Ok(OrderStore::new(path));
    }

    let root = std::env::current_dir()?;
    let config = load_or_default(&root);
    Ok(OrderStore::new(config.orders.file))
}

fn cmd_list(store: &OrderStore, json: bool) -> Result<()> {
    let orders = store.all()?;

    if json {
        for order in &orders {
            let output = serde_json::json!({
                "event": "order",
                "id": order.id,
                "products": order.products.len(),
                "total": order.total(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        println!("🧾 Orders: {}", store.path().display());
        println!();
        for order in &orders {
            println!(
                "  #{:<6} {:>2} products  total {}",
                order.id,
                order.products.len(),
                order.total()
            );
        }
        println!();
        println!("{} orders", orders.len());
    }

    Ok(())
}

fn cmd_show(store: &OrderStore, id: u64, json: bool) -> Result<()> {
    let products = store.find(id)?;

    if json {
        let output = serde_json::json!({
            "event": "show",
            "id": id,
            "found": products.is_some(),
            "products": &products,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match &products {
            Some(products) => {
                println!("🧾 Order #{}", id);
                for (name, price) in products {
                    println!("  {:<20} {}", name, price);
                }
            }
            None => println!("✗ No order with id {}", id),
        }
    }

    if products.is_none() {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_total(store: &OrderStore, id: u64, json: bool) -> Result<()> {
    let order = store.all()?.into_iter().find(|o| o.id == id);

    if json {
        let output = serde_json::json!({
            "event": "total",
            "id": id,
            "found": order.is_some(),
            "total": order.as_ref().map(|o| o.total()),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match &order {
            Some(order) => println!("{}", order.total()),
            None => println!("✗ No order with id {}", id),
        }
    }

    if order.is_none() {
        std::process::exit(1);
    }

    Ok(())
}
