//! # Seed Data Generator
//!
//! Populates a store with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p storekeeper-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p storekeeper-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p storekeeper-db --bin seed -- --db ./data/storeKeeper.db
//! ```
//!
//! ## Generated Products
//! Shop-shelf staples across a few categories, each with a pack size:
//! - Grains (rice, garri, beans)
//! - Provisions (sugar, milk, noodles)
//! - Drinks (malt, soda, water)
//! - Household (soap, detergent, candles)
//!
//! Every row goes through the same form validator the screens use, so a
//! seeded store never holds a row the app could not have created.

use std::env;
use storekeeper_core::validation::validate_product_form;
use storekeeper_db::{Database, DbConfig};

const DEFAULT_COUNT: usize = 50;
const DEFAULT_DB_PATH: &str = "./storeKeeper.db";

/// Product names per category, with a base price in naira.
const CATEGORIES: &[(&str, &[(&str, u32)])] = &[
    (
        "Grains",
        &[
            ("Rice", 5000),
            ("Garri", 1500),
            ("Beans", 2200),
            ("Semovita", 1800),
            ("Yam Flour", 2500),
        ],
    ),
    (
        "Provisions",
        &[
            ("Sugar", 450),
            ("Peak Milk", 300),
            ("Indomie Noodles", 250),
            ("Tomato Paste", 200),
            ("Groundnut Oil", 1900),
        ],
    ),
    (
        "Drinks",
        &[
            ("Malt", 400),
            ("Coca-Cola", 300),
            ("Table Water", 100),
            ("Orange Juice", 900),
            ("Bournvita", 2100),
        ],
    ),
    (
        "Household",
        &[
            ("Bar Soap", 350),
            ("Detergent", 800),
            ("Candles", 150),
            ("Toilet Roll", 250),
            ("Matches", 50),
        ],
    ),
];

/// Pack sizes and the price multiplier in percent.
const SIZES: &[(&str, u32)] = &[("Small", 100), ("Medium", 180), ("Large", 320)];

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct SeedArgs {
    count: usize,
    db_path: String,
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Seed(SeedArgs),
    Help,
}

/// Parses arguments (without the program name).
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut seed = SeedArgs {
        count: DEFAULT_COUNT,
        db_path: String::from(DEFAULT_DB_PATH),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let value = iter.next().ok_or("--count needs a value")?;
                seed.count = value
                    .parse()
                    .map_err(|_| format!("invalid --count value '{}'", value))?;
            }
            "--db" | "-d" => {
                seed.db_path = iter.next().ok_or("--db needs a value")?.clone();
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(Command::Seed(seed))
}

fn print_help() {
    println!("StoreKeeper Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of products to generate (default: {DEFAULT_COUNT})");
    println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
    println!("  -h, --help         Show this help message");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let SeedArgs { count, db_path } = match parse_args(&args) {
        Ok(Command::Seed(seed)) => seed,
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            print_help();
            std::process::exit(2);
        }
    };

    println!("🌱 StoreKeeper Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ready");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for (seed, (category, name, base_price, size, multiplier)) in catalogue().take(count).enumerate() {
        let product_name = format!("{} {}", name, size);
        let quantity = 1 + (seed * 7) % 60;
        let price = f64::from(base_price * multiplier) / 100.0;

        let input = match validate_product_form(
            &product_name,
            &quantity.to_string(),
            &price.to_string(),
        ) {
            Ok(fields) => fields.with_image(None),
            Err(e) => {
                eprintln!("Skipping {} ({}): {}", product_name, category, e.user_message());
                continue;
            }
        };

        if let Err(e) = db.products().insert(&input).await {
            eprintln!("Failed to insert {}: {}", product_name, e);
            continue;
        }

        generated += 1;

        if generated % 25 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);
    println!("  Store now holds {} products", db.products().count().await?);

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Every category × name × size combination, cycling once exhausted.
fn catalogue() -> impl Iterator<Item = (&'static str, &'static str, u32, &'static str, u32)> {
    CATEGORIES
        .iter()
        .flat_map(|(category, products)| {
            products.iter().flat_map(move |(name, base_price)| {
                SIZES
                    .iter()
                    .map(move |(size, multiplier)| (*category, *name, *base_price, *size, *multiplier))
            })
        })
        .cycle()
}
