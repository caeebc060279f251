//! # Seed Data Generator
//!
//! Populates the database with sample catalog data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p aurum-db --bin seed
//!
//! # Custom product count and database path
//! cargo run -p aurum-db --bin seed -- --count 200 --db ./data/aurum.db
//! ```
//!
//! Generates jewellery products across categories (Gold, Silver, Diamond,
//! Platinum) with realistic weights, purities, prices and stock levels,
//! plus a handful of sample customers.

use std::env;

use rand::Rng;
use tracing_subscriber::EnvFilter;

use aurum_core::{Money, NewCustomer, NewProduct};
use aurum_db::{Database, DbConfig};

/// Category → (item names, purities, price range in paise, weight range in grams)
const CATEGORIES: &[(&str, &[&str], &[&str], (i64, i64), (f64, f64))] = &[
    (
        "Gold",
        &[
            "Ring", "Band", "Chain", "Necklace", "Bangle", "Bracelet", "Earrings", "Pendant",
            "Nose Pin", "Anklet", "Mangalsutra", "Coin",
        ],
        &["24K", "22K", "18K"],
        (1_500_000, 25_000_000),
        (1.0, 40.0),
    ),
    (
        "Silver",
        &[
            "Chain", "Anklet", "Bracelet", "Toe Ring", "Coin", "Idol", "Payal", "Kada",
        ],
        &["999", "925"],
        (80_000, 1_200_000),
        (5.0, 120.0),
    ),
    (
        "Diamond",
        &[
            "Solitaire Ring", "Stud Earrings", "Pendant", "Nose Pin", "Tennis Bracelet",
        ],
        &["VVS1", "VS1", "SI1"],
        (2_500_000, 80_000_000),
        (0.5, 8.0),
    ),
    (
        "Platinum",
        &["Ring", "Band", "Chain", "Bracelet"],
        &["PT950", "PT900"],
        (3_000_000, 30_000_000),
        (2.0, 25.0),
    ),
];

/// Sample customers.
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Asha Verma", "asha@example.com", "98200 10001"),
    ("Rohan Mehta", "rohan@example.com", "98200 10002"),
    ("Priya Iyer", "priya@example.com", "98200 10003"),
    ("Sameer Khan", "sameer@example.com", "98200 10004"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./aurum_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Aurum Billing Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./aurum_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Aurum Billing Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating customers...");
    for (name, email, phone) in CUSTOMERS {
        db.customers()
            .create(&NewCustomer {
                name: name.to_string(),
                email: Some(email.to_string()),
                phone: Some(phone.to_string()),
                address: None,
                gst_number: None,
            })
            .await?;
    }
    println!("✓ Generated {} customers", CUSTOMERS.len());

    println!();
    println!("Generating products...");

    let mut generated = 0;
    'outer: loop {
        for (category, items, purities, price_range, weight_range) in CATEGORIES {
            for item in *items {
                if generated >= count {
                    break 'outer;
                }

                let product = generate_product(category, item, purities, *price_range, *weight_range);
                if let Err(e) = db.products().create(&product).await {
                    eprintln!("Failed to insert {}: {}", product.name, e);
                    continue;
                }

                generated += 1;
            }
        }
    }

    println!("✓ Generated {} products", generated);

    let low_stock = db
        .reports()
        .inventory_report()
        .await?
        .into_iter()
        .filter(|row| row.is_low_stock())
        .count();
    println!("  {} of them start below the low-stock threshold", low_stock);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with randomized but plausible data.
fn generate_product(
    category: &str,
    item: &str,
    purities: &[&str],
    (price_min, price_max): (i64, i64),
    (weight_min, weight_max): (f64, f64),
) -> NewProduct {
    let mut rng = rand::rng();

    let purity = purities[rng.random_range(0..purities.len())];
    let weight = rng.random_range(weight_min..weight_max);
    let price = rng.random_range(price_min..=price_max);
    // Round to whole rupees so seeded prices look hand-entered.
    let price = price - price % 100;
    let stock = rng.random_range(0..=20);

    NewProduct {
        name: format!("{category} {item}"),
        description: Some(format!(
            "{} {} {}",
            purity,
            category.to_lowercase(),
            item.to_lowercase()
        )),
        category: Some(category.to_string()),
        weight: Some((weight * 10.0).round() / 10.0),
        purity: Some(purity.to_string()),
        price: Money::from_paise(price),
        stock_quantity: stock,
    }
}
