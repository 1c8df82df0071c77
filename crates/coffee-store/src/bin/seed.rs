//! # Seed Data Generator
//!
//! Populates a data directory with a starter inventory and menu.
//!
//! ## Usage
//! ```bash
//! # Seed ./data
//! cargo run -p coffee-store --bin seed
//!
//! # Seed another directory
//! cargo run -p coffee-store --bin seed -- --dir ./demo-data
//! ```
//!
//! Existing records are left alone: the seed refuses to run when the
//! inventory already has entries.

use std::env;

use coffee_core::{InventoryItem, MenuIngredient, MenuItem};
use coffee_store::{DataStore, StoreConfig};

/// (ingredient_id, name, quantity, unit)
const INVENTORY: &[(&str, &str, f64, &str)] = &[
    ("espresso_shot", "Espresso Shot", 500.0, "shots"),
    ("milk", "Milk", 5000.0, "ml"),
    ("flour", "Flour", 10000.0, "g"),
    ("blueberries", "Blueberries", 2000.0, "g"),
    ("sugar", "Sugar", 5000.0, "g"),
    ("chocolate_syrup", "Chocolate Syrup", 1500.0, "ml"),
    ("caramel_syrup", "Caramel Syrup", 1500.0, "ml"),
];

/// (product_id, name, description, price, recipe)
const MENU: &[(&str, &str, &str, f64, &[(&str, f64)])] = &[
    (
        "espresso",
        "Espresso",
        "A single shot of espresso",
        2.5,
        &[("espresso_shot", 1.0)],
    ),
    (
        "latte",
        "Caffe Latte",
        "Espresso with steamed milk",
        3.5,
        &[("espresso_shot", 1.0), ("milk", 200.0)],
    ),
    (
        "mocha",
        "Caffe Mocha",
        "Espresso with chocolate and steamed milk",
        4.0,
        &[("espresso_shot", 1.0), ("milk", 150.0), ("chocolate_syrup", 30.0)],
    ),
    (
        "caramel_macchiato",
        "Caramel Macchiato",
        "Milk marked with espresso and caramel",
        4.25,
        &[("espresso_shot", 2.0), ("milk", 180.0), ("caramel_syrup", 20.0)],
    ),
    (
        "muffin",
        "Blueberry Muffin",
        "Freshly baked muffin with blueberries",
        3.0,
        &[("flour", 100.0), ("blueberries", 20.0), ("sugar", 30.0)],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from("./data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Hot Coffee Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --dir <PATH>   Data directory (default: ./data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Hot Coffee Seed Data Generator");
    println!("==============================");
    println!("Data directory: {}", data_dir);
    println!();

    let store = DataStore::open(StoreConfig::new(&data_dir)).await?;

    let existing = store.inventory().list().await?.len();
    if existing > 0 {
        println!("⚠ Inventory already has {} ingredients", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Call DELETE /admin/reset or remove the files to regenerate.");
        return Ok(());
    }

    for (id, name, quantity, unit) in INVENTORY {
        store
            .inventory()
            .add(InventoryItem {
                ingredient_id: (*id).to_string(),
                name: (*name).to_string(),
                quantity: *quantity,
                unit: (*unit).to_string(),
            })
            .await?;
    }
    println!("✓ Added {} ingredients", INVENTORY.len());

    for (id, name, description, price, recipe) in MENU {
        store
            .menu()
            .add(MenuItem {
                product_id: (*id).to_string(),
                name: (*name).to_string(),
                description: (*description).to_string(),
                price: *price,
                ingredients: recipe
                    .iter()
                    .map(|(ingredient_id, quantity)| MenuIngredient {
                        ingredient_id: (*ingredient_id).to_string(),
                        quantity: *quantity,
                    })
                    .collect(),
            })
            .await?;
    }
    println!("✓ Added {} menu items", MENU.len());

    Ok(())
}
