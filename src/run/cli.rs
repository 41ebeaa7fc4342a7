use anyhow::{Context, Result};

use crate::db::Database;
use crate::store;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "demo" => super::as_demo(db),
        "add-category" => {
            let [name] = expect_args(&args[2..], "add-category <name>")?;
            super::create_category(db, name)
        }
        "add-product" => {
            let [name, price, category] =
                expect_args(&args[2..], "add-product <name> <price> <category>")?;
            let price = parse_price(price)?;
            super::create_product(db, name, price, category)
        }
        "list" | "ls" => {
            let [category] = expect_args(&args[2..], "list <category>")?;
            println!("Products in '{category}' category:");
            super::read_products_by_category(db, category)
        }
        "move" | "mv" => {
            let [product, category] = expect_args(&args[2..], "move <product> <category>")?;
            super::update_product_category(db, product, category)
        }
        "delete-category" | "rm" => {
            let [name] = expect_args(&args[2..], "delete-category <name>")?;
            super::delete_category(db, name)
        }
        "categories" => cli_categories(db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("storefront {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Storefront - categories and products in a local SQLite store");
    println!();
    println!("Usage: storefront [--db <path>] [command]");
    println!();
    println!("Commands:");
    println!("  (none), demo                          Run the example scenario");
    println!("  add-category <name>                   Create a category");
    println!("  add-product <name> <price> <category> Create a product in a category");
    println!("  list <category>                       List a category's products");
    println!("  move <product> <category>             Move a product to another category");
    println!("  delete-category <name>                Delete a category and its products");
    println!("  categories                            List categories with product counts");
    println!("  --help, -h                            Show this help");
    println!("  --version, -V                         Show version");
    println!();
    println!("Environment:");
    println!("  STORE_DB     Database file (default: ./store.db)");
    println!("  STORE_ECHO   Set to 1 to log SQL statements");
}

/// Exactly `N` positional arguments, or a usage error.
fn expect_args<'a, const N: usize>(args: &'a [String], usage: &str) -> Result<[&'a str; N]> {
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    <[&str; N]>::try_from(refs).map_err(|_| anyhow::anyhow!("Usage: storefront {usage}"))
}

fn parse_price(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid price: {s}"))
}

fn cli_categories(db: &Database) -> Result<()> {
    let categories = store::list_categories(db)?;
    if categories.is_empty() {
        println!("No categories");
        return Ok(());
    }

    println!("{:<4} {:<24} Products", "ID", "Name");
    println!("{}", "─".repeat(40));
    for (cat, count) in &categories {
        println!("{:<4} {:<24} {count}", cat.id.unwrap_or(0), cat.name);
    }
    println!("{}", "─".repeat(40));
    println!("Total products: {}", db.get_product_count()?);
    Ok(())
}
