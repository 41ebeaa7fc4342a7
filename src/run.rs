mod cli;
mod demo;

use anyhow::Result;

use crate::db::Database;
use crate::store;

pub(crate) use cli::as_cli;
pub(crate) use demo::as_demo;

// Each helper runs one operation and prints its outcome. A not-found outcome
// is printed like any other result.

pub(crate) fn create_category(db: &mut Database, name: &str) -> Result<()> {
    let category = store::create_category(db, name)?;
    println!("Category '{category}' created.");
    Ok(())
}

pub(crate) fn create_product(
    db: &mut Database,
    name: &str,
    price: i64,
    category_name: &str,
) -> Result<()> {
    match store::create_product(db, name, price, category_name)? {
        Ok(product) => println!(
            "Product '{}' created in category '{category_name}'.",
            product.name
        ),
        Err(missing) => println!("{missing}"),
    }
    Ok(())
}

pub(crate) fn read_products_by_category(db: &Database, category_name: &str) -> Result<()> {
    match store::read_products_by_category(db, category_name)? {
        Ok(products) if products.is_empty() => println!("  (no products)"),
        Ok(products) => {
            for product in &products {
                println!("  {product}");
            }
        }
        Err(missing) => println!("{missing}"),
    }
    Ok(())
}

pub(crate) fn update_product_category(
    db: &mut Database,
    product_name: &str,
    new_category_name: &str,
) -> Result<()> {
    match store::update_product_category(db, product_name, new_category_name)? {
        Ok(moved) => {
            let from = moved
                .from
                .map(|c| c.name)
                .unwrap_or_else(|| "?".to_string());
            println!(
                "Product '{}' updated to category '{}' (was '{from}').",
                moved.product.name, moved.to
            );
        }
        Err(missing) => println!("{missing}"),
    }
    Ok(())
}

pub(crate) fn delete_category(db: &mut Database, category_name: &str) -> Result<()> {
    match store::delete_category(db, category_name)? {
        Ok(deleted) => println!(
            "Category '{}' and its {} product(s) have been deleted.",
            deleted.category, deleted.products_removed
        ),
        Err(missing) => println!("{missing}"),
    }
    Ok(())
}
