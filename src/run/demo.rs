use anyhow::Result;

use crate::db::Database;

/// Runs the example sequence end to end against `db`.
pub(crate) fn as_demo(db: &mut Database) -> Result<()> {
    super::create_category(db, "Electronics")?;
    super::create_category(db, "Clothing")?;

    super::create_product(db, "Laptop", 1000, "Electronics")?;
    super::create_product(db, "Smartphone", 700, "Electronics")?;
    super::create_product(db, "T-shirt", 20, "Clothing")?;

    println!("\nProducts in 'Electronics' category:");
    super::read_products_by_category(db, "Electronics")?;

    println!("\nUpdating 'Laptop' to 'Clothing' category:");
    super::update_product_category(db, "Laptop", "Clothing")?;

    println!("\nProducts in 'Clothing' category after update:");
    super::read_products_by_category(db, "Clothing")?;

    println!("\nDeleting 'Electronics' category:");
    super::delete_category(db, "Electronics")?;

    println!("\nProducts in 'Electronics' category after deletion:");
    super::read_products_by_category(db, "Electronics")?;

    Ok(())
}
