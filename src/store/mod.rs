//! Category and product operations.
//!
//! Each operation resolves names to rows (first match by insertion order),
//! mutates, and commits before returning. A missing category or product is an
//! ordinary [`Outcome`] the caller can branch on; storage failures are errors.

use anyhow::Result;
use tracing::{info, warn};

use crate::db::Database;
use crate::models::{Category, Product};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum NotFound {
    #[error("Category '{0}' not found.")]
    Category(String),
    #[error("Product '{0}' not found.")]
    Product(String),
}

pub(crate) type Outcome<T> = std::result::Result<T, NotFound>;

#[derive(Debug, Clone)]
pub(crate) struct Moved {
    pub(crate) product: Product,
    /// `None` only if the previous owner vanished between lookup and update.
    pub(crate) from: Option<Category>,
    pub(crate) to: Category,
}

#[derive(Debug, Clone)]
pub(crate) struct DeletedCategory {
    pub(crate) category: Category,
    pub(crate) products_removed: usize,
}

pub(crate) fn create_category(db: &mut Database, name: &str) -> Result<Category> {
    let mut category = Category::new(name.to_string());
    let id = db.insert_category(&category)?;
    category.id = Some(id);
    info!(id, name, "category created");
    Ok(category)
}

pub(crate) fn create_product(
    db: &mut Database,
    name: &str,
    price: i64,
    category_name: &str,
) -> Result<Outcome<Product>> {
    let Some(category_id) = lookup_category_id(db, category_name)? else {
        return Ok(Err(NotFound::Category(category_name.to_string())));
    };

    let mut product = Product::new(name.to_string(), price, category_id);
    let id = db.insert_product(&product)?;
    product.id = Some(id);
    info!(id, name, price, category_id, "product created");
    Ok(Ok(product))
}

/// Products owned by the named category, in insertion order.
pub(crate) fn read_products_by_category(
    db: &Database,
    category_name: &str,
) -> Result<Outcome<Vec<Product>>> {
    let Some(category_id) = lookup_category_id(db, category_name)? else {
        return Ok(Err(NotFound::Category(category_name.to_string())));
    };
    Ok(Ok(db.get_products_by_category(category_id)?))
}

pub(crate) fn update_product_category(
    db: &mut Database,
    product_name: &str,
    new_category_name: &str,
) -> Result<Outcome<Moved>> {
    let Some(mut product) = db.find_product_by_name(product_name)? else {
        warn!(product = product_name, "product not found");
        return Ok(Err(NotFound::Product(product_name.to_string())));
    };
    let Some(to) = db.find_category_by_name(new_category_name)? else {
        warn!(category = new_category_name, "category not found");
        return Ok(Err(NotFound::Category(new_category_name.to_string())));
    };
    let (Some(product_id), Some(to_id)) = (product.id, to.id) else {
        anyhow::bail!("Row loaded without an id");
    };

    let from = db.get_category_by_id(product.category_id)?;
    db.update_product_category(product_id, to_id)?;
    info!(
        product_id,
        from = product.category_id,
        to = to_id,
        "product moved"
    );
    product.category_id = to_id;
    Ok(Ok(Moved { product, from, to }))
}

/// Deletes the named category together with every product it owns.
pub(crate) fn delete_category(
    db: &mut Database,
    category_name: &str,
) -> Result<Outcome<DeletedCategory>> {
    let Some(category) = db.find_category_by_name(category_name)? else {
        warn!(category = category_name, "category not found");
        return Ok(Err(NotFound::Category(category_name.to_string())));
    };
    let Some(id) = category.id else {
        anyhow::bail!("Row loaded without an id");
    };

    let products_removed = db.delete_category_cascade(id)?;
    info!(id, products_removed, "category deleted");
    Ok(Ok(DeletedCategory {
        category,
        products_removed,
    }))
}

/// Every category in insertion order with the number of products it owns.
pub(crate) fn list_categories(db: &Database) -> Result<Vec<(Category, i64)>> {
    let counts = db.get_product_counts_by_category()?;
    Ok(db
        .get_categories()?
        .into_iter()
        .map(|c| {
            let n = counts
                .iter()
                .find(|(id, _)| c.id == Some(*id))
                .map_or(0, |(_, n)| *n);
            (c, n)
        })
        .collect())
}

fn lookup_category_id(db: &Database, name: &str) -> Result<Option<i64>> {
    let found = db.find_category_by_name(name)?.and_then(|c| c.id);
    if found.is_none() {
        warn!(category = name, "category not found");
    }
    Ok(found)
}

#[cfg(test)]
mod tests;
