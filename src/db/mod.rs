mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let db = Self { conn };
        db.ensure_schema().context("Failed to create schema")?;
        debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Releases the connection, reporting any error SQLite raises on close.
    pub(crate) fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")?;
        debug!("database closed");
        Ok(())
    }

    fn ensure_schema(&self) -> Result<()> {
        debug!(sql = schema::SCHEMA, "ensure schema");
        self.conn.execute_batch(schema::SCHEMA)?;

        for table in schema::TABLES {
            let exists: bool = self.conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                params![table],
                |row| row.get(0),
            )?;
            if !exists {
                anyhow::bail!("Table '{table}' missing after schema creation");
            }
        }
        Ok(())
    }

    // ── Categories ────────────────────────────────────────────

    pub(crate) fn insert_category(&self, cat: &Category) -> Result<i64> {
        let sql = "INSERT INTO categories (name) VALUES (?1)";
        debug!(sql, name = %cat.name, "sql");
        self.conn.execute(sql, params![cat.name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All categories in insertion order.
    pub(crate) fn get_categories(&self) -> Result<Vec<Category>> {
        let sql = "SELECT id, name FROM categories ORDER BY id";
        debug!(sql, "sql");
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], category_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let sql = "SELECT id, name FROM categories WHERE id = ?1";
        debug!(sql, id, "sql");
        Ok(self
            .conn
            .query_row(sql, params![id], category_from_row)
            .optional()?)
    }

    /// Earliest-inserted category with this exact name. Names are not unique.
    pub(crate) fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let sql = "SELECT id, name FROM categories WHERE name = ?1 ORDER BY id LIMIT 1";
        debug!(sql, name, "sql");
        Ok(self
            .conn
            .query_row(sql, params![name], category_from_row)
            .optional()?)
    }

    /// Deletes the category and every product it owns in one transaction.
    /// Returns the number of products removed.
    pub(crate) fn delete_category_cascade(&mut self, id: i64) -> Result<usize> {
        let tx = self.conn.transaction()?;
        debug!(sql = "DELETE FROM products WHERE category_id = ?1", id, "sql");
        let removed = tx.execute("DELETE FROM products WHERE category_id = ?1", params![id])?;
        debug!(sql = "DELETE FROM categories WHERE id = ?1", id, "sql");
        tx.execute("DELETE FROM categories WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(removed)
    }

    // ── Products ──────────────────────────────────────────────

    pub(crate) fn insert_product(&self, product: &Product) -> Result<i64> {
        let sql = "INSERT INTO products (name, price, category_id) VALUES (?1, ?2, ?3)";
        debug!(
            sql,
            name = %product.name,
            price = product.price,
            category_id = product.category_id,
            "sql"
        );
        self.conn.execute(
            sql,
            params![product.name, product.price, product.category_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Earliest-inserted product with this exact name. Names are not unique.
    pub(crate) fn find_product_by_name(&self, name: &str) -> Result<Option<Product>> {
        let sql = "SELECT id, name, price, category_id FROM products
                   WHERE name = ?1 ORDER BY id LIMIT 1";
        debug!(sql, name, "sql");
        Ok(self
            .conn
            .query_row(sql, params![name], product_from_row)
            .optional()?)
    }

    /// Products owned by a category, in insertion order.
    pub(crate) fn get_products_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let sql = "SELECT id, name, price, category_id FROM products
                   WHERE category_id = ?1 ORDER BY id";
        debug!(sql, category_id, "sql");
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![category_id], product_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn update_product_category(&self, product_id: i64, category_id: i64) -> Result<()> {
        let sql = "UPDATE products SET category_id = ?1 WHERE id = ?2";
        debug!(sql, product_id, category_id, "sql");
        self.conn.execute(sql, params![category_id, product_id])?;
        Ok(())
    }

    pub(crate) fn get_product_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?)
    }

    /// Product count per category id, for every category that owns at least one product.
    pub(crate) fn get_product_counts_by_category(&self) -> Result<Vec<(i64, i64)>> {
        let sql = "SELECT category_id, COUNT(*) FROM products GROUP BY category_id";
        debug!(sql, "sql");
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: Some(row.get(0)?),
        name: row.get(1)?,
    })
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        price: row.get(2)?,
        category_id: row.get(3)?,
    })
}
