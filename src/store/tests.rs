#![allow(clippy::unwrap_used)]

use super::*;

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

fn list(db: &Database, category: &str) -> Outcome<Vec<Product>> {
    read_products_by_category(db, category).unwrap()
}

// ── create_category ───────────────────────────────────────────

#[test]
fn test_new_category_lists_no_products() {
    let mut db = Database::open_in_memory().unwrap();
    let cat = create_category(&mut db, "Electronics").unwrap();
    assert!(cat.id.is_some());
    assert_eq!(list(&db, "Electronics").unwrap(), vec![]);
}

#[test]
fn test_duplicate_category_names_allowed() {
    let mut db = Database::open_in_memory().unwrap();
    let first = create_category(&mut db, "Books").unwrap();
    let second = create_category(&mut db, "Books").unwrap();
    assert_ne!(first.id, second.id);

    let product = create_product(&mut db, "Novel", 12, "Books").unwrap().unwrap();
    assert_eq!(Some(product.category_id), first.id);
}

// ── create_product ────────────────────────────────────────────

#[test]
fn test_created_product_appears_in_category() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    let laptop = create_product(&mut db, "Laptop", 1000, "Electronics")
        .unwrap()
        .unwrap();
    assert!(laptop.id.is_some());

    let products = list(&db, "Electronics").unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Laptop");
    assert_eq!(products[0].price, 1000);
    assert_eq!(products[0], laptop);
}

#[test]
fn test_create_product_missing_category() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    let before = db.get_product_count().unwrap();

    let outcome = create_product(&mut db, "Laptop", 1000, "Garden").unwrap();
    assert_eq!(outcome, Err(NotFound::Category("Garden".into())));
    assert_eq!(db.get_product_count().unwrap(), before);
}

#[test]
fn test_create_product_zero_and_negative_price() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Misc").unwrap();
    create_product(&mut db, "Freebie", 0, "Misc").unwrap().unwrap();
    create_product(&mut db, "Refund", -5, "Misc").unwrap().unwrap();
    let prices: Vec<i64> = list(&db, "Misc").unwrap().iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![0, -5]);
}

// ── read_products_by_category ─────────────────────────────────

#[test]
fn test_read_missing_category() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(list(&db, "Nope"), Err(NotFound::Category("Nope".into())));
}

// ── update_product_category ───────────────────────────────────

#[test]
fn test_update_to_missing_category_keeps_original() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    create_product(&mut db, "Laptop", 1000, "Electronics")
        .unwrap()
        .unwrap();

    let outcome = update_product_category(&mut db, "Laptop", "Garden").unwrap();
    assert!(matches!(outcome, Err(NotFound::Category(ref n)) if n == "Garden"));
    assert_eq!(names(&list(&db, "Electronics").unwrap()), vec!["Laptop"]);
}

#[test]
fn test_update_missing_product() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();

    let outcome = update_product_category(&mut db, "Laptop", "Electronics").unwrap();
    assert!(matches!(outcome, Err(NotFound::Product(ref n)) if n == "Laptop"));
    assert_eq!(db.get_product_count().unwrap(), 0);
}

#[test]
fn test_update_reports_both_categories() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    create_category(&mut db, "Clothing").unwrap();
    create_product(&mut db, "Laptop", 1000, "Electronics")
        .unwrap()
        .unwrap();

    let moved = update_product_category(&mut db, "Laptop", "Clothing")
        .unwrap()
        .unwrap();
    assert_eq!(moved.from.unwrap().name, "Electronics");
    assert_eq!(moved.to.name, "Clothing");
    assert_eq!(Some(moved.product.category_id), moved.to.id);
}

#[test]
fn test_update_to_same_category_is_noop() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    create_product(&mut db, "Laptop", 1000, "Electronics")
        .unwrap()
        .unwrap();

    update_product_category(&mut db, "Laptop", "Electronics")
        .unwrap()
        .unwrap();
    assert_eq!(names(&list(&db, "Electronics").unwrap()), vec!["Laptop"]);
}

// ── delete_category ───────────────────────────────────────────

#[test]
fn test_delete_category_removes_owned_products() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    create_category(&mut db, "Clothing").unwrap();
    create_product(&mut db, "Laptop", 1000, "Electronics")
        .unwrap()
        .unwrap();
    create_product(&mut db, "T-shirt", 20, "Clothing")
        .unwrap()
        .unwrap();

    let deleted = delete_category(&mut db, "Electronics").unwrap().unwrap();
    assert_eq!(deleted.category.name, "Electronics");
    assert_eq!(deleted.products_removed, 1);

    assert!(list(&db, "Electronics").is_err());
    assert!(db.find_product_by_name("Laptop").unwrap().is_none());
    assert_eq!(db.get_product_count().unwrap(), 1);
}

#[test]
fn test_delete_missing_category() {
    let mut db = Database::open_in_memory().unwrap();
    let outcome = delete_category(&mut db, "Nope").unwrap();
    assert!(matches!(outcome, Err(NotFound::Category(_))));
}

#[test]
fn test_delete_duplicate_name_removes_first_only() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Books").unwrap();
    let second = create_category(&mut db, "Books").unwrap();

    delete_category(&mut db, "Books").unwrap().unwrap();

    let remaining = db.find_category_by_name("Books").unwrap().unwrap();
    assert_eq!(remaining.id, second.id);
}

// ── list_categories ───────────────────────────────────────────

#[test]
fn test_list_categories_with_counts() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    create_category(&mut db, "Empty").unwrap();
    create_product(&mut db, "Laptop", 1000, "Electronics")
        .unwrap()
        .unwrap();
    create_product(&mut db, "Phone", 700, "Electronics")
        .unwrap()
        .unwrap();

    let listed: Vec<(String, i64)> = list_categories(&db)
        .unwrap()
        .into_iter()
        .map(|(c, n)| (c.name, n))
        .collect();
    assert_eq!(
        listed,
        vec![("Electronics".to_string(), 2), ("Empty".to_string(), 0)]
    );
}

// ── NotFound ──────────────────────────────────────────────────

#[test]
fn test_not_found_messages() {
    assert_eq!(
        NotFound::Category("Garden".into()).to_string(),
        "Category 'Garden' not found."
    );
    assert_eq!(
        NotFound::Product("Lamp".into()).to_string(),
        "Product 'Lamp' not found."
    );
}

// ── Scenario ──────────────────────────────────────────────────

#[test]
fn test_example_scenario() {
    let mut db = Database::open_in_memory().unwrap();
    create_category(&mut db, "Electronics").unwrap();
    create_category(&mut db, "Clothing").unwrap();
    create_product(&mut db, "Laptop", 1000, "Electronics")
        .unwrap()
        .unwrap();
    create_product(&mut db, "Smartphone", 700, "Electronics")
        .unwrap()
        .unwrap();
    create_product(&mut db, "T-shirt", 20, "Clothing")
        .unwrap()
        .unwrap();

    assert_eq!(
        names(&list(&db, "Electronics").unwrap()),
        vec!["Laptop", "Smartphone"]
    );

    update_product_category(&mut db, "Laptop", "Clothing")
        .unwrap()
        .unwrap();
    // Listing order is insertion order, so Laptop (inserted first) leads.
    assert_eq!(
        names(&list(&db, "Clothing").unwrap()),
        vec!["Laptop", "T-shirt"]
    );
    assert_eq!(names(&list(&db, "Electronics").unwrap()), vec!["Smartphone"]);

    delete_category(&mut db, "Electronics").unwrap().unwrap();
    assert_eq!(
        list(&db, "Electronics"),
        Err(NotFound::Category("Electronics".into()))
    );
    assert!(db.find_product_by_name("Smartphone").unwrap().is_none());
    assert_eq!(
        names(&list(&db, "Clothing").unwrap()),
        vec!["Laptop", "T-shirt"]
    );
}
