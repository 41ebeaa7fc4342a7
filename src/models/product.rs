#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: i64,
    pub category_id: i64,
}

impl Product {
    pub fn new(name: String, price: i64, category_id: i64) -> Self {
        Self {
            id: None,
            name,
            price,
            category_id,
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "#{id} {} (price {}, category {})",
                self.name, self.price, self.category_id
            ),
            None => write!(
                f,
                "{} (price {}, category {})",
                self.name, self.price, self.category_id
            ),
        }
    }
}
