//! Seed records loaded into the store at process start.

use crate::id::ProductId;
use crate::product::Product;

/// Returns the three records the catalog starts with.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Laptop".to_owned(),
            description: "High-performance laptop with 16GB RAM".to_owned(),
            price: 1200.0,
            category: "electronics".to_owned(),
            in_stock: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Smartphone".to_owned(),
            description: "Latest model with 128GB storage".to_owned(),
            price: 800.0,
            category: "electronics".to_owned(),
            in_stock: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Coffee Maker".to_owned(),
            description: "Programmable coffee maker with timer".to_owned(),
            price: 50.0,
            category: "kitchen".to_owned(),
            in_stock: false,
        },
    ]
}
