use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonBody;
use crate::coerce;
use crate::error::{AppError, AppResult};

/// Catalogue entry. `name` is a JSON value for the same reason as
/// [`super::user::User`]; price and stock are always numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: Value,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    fn sample(id: u32, name: &str, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: Value::from(name),
            price,
            stock,
        }
    }
}

/// Fixed sample set in catalogue order, rebuilt on every call.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::sample(1, "Laptop", 999.99, 50),
        Product::sample(2, "Mouse", 29.99, 100),
        Product::sample(3, "Keyboard", 79.99, 75),
    ]
}

// ── Request payload ───────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateProduct {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
}

impl CreateProduct {
    pub fn from_body(body: &JsonBody) -> Self {
        serde_json::from_value(Value::Object(body.clone())).unwrap_or_default()
    }

    /// Presence is the only check; price and stock are coerced best-effort.
    pub fn into_product(self, id: u32) -> AppResult<Product> {
        match (self.name, self.price, self.stock) {
            (Some(name), Some(price), Some(stock)) => Ok(Product {
                id,
                name,
                price: coerce::to_f64(&price),
                stock: coerce::to_i64(&stock),
            }),
            _ => Err(AppError::Validation("Name, price, and stock are required")),
        }
    }
}
