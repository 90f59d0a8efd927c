use crate::engine::objects::{Attribute, Row, Table, Value, ValueKind};
use hex_literal::hex;
use std::sync::Arc;
use uuid::Uuid;

pub const ID: Uuid = Uuid::from_bytes(hex!("3F8A2C76D1B94E05A67B8D3C5E9F1A22"));
pub const NAME: &str = "products";
pub const DESCRIPTION: &str = "Product catalog";

pub const COLUMN_ID: &str = "id";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_CATEGORY: &str = "category";
pub const COLUMN_PRICE: &str = "price";
pub const COLUMN_STOCK: &str = "stock";
pub const COLUMN_DESCRIPTION: &str = "description";

pub fn get_columns() -> Vec<Attribute> {
    vec![
        Attribute::new(COLUMN_ID.to_string(), ValueKind::Integer),
        Attribute::new(COLUMN_NAME.to_string(), ValueKind::Text),
        Attribute::new(COLUMN_CATEGORY.to_string(), ValueKind::Text),
        Attribute::new(COLUMN_PRICE.to_string(), ValueKind::Float),
        Attribute::new(COLUMN_STOCK.to_string(), ValueKind::Integer),
        Attribute::new(COLUMN_DESCRIPTION.to_string(), ValueKind::Text),
    ]
}

fn row(id: i64, name: &str, category: &str, price: f64, stock: i64, description: &str) -> Row {
    Row(vec![
        (COLUMN_ID.to_string(), Value::Integer(id)),
        (COLUMN_NAME.to_string(), Value::Text(name.to_string())),
        (
            COLUMN_CATEGORY.to_string(),
            Value::Text(category.to_string()),
        ),
        (COLUMN_PRICE.to_string(), Value::Float(price)),
        (COLUMN_STOCK.to_string(), Value::Integer(stock)),
        (
            COLUMN_DESCRIPTION.to_string(),
            Value::Text(description.to_string()),
        ),
    ])
}

pub fn get_rows() -> Vec<Row> {
    vec![
        row(
            1,
            "MacBook Pro",
            "laptop",
            12999.0,
            50,
            "Professional-grade laptop",
        ),
        row(
            2,
            "iPhone 14",
            "phone",
            5999.0,
            100,
            "Latest-generation smartphone",
        ),
        row(3, "iPad Air", "tablet", 4399.0, 75, "Thin and light tablet"),
        row(
            4,
            "AirPods Pro",
            "headphones",
            1999.0,
            200,
            "Noise-cancelling wireless earbuds",
        ),
        row(
            5,
            "Apple Watch",
            "watch",
            2999.0,
            80,
            "Smart wearable device",
        ),
    ]
}

pub fn get_table() -> Arc<Table> {
    Arc::new(Table::new(
        ID,
        NAME.to_string(),
        DESCRIPTION.to_string(),
        get_columns(),
        get_rows(),
    ))
}
