use crate::engine::objects::{Attribute, Row, Table, Value, ValueKind};
use hex_literal::hex;
use std::sync::Arc;
use uuid::Uuid;

pub const ID: Uuid = Uuid::from_bytes(hex!("C25D91B64E7F4A83B09C1D2E8F5A3C47"));
pub const NAME: &str = "orders";
pub const DESCRIPTION: &str = "Order history";

pub const COLUMN_ID: &str = "id";
pub const COLUMN_USER_ID: &str = "user_id";
pub const COLUMN_PRODUCT: &str = "product";
pub const COLUMN_PRICE: &str = "price";
pub const COLUMN_QUANTITY: &str = "quantity";
pub const COLUMN_ORDER_DATE: &str = "order_date";
pub const COLUMN_STATUS: &str = "status";

pub fn get_columns() -> Vec<Attribute> {
    vec![
        Attribute::new(COLUMN_ID.to_string(), ValueKind::Integer),
        Attribute::new(COLUMN_USER_ID.to_string(), ValueKind::Integer),
        Attribute::new(COLUMN_PRODUCT.to_string(), ValueKind::Text),
        Attribute::new(COLUMN_PRICE.to_string(), ValueKind::Float),
        Attribute::new(COLUMN_QUANTITY.to_string(), ValueKind::Integer),
        Attribute::new(COLUMN_ORDER_DATE.to_string(), ValueKind::Text),
        Attribute::new(COLUMN_STATUS.to_string(), ValueKind::Text),
    ]
}

fn row(
    id: i64,
    user_id: i64,
    product: &str,
    price: f64,
    quantity: i64,
    order_date: &str,
    status: &str,
) -> Row {
    Row(vec![
        (COLUMN_ID.to_string(), Value::Integer(id)),
        (COLUMN_USER_ID.to_string(), Value::Integer(user_id)),
        (COLUMN_PRODUCT.to_string(), Value::Text(product.to_string())),
        (COLUMN_PRICE.to_string(), Value::Float(price)),
        (COLUMN_QUANTITY.to_string(), Value::Integer(quantity)),
        (
            COLUMN_ORDER_DATE.to_string(),
            Value::Text(order_date.to_string()),
        ),
        (COLUMN_STATUS.to_string(), Value::Text(status.to_string())),
    ])
}

pub fn get_rows() -> Vec<Row> {
    vec![
        row(1, 1, "MacBook Pro", 12999.0, 1, "2023-06-01", "completed"),
        row(2, 2, "iPhone 14", 5999.0, 2, "2023-06-02", "shipped"),
        row(3, 3, "iPad Air", 4399.0, 1, "2023-06-03", "processing"),
        row(4, 1, "AirPods Pro", 1999.0, 1, "2023-06-04", "completed"),
        row(5, 4, "Mac Studio", 14999.0, 1, "2023-06-05", "shipped"),
        row(6, 5, "Apple Watch", 2999.0, 1, "2023-06-06", "completed"),
        row(7, 2, "MacBook Air", 8999.0, 1, "2023-06-07", "processing"),
        row(8, 6, "iMac", 9999.0, 1, "2023-06-08", "completed"),
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
