use crate::engine::objects::{Attribute, Row, Table, Value, ValueKind};
use hex_literal::hex;
use std::sync::Arc;
use uuid::Uuid;

pub const ID: Uuid = Uuid::from_bytes(hex!("7A6E3F04B82D4C519ED85E2A9C4B7F10"));
pub const NAME: &str = "users";
pub const DESCRIPTION: &str = "User directory";

pub const COLUMN_ID: &str = "id";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_EMAIL: &str = "email";
pub const COLUMN_AGE: &str = "age";
pub const COLUMN_DEPARTMENT: &str = "department";
pub const COLUMN_CREATED_AT: &str = "created_at";

pub fn get_columns() -> Vec<Attribute> {
    vec![
        Attribute::new(COLUMN_ID.to_string(), ValueKind::Integer),
        Attribute::new(COLUMN_NAME.to_string(), ValueKind::Text),
        Attribute::new(COLUMN_EMAIL.to_string(), ValueKind::Text),
        Attribute::new(COLUMN_AGE.to_string(), ValueKind::Integer),
        Attribute::new(COLUMN_DEPARTMENT.to_string(), ValueKind::Text),
        Attribute::new(COLUMN_CREATED_AT.to_string(), ValueKind::Text),
    ]
}

fn row(id: i64, name: &str, email: &str, age: i64, department: &str, created_at: &str) -> Row {
    Row(vec![
        (COLUMN_ID.to_string(), Value::Integer(id)),
        (COLUMN_NAME.to_string(), Value::Text(name.to_string())),
        (COLUMN_EMAIL.to_string(), Value::Text(email.to_string())),
        (COLUMN_AGE.to_string(), Value::Integer(age)),
        (
            COLUMN_DEPARTMENT.to_string(),
            Value::Text(department.to_string()),
        ),
        (
            COLUMN_CREATED_AT.to_string(),
            Value::Text(created_at.to_string()),
        ),
    ])
}

pub fn get_rows() -> Vec<Row> {
    vec![
        row(
            1,
            "Alice Johnson",
            "alice.johnson@example.com",
            28,
            "Engineering",
            "2023-01-15 10:30:00",
        ),
        row(
            2,
            "Bob Smith",
            "bob.smith@example.com",
            32,
            "Product",
            "2023-02-20 14:20:00",
        ),
        row(
            3,
            "Carol Davis",
            "carol.davis@example.com",
            25,
            "Design",
            "2023-03-10 09:15:00",
        ),
        row(
            4,
            "David Miller",
            "david.miller@example.com",
            30,
            "Engineering",
            "2023-01-25 16:45:00",
        ),
        row(
            5,
            "Erin Wilson",
            "erin.wilson@example.com",
            27,
            "Marketing",
            "2023-04-05 11:30:00",
        ),
        row(
            6,
            "Frank Moore",
            "frank.moore@example.com",
            29,
            "HR",
            "2023-02-15 13:20:00",
        ),
        row(
            7,
            "Grace Taylor",
            "grace.taylor@example.com",
            31,
            "Finance",
            "2023-03-20 08:45:00",
        ),
        row(
            8,
            "Henry Anderson",
            "henry.anderson@example.com",
            26,
            "Engineering",
            "2023-04-12 15:10:00",
        ),
        row(
            9,
            "Iris Thomas",
            "iris.thomas@example.com",
            33,
            "Product",
            "2023-01-08 12:00:00",
        ),
        row(
            10,
            "Jack White",
            "jack.white@example.com",
            24,
            "Design",
            "2023-05-01 10:30:00",
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
