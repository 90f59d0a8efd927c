mod common;

use mimicdb::engine::objects::{Attribute, Dataset, Row, Table, Value, ValueKind};
use mimicdb::engine::{EngineConfig, MockEngine};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn success_envelope_uses_camel_case_and_omits_error(
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::create_engine();

    let result = engine.execute("SELECT * FROM users").await;
    let envelope = serde_json::to_value(&result)?;
    let object = envelope.as_object().ok_or("envelope is not an object")?;

    assert_eq!(object["success"], json!(true));
    assert_eq!(object["rowCount"], json!(10));
    assert_eq!(object["rowsAffected"], json!(0));
    assert_eq!(object["message"], json!("query completed, 10 row(s) returned"));
    assert!(object["data"].is_array());
    assert!(!object.contains_key("error"));

    Ok(())
}

#[tokio::test]
async fn failure_envelope_carries_the_error() -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::create_engine();

    let result = engine.execute("SELECT * FROM missing").await;
    let envelope = serde_json::to_value(&result)?;
    let object = envelope.as_object().ok_or("envelope is not an object")?;

    assert_eq!(object["success"], json!(false));
    assert_eq!(object["error"], json!("table 'missing' does not exist"));
    assert_eq!(object["message"], json!("query failed"));
    assert_eq!(object["data"], json!([]));
    assert_eq!(object["rowCount"], json!(0));
    assert_eq!(object["rowsAffected"], json!(0));

    Ok(())
}

#[tokio::test]
async fn rows_serialize_with_columns_in_table_order() -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::create_engine();

    let result = engine.execute("SELECT * FROM users LIMIT 1").await;
    assert!(result.success, "{:?}", result.error);

    let json = serde_json::to_string(&result.data[0])?;
    assert_eq!(
        json,
        r#"{"id":1,"name":"Alice Johnson","email":"alice.johnson@example.com","age":28,"department":"Engineering","created_at":"2023-01-15 10:30:00"}"#
    );

    Ok(())
}

#[tokio::test]
async fn float_cells_serialize_as_json_numbers() -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::create_engine();

    let result = engine.execute("SELECT * FROM orders LIMIT 1").await;
    assert!(result.success, "{:?}", result.error);

    let envelope = serde_json::to_value(&result)?;
    assert_eq!(envelope["data"][0]["price"], json!(12999.0));
    assert_eq!(envelope["data"][0]["quantity"], json!(1));

    Ok(())
}

#[tokio::test]
async fn null_cells_serialize_as_json_null() -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::new(
        Uuid::new_v4(),
        "readings".to_string(),
        "Sensor readings".to_string(),
        vec![
            Attribute::new("id".to_string(), ValueKind::Integer),
            Attribute::new("note".to_string(), ValueKind::Text),
        ],
        vec![
            Row(vec![
                ("id".to_string(), Value::Integer(1)),
                ("note".to_string(), Value::Text("ok".to_string())),
            ]),
            Row(vec![
                ("id".to_string(), Value::Integer(2)),
                ("note".to_string(), Value::Null),
            ]),
        ],
    );
    let dataset = Dataset::new(vec![Arc::new(table)]);
    let engine = MockEngine::with_dataset(dataset, EngineConfig::instant());

    let result = engine.execute("SELECT * FROM readings").await;
    assert!(result.success, "{:?}", result.error);

    let envelope = serde_json::to_value(&result)?;
    assert_eq!(envelope["data"][1]["note"], serde_json::Value::Null);

    Ok(())
}

#[tokio::test]
async fn describe_reports_each_table_schema() -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::create_engine();

    let schemas = engine.dataset().describe();
    let json = serde_json::to_value(&schemas)?;

    assert_eq!(json[0]["table"], json!("orders"));
    assert_eq!(json[1]["table"], json!("products"));
    assert_eq!(json[2]["table"], json!("users"));
    assert_eq!(json[2]["description"], json!("User directory"));
    assert_eq!(
        json[2]["columns"],
        json!(["id", "name", "email", "age", "department", "created_at"])
    );

    Ok(())
}
