use super::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered column name to cell mapping. Order is the table's column
/// order and is preserved through serialization.
#[derive(Clone, Debug, PartialEq)]
pub struct Row(pub Vec<(String, Value)>);

impl Row {
    /// Looks up a cell by column name, exact match only.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row(vec![
            ("id".to_string(), Value::Integer(1)),
            ("name".to_string(), Value::Text("Alice Johnson".to_string())),
            ("age".to_string(), Value::Integer(28)),
        ])
    }

    #[test]
    fn test_get() {
        let row = sample_row();

        assert_eq!(row.get("id"), Some(&Value::Integer(1)));
        assert_eq!(row.get("age"), Some(&Value::Integer(28)));
        assert_eq!(row.get("salary"), None);
        assert_eq!(row.get("Name"), None);
    }

    #[test]
    fn test_serialize_preserves_column_order() -> Result<(), Box<dyn std::error::Error>> {
        let row = sample_row();

        let json = serde_json::to_string(&row)?;
        assert_eq!(json, r#"{"id":1,"name":"Alice Johnson","age":28}"#);

        Ok(())
    }
}
