//! A fixed demo table plus the schema summary the editor's datasource
//! tree reads.

use super::{Attribute, Row};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub attributes: Vec<Attribute>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(
        id: Uuid,
        name: String,
        description: String,
        attributes: Vec<Attribute>,
        rows: Vec<Row>,
    ) -> Table {
        Table {
            id,
            name,
            description,
            attributes,
            rows,
        }
    }

    pub fn schema(&self) -> TableSchema {
        TableSchema {
            table: self.name.clone(),
            description: self.description.clone(),
            columns: self.attributes.iter().map(|a| a.name.clone()).collect(),
        }
    }
}

/// The per-table introspection record handed to the UI layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub table: String,
    pub description: String,
    pub columns: Vec<String>,
}
