use super::{Table, TableSchema};
use crate::constants::SampleTables;
use std::collections::HashMap;
use std::sync::Arc;

/// The fixed set of tables a query can read. Tables are keyed by
/// lower-cased name and never change after construction.
#[derive(Clone, Debug)]
pub struct Dataset {
    tables: HashMap<String, Arc<Table>>,
}

impl Dataset {
    pub fn new(tables: Vec<Arc<Table>>) -> Dataset {
        let tables = tables
            .into_iter()
            .map(|table| (table.name.to_lowercase(), table))
            .collect();
        Dataset { tables }
    }

    /// Case-insensitive table lookup.
    pub fn resolve(&self, name: &str) -> Option<Arc<Table>> {
        self.tables.get(&name.to_lowercase()).cloned()
    }

    /// Schema summaries for every table, sorted by table name so the
    /// output is stable for display.
    pub fn describe(&self) -> Vec<TableSchema> {
        let mut schemas: Vec<TableSchema> = self.tables.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.table.cmp(&b.table));
        schemas
    }
}

impl Default for Dataset {
    fn default() -> Dataset {
        Dataset::new(SampleTables::VALUES.iter().map(|t| t.value()).collect())
    }
}
