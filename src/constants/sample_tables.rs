//! This defines the fixed demo tables every query runs against.

use super::super::engine::objects::Table;
use std::sync::Arc;

pub mod orders;
pub mod products;
pub mod users;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SampleTables {
    Users,
    Orders,
    Products,
}

impl SampleTables {
    pub const VALUES: [SampleTables; 3] = [
        SampleTables::Users,
        SampleTables::Orders,
        SampleTables::Products,
    ];

    pub fn value(self) -> Arc<Table> {
        match self {
            SampleTables::Users => users::get_table(),
            SampleTables::Orders => orders::get_table(),
            SampleTables::Products => products::get_table(),
        }
    }
}
