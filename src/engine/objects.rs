mod attribute;
pub use attribute::Attribute;

mod dataset;
pub use dataset::Dataset;

mod query_result;
pub use query_result::QueryResult;

mod row;
pub use row::Row;

mod select_command;
pub use select_command::CompareOp;
pub use select_command::LimitClause;
pub use select_command::OrderClause;
pub use select_command::SelectCommand;
pub use select_command::SortDirection;
pub use select_command::WhereFilter;

mod table;
pub use table::Table;
pub use table::TableSchema;

mod value;
pub use value::Value;
pub use value::ValueKind;
