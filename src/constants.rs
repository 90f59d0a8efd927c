mod sample_queries;
pub use sample_queries::SampleQuery;
pub use sample_queries::SAMPLE_QUERIES;

pub mod sample_tables;
pub use sample_tables::SampleTables;
