use super::Row;
use serde::Serialize;

/// The envelope every execution attempt resolves to. Exactly one of
/// the success shape (data plus row_count) or the failure shape (error
/// text) is populated, never both.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub success: bool,
    pub data: Vec<Row>,
    pub row_count: usize,
    pub rows_affected: u64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    /// Successful SELECT: the result rows and a count that always
    /// mirrors them.
    pub fn rows(data: Vec<Row>, message: String) -> QueryResult {
        let row_count = data.len();
        QueryResult {
            success: true,
            data,
            row_count,
            rows_affected: 0,
            message,
            error: None,
        }
    }

    /// Successful non-SELECT: no rows come back, only a count.
    pub fn affected(rows_affected: u64, message: String) -> QueryResult {
        QueryResult {
            success: true,
            data: vec![],
            row_count: 0,
            rows_affected,
            message,
            error: None,
        }
    }

    /// Failed statement of any kind.
    pub fn failure(error: String) -> QueryResult {
        QueryResult {
            success: false,
            data: vec![],
            row_count: 0,
            rows_affected: 0,
            message: "query failed".to_string(),
            error: Some(error),
        }
    }
}
