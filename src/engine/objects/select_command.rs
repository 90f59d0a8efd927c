//! The parsed form of a SELECT statement, one field per supported
//! clause. Anything the parser could not recognize is simply absent.

use super::{Row, Value};
use regex::Regex;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectCommand {
    pub table: String,
    pub filter: Option<WhereFilter>,
    pub order: Option<OrderClause>,
    pub limit: Option<LimitClause>,
}

/// A single WHERE condition. Only one condition ever applies per
/// statement; compound clauses are not composed.
#[derive(Clone, Debug)]
pub enum WhereFilter {
    /// `column = 'value'`, compared against the cell's string form.
    Equals { column: String, value: String },
    /// `column <op> integer`, both sides compared as integers.
    Compare {
        column: String,
        op: CompareOp,
        operand: i64,
    },
    /// `column LIKE 'pattern'` with `%` as the only wildcard, matched
    /// case-insensitively anywhere in the cell's string form.
    Like { column: String, matcher: Regex },
    /// A clause none of the shapes recognized; filters nothing.
    MatchAll,
}

impl WhereFilter {
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            WhereFilter::Equals { column, value } => match row.get(column) {
                Some(Value::Null) | None => false,
                Some(cell) => cell.to_string() == *value,
            },
            WhereFilter::Compare {
                column,
                op,
                operand,
            } => {
                let cell = row.get(column).and_then(|value| value.as_integer());
                op.compare(cell, *operand)
            }
            WhereFilter::Like { column, matcher } => match row.get(column) {
                Some(Value::Null) | None => false,
                Some(cell) => matcher.is_match(&cell.to_string()),
            },
            WhereFilter::MatchAll => true,
        }
    }
}

// Regex carries no equality of its own; two filters are the same when
// their translated patterns are.
impl PartialEq for WhereFilter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                WhereFilter::Equals { column, value },
                WhereFilter::Equals {
                    column: other_column,
                    value: other_value,
                },
            ) => column == other_column && value == other_value,
            (
                WhereFilter::Compare {
                    column,
                    op,
                    operand,
                },
                WhereFilter::Compare {
                    column: other_column,
                    op: other_op,
                    operand: other_operand,
                },
            ) => column == other_column && op == other_op && operand == other_operand,
            (
                WhereFilter::Like { column, matcher },
                WhereFilter::Like {
                    column: other_column,
                    matcher: other_matcher,
                },
            ) => column == other_column && matcher.as_str() == other_matcher.as_str(),
            (WhereFilter::MatchAll, WhereFilter::MatchAll) => true,
            (_, _) => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompareOp {
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Equal,
    /// An operator token the condition pattern matched but the
    /// evaluator does not interpret, such as `<>`. Filters nothing.
    Other,
}

impl CompareOp {
    pub fn from_token(token: &str) -> CompareOp {
        match token {
            ">" => CompareOp::Greater,
            "<" => CompareOp::Less,
            ">=" => CompareOp::GreaterEqual,
            "<=" => CompareOp::LessEqual,
            "=" => CompareOp::Equal,
            _ => CompareOp::Other,
        }
    }

    /// Applies the operator to a cell that may have failed integer
    /// coercion. Unparseable cells never satisfy a real operator.
    pub fn compare(self, cell: Option<i64>, operand: i64) -> bool {
        match self {
            CompareOp::Greater => cell.map_or(false, |cell| cell > operand),
            CompareOp::Less => cell.map_or(false, |cell| cell < operand),
            CompareOp::GreaterEqual => cell.map_or(false, |cell| cell >= operand),
            CompareOp::LessEqual => cell.map_or(false, |cell| cell <= operand),
            CompareOp::Equal => cell.map_or(false, |cell| cell == operand),
            CompareOp::Other => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderClause {
    pub column: String,
    pub direction: SortDirection,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimitClause {
    pub count: usize,
    pub offset: usize,
}
