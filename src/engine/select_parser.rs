//! Clause extraction for SELECT statements.
//!
//! Patterns search the raw statement wherever they occur rather than
//! parsing it front to back, so unknown text around the recognized
//! clauses is ignored and the select list itself is never interpreted.

use super::objects::{
    CompareOp, LimitClause, OrderClause, SelectCommand, SortDirection, WhereFilter,
};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

static FROM_PATTERN: OnceLock<Regex> = OnceLock::new();
static WHERE_PATTERN: OnceLock<Regex> = OnceLock::new();
static ORDER_PATTERN: OnceLock<Regex> = OnceLock::new();
static LIMIT_PATTERN: OnceLock<Regex> = OnceLock::new();
static EQUALITY_PATTERN: OnceLock<Regex> = OnceLock::new();
static COMPARISON_PATTERN: OnceLock<Regex> = OnceLock::new();
static LIKE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn from_pattern() -> &'static Regex {
    FROM_PATTERN.get_or_init(|| Regex::new(r"(?i)from\s+(\w+)").unwrap())
}

fn where_pattern() -> &'static Regex {
    WHERE_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)where\s+(.+?)(?:\s+order|\s+group|\s+limit|\s*$)").unwrap()
    })
}

fn order_pattern() -> &'static Regex {
    ORDER_PATTERN.get_or_init(|| Regex::new(r"(?i)order\s+by\s+(\w+)(?:\s+(asc|desc))?").unwrap())
}

fn limit_pattern() -> &'static Regex {
    LIMIT_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)limit\s+([0-9]+)(?:\s+offset\s+([0-9]+))?").unwrap()
    })
}

fn equality_pattern() -> &'static Regex {
    EQUALITY_PATTERN.get_or_init(|| Regex::new(r"(\w+)\s*=\s*'([^']+)'").unwrap())
}

fn comparison_pattern() -> &'static Regex {
    COMPARISON_PATTERN.get_or_init(|| Regex::new(r"(\w+)\s*([><=]+)\s*([0-9]+)").unwrap())
}

fn like_pattern() -> &'static Regex {
    LIKE_PATTERN.get_or_init(|| Regex::new(r"(?i)(\w+)\s+like\s+'([^']+)'").unwrap())
}

pub struct SelectParser {}

impl SelectParser {
    pub fn parse(statement: &str) -> Result<SelectCommand, SelectParserError> {
        Ok(SelectCommand {
            table: SelectParser::parse_table(statement)?,
            filter: SelectParser::parse_filter(statement)?,
            order: SelectParser::parse_order(statement),
            limit: SelectParser::parse_limit(statement),
        })
    }

    /// The identifier after the first FROM, lower-cased for lookup.
    fn parse_table(statement: &str) -> Result<String, SelectParserError> {
        let captures = from_pattern()
            .captures(statement)
            .ok_or(SelectParserError::MissingFromClause())?;
        Ok(captures[1].to_lowercase())
    }

    /// The WHERE clause runs until the next ORDER, GROUP or LIMIT
    /// keyword, or the end of the statement. The three condition
    /// shapes are tried in a fixed priority order and the first one
    /// found anywhere in the clause wins; a clause matching none of
    /// them filters nothing.
    fn parse_filter(statement: &str) -> Result<Option<WhereFilter>, SelectParserError> {
        let captures = match where_pattern().captures(statement) {
            Some(captures) => captures,
            None => return Ok(None),
        };
        let clause = captures[1].trim();

        if let Some(equality) = equality_pattern().captures(clause) {
            return Ok(Some(WhereFilter::Equals {
                column: equality[1].to_lowercase(),
                value: equality[2].to_string(),
            }));
        }

        if let Some(comparison) = comparison_pattern().captures(clause) {
            return Ok(Some(WhereFilter::Compare {
                column: comparison[1].to_lowercase(),
                op: CompareOp::from_token(&comparison[2]),
                operand: comparison[3].parse().unwrap_or(i64::MAX),
            }));
        }

        if let Some(like) = like_pattern().captures(clause) {
            let matcher = SelectParser::build_like_matcher(&like[2])?;
            return Ok(Some(WhereFilter::Like {
                column: like[1].to_lowercase(),
                matcher,
            }));
        }

        Ok(Some(WhereFilter::MatchAll))
    }

    /// `%` becomes "match anything"; every other character is spliced
    /// into the pattern untouched, so regex metacharacters keep their
    /// regex meaning.
    fn build_like_matcher(pattern: &str) -> Result<Regex, SelectParserError> {
        let translated = format!("(?i){}", pattern.replace('%', ".*"));
        Regex::new(&translated)
            .map_err(|e| SelectParserError::InvalidLikePattern(pattern.to_string(), e))
    }

    fn parse_order(statement: &str) -> Option<OrderClause> {
        let captures = order_pattern().captures(statement)?;
        let direction = match captures.get(2) {
            Some(token) if token.as_str().eq_ignore_ascii_case("desc") => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        Some(OrderClause {
            column: captures[1].to_lowercase(),
            direction,
        })
    }

    /// Counts too large to represent saturate instead of failing; a
    /// saturated LIMIT keeps everything, matching the clamped slice.
    fn parse_limit(statement: &str) -> Option<LimitClause> {
        let captures = limit_pattern().captures(statement)?;
        let count = captures[1].parse().unwrap_or(usize::MAX);
        let offset = captures
            .get(2)
            .map_or(0, |m| m.as_str().parse().unwrap_or(usize::MAX));
        Some(LimitClause { count, offset })
    }
}

#[derive(Debug, Error)]
pub enum SelectParserError {
    #[error("could not parse FROM clause")]
    MissingFromClause(),
    #[error("invalid LIKE pattern '{0}'")]
    InvalidLikePattern(String, #[source] regex::Error),
}
