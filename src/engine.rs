pub mod executor;
pub use executor::Executor;

pub mod objects;

pub mod select_parser;
pub use select_parser::SelectParser;
pub use select_parser::SelectParserError;

use objects::{Dataset, QueryResult};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct MockEngine {
    dataset: Arc<Dataset>,
    config: EngineConfig,
}

impl MockEngine {
    pub fn new() -> MockEngine {
        MockEngine::with_dataset(Dataset::default(), EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> MockEngine {
        MockEngine::with_dataset(Dataset::default(), config)
    }

    pub fn with_dataset(dataset: Dataset, config: EngineConfig) -> MockEngine {
        MockEngine {
            dataset: Arc::new(dataset),
            config,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Entry point for every statement kind. Failures of any sort fold
    /// into a failure envelope; nothing propagates to the caller.
    pub async fn execute(&self, sql: &str) -> QueryResult {
        self.simulate_latency().await;

        match self.run(sql) {
            Ok(result) => result,
            Err(e) => {
                debug!("statement failed: {}", e);
                QueryResult::failure(e.to_string())
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.config.simulate_latency {
            return;
        }

        let (min, max) = (self.config.min_latency_ms, self.config.max_latency_ms);
        let delay = if min >= max {
            min
        } else {
            rand::thread_rng().gen_range(min..=max)
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    fn run(&self, sql: &str) -> Result<QueryResult, EngineError> {
        let statement = sql.trim();
        if statement.is_empty() {
            return Err(EngineError::EmptyQuery());
        }

        let kind = StatementKind::classify(statement);
        debug!("classified statement as {:?}", kind);

        match kind {
            StatementKind::Select => self.run_select(statement),
            StatementKind::Insert => Ok(QueryResult::affected(
                1,
                "insert completed, 1 row affected".to_string(),
            )),
            StatementKind::Update => {
                let affected = rand::thread_rng().gen_range(1..=5);
                Ok(QueryResult::affected(
                    affected,
                    format!("update completed, {} row(s) affected", affected),
                ))
            }
            StatementKind::Delete => {
                let affected = rand::thread_rng().gen_range(1..=3);
                Ok(QueryResult::affected(
                    affected,
                    format!("delete completed, {} row(s) affected", affected),
                ))
            }
            StatementKind::Create => Ok(QueryResult::affected(0, "create completed".to_string())),
            StatementKind::Drop => Ok(QueryResult::affected(0, "drop completed".to_string())),
            StatementKind::Unsupported => Err(EngineError::UnsupportedStatement()),
        }
    }

    fn run_select(&self, statement: &str) -> Result<QueryResult, EngineError> {
        let command = SelectParser::parse(statement)?;
        let table = self
            .dataset
            .resolve(&command.table)
            .ok_or_else(|| EngineError::TableNotFound(command.table.clone()))?;

        let data = Executor::run_select(&table, &command);

        let message = format!("query completed, {} row(s) returned", data.len());
        Ok(QueryResult::rows(data, message))
    }
}

impl Default for MockEngine {
    fn default() -> MockEngine {
        MockEngine::new()
    }
}

/// Behavior knobs for the engine, currently just the artificial delay
/// that stands in for a round trip to a real backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub simulate_latency: bool,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
}

impl EngineConfig {
    /// No artificial delay, for tests and embedding callers.
    pub fn instant() -> EngineConfig {
        EngineConfig {
            simulate_latency: false,
            ..EngineConfig::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            simulate_latency: true,
            min_latency_ms: 200,
            max_latency_ms: 700,
        }
    }
}

/// Leading-keyword classification, the only statement-level dispatch
/// that happens. A prefix match is enough; the SELECT path decides
/// later whether the rest of the statement parses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Drop,
    Unsupported,
}

impl StatementKind {
    pub fn classify(statement: &str) -> StatementKind {
        let lowered = statement.trim().to_lowercase();
        if lowered.starts_with("select") {
            StatementKind::Select
        } else if lowered.starts_with("insert") {
            StatementKind::Insert
        } else if lowered.starts_with("update") {
            StatementKind::Update
        } else if lowered.starts_with("delete") {
            StatementKind::Delete
        } else if lowered.starts_with("create") {
            StatementKind::Create
        } else if lowered.starts_with("drop") {
            StatementKind::Drop
        } else {
            StatementKind::Unsupported
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("query must not be empty")]
    EmptyQuery(),
    #[error("SQL parse error: {0}")]
    ParseError(#[from] SelectParserError),
    #[error("table '{0}' does not exist")]
    TableNotFound(String),
    #[error("unsupported statement type")]
    UnsupportedStatement(),
}
