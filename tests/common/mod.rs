use log::LevelFilter;
use mimicdb::engine::{EngineConfig, MockEngine};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Engine with the artificial delay disabled, plus a terminal logger
/// so failing runs show the engine's debug output. The logger can only
/// be installed once per process so later calls ignore the error.
pub fn create_engine() -> MockEngine {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    MockEngine::with_config(EngineConfig::instant())
}
