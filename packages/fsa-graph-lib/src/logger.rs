use std::{
    fmt::Display,
    fs::{self, File},
    str::FromStr,
    sync::Mutex,
};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::config::LoggerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn short_name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warn => "WAR",
            LogLevel::Error => "ERR",
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warn" | "warning" | "war" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "Debug"),
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warn => write!(f, "Warn"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

/// The file a run logs into when `log_file` is enabled.
pub fn log_file_path() -> String {
    format!(
        "./logs/fsa_graph_{}.txt",
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Installs a global `tracing` subscriber as described by the config.
///
/// Returns `Ok(false)` if logging is disabled. Installing twice in the same
/// process is an error, since `tracing` only allows one global subscriber.
pub fn init_tracing(config: &LoggerConfig) -> anyhow::Result<bool> {
    if !*config.get_enabled() {
        return Ok(false);
    }

    let level = Level::from(*config.get_log_level());
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    if *config.get_log_file() {
        fs::create_dir_all("./logs")?;
        let file = File::create(log_file_path())?;

        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;
    } else {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;
    }

    Ok(true)
}

#[test]
fn test_log_level_from_str() {
    assert_eq!("dbg".parse::<LogLevel>(), Ok(LogLevel::Debug));
    assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert!("verbose".parse::<LogLevel>().is_err());
    assert_eq!(LogLevel::Error.short_name(), "ERR");
}
