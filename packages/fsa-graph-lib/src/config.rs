use fsa_graph_macros::config;

use crate::logger::LogLevel;

pub trait GeneralConfig {
    fn logger(&self) -> &LoggerConfig;
}

config! {
    pub struct LoggerConfig {
        enabled: bool = false,
        log_file: bool = false,
        log_level: LogLevel = LogLevel::Warn,
    }
}

config! {
    /// Options for turning a nondeterministic graph into a deterministic one.
    pub struct DeterminizeConfig {
        /// Keep the empty subset as an explicit trap vertex. With this off,
        /// transitions into the empty subset are left out of the result.
        dead_state: bool = true,
        #[nested]
        logger: LoggerConfig = LoggerConfig::default(),
    }
}

impl GeneralConfig for DeterminizeConfig {
    fn logger(&self) -> &LoggerConfig {
        &self.logger
    }
}
