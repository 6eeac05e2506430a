use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub io: IoConfig,
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IoConfig {
    /// CSV file with the raw sales lines
    pub input_path: String,
    /// Directory receiving the four report files
    pub output_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Run the four reports concurrently
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

pub const CONFIG_ENV_VAR: &str = "SUPERSTORE_CONFIG";
pub const ENV_PREFIX: &str = "SUPERSTORE";

/// Loads settings from the file named by `SUPERSTORE_CONFIG` (default `config`).
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Defaults, then the optional file at `config_path`, then `SUPERSTORE_*` env vars.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("io.input_path", "../SampleSuperstore.csv")?
        .set_default("io.output_dir", "../output")?
        .set_default("engine.parallel", false)?
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
