//! Handles settings for the application. Configuration is written in
//! `settings.toml`, with `GRUZZOLO_*` environment variables taking
//! precedence.
//!
//! See `settings.toml` for the configuration.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// Defaults to a local file-backed sqlite store when absent.
    pub database: Option<Database>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 3000)?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("GRUZZOLO").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
