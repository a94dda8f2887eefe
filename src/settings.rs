//! Server settings, read from `HIVE_EVENTS_*` environment variables.

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

static ENV_PREFIX: &str = "HIVE_EVENTS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4097;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    fn load(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
            .context("Invalid HIVE_EVENTS_* settings")
    }
}
