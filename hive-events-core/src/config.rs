//! Board configuration, read from `TRELLO_*` environment variables.
//!
//! Resolved once at startup and shared read-only afterwards.

use config::{Config, Environment};
use serde::Deserialize;

use crate::board::BoardIds;
use crate::error::{EventsError, EventsResult};

static ENV_PREFIX: &str = "TRELLO";
static DEFAULT_API_BASE: &str = "https://api.trello.com";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Flat view of the environment: `TRELLO_BOARD_MEETING` becomes
/// `board_meeting` and so on.
#[derive(Deserialize)]
struct TrelloEnv {
    board_meeting: String,
    board_beekeeping: String,
    board_collective: String,
    key: String,
    token: String,
    #[serde(default = "default_api_base")]
    api_base: String,
}

/// API key/token pair sent with every board request.
#[derive(Clone)]
pub struct Credentials {
    pub key: String,
    pub token: String,
}

#[derive(Clone)]
pub struct Settings {
    pub boards: BoardIds,
    pub credentials: Credentials,
    /// Scheme and host of the board API, without a trailing slash.
    pub api_base: String,
}

impl Settings {
    /// Load from the process environment.
    pub fn from_env() -> EventsResult<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit set of variables instead of the process
    /// environment.
    pub fn from_vars<I, K, V>(vars: I) -> EventsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: Environment) -> EventsResult<Self> {
        let raw: TrelloEnv = Config::builder()
            .add_source(env)
            .build()
            .map_err(|e| EventsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventsError::Config(e.to_string()))?;

        Ok(Settings {
            boards: BoardIds {
                meeting: raw.board_meeting,
                beekeeping: raw.board_beekeeping,
                collective: raw.board_collective,
            },
            credentials: Credentials {
                key: raw.key,
                token: raw.token,
            },
            api_base: raw.api_base.trim_end_matches('/').to_string(),
        })
    }
}
