//! Configuration for the sixdeg search engine and CLI.

use serde::Deserialize;

use crate::error::{Result, SearchError};

/// Search configuration.
///
/// Loaded from the `[search]` section of `sixdeg.toml` or
/// `SIXDEG__SEARCH__*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Attach the traversal trace to results unless a request overrides it.
    #[serde(default)]
    pub include_trace: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,

    /// Start node for the `demo` command.
    #[serde(default = "default_demo_start")]
    pub demo_start: String,

    /// Role searched for by the `demo` command.
    #[serde(default = "default_demo_role")]
    pub demo_role: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_demo_start() -> String {
    "you".to_string()
}

fn default_demo_role() -> String {
    "policeOffice".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            include_trace: false,
            log_filter: default_log_filter(),
            log_json: false,
            demo_start: default_demo_start(),
            demo_role: default_demo_role(),
        }
    }
}

impl SearchConfig {
    /// Load from `<file_prefix>.toml` (optional) and the environment.
    ///
    /// A missing `[search]` section yields the defaults.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("SIXDEG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        match cfg.get::<SearchConfig>("search") {
            Ok(c) => Ok(c),
            Err(config::ConfigError::NotFound(_)) => Ok(SearchConfig::default()),
            Err(e) => Err(SearchError::Config(e.to_string())),
        }
    }
}
