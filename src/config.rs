//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HTDOCS_DIR: &str = "htdocs";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
    #[error("HTDOCS_DIR '{0}' is not a directory")]
    MissingHtdocs(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub htdocs_dir: PathBuf,
    pub prerender: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HTDOCS_DIR`: directory served at `/`, default `htdocs`
    /// - `PRERENDER`: `true` (default) or `false`; mount the widget into
    ///   XHTML pages before sending them
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                reason: "expected a port number",
            })?,
        };
        let htdocs_dir = lookup("HTDOCS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_HTDOCS_DIR), PathBuf::from);
        let prerender = parse_bool("PRERENDER", lookup("PRERENDER").as_deref(), true)?;

        Ok(Self { port, htdocs_dir, prerender })
    }

    /// Fail early if the document root does not exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.htdocs_dir.is_dir() {
            Ok(())
        } else {
            Err(ConfigError::MissingHtdocs(self.htdocs_dir.clone()))
        }
    }
}

fn parse_bool(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw.to_owned(), reason: "expected true or false" }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
