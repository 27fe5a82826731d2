use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "LANTERN_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address to listen on, e.g. "127.0.0.1:8080"
    pub listen_addr: String,
    /// Directory whose files are served
    pub root: PathBuf,
    /// Seconds a connection may stay silent before it is dropped
    pub idle_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            root: PathBuf::from("public"),
            idle_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Loads the config file named by `LANTERN_CONFIG`, if any, then applies
    /// environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let base = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                Self::from_yaml(&raw).with_context(|| format!("invalid config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parses a YAML document; absent keys keep their defaults.
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to a map
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(raw)?)
    }

    /// Applies `LISTEN`, `SERVE_ROOT` and `IDLE_TIMEOUT_SECS` from `lookup`.
    pub fn with_overrides<L>(mut self, lookup: L) -> anyhow::Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN") {
            self.listen_addr = addr;
        }

        if let Some(root) = lookup("SERVE_ROOT") {
            self.root = PathBuf::from(root);
        }

        if let Some(secs) = lookup("IDLE_TIMEOUT_SECS") {
            self.idle_timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("IDLE_TIMEOUT_SECS is not a number: {secs}"))?;
        }

        Ok(self)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}
