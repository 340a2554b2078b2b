//! Server settings loaded from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime settings for the todo server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Application title, shown on the index page
    pub title: String,
    /// One-line description shown under the title
    pub summary: String,
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Deployment environment name ("dev", "prod", ...)
    pub environment: String,
    /// Directory holding `styles/` and `scripts/`
    pub resources_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Todo API".to_string(),
            summary: "A sample todo service".to_string(),
            host: "localhost".to_string(),
            port: 8000,
            environment: "dev".to_string(),
            resources_dir: PathBuf::from("resources"),
        }
    }
}

impl Settings {
    /// Load settings from `.env.local` / `.env` (if present) and the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        for filename in [".env.local", ".env"] {
            if let Err(e) = dotenvy::from_filename(filename) {
                if !e.not_found() {
                    return Err(e).with_context(|| format!("failed to read {filename}"));
                }
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup, falling back to defaults
    /// for anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            title: lookup("APP_TITLE").unwrap_or(defaults.title),
            summary: lookup("APP_SUMMARY").unwrap_or(defaults.summary),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            resources_dir: lookup("RESOURCES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.resources_dir),
        })
    }

    pub fn is_prod(&self) -> bool {
        self.environment.eq_ignore_ascii_case("prod")
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
