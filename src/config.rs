//! Centralized configuration for snipdb.
//!
//! - SnipConfig::from_env() reads SNIPDB_* variables.
//! - Fluent `with_*` setters override single fields (CLI flags, tests).
//! - snippet_path() resolves the one deterministic file location:
//!   <config_dir>/<file_name>, where config_dir defaults to
//!   `dirs::config_dir()/snipdb` and falls back to `./.snipdb`.

use std::fmt;
use std::path::PathBuf;

use crate::consts::{
    APP_DIR_NAME, ENV_CONFIG_DIR, ENV_FILE, ENV_FILE_LOCK, ENV_PRETTY, FALLBACK_DIR_NAME,
    SNIPPET_FILE,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnipConfig {
    /// Directory holding the snippet file.
    /// Env: SNIPDB_CONFIG_DIR (default: platform config dir + "/snipdb")
    pub config_dir: Option<PathBuf>,

    /// File name inside config_dir.
    /// Env: SNIPDB_FILE (default "snippets.json")
    pub file_name: String,

    /// Advisory fs2 lock around save/load.
    /// Env: SNIPDB_FILE_LOCK (default true; "0|false|off|no" => false)
    pub file_lock: bool,

    /// Pretty-printed JSON on disk.
    /// Env: SNIPDB_PRETTY (default true)
    pub pretty: bool,
}

impl Default for SnipConfig {
    fn default() -> Self {
        Self {
            config_dir: None,
            file_name: SNIPPET_FILE.to_string(),
            file_lock: true,
            pretty: true,
        }
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl SnipConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var(ENV_CONFIG_DIR) {
            let s = v.trim();
            if !s.is_empty() {
                cfg.config_dir = Some(PathBuf::from(s));
            }
        }

        if let Ok(v) = std::env::var(ENV_FILE) {
            let s = v.trim();
            if !s.is_empty() {
                cfg.file_name = s.to_string();
            }
        }

        if let Some(on) = std::env::var(ENV_FILE_LOCK).ok().and_then(|v| parse_flag(&v)) {
            cfg.file_lock = on;
        }

        if let Some(on) = std::env::var(ENV_PRETTY).ok().and_then(|v| parse_flag(&v)) {
            cfg.pretty = on;
        }

        cfg
    }

    pub fn with_config_dir<P: Into<PathBuf>>(mut self, dir: Option<P>) -> Self {
        self.config_dir = dir.map(Into::into);
        self
    }

    pub fn with_file_name<S: Into<String>>(mut self, name: S) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn with_file_lock(mut self, on: bool) -> Self {
        self.file_lock = on;
        self
    }

    pub fn with_pretty(mut self, on: bool) -> Self {
        self.pretty = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> Self {
        self
    }

    /// Effective directory (explicit, platform default, or fallback).
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(d) = &self.config_dir {
            return d.clone();
        }
        dirs::config_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR_NAME))
    }

    pub fn snippet_path(&self) -> PathBuf {
        self.resolved_dir().join(&self.file_name)
    }
}

impl fmt::Display for SnipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SnipConfig {{ config_dir: {}, file_name: {}, file_lock: {}, pretty: {} }}",
            self.config_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "default(platform)".to_string()),
            self.file_name,
            self.file_lock,
            self.pretty,
        )
    }
}
