//! Host configuration parsed from the optional JSON string handed to `start`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_CANVAS_ID, DEFAULT_DRAG_CURSOR, DEFAULT_FRAME_BUDGET, DEFAULT_LOG_LEVEL, DEFAULT_QUALITY};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Element id of the target canvas.
    pub canvas_id: String,
    /// First controller factory argument. The shipped controller uses it as
    /// the raw window handle id; the canvas must carry a matching
    /// `data-raw-handle` attribute.
    pub quality: u32,
    /// Frames rendered per loop (re)start.
    pub frame_budget: u32,
    /// Cursor style shown while dragging.
    pub drag_cursor: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
            quality: DEFAULT_QUALITY,
            frame_budget: DEFAULT_FRAME_BUDGET,
            drag_cursor: DEFAULT_DRAG_CURSOR.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl HostConfig {
    /// Parse config from JSON. Missing fields take their defaults; `None`
    /// or a blank string yields the default config.
    pub fn from_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        let config = match raw.map(str::trim) {
            None | Some("") => Self::default(),
            Some(text) => serde_json::from_str::<Self>(text)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolved log level filter.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        parse_level(&self.log_level)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_id.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "canvas_id", reason: "must not be empty".into() });
        }
        if self.frame_budget == 0 {
            return Err(ConfigError::Invalid { field: "frame_budget", reason: "must be at least 1".into() });
        }
        parse_level(&self.log_level)?;
        Ok(())
    }
}

fn parse_level(raw: &str) -> Result<log::Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(log::Level::Trace),
        "debug" => Ok(log::Level::Debug),
        "info" => Ok(log::Level::Info),
        "warn" => Ok(log::Level::Warn),
        "error" => Ok(log::Level::Error),
        other => Err(ConfigError::Invalid { field: "log_level", reason: format!("unknown level '{other}'") }),
    }
}
