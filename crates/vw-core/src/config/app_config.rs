//! Application configuration DTO.
//!
//! Pure data mapped from the TOML config file. Every field is optional;
//! absent values mean "keep the built-in default". No validation happens
//! here: carousel settings are checked when they are applied to a
//! [`CarouselConfig`](crate::carousel::CarouselConfig).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::carousel::Breakpoint;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    /// Per-carousel overrides keyed by preset name (`patents`, `curriculum`, `values`).
    #[serde(rename = "carousel")]
    pub carousels: BTreeMap<String, CarouselSettings>,
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `"info,vw_app=debug"`. `RUST_LOG` wins.
    pub level: Option<String>,
    /// Directory for the log file; stdout only when absent.
    pub directory: Option<PathBuf>,
}

/// Overrides for one carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub autoplay: Option<bool>,
    pub interval_ms: Option<u64>,
    pub resume_delay_ms: Option<u64>,
    pub transition_ms: Option<u64>,
    pub loop_enabled: Option<bool>,
    pub pause_on_interaction: Option<bool>,
    pub breakpoints: Option<Vec<Breakpoint>>,
}

impl AppConfig {
    pub fn carousel(&self, name: &str) -> Option<&CarouselSettings> {
        self.carousels.get(name)
    }
}
