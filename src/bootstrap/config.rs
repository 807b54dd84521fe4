//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file into the [`AppConfig`] DTO. Only parsing happens
//! here; carousel settings are checked when wiring applies them.
//!
//! 仅负责读取和解析，不做任何校验。

use anyhow::Context;
use std::path::Path;
use vw_core::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections and keys fall back to defaults.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}
