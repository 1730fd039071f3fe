//! CLI configuration: a thin wrapper around `kataboard_config`.
//!
//! Loads the shared config and applies `GlobalOpts` flag overrides
//! (--api-url, --timeout, --output, --color).

use clap::ValueEnum;

use kataboard_core::FetcherConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Re-exports from shared crate ────────────────────────────────────

pub use kataboard_config::{Config, config_path, load_config, save_config, to_toml};

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub fetcher: FetcherConfig,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

/// Apply CLI flag overrides to a loaded config.
pub fn apply_overrides(mut cfg: Config, global: &GlobalOpts) -> Config {
    if let Some(ref url) = global.api_url {
        cfg.api_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    cfg
}

/// Resolve settings: config file + env, then flags.
pub fn resolve(cfg: Config, global: &GlobalOpts) -> Result<Settings, CliError> {
    let cfg = apply_overrides(cfg, global);
    let fetcher = cfg.to_fetcher_config()?;

    let output = match global.output {
        Some(format) => format,
        None => parse_value::<OutputFormat>("output", &cfg.output)?,
    };
    let color_mode = match global.color {
        Some(mode) => mode,
        None => parse_value::<ColorMode>("color", &cfg.color)?,
    };

    Ok(Settings {
        fetcher,
        output,
        color: output::should_color(color_mode),
        quiet: global.quiet,
    })
}

fn parse_value<T: ValueEnum>(field: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}
