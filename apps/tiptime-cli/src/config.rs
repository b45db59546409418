//! # Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPTIME_*`)
//! 2. Config file (`--config <PATH>`, else `tiptime.toml` if present)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `TIPTIME_LOCALE`: currency locale (`en-IN`, `en-US`, `en-GB`)
//! - `TIPTIME_DEFAULT_TIER`: tier used when none is selected (`10`, `15`, `20`)
//! - `TIPTIME_TEMPLATE`: result sentence, must contain `%s`
//! - `TIPTIME_ROUND_UP`: round-up toggle state when not given explicitly
//!
//! Configuration is read-only after loading.

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use tiptime_core::TipTier;
use tracing::debug;

use crate::display::{CurrencyFormat, TipTemplate};
use crate::error::ConfigError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tiptime.toml";

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "TIPTIME";

/// Settings as written in files and the environment, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    locale: String,
    default_tier: String,
    template: String,
    round_up: bool,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TipConfig {
    /// Locale tag the currency format was chosen from.
    pub locale: String,

    /// Currency rendering for the result line.
    pub currency: CurrencyFormat,

    /// Tier applied when no selection is made.
    pub default_tier: TipTier,

    /// Result sentence.
    pub template: TipTemplate,

    /// Round-up toggle state when the caller does not set one.
    pub round_up: bool,
}

impl Default for TipConfig {
    /// `en-IN`, 10% when unselected, `Tip Amount: %s`, no round-up.
    fn default() -> Self {
        TipConfig {
            locale: "en-IN".to_string(),
            currency: CurrencyFormat::default(),
            default_tier: TipTier::Ten,
            template: TipTemplate::default(),
            round_up: false,
        }
    }
}

impl TipConfig {
    /// Loads configuration from defaults, an optional file and the environment.
    ///
    /// An explicit `path` must exist; the implicit `tiptime.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = defaults()?
            .add_source(file)
            .add_source(environment());

        let config = Self::from_builder(builder)?;
        debug!(
            locale = %config.locale,
            default_tier = %config.default_tier,
            round_up = config.round_up,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Builds and validates configuration from an assembled builder.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let raw: RawConfig = builder.build()?.try_deserialize()?;
        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let currency = CurrencyFormat::for_locale(&raw.locale)?;

        let default_tier = raw
            .default_tier
            .parse::<TipTier>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "default_tier".to_string(),
                reason: e.to_string(),
            })?;

        let template = TipTemplate::new(raw.template)?;

        Ok(TipConfig {
            locale: raw.locale.trim().to_string(),
            currency,
            default_tier,
            template,
            round_up: raw.round_up,
        })
    }
}

/// A builder pre-populated with the default settings.
pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = Config::builder()
        .set_default("locale", "en-IN")?
        .set_default("default_tier", "ten")?
        .set_default("template", "Tip Amount: %s")?
        .set_default("round_up", false)?;
    Ok(builder)
}

/// The `TIPTIME_*` environment layer.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
}
