use serde::Deserialize;

use crate::navigator::DEFAULT_SETTLE_DELAY_MS;
use crate::resolver::ReferencePoint;
use crate::splash::{DEFAULT_CROSSFADE_MS, DEFAULT_SPLASH_MAX_WAIT_MS, DEFAULT_SPLASH_MIN_MS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
    #[error("splash max wait {max_wait_ms}ms is shorter than the minimum {min_ms}ms")]
    MaxWaitBelowMinimum { min_ms: u32, max_wait_ms: u32 },
    #[error("reference point must be a finite number of pixels")]
    NonFiniteReference,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub settle_delay_ms: u32,
    pub splash_min_ms: u32,
    pub splash_max_wait_ms: u32,
    pub crossfade_ms: u32,
    pub reference: ReferencePoint,
    pub skip_splash: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            splash_min_ms: DEFAULT_SPLASH_MIN_MS,
            splash_max_wait_ms: DEFAULT_SPLASH_MAX_WAIT_MS,
            crossfade_ms: DEFAULT_CROSSFADE_MS,
            reference: ReferencePoint::default(),
            skip_splash: false,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.splash_max_wait_ms < self.splash_min_ms {
            return Err(ConfigError::MaxWaitBelowMinimum {
                min_ms: self.splash_min_ms,
                max_wait_ms: self.splash_max_wait_ms,
            });
        }
        if !self.reference.is_finite() {
            return Err(ConfigError::NonFiniteReference);
        }
        Ok(())
    }

    /// Applies one URL query override. Returns `Ok(false)` for keys that are
    /// not config keys. Raising `splash_ms` past the max wait drags the max
    /// wait along.
    pub fn apply_param(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        let value = value.trim();
        match key {
            "settle_ms" => {
                self.settle_delay_ms = parse_ms(key, value)?;
            }
            "splash_ms" => {
                self.splash_min_ms = parse_ms(key, value)?;
                self.splash_max_wait_ms = self.splash_max_wait_ms.max(self.splash_min_ms);
            }
            "skip_splash" => {
                self.skip_splash = parse_flag(key, value)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_ms(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "" | "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
