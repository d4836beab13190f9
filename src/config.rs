// ⚙️ Registry Configuration
// One value: how many dollars one energy unit costs

use crate::error::{Result, SwapError};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the conversion rate
pub const CONVERSION_RATE_ENV: &str = "BATTERY_SWAP_CONVERSION_RATE";

/// Rate used when nothing else is configured
pub const DEFAULT_CONVERSION_RATE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Unitless multiplier: cost = energy_used * conversion_rate
    pub conversion_rate: f64,
}

impl RegistryConfig {
    pub fn new(conversion_rate: f64) -> Self {
        RegistryConfig { conversion_rate }
    }

    /// Read the conversion rate from the environment, falling back to the default
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(CONVERSION_RATE_ENV).ok().as_deref())
    }

    fn from_value(raw: Option<&str>) -> Result<Self> {
        match raw {
            None => Ok(Self::default()),
            Some(value) => value
                .trim()
                .parse::<f64>()
                .map(Self::new)
                .map_err(|_| SwapError::InvalidConfig {
                    key: CONVERSION_RATE_ENV.to_string(),
                    value: value.to_string(),
                }),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERSION_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        assert_eq!(RegistryConfig::default().conversion_rate, 0.1);
    }

    #[test]
    fn test_missing_value_uses_default() {
        let config = RegistryConfig::from_value(None).unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_parses_value() {
        let config = RegistryConfig::from_value(Some(" 0.25 ")).unwrap();
        assert_eq!(config.conversion_rate, 0.25);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = RegistryConfig::from_value(Some("cheap")).unwrap_err();
        assert!(matches!(err, SwapError::InvalidConfig { .. }));
    }
}
