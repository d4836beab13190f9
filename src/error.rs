// ⚠️ Error Taxonomy
// Swap failures, configuration failures, export failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ENTITY KIND
// ============================================================================

/// Which of the three registered collections a lookup ran against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Battery,
    Driver,
    Station,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Battery => "battery",
            EntityKind::Driver => "driver",
            EntityKind::Station => "station",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SWAP ERROR
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum SwapError {
    /// A swap referenced an identifier that was never registered.
    /// Only the first missing entity (battery, then driver, then station) is named.
    #[error("invalid battery, driver, or station: {kind} '{id}' is not registered")]
    NotFound { kind: EntityKind, id: String },

    #[error("invalid configuration value for {key}: '{value}'")]
    InvalidConfig { key: String, value: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        SwapError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SwapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_missing_entity() {
        let err = SwapError::NotFound {
            kind: EntityKind::Battery,
            id: "BX".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "invalid battery, driver, or station: battery 'BX' is not registered"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let err = SwapError::InvalidConfig {
            key: "BATTERY_SWAP_CONVERSION_RATE".to_string(),
            value: "cheap".to_string(),
        };

        assert!(err.to_string().contains("BATTERY_SWAP_CONVERSION_RATE"));
        assert!(err.to_string().contains("cheap"));
    }
}
