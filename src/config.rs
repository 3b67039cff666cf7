//! Configuration
//!
//! Environment-driven settings for the demo binary. Everything has a
//! default; only malformed numeric values are errors.

use std::env;

use thiserror::Error;

use crate::accessibility::{detect_motion_preference, MotionPreference};
use crate::orchestrator::BASE_DURATION_MS;
use crate::state::ClapState;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a non-negative integer")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime configuration for the clap control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Initial interaction state (accepted unvalidated, like the state
    /// machine itself).
    pub initial: ClapState,
    /// Base duration `D` for the effect choreography, in milliseconds.
    pub base_duration_ms: u64,
    /// User motion preference.
    pub motion: MotionPreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: ClapState::default(),
            base_duration_ms: BASE_DURATION_MS,
            motion: MotionPreference::Full,
        }
    }
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `OVATION_TOTAL`: initial community total (default 49)
    /// - `OVATION_DURATION_MS`: base effect duration (default 300)
    /// - `REDUCE_MOTION`: motion preference, see [`crate::accessibility`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self {
            motion: detect_motion_preference(),
            ..Self::default()
        };

        if let Ok(value) = env::var("OVATION_TOTAL") {
            config.initial.count_total = parse_var("OVATION_TOTAL", &value)?;
        }
        if let Ok(value) = env::var("OVATION_DURATION_MS") {
            config.base_duration_ms = parse_var("OVATION_DURATION_MS", &value)?;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.initial, ClapState::default());
        assert_eq!(config.base_duration_ms, 300);
        assert_eq!(config.motion, MotionPreference::Full);
    }

    #[test]
    fn test_parse_var_accepts_whitespace() {
        let parsed: u64 = parse_var("OVATION_TOTAL", " 100 ").unwrap();
        assert_eq!(parsed, 100);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        let err = parse_var::<u64>("OVATION_TOTAL", "lots").unwrap_err();
        assert!(err.to_string().contains("OVATION_TOTAL"));
    }
}
