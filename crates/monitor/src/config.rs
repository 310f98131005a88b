//! Environment-driven settings for the monitor binary.

use std::time::Duration;

use vitals_core::DEFAULT_BLINK_INTERVAL;

/// Environment variable overriding the pause after each blink frame.
pub const ENV_BLINK_INTERVAL_MS: &str = "VITALS_BLINK_INTERVAL_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub blink_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            blink_interval: DEFAULT_BLINK_INTERVAL,
        }
    }
}

impl MonitorConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unparseable values fall
    /// back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BLINK_INTERVAL_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.blink_interval = Duration::from_millis(ms),
                Err(e) => {
                    tracing::warn!(
                        var = ENV_BLINK_INTERVAL_MS,
                        value = %raw,
                        error = %e,
                        "Ignoring invalid blink interval",
                    );
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_second() {
        let config = MonitorConfig::from_lookup(|_| None);
        assert_eq!(config.blink_interval, Duration::from_secs(1));
    }

    #[test]
    fn reads_interval_override() {
        let config = MonitorConfig::from_lookup(|key| {
            (key == ENV_BLINK_INTERVAL_MS).then(|| "250".to_string())
        });
        assert_eq!(config.blink_interval, Duration::from_millis(250));
    }

    #[test]
    fn invalid_interval_falls_back() {
        let config = MonitorConfig::from_lookup(|_| Some("soon".to_string()));
        assert_eq!(config, MonitorConfig::default());
    }
}
