use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};

/// Provides the default eval timeout.
fn default_eval_timeout() -> Duration {
    Duration::from_millis(5_000)
}

/// Provides the default inbound channel capacity.
fn default_channel_capacity() -> usize {
    64
}

/// Configuration for the host bridge adapter and the message relay.
#[derive(Debug, Deserialize, Clone)]
pub struct BridgeConfig {
    /// Maximum time to wait for the native eval callback, in milliseconds.
    /// The native call itself cannot be aborted once issued; on expiry the
    /// wait is abandoned and the request fails with a timeout.
    #[serde(
        default = "default_eval_timeout",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub eval_timeout: Duration,

    /// Capacity of the relay's inbound message channel.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            eval_timeout: default_eval_timeout(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl BridgeConfig {
    /// Creates a `BridgeConfig` by reading `bridge.yaml` from the
    /// configuration directory, with `PANEL_BRIDGE`-prefixed environment
    /// variables taking precedence. A missing file falls back to defaults.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/bridge.yaml", config_dir_str)).required(false))
            .add_source(Environment::with_prefix("PANEL_BRIDGE").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}

/// Custom deserializer for Duration from milliseconds
fn deserialize_duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_config_default() {
        let config = BridgeConfig::default();
        assert_eq!(config.eval_timeout, Duration::from_millis(5_000));
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn test_bridge_config_custom_values_yaml() {
        let yaml = "
            eval_timeout: 2500
            channel_capacity: 128
        ";

        let builder =
            Config::builder().add_source(config::File::from_str(yaml, config::FileFormat::Yaml));
        let config: BridgeConfig = builder.build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.eval_timeout, Duration::from_millis(2_500));
        assert_eq!(config.channel_capacity, 128);
    }

    #[test]
    fn test_bridge_config_partial_yaml_uses_defaults() {
        let yaml = "eval_timeout: 750";

        let builder =
            Config::builder().add_source(config::File::from_str(yaml, config::FileFormat::Yaml));
        let config: BridgeConfig = builder.build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.eval_timeout, Duration::from_millis(750));
        assert_eq!(config.channel_capacity, default_channel_capacity());
    }

    #[test]
    fn test_bridge_config_from_file() {
        let config_content = "
        eval_timeout: 1234
        channel_capacity: 16
        ";
        let temp_dir = tempfile::tempdir().unwrap();
        let bridge_yaml_path = temp_dir.path().join("bridge.yaml");
        std::fs::write(&bridge_yaml_path, config_content).unwrap();

        let config = BridgeConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();
        assert_eq!(config.eval_timeout, Duration::from_millis(1_234));
        assert_eq!(config.channel_capacity, 16);
    }

    #[test]
    fn test_bridge_config_missing_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BridgeConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();
        assert_eq!(config.eval_timeout, Duration::from_millis(5_000));
        assert_eq!(config.channel_capacity, 64);
    }
}
