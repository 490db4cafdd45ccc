use serde::Deserialize;

use crate::libraries::grid_aggregator::{GridAggregatorConfig, DEFAULT_GRID_SIZE};

/// Prefix for every environment variable the service reads
pub const ENV_PREFIX: &str = "HEATMAP_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    // Cell edge length in degrees
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,

    // Load the five sample points at startup
    #[serde(default = "default_seed_sample_points")]
    pub seed_sample_points: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("HEATMAP_GRID_SIZE must be a positive finite number, got {0}")]
    InvalidGridSize(f64),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    /// Build from explicit `(name, value)` pairs, names including the prefix
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Config>(vars)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        Ok(())
    }

    pub fn aggregator_config(&self) -> GridAggregatorConfig {
        GridAggregatorConfig {
            grid_size: self.grid_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            grid_size: default_grid_size(),
            seed_sample_points: default_seed_sample_points(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_grid_size() -> f64 {
    DEFAULT_GRID_SIZE
}

fn default_seed_sample_points() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.grid_size, 0.01);
        assert!(config.seed_sample_points);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefixed_overrides() {
        let config = Config::from_vars(vars(&[
            ("HEATMAP_HOST", "0.0.0.0"),
            ("HEATMAP_PORT", "9090"),
            ("HEATMAP_GRID_SIZE", "0.5"),
            ("HEATMAP_SEED_SAMPLE_POINTS", "false"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.aggregator_config().grid_size, 0.5);
        assert!(!config.seed_sample_points);
    }

    #[test]
    fn test_malformed_port_is_an_error() {
        let result = Config::from_vars(vars(&[("HEATMAP_PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }

    #[test]
    fn test_validate_rejects_bad_grid_size() {
        for grid_size in [0.0, -1.0, f64::NAN] {
            let config = Config {
                grid_size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidGridSize(_))
            ));
        }
    }
}
