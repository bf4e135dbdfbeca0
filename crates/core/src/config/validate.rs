use std::collections::HashMap;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Upload limit is not 0
/// - Line throughput is finite and positive
/// - No two order fields share a spreadsheet column
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.upload.max_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "upload.max_bytes cannot be 0".to_string(),
        ));
    }

    let mpm = config.line.meters_per_minute;
    if !mpm.is_finite() || mpm <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "line.meters_per_minute must be a positive number, got {}",
            mpm
        )));
    }

    let mut seen: HashMap<usize, &str> = HashMap::new();
    for (field, column) in config.columns.positions() {
        if let Some(other) = seen.insert(column, field) {
            return Err(ConfigError::ValidationError(format!(
                "columns.{} and columns.{} both map to column {}",
                other, field, column
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnMapping, LineConfig, ServerConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                port: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_zero_upload_limit_fails() {
        let mut config = Config::default();
        config.upload.max_bytes = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_bad_throughput_fails() {
        for mpm in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                line: LineConfig {
                    meters_per_minute: mpm,
                },
                ..Default::default()
            };
            assert!(validate_config(&config).is_err(), "accepted {}", mpm);
        }
    }

    #[test]
    fn test_validate_duplicate_columns_fails() {
        let config = Config {
            columns: ColumnMapping {
                color: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("column 3"));
    }
}
