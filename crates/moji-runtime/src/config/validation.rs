//! Configuration validation.

use super::error::{ConfigError, ConfigResult};
use super::schema::{LogOutput, MojiConfig};

/// Validates value ranges that the schema types cannot express.
pub fn validate_config(config: &MojiConfig) -> ConfigResult<()> {
    if config.volume > 100 {
        return Err(ConfigError::validation(format!(
            "volume must be within [0, 100], got {}",
            config.volume
        )));
    }

    if config.resources.max_depth == 0 {
        return Err(ConfigError::validation(
            "resources.max_depth must be at least 1",
        ));
    }

    if config.logging.output == LogOutput::File && config.logging.file_path.is_none() {
        return Err(ConfigError::validation(
            "logging.file_path is required when logging.output is \"file\"",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(validate_config(&MojiConfig::default()).is_ok());
    }

    #[test]
    fn test_volume_over_range_rejected() {
        let config = MojiConfig {
            volume: 101,
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut config = MojiConfig::default();
        config.resources.max_depth = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_file_output_requires_path() {
        let mut config = MojiConfig::default();
        config.logging.output = LogOutput::File;
        assert!(validate_config(&config).is_err());

        config.logging.file_path = Some("moji.log".into());
        assert!(validate_config(&config).is_ok());
    }
}
