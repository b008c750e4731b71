use crate::config::types::{Config, DensityConfig, FetchConfig, LinkConfig, SpeedConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// Called after loading a file and again after command-line overrides are
/// applied.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_link_config(&config.links)?;
    validate_density_config(&config.density)?;
    validate_speed_config(&config.speed)?;
    Ok(())
}

fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    validate_timeout("fetch.timeout-secs", config.timeout_secs)?;

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_link_config(config: &LinkConfig) -> Result<(), ConfigError> {
    if config.max_links < 1 || config.max_links > 100 {
        return Err(ConfigError::Validation(format!(
            "max-links must be between 1 and 100, got {}",
            config.max_links
        )));
    }

    validate_timeout("links.probe-timeout-secs", config.probe_timeout_secs)?;

    if let Some(concurrency) = config.concurrency {
        if concurrency < 1 || concurrency > 100 {
            return Err(ConfigError::Validation(format!(
                "concurrency must be between 1 and 100, got {}",
                concurrency
            )));
        }
    }

    Ok(())
}

fn validate_density_config(config: &DensityConfig) -> Result<(), ConfigError> {
    if config.min_length < 1 || config.min_length > 32 {
        return Err(ConfigError::Validation(format!(
            "min-length must be between 1 and 32, got {}",
            config.min_length
        )));
    }
    Ok(())
}

fn validate_speed_config(config: &SpeedConfig) -> Result<(), ConfigError> {
    if let Some(key) = &config.api_key {
        if key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api-key cannot be blank; omit it to disable scoring".to_string(),
            ));
        }
    }

    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid speed endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Speed endpoint '{}' must use HTTP or HTTPS",
            config.endpoint
        )));
    }

    Ok(())
}

fn validate_timeout(name: &str, secs: u64) -> Result<(), ConfigError> {
    if secs < 1 || secs > 120 {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and 120 seconds, got {}",
            name, secs
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_max_links_bounds() {
        let mut config = Config::default();
        config.links.max_links = 0;
        assert!(validate_config(&config).is_err());

        config.links.max_links = 101;
        assert!(validate_config(&config).is_err());

        config.links.max_links = 100;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_timeouts() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.links.probe_timeout_secs = 500;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_concurrency() {
        let mut config = Config::default();
        config.links.concurrency = Some(0);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_concurrency_upper_bound() {
        let mut config = Config::default();
        config.links.concurrency = Some(9_000_000_000_000_000_000);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Validation(_))
        ));

        config.links.concurrency = Some(101);
        assert!(validate_config(&config).is_err());

        config.links.concurrency = Some(100);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_min_length() {
        let mut config = Config::default();
        config.density.min_length = 0;
        assert!(validate_config(&config).is_err());

        config.density.min_length = 1;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_speed_endpoint() {
        let mut config = Config::default();
        config.speed.endpoint = "not a url".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidUrl(_))
        ));

        config.speed.endpoint = "ftp://scores.example.com/".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_validate_blank_api_key() {
        let mut config = Config::default();
        config.speed.api_key = Some("   ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let mut config = Config::default();
        config.fetch.user_agent = String::new();
        assert!(validate_config(&config).is_err());
    }
}
