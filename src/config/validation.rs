use crate::config::types::{CrawlConfig, HttpConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_home_url(&config.home_url)?;

    if config.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_path cannot be empty".to_string(),
        ));
    }

    validate_http_config(&config.http)?;
    Ok(())
}

/// The home URL must be absolute http(s); relative links are joined onto it
fn validate_home_url(home_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(home_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid home_url '{}': {}", home_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "home_url '{}' must use http or https",
            home_url
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}
