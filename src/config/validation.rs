use crate::config::types::{
    Config, PolitenessConfig, ScopeConfig, TrapConfig, UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scope_config(&config.scope)?;
    validate_politeness_config(&config.politeness)?;
    validate_trap_config(&config.traps)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates scope configuration
fn validate_scope_config(config: &ScopeConfig) -> Result<(), ConfigError> {
    if config.allowed_schemes.is_empty() {
        return Err(ConfigError::Validation(
            "allowed_schemes cannot be empty".to_string(),
        ));
    }

    for scheme in &config.allowed_schemes {
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::Validation(format!(
                "allowed_schemes may only contain http and https, got '{}'",
                scheme
            )));
        }
    }

    if config.allowed_host_suffixes.is_empty() {
        return Err(ConfigError::Validation(
            "allowed_host_suffixes cannot be empty".to_string(),
        ));
    }

    for suffix in &config.allowed_host_suffixes {
        validate_host_suffix(suffix)?;
    }

    for ext in &config.excluded_extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "excluded extension must be alphanumeric, got '{}'",
                ext
            )));
        }
    }

    Ok(())
}

/// Validates a single domain suffix: non-empty dot-separated labels
fn validate_host_suffix(suffix: &str) -> Result<(), ConfigError> {
    if suffix.is_empty() {
        return Err(ConfigError::Validation(
            "host suffix cannot be empty".to_string(),
        ));
    }

    for label in suffix.split('.') {
        if label.is_empty() {
            return Err(ConfigError::Validation(format!(
                "host suffix '{}' contains an empty label",
                suffix
            )));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::Validation(format!(
                "host suffix '{}' contains invalid characters",
                suffix
            )));
        }
    }

    Ok(())
}

/// Validates politeness configuration
fn validate_politeness_config(config: &PolitenessConfig) -> Result<(), ConfigError> {
    // A zero default would let workers hammer any host whose robots.txt
    // specifies no crawl-delay.
    if config.default_delay_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "default_delay_ms must be >= 100ms, got {}ms",
            config.default_delay_ms
        )));
    }

    if config.robots_timeout_secs < 1 || config.robots_timeout_secs > 60 {
        return Err(ConfigError::Validation(format!(
            "robots_timeout_secs must be between 1 and 60, got {}",
            config.robots_timeout_secs
        )));
    }

    Ok(())
}

/// Validates trap-detection thresholds
fn validate_trap_config(config: &TrapConfig) -> Result<(), ConfigError> {
    if config.max_query_params < 1 {
        return Err(ConfigError::Validation(
            "max_query_params must be >= 1".to_string(),
        ));
    }

    if config.max_path_segments < 1 {
        return Err(ConfigError::Validation(
            "max_path_segments must be >= 1".to_string(),
        ));
    }

    if config.max_segment_repeats < 1 {
        return Err(ConfigError::Validation(
            "max_segment_repeats must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Basic email validation: one '@' with non-empty local and domain parts
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };

    if !valid {
        return Err(ConfigError::Validation(format!(
            "contact_email is not a valid email address: '{}'",
            email
        )));
    }

    Ok(())
}
