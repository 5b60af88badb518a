//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Reject unusable directory entries (blank city or café names)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CafeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::CafeConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("city name must not be empty")]
    EmptyCityName,

    #[error("cafe #{index} in '{city}' has an empty name")]
    EmptyCafeName { city: String, index: usize },
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &CafeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(&mut errors, "metrics", &config.observability.metrics_address);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let mut cities: Vec<_> = config.cities.iter().collect();
    cities.sort_by(|a, b| a.0.cmp(b.0));
    for (city, cafes) in cities {
        if city.trim().is_empty() {
            errors.push(ValidationError::EmptyCityName);
        }
        for (index, cafe) in cafes.iter().enumerate() {
            if cafe.name.trim().is_empty() {
                errors.push(ValidationError::EmptyCafeName {
                    city: city.clone(),
                    index,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Cafe;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&CafeConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = CafeConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidAddress {
                    field: "listener",
                    value: "localhost".into()
                },
                ValidationError::ZeroTimeout,
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = CafeConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_names() {
        let mut config = CafeConfig::default();
        config.cities.insert(
            "moscow".into(),
            vec![Cafe::new("Мир кофе", "", 4.0), Cafe::new("  ", "", 1.0)],
        );
        config.cities.insert("".into(), Vec::new());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyCityName,
                ValidationError::EmptyCafeName {
                    city: "moscow".into(),
                    index: 1
                },
            ]
        );
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = CafeConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
