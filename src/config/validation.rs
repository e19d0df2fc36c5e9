//! Configuration validation.
//!
//! Serde handles the syntactic side; this module checks value ranges and
//! formats. Returns all validation errors, not just the first.

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::new("server.host", "must not be empty"));
    }

    let db = &config.database;
    if db.host.trim().is_empty() {
        errors.push(ValidationError::new("database.host", "must not be empty"));
    }
    if db.user.trim().is_empty() {
        errors.push(ValidationError::new("database.user", "must not be empty"));
    }
    if db.name.trim().is_empty() {
        errors.push(ValidationError::new("database.name", "must not be empty"));
    }
    if db.pool_size == 0 {
        errors.push(ValidationError::new("database.pool_size", "must be at least 1"));
    }
    if db.acquire_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "database.acquire_timeout_secs",
            "must be greater than 0",
        ));
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ValidationError::new(
            "cors.allowed_origins",
            "at least one origin is required",
        ));
    }
    for origin in &config.cors.allowed_origins {
        let has_scheme = origin.starts_with("http://") || origin.starts_with("https://");
        if !has_scheme || origin.ends_with('/') || HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::new(
                "cors.allowed_origins",
                format!("'{}' is not a valid origin", origin),
            ));
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::new(
            "security.max_body_size",
            "must be greater than 0",
        ));
    }

    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must be greater than 0 when set",
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
