// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for toolbadge.
//!
//! Formatting itself never fails. Errors only arise at the edges: decoding
//! invocation records handed over by a transport, and loading configuration.
//! Each concern gets a `thiserror` enum; the binary propagates with `anyhow`.

use thiserror::Error;

/// Errors that can occur while decoding a tool invocation record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid lifecycle state: {0}")]
    InvalidState(String),

    #[error("Invalid invocation record: {0}")]
    Json(String),
}

impl From<serde_json::Error> for InvocationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config format: {0}")]
    InvalidFormat(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("IO error reading config: {0}")]
    IoError(String),

    #[error("YAML parsing error: {0}")]
    YamlError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl ConfigError {
    /// Create an invalid value error for a named field.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            _ => Self::IoError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// Result type alias using anyhow for flexible error handling.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::NotFound(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_config_error_from_json() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid json");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(matches!(config_err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_invocation_error_from_json() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: InvocationError = result.unwrap_err().into();
        assert!(matches!(err, InvocationError::Json(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::invalid_value("maxFileNameLength", "must be greater than zero");
        let display = format!("{}", err);
        assert!(display.contains("maxFileNameLength"));
        assert!(display.contains("greater than zero"));

        assert_eq!(
            InvocationError::MissingField("toolName").to_string(),
            "Missing required field: toolName"
        );
    }
}
