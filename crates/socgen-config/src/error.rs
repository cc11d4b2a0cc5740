//! Error types for configuration operations.

use std::path::PathBuf;

use crate::validate::ValidationIssue;

/// Errors that can occur while loading or checking a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The configuration parsed but failed validation.
    #[error("invalid configuration: {}", format_issues(issues))]
    Invalid {
        /// Every violation found, each naming its field.
        issues: Vec<ValidationIssue>,
    },
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_error_lists_every_field() {
        let err = ConfigError::Invalid {
            issues: vec![
                ValidationIssue {
                    field: "timing.clock-frequency-hz",
                    message: "clock frequency must be positive".into(),
                },
                ValidationIssue {
                    field: "memory.ram-addressing-mode",
                    message: "addressing mode 9 is out of range".into(),
                },
            ],
        };
        let text = err.to_string();
        assert!(text.contains("timing.clock-frequency-hz"));
        assert!(text.contains("memory.ram-addressing-mode"));
    }
}
