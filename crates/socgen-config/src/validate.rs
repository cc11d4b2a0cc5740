//! Structural validation of a configuration before any artifact is rendered.

use crate::config::SocConfig;

/// A validation issue found in a configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, in TOML key form.
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Validate a configuration for structural correctness.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with every problem found, each
/// naming the field it concerns. Nothing may be rendered from a configuration
/// that fails this check.
pub fn validate_config(config: &SocConfig) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if config.board.name.is_empty() {
        issues.push(ValidationIssue {
            field: "board.name",
            message: "board name must not be empty".into(),
        });
    }
    if config.board.bitstream_file.is_empty() {
        issues.push(ValidationIssue {
            field: "board.bitstream-file",
            message: "bitstream file path must not be empty".into(),
        });
    }
    if config.board.firmware_file.is_empty() {
        issues.push(ValidationIssue {
            field: "board.firmware-file",
            message: "firmware file path must not be empty".into(),
        });
    }

    // A zero clock would divide by zero when deriving the clock period.
    if config.timing.clock_frequency_hz == 0 {
        issues.push(ValidationIssue {
            field: "timing.clock-frequency-hz",
            message: "clock frequency must be positive".into(),
        });
    }
    if config.timing.cpu_frequency_hz == 0 {
        issues.push(ValidationIssue {
            field: "timing.cpu-frequency-hz",
            message: "CPU frequency must be positive".into(),
        });
    }
    if config.timing.uart_baud_rate == 0 {
        issues.push(ValidationIssue {
            field: "timing.uart-baud-rate",
            message: "baud rate must be positive".into(),
        });
    }

    if config.memory.ram_addressing_mode > 3 {
        issues.push(ValidationIssue {
            field: "memory.ram-addressing-mode",
            message: format!(
                "addressing mode {} is out of range (expected 0, 1, 2, or 3)",
                config.memory.ram_addressing_mode
            ),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
