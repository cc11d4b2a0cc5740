//! `socgen check`: validation and derived values, no writes.

use anyhow::{bail, Result};
use socgen_config::{derive, validate_config, SocConfig};
use socgen_render::format::{hex8, ns4};

/// Validate the configuration and print the derived values.
pub fn run(config: &SocConfig) -> Result<()> {
    if let Err(issues) = validate_config(config) {
        for issue in &issues {
            eprintln!("error: {}: {}", issue.field, issue.message);
        }
        bail!("configuration is invalid ({} issue(s))", issues.len());
    }

    let derived = derive(config)?;

    println!("Configuration OK: board '{}'", config.board.name);
    println!();
    println!("--- Derived ---");
    println!("  Memory end:   0x{}", hex8(derived.memory_end_address));
    println!("  Clock period: {} ns", ns4(derived.clock_period_ns));
    println!("  Waveform mid: {} ns", ns4(derived.clock_waveform_mid_ns));

    Ok(())
}
