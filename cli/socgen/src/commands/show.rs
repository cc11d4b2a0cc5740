//! `socgen show`: configuration display.

use anyhow::{bail, Result};
use socgen_config::{config_to_toml, derive, validate_config, SocConfig};
use socgen_render::format::{hex8, ns4};
use socgen_render::ArtifactKind;

/// Show the resolved configuration, human-readable by default or as TOML.
///
/// Rejects an invalid configuration before displaying anything.
pub fn run(config: &SocConfig, format: Option<&str>) -> Result<()> {
    if let Err(issues) = validate_config(config) {
        for issue in &issues {
            eprintln!("error: {}: {}", issue.field, issue.message);
        }
        bail!("configuration is invalid ({} issue(s))", issues.len());
    }

    if format == Some("toml") {
        print!("{}", config_to_toml(config)?);
        return Ok(());
    }

    println!("=== Board: {} ===", config.board.name);
    println!();

    println!("--- Deployment ---");
    println!("  Bitstream file:     {}", config.board.bitstream_file);
    println!(
        "  Bitstream max size: {} bytes",
        config.board.bitstream_file_max_size_bytes
    );
    println!("  External flash:     {}", config.board.bitstream_flash_to_external);
    println!("  Firmware file:      {}", config.board.firmware_file);
    println!(
        "  Firmware max size:  {} bytes",
        config.board.firmware_file_max_size_bytes
    );
    println!("  Firmware offset:    0x{}", hex8(config.board.firmware_flash_offset));
    println!();

    println!("--- Timing ---");
    println!("  Clock:        {} Hz", config.timing.clock_frequency_hz);
    println!("  CPU:          {} Hz", config.timing.cpu_frequency_hz);
    println!("  UART:         {} baud", config.timing.uart_baud_rate);
    println!("  Startup wait: {} cycles", config.timing.startup_wait_cycles);
    println!();

    println!("--- Memory ---");
    println!("  Address bitwidth: {}", config.memory.ram_address_bitwidth);
    println!(
        "  Addressing mode:  {} ({} B per address)",
        config.memory.ram_addressing_mode,
        config.memory.bytes_per_address()
    );
    println!(
        "  Flash transfer:   0x{} + {} bytes",
        hex8(config.memory.flash_transfer_from_address),
        config.memory.flash_transfer_byte_count
    );
    println!();

    println!("--- Cache ---");
    println!("  Column index bitwidth: {}", config.cache.column_index_bitwidth);
    println!("  Line index bitwidth:   {}", config.cache.line_index_bitwidth);
    println!();

    println!("--- Derived ---");
    match derive(config) {
        Ok(derived) => {
            println!("  Memory end:   0x{}", hex8(derived.memory_end_address));
            println!("  Clock period: {} ns", ns4(derived.clock_period_ns));
            println!("  Waveform mid: {} ns", ns4(derived.clock_waveform_mid_ns));
        }
        Err(e) => println!("  (not derivable: {e})"),
    }
    println!();

    println!("--- Artifacts ---");
    for kind in ArtifactKind::all() {
        println!("  {:<20} {}", kind.name(), kind.relative_path());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_human_readable() {
        assert!(run(&SocConfig::tang_nano_9k(), None).is_ok());
    }

    #[test]
    fn show_toml() {
        assert!(run(&SocConfig::tang_nano_9k(), Some("toml")).is_ok());
    }

    #[test]
    fn show_survives_underivable_configuration() {
        let mut config = SocConfig::tang_nano_9k();
        config.memory.ram_address_bitwidth = 31;
        config.memory.ram_addressing_mode = 3;
        assert!(run(&config, None).is_ok());
    }

    #[test]
    fn show_rejects_out_of_range_addressing_mode() {
        let mut config = SocConfig::tang_nano_9k();
        config.memory.ram_addressing_mode = 32;

        let err = run(&config, None).unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn show_rejects_zero_clock_frequency() {
        let mut config = SocConfig::tang_nano_9k();
        config.timing.clock_frequency_hz = 0;

        assert!(run(&config, None).is_err());
        assert!(run(&config, Some("toml")).is_err());
    }
}
