//! Hardware package renderer.
//!
//! SystemVerilog package with one parameter per synthesis-relevant
//! configuration field. Addresses and byte counts are rendered as sized hex
//! literals, everything else as plain decimal.

use socgen_config::{DerivedValues, SocConfig};

use crate::format::hex8;
use crate::renderer::{ArtifactKind, Renderer, GENERATED_MARKER};

/// Renders the SystemVerilog configuration package.
pub struct HardwarePackage;

impl Renderer for HardwarePackage {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::HardwarePackage
    }

    fn render(&self, config: &SocConfig, _derived: &DerivedValues) -> String {
        let mut out = String::new();
        out.push_str(&format!("// {GENERATED_MARKER}\n"));
        out.push('\n');
        out.push_str("package soc_config;\n");
        out.push('\n');
        push_param(&mut out, "CLOCK_FREQUENCY_HZ", config.timing.clock_frequency_hz);
        push_param(&mut out, "CPU_FREQUENCY_HZ", config.timing.cpu_frequency_hz);
        push_param(&mut out, "RAM_ADDRESS_BITWIDTH", config.memory.ram_address_bitwidth);
        push_param(&mut out, "RAM_ADDRESSING_MODE", config.memory.ram_addressing_mode);
        push_param(&mut out, "CACHE_COLUMN_INDEX_BITWIDTH", config.cache.column_index_bitwidth);
        push_param(&mut out, "CACHE_LINE_INDEX_BITWIDTH", config.cache.line_index_bitwidth);
        push_param(&mut out, "UART_BAUD_RATE", config.timing.uart_baud_rate);
        push_param_hex(
            &mut out,
            "FLASH_TRANSFER_FROM_ADDRESS",
            config.memory.flash_transfer_from_address,
        );
        push_param_hex(
            &mut out,
            "FLASH_TRANSFER_BYTE_COUNT",
            config.memory.flash_transfer_byte_count,
        );
        push_param(&mut out, "STARTUP_WAIT_CYCLES", config.timing.startup_wait_cycles);
        out.push('\n');
        out.push_str("endpackage\n");
        out
    }
}

fn push_param(out: &mut String, name: &str, value: u32) {
    out.push_str(&format!("  parameter int unsigned {name} = {value};\n"));
}

fn push_param_hex(out: &mut String, name: &str, value: u32) {
    out.push_str(&format!(
        "  parameter int unsigned {name} = 32'h{};\n",
        hex8(value)
    ));
}
