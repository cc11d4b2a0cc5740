//! Typed configuration model.
//!
//! The sections mirror the concerns of the generated outputs: board identity
//! and deployment files, clocking, RAM geometry, and cache geometry. Every
//! numeric field is `u32` so a value that cannot live in the 32-bit address
//! space of the generated artifacts is rejected at parse time.

use serde::{Deserialize, Serialize};

/// The complete configuration loaded from `soc.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SocConfig {
    /// Board identity and deployment files.
    pub board: BoardConfig,
    /// Clocking parameters.
    pub timing: TimingConfig,
    /// RAM geometry and the flash boot-copy window.
    pub memory: MemoryConfig,
    /// Cache geometry.
    pub cache: CacheConfig,
}

/// Board identity and the images the deployment scripts flash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoardConfig {
    /// Board identifier (e.g., "tang_nano_9k").
    pub name: String,
    /// Synthesized bitstream image, relative to the project root.
    pub bitstream_file: String,
    /// Write the bitstream to external flash instead of internal flash.
    pub bitstream_flash_to_external: bool,
    /// Space reserved for the bitstream in bytes.
    pub bitstream_file_max_size_bytes: u32,
    /// Compiled firmware image, relative to the project root.
    pub firmware_file: String,
    /// Space reserved for the firmware in bytes.
    pub firmware_file_max_size_bytes: u32,
    /// Byte offset of the firmware image in external flash.
    pub firmware_flash_offset: u32,
}

/// Clocking parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TimingConfig {
    /// Board oscillator frequency in Hz (signal 'clk').
    pub clock_frequency_hz: u32,
    /// Frequency the CPU runs on, in Hz.
    pub cpu_frequency_hz: u32,
    /// UART baud rate.
    pub uart_baud_rate: u32,
    /// Cycles to wait at startup for flash to be initiated.
    pub startup_wait_cycles: u32,
}

/// RAM geometry and the flash boot-copy window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MemoryConfig {
    /// Number of RAM address bits.
    pub ram_address_bitwidth: u32,
    /// Addressing granularity: 0 => 1 B per address, 1 => 2 B, 2 => 4 B, 3 => 8 B.
    pub ram_addressing_mode: u32,
    /// Flash address the boot copy reads from.
    pub flash_transfer_from_address: u32,
    /// Number of bytes the boot copy moves from flash to RAM.
    pub flash_transfer_byte_count: u32,
}

impl MemoryConfig {
    /// Bytes stored per RAM address. Valid only for addressing modes 0 through 3.
    pub fn bytes_per_address(&self) -> u32 {
        1 << self.ram_addressing_mode
    }
}

/// Cache geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CacheConfig {
    /// log2 of the number of 32-bit words per cache line.
    pub column_index_bitwidth: u32,
    /// log2 of the number of cache lines.
    pub line_index_bitwidth: u32,
}

impl SocConfig {
    /// Builtin configuration for the Tang Nano 9K board.
    pub fn tang_nano_9k() -> Self {
        Self {
            board: BoardConfig {
                name: "tang_nano_9k".into(),
                bitstream_file: "impl/pnr/riscv.fs".into(),
                bitstream_flash_to_external: false,
                bitstream_file_max_size_bytes: 0x0040_0000,
                firmware_file: "firmware/firmware.bin".into(),
                firmware_file_max_size_bytes: 0x0020_0000,
                firmware_flash_offset: 0x0020_0000,
            },
            timing: TimingConfig {
                clock_frequency_hz: 27_000_000,
                cpu_frequency_hz: 30_000_000,
                uart_baud_rate: 115200,
                startup_wait_cycles: 1_000_000,
            },
            memory: MemoryConfig {
                ram_address_bitwidth: 21,
                ram_addressing_mode: 0,
                flash_transfer_from_address: 0,
                flash_transfer_byte_count: 0x0020_0000,
            },
            cache: CacheConfig {
                column_index_bitwidth: 3,
                line_index_bitwidth: 5,
            },
        }
    }
}
