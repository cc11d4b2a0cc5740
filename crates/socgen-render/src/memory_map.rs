//! Fixed memory-mapped I/O registers.
//!
//! These addresses sit at the top of the 32-bit address space and are decoded
//! identically by the synthesized bus, the firmware, and the emulator. They
//! are deliberately not part of `soc.toml`: both header renderers read this
//! one table, so the values cannot drift apart.

/// A memory-mapped I/O register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoRegister {
    /// Register name as spelled in the firmware header (upper case).
    pub name: &'static str,
    /// Word-aligned address.
    pub address: u32,
}

/// Every I/O register, highest address first.
pub const IO_REGISTERS: &[IoRegister] = &[
    IoRegister { name: "LED", address: 0xffff_fffc },
    IoRegister { name: "UART_OUT", address: 0xffff_fff8 },
    IoRegister { name: "UART_IN", address: 0xffff_fff4 },
    IoRegister { name: "SDCARD_BUSY", address: 0xffff_fff0 },
    IoRegister { name: "SDCARD_READ_SECTOR", address: 0xffff_ffec },
    IoRegister { name: "SDCARD_NEXT_BYTE", address: 0xffff_ffe8 },
    IoRegister { name: "SDCARD_STATUS", address: 0xffff_ffe4 },
    IoRegister { name: "SDCARD_WRITE_SECTOR", address: 0xffff_ffe0 },
];

/// Lowest mapped I/O address. Bus accesses at or above this are I/O, not RAM.
pub const IO_ADDRESSES_START: u32 = 0xffff_ffe0;
