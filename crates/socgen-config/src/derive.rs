//! Values computed from the configuration, never stored in it.

use crate::config::SocConfig;

/// Parameters derived from the canonical configuration.
///
/// Computed fresh for every run; `soc.toml` never contains them, so they
/// cannot drift from the fields they are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedValues {
    /// First address past the end of RAM. The boot stub loads it into `sp`.
    pub memory_end_address: u32,
    /// Clock period in nanoseconds.
    pub clock_period_ns: f64,
    /// Falling-edge offset of the clock waveform, half the period.
    pub clock_waveform_mid_ns: f64,
}

/// Arithmetic failure while deriving values.
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    /// The RAM geometry does not fit the 32-bit address space.
    #[error(
        "ram-address-bitwidth {bitwidth} plus ram-addressing-mode {mode} \
         exceeds the 32-bit address space"
    )]
    AddressSpaceExceeded {
        /// Value of memory.ram-address-bitwidth.
        bitwidth: u32,
        /// Value of memory.ram-addressing-mode.
        mode: u32,
    },
}

/// Compute every derived value from a validated configuration.
///
/// The end-of-memory address is an exact integer shift:
/// 2^(ram-address-bitwidth + ram-addressing-mode) bytes. The clock period is
/// the only floating point computation; validation has already rejected a
/// zero clock frequency.
pub fn derive(config: &SocConfig) -> Result<DerivedValues, DeriveError> {
    let bitwidth = config.memory.ram_address_bitwidth;
    let mode = config.memory.ram_addressing_mode;
    let shift = bitwidth as u64 + mode as u64;
    if shift > 31 {
        return Err(DeriveError::AddressSpaceExceeded { bitwidth, mode });
    }
    let memory_end_address = 1u32 << shift;

    let clock_period_ns = 1_000_000_000.0 / config.timing.clock_frequency_hz as f64;
    let clock_waveform_mid_ns = clock_period_ns / 2.0;

    Ok(DerivedValues {
        memory_end_address,
        clock_period_ns,
        clock_waveform_mid_ns,
    })
}
