//! C++ constants header consumed by the instruction-level emulator.

use socgen_config::{DerivedValues, SocConfig};

use crate::format::hex8;
use crate::memory_map::{IO_ADDRESSES_START, IO_REGISTERS};
use crate::renderer::{ArtifactKind, Renderer, GENERATED_MARKER};

/// Renders `emulator/src/soc_config.hpp`.
///
/// The emulator models the same address space as the firmware, so every
/// memory-mapped register here carries the same value as the firmware
/// header, spelled as `constexpr` constants instead of macros.
pub struct EmulatorConstants;

impl Renderer for EmulatorConstants {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::EmulatorConstants
    }

    fn render(&self, _config: &SocConfig, derived: &DerivedValues) -> String {
        let mut out = String::new();
        out.push_str(&format!("// {GENERATED_MARKER}\n"));
        out.push_str("#pragma once\n");
        out.push_str("#include <cstdint>\n");
        out.push('\n');
        out.push_str("namespace soc {\n");
        out.push('\n');
        for register in IO_REGISTERS {
            out.push_str(&format!(
                "uint32_t constexpr {} = 0x{};\n",
                register.name.to_lowercase(),
                hex8(register.address)
            ));
        }
        out.push_str(&format!(
            "uint32_t constexpr io_addresses_start = 0x{};\n",
            hex8(IO_ADDRESSES_START)
        ));
        out.push_str(&format!(
            "uint32_t constexpr memory_end = 0x{};\n",
            hex8(derived.memory_end_address)
        ));
        out.push('\n');
        out.push_str("} // namespace soc\n");
        out
    }
}
