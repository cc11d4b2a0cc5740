//! Firmware header renderer.
//!
//! C preprocessor defines for the memory-mapped I/O registers and the end of
//! RAM, included by the firmware build.

use socgen_config::{DerivedValues, SocConfig};

use crate::format::hex8;
use crate::memory_map::IO_REGISTERS;
use crate::renderer::{ArtifactKind, Renderer, GENERATED_MARKER};

/// Renders the C header consumed by the firmware.
pub struct FirmwareHeader;

impl Renderer for FirmwareHeader {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::FirmwareHeader
    }

    fn render(&self, _config: &SocConfig, derived: &DerivedValues) -> String {
        let mut out = String::new();
        out.push_str(&format!("// {GENERATED_MARKER}\n"));
        for reg in IO_REGISTERS {
            out.push_str(&format!(
                "#define {} ((int volatile *)0x{})\n",
                reg.name,
                hex8(reg.address)
            ));
        }
        out.push_str(&format!(
            "#define MEMORY_END 0x{}\n",
            hex8(derived.memory_end_address)
        ));
        out
    }
}
