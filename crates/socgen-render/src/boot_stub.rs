//! Boot stub renderer.
//!
//! The first instructions the CPU executes: set the stack pointer to the end
//! of RAM and jump into the firmware entry point. No prior register state is
//! assumed.

use socgen_config::{DerivedValues, SocConfig};

use crate::format::hex8;
use crate::renderer::{ArtifactKind, Renderer, GENERATED_MARKER};

/// Renders the RISC-V assembly boot stub.
pub struct BootStub;

impl Renderer for BootStub {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::BootStub
    }

    fn render(&self, _config: &SocConfig, derived: &DerivedValues) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {GENERATED_MARKER}\n"));
        out.push_str(".global _start\n");
        out.push_str("_start:\n");
        out.push_str(&format!(
            "    li sp, 0x{}\n",
            hex8(derived.memory_end_address)
        ));
        out.push_str("    jal ra, run\n");
        out
    }
}
