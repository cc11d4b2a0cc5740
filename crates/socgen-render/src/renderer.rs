//! Renderer contract and the fixed artifact registry.

use socgen_config::{DerivedValues, SocConfig};

use crate::boot_stub::BootStub;
use crate::emulator_constants::EmulatorConstants;
use crate::firmware_header::FirmwareHeader;
use crate::hardware_package::HardwarePackage;
use crate::shell_config::ShellConfig;
use crate::timing_constraint::TimingConstraint;

/// Marker carried as the first line of every artifact, in the comment syntax
/// of its format.
pub const GENERATED_MARKER: &str = "generated - do not edit (see `soc.toml`)";

/// The kind of artifact to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    BootStub,
    FirmwareHeader,
    HardwarePackage,
    EmulatorConstants,
    TimingConstraint,
    ShellConfig,
}

impl ArtifactKind {
    /// Parse an artifact kind from its kebab-case name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "boot-stub" => Some(ArtifactKind::BootStub),
            "firmware-header" => Some(ArtifactKind::FirmwareHeader),
            "hardware-package" => Some(ArtifactKind::HardwarePackage),
            "emulator-constants" => Some(ArtifactKind::EmulatorConstants),
            "timing-constraint" => Some(ArtifactKind::TimingConstraint),
            "shell-config" => Some(ArtifactKind::ShellConfig),
            _ => None,
        }
    }

    /// Kebab-case display name.
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactKind::BootStub => "boot-stub",
            ArtifactKind::FirmwareHeader => "firmware-header",
            ArtifactKind::HardwarePackage => "hardware-package",
            ArtifactKind::EmulatorConstants => "emulator-constants",
            ArtifactKind::TimingConstraint => "timing-constraint",
            ArtifactKind::ShellConfig => "shell-config",
        }
    }

    /// Destination path relative to the output root.
    pub fn relative_path(&self) -> &'static str {
        match self {
            ArtifactKind::BootStub => "firmware/src/start.S",
            ArtifactKind::FirmwareHeader => "firmware/src/soc_config.hpp",
            ArtifactKind::HardwarePackage => "hdl/soc_config.sv",
            ArtifactKind::EmulatorConstants => "emulator/src/soc_config.hpp",
            ArtifactKind::TimingConstraint => "hdl/clocks.sdc",
            ArtifactKind::ShellConfig => "scripts/soc_config.sh",
        }
    }

    /// Every artifact kind, in generation order.
    pub fn all() -> &'static [ArtifactKind] {
        &[
            ArtifactKind::BootStub,
            ArtifactKind::FirmwareHeader,
            ArtifactKind::HardwarePackage,
            ArtifactKind::EmulatorConstants,
            ArtifactKind::TimingConstraint,
            ArtifactKind::ShellConfig,
        ]
    }
}

/// Trait for all artifact renderers.
///
/// Rendering is pure: the same configuration and derived values always
/// produce the same bytes. Only the pipeline touches the filesystem.
pub trait Renderer {
    /// The kind of artifact this renderer produces.
    fn kind(&self) -> ArtifactKind;

    /// Render the artifact text.
    fn render(&self, config: &SocConfig, derived: &DerivedValues) -> String;
}

/// Look up the renderer for an artifact kind.
pub fn renderer_for(kind: ArtifactKind) -> Box<dyn Renderer> {
    match kind {
        ArtifactKind::BootStub => Box::new(BootStub),
        ArtifactKind::FirmwareHeader => Box::new(FirmwareHeader),
        ArtifactKind::HardwarePackage => Box::new(HardwarePackage),
        ArtifactKind::EmulatorConstants => Box::new(EmulatorConstants),
        ArtifactKind::TimingConstraint => Box::new(TimingConstraint),
        ArtifactKind::ShellConfig => Box::new(ShellConfig),
    }
}

/// One renderer per artifact kind, in generation order.
pub fn all_renderers() -> Vec<Box<dyn Renderer>> {
    ArtifactKind::all().iter().map(|k| renderer_for(*k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use socgen_config::derive;

    use crate::format::hex8;
    use crate::memory_map::IO_REGISTERS;

    #[test]
    fn parse_artifact_kinds() {
        for kind in ArtifactKind::all() {
            assert_eq!(ArtifactKind::parse(kind.name()), Some(*kind));
        }
        assert_eq!(ArtifactKind::parse("nonexistent"), None);
    }

    #[test]
    fn registry_covers_every_kind_once() {
        let renderers = all_renderers();
        assert_eq!(renderers.len(), ArtifactKind::all().len());
        for (renderer, kind) in renderers.iter().zip(ArtifactKind::all()) {
            assert_eq!(renderer.kind(), *kind);
        }
    }

    #[test]
    fn destination_paths_are_distinct() {
        let kinds = ArtifactKind::all();
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.relative_path(), b.relative_path());
            }
        }
    }

    #[test]
    fn every_artifact_starts_with_marker() {
        let config = SocConfig::tang_nano_9k();
        let derived = derive(&config).unwrap();
        for renderer in all_renderers() {
            let text = renderer.render(&config, &derived);
            let first_line = text.lines().next().unwrap();
            assert!(
                first_line.contains(GENERATED_MARKER),
                "{} is missing the marker",
                renderer.kind().name()
            );
            assert!(text.ends_with('\n'));
        }
    }

    #[test]
    fn header_renderers_agree_on_io_addresses() {
        let config = SocConfig::tang_nano_9k();
        let derived = derive(&config).unwrap();
        let firmware = FirmwareHeader.render(&config, &derived);
        let emulator = EmulatorConstants.render(&config, &derived);

        for reg in IO_REGISTERS {
            let value = format!("0x{}", hex8(reg.address));
            assert!(firmware.contains(&value), "firmware lacks {}", reg.name);
            assert!(emulator.contains(&value), "emulator lacks {}", reg.name);
        }
        let end = format!("0x{}", hex8(derived.memory_end_address));
        assert!(firmware.contains(&end));
        assert!(emulator.contains(&end));
    }
}
