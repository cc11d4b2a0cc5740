//! Artifact renderers and generation pipeline for the SoC generator.
//!
//! Each downstream toolchain consumes one artifact: the bootloader assembler,
//! the firmware and emulator C++ builds, the HDL synthesis flow, static
//! timing analysis, and the deployment scripts. Every renderer is a pure
//! function from the configuration and its derived values to text; the
//! pipeline is the only place that touches the filesystem.

pub mod boot_stub;
pub mod emulator_constants;
pub mod error;
pub mod firmware_header;
pub mod format;
pub mod hardware_package;
pub mod memory_map;
pub mod pipeline;
pub mod renderer;
pub mod report;
pub mod shell_config;
pub mod timing_constraint;

pub use boot_stub::BootStub;
pub use emulator_constants::EmulatorConstants;
pub use error::EmitError;
pub use firmware_header::FirmwareHeader;
pub use hardware_package::HardwarePackage;
pub use pipeline::generate;
pub use renderer::{all_renderers, renderer_for, ArtifactKind, Renderer, GENERATED_MARKER};
pub use report::{RunManifest, WrittenArtifact};
pub use shell_config::ShellConfig;
pub use timing_constraint::TimingConstraint;
