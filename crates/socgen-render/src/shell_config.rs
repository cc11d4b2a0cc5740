//! Shell variable assignments consumed by the deployment scripts.

use socgen_config::{DerivedValues, SocConfig};

use crate::format::hex8;
use crate::renderer::{ArtifactKind, Renderer, GENERATED_MARKER};

/// Renders `scripts/soc_config.sh`.
///
/// Each deployment field becomes one `NAME=value` assignment followed by
/// an explanation line. Paths and the board name are double-quoted, sizes
/// and the flash offset are zero-padded hex, the flash-to-external flag
/// is 0 or 1 so shell scripts can test it numerically.
pub struct ShellConfig;

impl Renderer for ShellConfig {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ShellConfig
    }

    fn render(&self, config: &SocConfig, _derived: &DerivedValues) -> String {
        let board = &config.board;
        let mut out = String::new();
        out.push_str(&format!("# {GENERATED_MARKER}\n"));
        out.push_str(&format!("BOARD_NAME=\"{}\"\n", board.name));
        out.push_str("# board identity used when flashing\n");
        out.push_str(&format!("BITSTREAM_FILE=\"{}\"\n", board.bitstream_file));
        out.push_str("# bitstream produced by place-and-route\n");
        out.push_str(&format!(
            "BITSTREAM_FLASH_TO_EXTERNAL={}\n",
            u32::from(board.bitstream_flash_to_external)
        ));
        out.push_str("# 0: write the bitstream to internal flash, 1: external\n");
        out.push_str(&format!(
            "BITSTREAM_FILE_MAX_SIZE_BYTES=0x{}\n",
            hex8(board.bitstream_file_max_size_bytes)
        ));
        out.push_str("# upper bound checked before flashing the bitstream\n");
        out.push_str(&format!("FIRMWARE_FILE=\"{}\"\n", board.firmware_file));
        out.push_str("# firmware image transferred to flash\n");
        out.push_str(&format!(
            "FIRMWARE_FILE_MAX_SIZE_BYTES=0x{}\n",
            hex8(board.firmware_file_max_size_bytes)
        ));
        out.push_str("# upper bound checked before flashing the firmware\n");
        out.push_str(&format!(
            "FIRMWARE_FLASH_OFFSET=0x{}\n",
            hex8(board.firmware_flash_offset)
        ));
        out.push_str("# firmware is written to external flash after the bitstream region\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use socgen_config::derive;

    use super::*;

    #[test]
    fn shell_config_tang_nano_9k() {
        let config = SocConfig::tang_nano_9k();
        let derived = derive(&config).unwrap();
        let rendered = ShellConfig.render(&config, &derived);

        assert!(rendered.starts_with("# generated - do not edit (see `soc.toml`)\n"));
        assert!(rendered.contains("BOARD_NAME=\"tang_nano_9k\"\n"));
        assert!(rendered.contains("BITSTREAM_FILE=\"impl/pnr/riscv.fs\"\n"));
        assert!(rendered.contains("BITSTREAM_FLASH_TO_EXTERNAL=0\n"));
        assert!(rendered.contains("BITSTREAM_FILE_MAX_SIZE_BYTES=0x00400000\n"));
        assert!(rendered.contains("FIRMWARE_FILE=\"firmware/firmware.bin\"\n"));
        assert!(rendered.contains("FIRMWARE_FILE_MAX_SIZE_BYTES=0x00200000\n"));
        assert!(rendered.contains("FIRMWARE_FLASH_OFFSET=0x00200000\n"));
    }

    #[test]
    fn external_flash_flag_renders_as_one() {
        let mut config = SocConfig::tang_nano_9k();
        config.board.bitstream_flash_to_external = true;
        let derived = derive(&config).unwrap();
        let rendered = ShellConfig.render(&config, &derived);

        assert!(rendered.contains("BITSTREAM_FLASH_TO_EXTERNAL=1\n"));
    }

    #[test]
    fn every_assignment_has_an_explanation() {
        let config = SocConfig::tang_nano_9k();
        let derived = derive(&config).unwrap();
        let rendered = ShellConfig.render(&config, &derived);

        let lines: Vec<&str> = rendered.lines().collect();
        for pair in lines[1..].chunks(2) {
            assert!(pair[0].contains('='), "expected assignment: {}", pair[0]);
            assert!(pair[1].starts_with("# "), "expected comment: {}", pair[1]);
        }
    }
}
