//! TOML parsing, serialization, and discovery for `soc.toml` files.
//!
//! The configuration lives at the project root as `soc.toml`. This module
//! loads and saves it, generates the documented starter file for new
//! projects, and finds the file by walking upward from a working directory.

use std::path::{Path, PathBuf};

use crate::config::SocConfig;
use crate::error::{ConfigError, Result};

/// File name of the canonical configuration.
pub const CONFIG_FILE_NAME: &str = "soc.toml";

/// Load a configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SocConfig> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_config_toml(&content)
}

/// Parse a configuration from a TOML string.
pub fn parse_config_toml(toml_str: &str) -> Result<SocConfig> {
    let config: SocConfig = toml::from_str(toml_str)?;
    Ok(config)
}

/// Serialize a configuration to pretty TOML.
pub fn config_to_toml(config: &SocConfig) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    Ok(toml_str)
}

/// Search upward from `start_dir` for a `soc.toml`, parse and return it along
/// with the directory it was found in.
pub fn find_and_load(start_dir: &Path) -> Result<Option<(SocConfig, PathBuf)>> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            let config = load_config(&candidate)?;
            return Ok(Some((config, dir)));
        }
        if !dir.pop() {
            break;
        }
    }
    Ok(None)
}

/// Generate the documented starter `soc.toml` for a new project.
///
/// Seeds from the Tang Nano 9K values with the given board name.
pub fn generate_template(name: &str) -> String {
    format!(
        r#"#
# if this file changed run `socgen generate` and rebuild
#

[board]
name = "{name}"
# used by the deployment scripts when flashing
bitstream-file = "impl/pnr/riscv.fs"
bitstream-flash-to-external = false
# false: write the bitstream to internal flash, true: external
bitstream-file-max-size-bytes = 4194304
firmware-file = "firmware/firmware.bin"
firmware-file-max-size-bytes = 2097152
firmware-flash-offset = 2097152
# firmware is written to external flash after the bitstream region

[timing]
clock-frequency-hz = 27000000
# frequency of the board oscillator (signal 'clk')
cpu-frequency-hz = 30000000
# frequency that the CPU runs on
uart-baud-rate = 115200
# 115200 baud, 8 bits, 1 stop bit, no parity
startup-wait-cycles = 1000000
# cycles delay at startup for flash to be initiated

[memory]
ram-address-bitwidth = 21
# 2 ^ 21 addresses of RAM
ram-addressing-mode = 0
# amount of data stored per address
#    0: 1 B (byte addressed)
#    1: 2 B
#    2: 4 B
#    3: 8 B
flash-transfer-from-address = 0
# flash read start address
flash-transfer-byte-count = 2097152
# number of bytes to transfer from flash at startup (2 MB)

[cache]
column-index-bitwidth = 3
# 2 ^ 3 = 8 entries (32 B) per cache line
line-index-bitwidth = 5
# 2 ^ 5 * 32 = 1 KB unified instruction and data cache
# from 1 to 5: cache implemented with SSRAM
#           6: leads to excessive build time
#           7: cache implemented with some BSRAM
#           8: implemented with some BSRAM but fails to place
"#
    )
}
