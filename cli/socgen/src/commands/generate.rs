//! `socgen generate`: run the full pipeline and write every artifact.

use std::path::Path;

use anyhow::{bail, Result};
use socgen_config::SocConfig;
use socgen_render::{generate, EmitError};

/// Generate all artifacts under `out_root` and print the run manifest.
pub fn run(config: &SocConfig, out_root: &Path, report_format: Option<&str>) -> Result<()> {
    match generate(config, out_root) {
        Ok(manifest) => {
            match report_format {
                Some("json") => println!("{}", serde_json::to_string_pretty(&manifest)?),
                _ => print!("{manifest}"),
            }
            Ok(())
        }
        Err(EmitError::Write {
            artifact,
            path,
            completed,
            source,
        }) => {
            if !completed.is_empty() {
                eprintln!("written before the failure:");
                for done in &completed {
                    eprintln!("  {}", done.display());
                }
            }
            bail!("failed to write {artifact} to {}: {source}", path.display());
        }
        Err(e) => Err(e.into()),
    }
}
