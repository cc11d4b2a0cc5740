//! Generation pipeline orchestrator.

use std::fs;
use std::path::Path;
use std::time::Instant;

use socgen_config::{derive, validate_config, ConfigError, SocConfig};

use crate::error::EmitError;
use crate::renderer::all_renderers;
use crate::report::{RunManifest, WrittenArtifact};

/// Run the full generation pipeline:
/// validate -> derive -> render every artifact -> write -> manifest.
///
/// All artifacts are rendered before the first write, so validation and
/// derivation failures leave the output tree untouched. A write failure
/// aborts the remaining writes; artifacts already written stay in place
/// and are listed in the error.
pub fn generate(config: &SocConfig, output_root: &Path) -> Result<RunManifest, EmitError> {
    let start = Instant::now();

    // Stage 1: Validation
    validate_config(config).map_err(|issues| ConfigError::Invalid { issues })?;

    // Stage 2: Derivation
    let derived = derive(config)?;
    log::debug!(
        "derived: memory_end=0x{:08x}, clock_period={:.4} ns",
        derived.memory_end_address,
        derived.clock_period_ns,
    );

    // Stage 3: Render everything up front
    let rendered: Vec<_> = all_renderers()
        .into_iter()
        .map(|renderer| (renderer.kind(), renderer.render(config, &derived)))
        .collect();

    // Stage 4: Write in registry order
    let mut artifacts: Vec<WrittenArtifact> = Vec::with_capacity(rendered.len());
    for (kind, content) in rendered {
        let path = output_root.join(kind.relative_path());
        if let Err(source) = write_artifact(&path, &content) {
            return Err(EmitError::Write {
                artifact: kind.name(),
                path,
                completed: artifacts.into_iter().map(|a| a.path).collect(),
                source,
            });
        }
        log::debug!("wrote {} ({} bytes)", path.display(), content.len());
        artifacts.push(WrittenArtifact {
            name: kind.name().to_string(),
            path,
            size_bytes: content.len() as u64,
        });
    }

    Ok(RunManifest {
        board: config.board.name.clone(),
        output_root: output_root.to_path_buf(),
        duration_ms: start.elapsed().as_millis() as u64,
        artifacts,
    })
}

fn write_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
