//! `socgen preview`: render a single artifact to stdout.

use anyhow::{bail, Result};
use socgen_config::{derive, validate_config, SocConfig};
use socgen_render::{renderer_for, ArtifactKind};

/// Render one artifact to stdout without touching the filesystem.
pub fn run(config: &SocConfig, artifact: &str) -> Result<()> {
    let kind = match ArtifactKind::parse(artifact) {
        Some(kind) => kind,
        None => {
            let names: Vec<&str> = ArtifactKind::all().iter().map(|k| k.name()).collect();
            bail!("unknown artifact: '{artifact}'. Choose: {}", names.join(", "));
        }
    };

    if let Err(issues) = validate_config(config) {
        for issue in &issues {
            eprintln!("error: {}: {}", issue.field, issue.message);
        }
        bail!("configuration is invalid ({} issue(s))", issues.len());
    }
    let derived = derive(config)?;

    print!("{}", renderer_for(kind).render(config, &derived));
    Ok(())
}
