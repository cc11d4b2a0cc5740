//! Run manifest describing one generation pass.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One artifact written during a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenArtifact {
    /// Artifact kind name, e.g. `boot-stub`.
    pub name: String,
    /// Destination path the artifact was written to, as resolved from the
    /// output root the caller supplied.
    pub path: PathBuf,
    /// Rendered size in bytes.
    pub size_bytes: u64,
}

/// Summary manifest of a full generation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    /// Board name from the configuration.
    pub board: String,
    /// Root directory the artifacts were written under.
    pub output_root: PathBuf,
    /// Total run duration in milliseconds.
    pub duration_ms: u64,
    /// Every artifact written, in generation order.
    pub artifacts: Vec<WrittenArtifact>,
}

impl fmt::Display for RunManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Generation Report ===")?;
        writeln!(f, "Board: {}", self.board)?;
        writeln!(f, "Output root: {}", self.output_root.display())?;
        writeln!(f, "Duration: {} ms", self.duration_ms)?;
        writeln!(f)?;

        writeln!(f, "--- Artifacts ({}) ---", self.artifacts.len())?;
        for artifact in &self.artifacts {
            writeln!(
                f,
                "  {:<20} {} ({} bytes)",
                artifact.name,
                artifact.path.display(),
                artifact.size_bytes,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> RunManifest {
        RunManifest {
            board: "tang_nano_9k".into(),
            output_root: PathBuf::from("/work/soc"),
            duration_ms: 3,
            artifacts: vec![
                WrittenArtifact {
                    name: "boot-stub".into(),
                    path: PathBuf::from("/work/soc/firmware/src/start.S"),
                    size_bytes: 108,
                },
                WrittenArtifact {
                    name: "timing-constraint".into(),
                    path: PathBuf::from("/work/soc/hdl/clocks.sdc"),
                    size_bytes: 128,
                },
            ],
        }
    }

    #[test]
    fn manifest_display() {
        let output = format!("{}", sample_manifest());
        assert!(output.contains("Generation Report"));
        assert!(output.contains("Board: tang_nano_9k"));
        assert!(output.contains("Artifacts (2)"));
        assert!(output.contains("boot-stub"));
        assert!(output.contains("firmware/src/start.S"));
    }

    #[test]
    fn manifest_serializes_artifact_list() {
        let value = serde_json::to_value(sample_manifest()).unwrap();
        assert_eq!(value["board"], "tang_nano_9k");
        let artifacts = value["artifacts"].as_array().unwrap();
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0]["name"], "boot-stub");
        assert_eq!(artifacts[0]["size_bytes"], 108);
    }
}
