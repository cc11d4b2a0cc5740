//! Errors for the generation pipeline.

use std::path::PathBuf;

use socgen_config::{ConfigError, DeriveError};

/// Errors that can occur while generating artifacts.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The configuration failed to load or validate. Nothing was written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A derived value could not be computed. Nothing was written.
    #[error(transparent)]
    Derive(#[from] DeriveError),

    /// Writing an artifact failed. Artifacts written before the failure stay
    /// on disk and are listed in `completed`; the rest were not attempted.
    #[error("failed to write {artifact} to {}: {source}", path.display())]
    Write {
        /// Name of the artifact whose write failed.
        artifact: &'static str,
        /// Destination path of the failed write.
        path: PathBuf,
        /// Paths written before the failure.
        completed: Vec<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
