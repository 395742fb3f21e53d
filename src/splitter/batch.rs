use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Unrecoverable condition at the batch level. Per-file failures are not
/// represented here; they are handled at the transform boundary.
#[derive(Debug)]
pub enum BatchError {
    CreateOutputDir { path: PathBuf, source: io::Error },
    ScanInput { path: PathBuf, source: io::Error },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateOutputDir { path, source } => write!(
                f,
                "Failed to create output directory '{}': {source}",
                path.display()
            ),
            Self::ScanInput { path, source } => write!(
                f,
                "Failed to read input directory '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateOutputDir { source, .. } | Self::ScanInput { source, .. } => Some(source),
        }
    }
}

/// Returns the explicit output directory, or the `output` subfolder of the
/// input directory when none was given.
pub fn resolve_output_dir(input: &Path, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| input.join("output"))
}

/// Creates the output directory and any missing parents. Idempotent.
pub fn ensure_output_dir(path: &Path) -> Result<(), BatchError> {
    fs::create_dir_all(path).map_err(|source| BatchError::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })
}
