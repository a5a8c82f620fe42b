//! Filesystem bootstrap: make sure the directories a pipeline run needs exist.

use crate::logging::Logger;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// Outcome of a [`create_directories`] call, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Paths that did not exist before the call.
    pub created: Vec<PathBuf>,

    /// Paths that were already directories.
    pub existing: Vec<PathBuf>,
}

impl BootstrapReport {
    /// Number of paths processed.
    pub fn len(&self) -> usize {
        self.created.len() + self.existing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.existing.is_empty()
    }
}

/// Creates every directory in `paths`, including missing ancestors.
///
/// A directory that already exists counts as success, so calling this twice
/// with the same input is harmless. When `verbose` is set, one message per
/// path is sent to `logger`, in input order.
///
/// # Errors
///
/// An empty path fails with `NotFound`. Otherwise the first `create_dir_all`
/// failure (e.g. permission denied, or a regular file in the way) is
/// returned unchanged. Paths after the failing one are
/// not processed.
///
/// # Example
///
/// ```no_run
/// use summ_core::bootstrap::create_directories;
/// use summ_core::logging::TracingLogger;
///
/// # fn example() -> std::io::Result<()> {
/// let paths = ["artifacts", "artifacts/data_ingestion"];
/// let report = create_directories(&paths, true, &TracingLogger)?;
/// println!("{} new directories", report.created.len());
/// # Ok(())
/// # }
/// ```
pub fn create_directories<P: AsRef<Path>>(
    paths: &[P],
    verbose: bool,
    logger: &dyn Logger,
) -> io::Result<BootstrapReport> {
    let mut report = BootstrapReport::default();

    for path in paths {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "cannot create a directory from an empty path",
            ));
        }
        let existed = path.is_dir();

        fs::create_dir_all(path)?;

        if verbose {
            logger.info(&format!("Created directory at: {}", path.display()));
        }

        if existed {
            report.existing.push(path.to_path_buf());
        } else {
            report.created.push(path.to_path_buf());
        }
    }

    Ok(report)
}
