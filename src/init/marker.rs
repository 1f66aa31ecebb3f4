//! Marker file existence checks and creation

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::decision::Decision;

/// Name of the marker file placed in each directory.
pub const MARKER_FILE_NAME: &str = "__init__.py";

/// Content written to a newly created marker file.
pub const MARKER_CONTENT: &str = "# This file makes the directory a Python package\n";

/// Path of the marker file directly inside `dir`.
pub fn marker_path(dir: &Path) -> PathBuf {
    dir.join(MARKER_FILE_NAME)
}

/// Filesystem operations needed to seed a marker file.
///
/// `StdFs` is the real implementation; tests swap in failing ones.
pub trait MarkerFs {
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` with `contents`. Must fail with `AlreadyExists`
    /// rather than overwrite an existing file.
    fn create_new(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Marker filesystem backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl MarkerFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_new(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(contents)
    }
}

/// Ensure the marker file exists in `dir`, never touching an existing one.
pub fn ensure_marker<F: MarkerFs + ?Sized>(fs: &F, dir: &Path) -> Decision {
    let marker = marker_path(dir);
    if fs.exists(&marker) {
        return Decision::AlreadyExists;
    }

    match fs.create_new(&marker, MARKER_CONTENT.as_bytes()) {
        Ok(()) => Decision::Created,
        // Appeared between the check and the write, or a dangling symlink
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Decision::AlreadyExists,
        Err(e) => Decision::Failed(e),
    }
}
